//! The fixed intent taxonomy: names, training patterns and reply templates.

/// Placeholder substituted with the extracted entity in reply templates.
pub const ENTITY_PLACEHOLDER: &str = "{entity}";

/// One conversational intent.
#[derive(Debug, Clone, Copy)]
pub struct Intent {
    /// Unique label.
    pub name: &'static str,
    /// Canonical phrasings; the only training examples for this label.
    pub patterns: &'static [&'static str],
    /// Reply templates, possibly containing [`ENTITY_PLACEHOLDER`].
    pub responses: &'static [&'static str],
}

impl Intent {
    /// Render one of this intent's templates.
    ///
    /// With an entity, every placeholder is replaced by it; without one the
    /// template is returned unchanged.
    pub fn render(template: &str, entity: Option<&str>) -> String {
        match entity {
            Some(value) => template.replace(ENTITY_PLACEHOLDER, value),
            None => template.to_string(),
        }
    }
}

/// Look up an intent by name.
pub fn find(taxonomy: &'static [Intent], name: &str) -> Option<&'static Intent> {
    taxonomy.iter().find(|i| i.name == name)
}

/// The built-in taxonomy.
pub static INTENTS: &[Intent] = &[
    Intent {
        name: "greet",
        patterns: &[
            "hello",
            "hi",
            "hey",
            "good morning",
            "good afternoon",
            "good evening",
            "how are you",
            "what's up",
            "sup",
            "yo",
            "greetings",
        ],
        responses: &[
            "Hello! How can I assist you today?",
            "Hi there! What can I help you with?",
            "Hey! I'm here to help. What do you need?",
            "Greetings! How may I be of service?",
        ],
    },
    Intent {
        name: "weather",
        patterns: &[
            "weather in",
            "temperature at",
            "forecast for",
            "what's the weather",
            "how hot is it",
            "how cold is it",
            "weather today",
            "temperature today",
            "is it raining",
            "is it sunny",
            "weather forecast",
        ],
        responses: &[
            "Let me check the weather for {entity}...",
            "I'll get the current weather conditions for {entity}.",
            "Checking the weather forecast for {entity}...",
        ],
    },
    Intent {
        name: "news",
        patterns: &[
            "news",
            "latest news",
            "current events",
            "what's happening",
            "top headlines",
            "breaking news",
            "news today",
            "recent news",
            "what's in the news",
            "news headlines",
        ],
        responses: &[
            "Here are the latest news headlines...",
            "Let me get you the current news...",
            "Here's what's happening in the world...",
        ],
    },
    Intent {
        name: "search",
        patterns: &[
            "search for",
            "find information about",
            "tell me about",
            "what is",
            "who is",
            "define",
            "explain",
            "information about",
            "look up",
        ],
        responses: &[
            "Let me search for information about {entity}...",
            "I'll find information about {entity} for you.",
            "Searching for details about {entity}...",
        ],
    },
    Intent {
        name: "joke",
        patterns: &[
            "tell me a joke",
            "say something funny",
            "make me laugh",
            "joke",
            "funny",
            "humor",
            "comedy",
        ],
        responses: &[
            "Here's a joke for you: Why don't scientists trust atoms? Because they make up everything!",
            "Why did the scarecrow win an award? Because he was outstanding in his field!",
            "What do you call a fake noodle? An impasta!",
        ],
    },
    Intent {
        name: "bye",
        patterns: &[
            "bye",
            "goodbye",
            "see you",
            "farewell",
            "take care",
            "have a good day",
            "see you later",
            "good night",
        ],
        responses: &[
            "Goodbye! Have a nice day!",
            "See you later! Take care!",
            "Farewell! Come back anytime!",
            "Goodbye! It was nice chatting with you!",
        ],
    },
    Intent {
        name: "help",
        patterns: &[
            "help",
            "what can you do",
            "capabilities",
            "features",
            "how do you work",
            "what are your functions",
            "assist me",
        ],
        responses: &[
            "I can help you with:\n• Weather information\n• Latest news\n• Search for information\n• Tell jokes\n• General conversation\nJust ask me anything!",
            "Here's what I can do:\n• Check weather for any location\n• Get the latest news headlines\n• Search for information on topics\n• Share some jokes\n• Have a friendly chat",
        ],
    },
];
