//! Built-in gazetteer entries.
//!
//! Kept deliberately unambiguous: words that are also common English words
//! ("nice", "reading", "mobile", "apple") are left out, since a false
//! location or organization would beat the pattern fallback.

pub const LOCATIONS: &[&str] = &[
    // countries
    "afghanistan", "albania", "algeria", "argentina", "armenia", "australia",
    "austria", "azerbaijan", "bangladesh", "belarus", "belgium", "bolivia",
    "brazil", "bulgaria", "cambodia", "cameroon", "canada", "chile", "china",
    "colombia", "costa rica", "croatia", "cuba", "cyprus", "czech republic",
    "czechia", "denmark", "ecuador", "egypt", "estonia", "ethiopia", "finland",
    "france", "germany", "ghana", "greece", "guatemala", "hungary", "iceland",
    "india", "indonesia", "iran", "iraq", "ireland", "israel", "italy",
    "jamaica", "japan", "kazakhstan", "kenya", "latvia", "lebanon",
    "lithuania", "luxembourg", "madagascar", "malaysia", "malta", "mexico",
    "mongolia", "morocco", "nepal", "netherlands", "new zealand", "nigeria",
    "north korea", "norway", "pakistan", "panama", "paraguay", "peru",
    "philippines", "poland", "portugal", "qatar", "romania", "russia",
    "saudi arabia", "scotland", "senegal", "serbia", "singapore", "slovakia",
    "slovenia", "somalia", "south africa", "south korea", "spain", "sri lanka",
    "sudan", "sweden", "switzerland", "syria", "taiwan", "tanzania",
    "thailand", "tunisia", "uganda", "ukraine", "united arab emirates",
    "united kingdom", "united states", "uruguay", "uzbekistan", "venezuela",
    "vietnam", "wales", "yemen", "zambia", "zimbabwe", "england", "usa", "uk",
    // cities
    "amsterdam", "athens", "atlanta", "auckland", "austin", "baghdad",
    "bangkok", "barcelona", "beijing", "beirut", "belgrade", "berlin",
    "bogota", "boston", "brisbane", "brussels", "bucharest", "budapest",
    "buenos aires", "cairo", "calgary", "cape town", "caracas", "chicago",
    "copenhagen", "dallas", "delhi", "denver", "detroit", "dubai", "dublin",
    "edinburgh", "frankfurt", "geneva", "glasgow", "hamburg", "hanoi",
    "havana", "helsinki", "hong kong", "honolulu", "houston", "istanbul",
    "jakarta", "jerusalem", "johannesburg", "kabul", "karachi", "kyiv",
    "kiev", "kolkata", "kuala lumpur", "lagos", "las vegas", "lima",
    "lisbon", "liverpool", "london", "los angeles", "lyon", "madrid",
    "manchester", "manila", "marseille", "melbourne", "miami", "milan",
    "minneapolis", "montreal", "moscow", "mumbai", "munich", "nairobi",
    "naples", "new delhi", "new orleans", "new york", "new york city", "osaka",
    "oslo", "ottawa", "paris", "perth", "philadelphia", "phoenix", "portland",
    "prague", "quebec", "reykjavik", "rio de janeiro", "riyadh", "rome",
    "san diego", "san francisco", "santiago", "sao paulo", "seattle", "seoul",
    "shanghai", "singapore", "stockholm", "sydney", "taipei", "tehran",
    "tel aviv", "tokyo", "toronto", "vancouver", "venice", "vienna", "warsaw",
    "washington", "wellington", "zurich", "zürich", "münchen", "são paulo",
];

pub const PEOPLE: &[&str] = &[
    "ada lovelace", "abraham lincoln", "albert einstein", "alan turing",
    "aristotle", "barack obama", "beethoven", "bill gates", "charles darwin",
    "charlie chaplin", "cleopatra", "confucius", "elon musk", "frida kahlo",
    "galileo galilei", "george washington", "grace hopper", "isaac newton",
    "jane austen", "joe biden", "johann sebastian bach", "julius caesar",
    "leonardo da vinci", "linus torvalds", "mahatma gandhi", "marie curie",
    "martin luther king", "michael jordan", "mozart", "napoleon",
    "napoleon bonaparte", "nelson mandela", "nikola tesla", "pablo picasso",
    "plato", "queen elizabeth", "serena williams", "shakespeare",
    "socrates", "stephen hawking", "steve jobs", "taylor swift",
    "vincent van gogh", "william shakespeare", "winston churchill",
];

pub const ORGANIZATIONS: &[&str] = &[
    "bbc", "cnn", "european union", "facebook", "fifa", "google", "ibm",
    "intel", "international monetary fund", "linux foundation", "meta",
    "microsoft", "mozilla", "nasa", "nato", "netflix", "nvidia", "openai",
    "red cross", "reuters", "spacex", "tesla motors", "the new york times",
    "unesco", "unicef", "united nations", "wikipedia", "world bank",
    "world health organization", "youtube",
];
