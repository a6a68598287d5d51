//! Input validation errors for the chat boundary.

/// Reasons an utterance is rejected before classification.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChatError {
    #[error("message cannot be empty")]
    EmptyMessage,
    #[error("message exceeds maximum length of {0} characters")]
    MessageTooLong(usize),
}

impl ChatError {
    /// Reply shown to the user instead of the internal description.
    pub fn user_message(&self) -> String {
        match self {
            ChatError::EmptyMessage => "Please enter a message.".to_string(),
            ChatError::MessageTooLong(max) => format!(
                "That message is too long. Please keep it under {} characters.",
                max
            ),
        }
    }
}
