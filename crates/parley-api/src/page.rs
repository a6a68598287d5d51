//! The browser chat page served at `/`.
//!
//! A single self-contained HTML file with inline CSS and JavaScript, embedded
//! at compile time. The script posts to `/chat` on the same origin and shows
//! either the `response` field or, for a rejected request body, the error
//! body's `message`.

pub const CHAT_HTML: &str = include_str!("../assets/chat.html");
