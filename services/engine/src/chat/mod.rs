//! services/engine/src/chat/mod.rs
//!
//! The conversational response engine: intent classification, template
//! response generation, and the session driving the classify/generate cycle.

pub mod intent;
pub mod responder;
pub mod session;

pub use intent::{classify, CodeLanguage, ResponseCategory, ScienceField};
pub use responder::{generate, Reply};
pub use session::{suggested_prompts, welcome_text, ChatSession};
