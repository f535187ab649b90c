//! Conversation domain module.
//!
//! Tracks one chat transcript per conversation and the fixed coaching
//! texts shown around engine replies.

mod coaching;
mod transcript;

pub use coaching::{BREATHING_EXERCISE, DEFAULT_GREETING, FALLBACK_MESSAGE};
pub use transcript::Conversation;
