//! Domain layer containing business logic and domain types.
//!
//! # Module Organization
//!
//! - `foundation` - Shared domain primitives (IDs)
//! - `dialogue` - The pure rule-based coaching engine
//! - `conversation` - Conversation transcripts and fixed coaching texts

pub mod conversation;
pub mod dialogue;
pub mod foundation;
