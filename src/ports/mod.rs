//! Ports - Interfaces for external dependencies.
//!
//! Following hexagonal architecture, ports define the contracts between
//! the domain and the outside world. Adapters implement these ports.
//!
//! - `ReplyEngine` - Produces one reply per user turn
//! - `TranscriptStore` - Persists conversations between turns

mod reply_engine;
mod transcript_store;

pub use reply_engine::ReplyEngine;
pub use transcript_store::{TranscriptStore, TranscriptStoreError};
