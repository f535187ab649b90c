//! Storage Adapters
//!
//! Implementations of the TranscriptStore port.
//!
//! ## Available Adapters
//!
//! - **InMemoryTranscriptStore** - Stores conversations in memory (driver/testing)

mod in_memory_transcript_store;

pub use in_memory_transcript_store::InMemoryTranscriptStore;
