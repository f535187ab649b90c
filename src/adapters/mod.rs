//! Adapters - Implementations of port interfaces.
//!
//! - `storage` - Transcript store implementations (in-memory)

pub mod storage;

pub use storage::InMemoryTranscriptStore;
