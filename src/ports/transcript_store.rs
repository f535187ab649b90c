//! Transcript Store Port - Interface for persisting conversations.
//!
//! The engine never touches storage; handlers load a conversation, run one
//! turn and save it back through this port.

use async_trait::async_trait;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::ConversationId;

/// Errors that can occur during transcript storage operations
#[derive(Debug, thiserror::Error)]
pub enum TranscriptStoreError {
    #[error("Conversation not found: {0}")]
    NotFound(ConversationId),

    #[error("Storage backend error: {0}")]
    Backend(String),
}

/// Port for persisting and loading conversations
#[async_trait]
pub trait TranscriptStore: Send + Sync {
    /// Save a conversation, replacing any previous version
    ///
    /// # Errors
    /// Returns `TranscriptStoreError` if save fails
    async fn save(&self, conversation: &Conversation) -> Result<(), TranscriptStoreError>;

    /// Load a conversation
    ///
    /// # Errors
    /// Returns `TranscriptStoreError::NotFound` if no conversation exists
    async fn load(&self, id: ConversationId) -> Result<Conversation, TranscriptStoreError>;

    /// Check if a conversation exists
    async fn exists(&self, id: ConversationId) -> Result<bool, TranscriptStoreError>;

    /// Delete a conversation. Deleting an unknown id is not an error.
    async fn delete(&self, id: ConversationId) -> Result<(), TranscriptStoreError>;
}
