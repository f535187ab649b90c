//! Errors shared by the conversation handlers.

use thiserror::Error;

use crate::domain::foundation::ConversationId;
use crate::ports::TranscriptStoreError;

/// Error type for conversation commands
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConversationError {
    #[error("Conversation not found: {0}")]
    NotFound(ConversationId),

    #[error("Message is empty")]
    EmptyMessage,

    #[error("Storage error: {0}")]
    Storage(String),
}

impl From<TranscriptStoreError> for ConversationError {
    fn from(err: TranscriptStoreError) -> Self {
        match err {
            TranscriptStoreError::NotFound(id) => ConversationError::NotFound(id),
            other => ConversationError::Storage(other.to_string()),
        }
    }
}
