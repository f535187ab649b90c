//! In-Memory Transcript Store Adapter
//!
//! Keeps conversations in memory for the lifetime of the process.
//! Used by the terminal driver and by tests.

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::domain::conversation::Conversation;
use crate::domain::foundation::ConversationId;
use crate::ports::{TranscriptStore, TranscriptStoreError};

/// In-memory storage for conversations
#[derive(Debug, Clone)]
pub struct InMemoryTranscriptStore {
    conversations: Arc<RwLock<HashMap<ConversationId, Conversation>>>,
}

impl InMemoryTranscriptStore {
    /// Create a new in-memory store
    pub fn new() -> Self {
        Self {
            conversations: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Clear all stored conversations (useful for tests)
    pub async fn clear(&self) {
        self.conversations.write().await.clear();
    }

    /// Get the number of stored conversations
    pub async fn conversation_count(&self) -> usize {
        self.conversations.read().await.len()
    }
}

impl Default for InMemoryTranscriptStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TranscriptStore for InMemoryTranscriptStore {
    async fn save(&self, conversation: &Conversation) -> Result<(), TranscriptStoreError> {
        let mut conversations = self.conversations.write().await;
        conversations.insert(conversation.id(), conversation.clone());
        Ok(())
    }

    async fn load(&self, id: ConversationId) -> Result<Conversation, TranscriptStoreError> {
        let conversations = self.conversations.read().await;
        conversations
            .get(&id)
            .cloned()
            .ok_or(TranscriptStoreError::NotFound(id))
    }

    async fn exists(&self, id: ConversationId) -> Result<bool, TranscriptStoreError> {
        let conversations = self.conversations.read().await;
        Ok(conversations.contains_key(&id))
    }

    async fn delete(&self, id: ConversationId) -> Result<(), TranscriptStoreError> {
        self.conversations.write().await.remove(&id);
        Ok(())
    }
}
