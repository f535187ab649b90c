//! SendMessageHandler - Answer one user message and record the exchange

use std::sync::Arc;

use super::ConversationError;
use crate::domain::dialogue::EngineOutput;
use crate::domain::foundation::ConversationId;
use crate::ports::{ReplyEngine, TranscriptStore};

/// Command to send a user message
#[derive(Debug, Clone)]
pub struct SendMessageCommand {
    pub conversation_id: ConversationId,
    pub message: String,
}

/// Result of sending a message
#[derive(Debug, Clone)]
pub struct SendMessageResult {
    pub output: EngineOutput,
    /// Turns in the conversation after the exchange was recorded.
    pub turn_count: usize,
}

/// Handler for sending messages in conversations
pub struct SendMessageHandler {
    store: Arc<dyn TranscriptStore>,
    engine: Arc<dyn ReplyEngine>,
}

impl SendMessageHandler {
    pub fn new(store: Arc<dyn TranscriptStore>, engine: Arc<dyn ReplyEngine>) -> Self {
        Self { store, engine }
    }

    pub async fn handle(
        &self,
        cmd: SendMessageCommand,
    ) -> Result<SendMessageResult, ConversationError> {
        // 1. Reject blank input before touching storage
        let message = cmd.message.trim();
        if message.is_empty() {
            return Err(ConversationError::EmptyMessage);
        }

        // 2. Load the conversation
        let mut conversation = self.store.load(cmd.conversation_id).await?;

        // 3. Ask the engine, with history as it was before this message
        let output = self.engine.reply(message, &conversation.context());

        // 4. Record and persist
        conversation.record_exchange(message, &output);
        self.store.save(&conversation).await?;

        tracing::info!(
            conversation_id = %cmd.conversation_id,
            category = %output.category,
            turns = conversation.len(),
            "Message answered"
        );

        Ok(SendMessageResult {
            output,
            turn_count: conversation.len(),
        })
    }
}
