//! StartConversationHandler - Open a new coaching conversation

use std::sync::Arc;

use super::ConversationError;
use crate::domain::conversation::Conversation;
use crate::domain::foundation::ConversationId;
use crate::ports::TranscriptStore;

/// Command to start a conversation
#[derive(Debug, Clone)]
pub struct StartConversationCommand {
    pub greeting: String,
}

/// Result of starting a conversation
#[derive(Debug, Clone)]
pub struct StartConversationResult {
    pub conversation_id: ConversationId,
    pub greeting: String,
}

/// Handler for starting conversations
pub struct StartConversationHandler {
    store: Arc<dyn TranscriptStore>,
}

impl StartConversationHandler {
    pub fn new(store: Arc<dyn TranscriptStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: StartConversationCommand,
    ) -> Result<StartConversationResult, ConversationError> {
        let conversation = Conversation::start(ConversationId::new(), cmd.greeting.clone());
        self.store.save(&conversation).await?;

        tracing::info!(conversation_id = %conversation.id(), "Conversation started");

        Ok(StartConversationResult {
            conversation_id: conversation.id(),
            greeting: cmd.greeting,
        })
    }
}
