//! ResetConversationHandler - Clear a transcript back to the greeting

use std::sync::Arc;

use super::ConversationError;
use crate::domain::foundation::ConversationId;
use crate::ports::TranscriptStore;

/// Command to reset a conversation
#[derive(Debug, Clone)]
pub struct ResetConversationCommand {
    pub conversation_id: ConversationId,
    pub greeting: String,
}

/// Handler for resetting conversations
pub struct ResetConversationHandler {
    store: Arc<dyn TranscriptStore>,
}

impl ResetConversationHandler {
    pub fn new(store: Arc<dyn TranscriptStore>) -> Self {
        Self { store }
    }

    pub async fn handle(&self, cmd: ResetConversationCommand) -> Result<(), ConversationError> {
        let mut conversation = self.store.load(cmd.conversation_id).await?;
        let dropped = conversation.len();
        conversation.reset(cmd.greeting);
        self.store.save(&conversation).await?;

        tracing::info!(
            conversation_id = %cmd.conversation_id,
            dropped_turns = dropped,
            "Conversation reset"
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTranscriptStore;
    use crate::domain::conversation::{Conversation, DEFAULT_GREETING};
    use crate::domain::dialogue::{Category, EngineOutput, Turn};

    #[tokio::test]
    async fn reset_keeps_only_the_greeting() {
        let store = Arc::new(InMemoryTranscriptStore::new());
        let mut conversation = Conversation::start(ConversationId::new(), DEFAULT_GREETING);
        conversation.record_exchange(
            "my boss",
            &EngineOutput {
                category: Category::Workplace,
                reply: "reply".to_string(),
            },
        );
        store.save(&conversation).await.unwrap();
        let handler = ResetConversationHandler::new(store.clone());

        handler
            .handle(ResetConversationCommand {
                conversation_id: conversation.id(),
                greeting: DEFAULT_GREETING.to_string(),
            })
            .await
            .unwrap();

        let stored = store.load(conversation.id()).await.unwrap();
        assert_eq!(stored.history(), &[Turn::bot(DEFAULT_GREETING)]);
        assert_eq!(stored.last_category(), None);
    }

    #[tokio::test]
    async fn unknown_conversation_is_not_found() {
        let handler = ResetConversationHandler::new(Arc::new(InMemoryTranscriptStore::new()));
        let id = ConversationId::new();

        let result = handler
            .handle(ResetConversationCommand {
                conversation_id: id,
                greeting: "hi".to_string(),
            })
            .await;

        assert_eq!(result.unwrap_err(), ConversationError::NotFound(id));
    }
}
