//! BreathingExerciseHandler - Append the guided breathing exercise

use std::sync::Arc;

use super::ConversationError;
use crate::domain::foundation::ConversationId;
use crate::ports::TranscriptStore;

/// Command to run the breathing exercise in a conversation
#[derive(Debug, Clone)]
pub struct BreathingExerciseCommand {
    pub conversation_id: ConversationId,
}

/// Result of running the breathing exercise
#[derive(Debug, Clone)]
pub struct BreathingExerciseResult {
    /// Bot turns added, in order.
    pub steps: Vec<String>,
}

/// Handler for the breathing quick action
pub struct BreathingExerciseHandler {
    store: Arc<dyn TranscriptStore>,
}

impl BreathingExerciseHandler {
    pub fn new(store: Arc<dyn TranscriptStore>) -> Self {
        Self { store }
    }

    pub async fn handle(
        &self,
        cmd: BreathingExerciseCommand,
    ) -> Result<BreathingExerciseResult, ConversationError> {
        let mut conversation = self.store.load(cmd.conversation_id).await?;
        let steps = conversation.run_breathing_exercise();
        self.store.save(&conversation).await?;

        tracing::info!(conversation_id = %cmd.conversation_id, "Breathing exercise added");

        Ok(BreathingExerciseResult { steps })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::InMemoryTranscriptStore;
    use crate::domain::conversation::{Conversation, BREATHING_EXERCISE, DEFAULT_GREETING};

    #[tokio::test]
    async fn appends_all_steps() {
        let store = Arc::new(InMemoryTranscriptStore::new());
        let conversation = Conversation::start(ConversationId::new(), DEFAULT_GREETING);
        store.save(&conversation).await.unwrap();
        let handler = BreathingExerciseHandler::new(store.clone());

        let result = handler
            .handle(BreathingExerciseCommand {
                conversation_id: conversation.id(),
            })
            .await
            .unwrap();

        assert_eq!(result.steps, BREATHING_EXERCISE.to_vec());
        let stored = store.load(conversation.id()).await.unwrap();
        assert_eq!(stored.len(), 1 + BREATHING_EXERCISE.len());
        assert_eq!(stored.last_category(), None);
    }

    #[tokio::test]
    async fn unknown_conversation_is_not_found() {
        let handler = BreathingExerciseHandler::new(Arc::new(InMemoryTranscriptStore::new()));
        let id = ConversationId::new();

        let result = handler
            .handle(BreathingExerciseCommand { conversation_id: id })
            .await;

        assert_eq!(result.unwrap_err(), ConversationError::NotFound(id));
    }
}
