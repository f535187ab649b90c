//! Application layer - Commands and Handlers.
//!
//! This layer loads conversations through ports, runs the dialogue engine
//! and records the results.

pub mod handlers;

pub use handlers::{
    BreathingExerciseCommand, BreathingExerciseHandler, BreathingExerciseResult,
    ConversationError, ResetConversationCommand, ResetConversationHandler, SendMessageCommand,
    SendMessageHandler, SendMessageResult, StartConversationCommand, StartConversationHandler,
    StartConversationResult,
};
