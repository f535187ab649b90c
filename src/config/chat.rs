//! Chat session configuration

use serde::Deserialize;
use std::time::Duration;

use super::error::ValidationError;
use crate::domain::conversation::{DEFAULT_GREETING, FALLBACK_MESSAGE};

/// Settings for the chat surface around the engine
#[derive(Debug, Clone, Deserialize)]
pub struct ChatConfig {
    /// First bot turn of every conversation
    #[serde(default = "default_greeting")]
    pub greeting: String,

    /// Shown when a turn fails
    #[serde(default = "default_fallback_message")]
    pub fallback_message: String,

    /// Pause before printing each bot turn in the terminal driver
    #[serde(default)]
    pub typing_delay_ms: u64,

    /// Print `{category, reply}` JSON instead of plain text
    #[serde(default)]
    pub output_json: bool,
}

impl ChatConfig {
    /// Get typing delay as Duration
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// Validate chat configuration
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.greeting.trim().is_empty() {
            return Err(ValidationError::MissingRequired("CHAT__GREETING"));
        }
        if self.fallback_message.trim().is_empty() {
            return Err(ValidationError::MissingRequired("CHAT__FALLBACK_MESSAGE"));
        }
        if self.typing_delay_ms > 10_000 {
            return Err(ValidationError::InvalidTypingDelay);
        }
        Ok(())
    }
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            greeting: default_greeting(),
            fallback_message: default_fallback_message(),
            typing_delay_ms: 0,
            output_json: false,
        }
    }
}

fn default_greeting() -> String {
    DEFAULT_GREETING.to_string()
}

fn default_fallback_message() -> String {
    FALLBACK_MESSAGE.to_string()
}
