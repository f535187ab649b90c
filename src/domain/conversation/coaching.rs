//! Fixed coaching texts that are not engine replies.

/// Opening bot turn of every conversation.
pub const DEFAULT_GREETING: &str =
    "Hello — I'm Peace Bridge. Tell me what's happening or how you're feeling.";

/// Shown in place of a reply when a turn could not be processed.
pub const FALLBACK_MESSAGE: &str = "Sorry, something went wrong — please try again.";

/// Guided breathing exercise, one bot turn per step.
pub const BREATHING_EXERCISE: [&str; 5] = [
    "Let's try a 30-second breathing exercise: Sit comfortably.",
    "Inhale slowly for 4 seconds.",
    "Hold for 4 seconds.",
    "Exhale slowly for 6 seconds.",
    "Repeat this cycle three times and tell me how you feel.",
];
