//! Strong-emotion detection.

/// Phrases that signal the user is too activated for problem solving.
///
/// "can't handle" is listed with both the ASCII and the typographic apostrophe.
pub const STRONG_EMOTION_PHRASES: &[&str] = &[
    "furious",
    "angry",
    "very angry",
    "panic",
    "overwhelmed",
    "hate",
    "can't handle",
    "can\u{2019}t handle",
    "bad day",
];

/// Returns true when the lower-cased utterance contains any strong-emotion phrase.
pub fn has_strong_emotion(utterance: &str) -> bool {
    let lowered = utterance.to_lowercase();
    STRONG_EMOTION_PHRASES
        .iter()
        .any(|phrase| lowered.contains(phrase))
}
