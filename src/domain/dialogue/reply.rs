//! Structured replies and their plain-text rendering.

use serde::{Deserialize, Serialize};
use std::fmt;

/// The multi-part reply composed for one turn.
///
/// Every part is optional; rendering skips absent parts without leaving a
/// placeholder. `**` markers in the rendered text are literal characters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredReply {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub summary: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub steps: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub script: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub question: Option<String>,
}

impl StructuredReply {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_summary(mut self, summary: impl Into<String>) -> Self {
        self.summary = Some(summary.into());
        self
    }

    pub fn with_steps<I, S>(mut self, steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.steps = steps.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_script(mut self, script: impl Into<String>) -> Self {
        self.script = Some(script.into());
        self
    }

    pub fn with_question(mut self, question: impl Into<String>) -> Self {
        self.question = Some(question.into());
        self
    }

    /// Renders the reply as newline-delimited text.
    ///
    /// Order is fixed: summary, steps, script, question. Empty strings count
    /// as absent.
    pub fn render(&self) -> String {
        let mut lines: Vec<String> = Vec::new();

        if let Some(summary) = non_empty(&self.summary) {
            lines.push(format!("**Summary:** {summary}"));
        }
        if !self.steps.is_empty() {
            lines.push("**Try this (3 steps):**".to_string());
            lines.extend(self.steps.iter().map(|step| format!("- {step}")));
        }
        if let Some(script) = non_empty(&self.script) {
            lines.push("**Message you can send:**".to_string());
            lines.push(script.to_string());
        }
        if let Some(question) = non_empty(&self.question) {
            lines.push(format!("**Quick question:** {question}"));
        }

        lines.join("\n")
    }
}

impl fmt::Display for StructuredReply {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn non_empty(field: &Option<String>) -> Option<&str> {
    field.as_deref().filter(|s| !s.is_empty())
}

/// Renders a [`StructuredReply`] to text.
pub fn format_reply(reply: &StructuredReply) -> String {
    reply.render()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_all_parts_in_order() {
        let reply = StructuredReply::new()
            .with_question("Q?")
            .with_script("line one\nline two")
            .with_steps(["a", "b"])
            .with_summary("S");

        assert_eq!(
            reply.render(),
            "**Summary:** S\n\
             **Try this (3 steps):**\n\
             - a\n\
             - b\n\
             **Message you can send:**\n\
             line one\n\
             line two\n\
             **Quick question:** Q?"
        );
    }

    #[test]
    fn empty_reply_renders_empty_string() {
        assert_eq!(StructuredReply::new().render(), "");
    }

    #[test]
    fn missing_parts_leave_no_placeholder() {
        let reply = StructuredReply::new().with_summary("S").with_question("Q?");
        assert_eq!(reply.render(), "**Summary:** S\n**Quick question:** Q?");
    }

    #[test]
    fn empty_strings_are_skipped() {
        let reply = StructuredReply::new()
            .with_summary("")
            .with_script("")
            .with_question("Q?");
        assert_eq!(reply.render(), "**Quick question:** Q?");
    }

    #[test]
    fn steps_header_is_fixed_regardless_of_count() {
        let reply = StructuredReply::new().with_steps(["only one"]);
        assert_eq!(reply.render(), "**Try this (3 steps):**\n- only one");
    }

    #[test]
    fn display_matches_format_reply() {
        let reply = StructuredReply::new().with_summary("S");
        assert_eq!(reply.to_string(), format_reply(&reply));
    }

    #[test]
    fn serialization_omits_absent_parts() {
        let reply = StructuredReply::new().with_summary("S");
        let json = serde_json::to_string(&reply).unwrap();
        assert_eq!(json, r#"{"summary":"S"}"#);
    }
}
