//! Turn orchestration for the rule-based coaching engine.
//!
//! One call per user turn: classify the utterance, derive context signals
//! from the user's history, then pick exactly one reply template. The engine
//! holds no state; everything it knows arrives in [`ConversationContext`].

use serde::{Deserialize, Serialize};

use super::category::{classify, Category};
use super::emotion::has_strong_emotion;
use super::reply::StructuredReply;
use super::script::generate_script;
use super::signals::{ContextSignals, Issue};
use super::turn::{user_text, Turn};

const TONE_QUESTION: &str =
    "Do you want a **soft** message (more empathetic) or a **firm** message (more boundary-based)?";

/// Caller-supplied context for one turn.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversationContext {
    /// Category reported for the previous turn, if the caller tracks it.
    #[serde(default)]
    pub last_category: Option<Category>,
    /// Prior turns, oldest first. Excludes the utterance being answered.
    #[serde(default)]
    pub history: Vec<Turn>,
}

impl ConversationContext {
    pub fn new(last_category: Option<Category>, history: Vec<Turn>) -> Self {
        Self {
            last_category,
            history,
        }
    }

    /// Context with history only.
    pub fn from_history(history: Vec<Turn>) -> Self {
        Self::new(None, history)
    }
}

/// What crosses the engine boundary: a category tag and the rendered reply.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EngineOutput {
    pub category: Category,
    pub reply: String,
}

/// Which reply template family answered the turn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReplyBranch {
    /// Strong emotion detected; de-escalate first.
    Calming,
    Interpersonal,
    Academic,
    Workplace,
    /// Emotional or otherwise unmatched conversations.
    Supportive,
}

/// A reply before rendering, with the facts that selected it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComposedReply {
    pub category: Category,
    pub signals: ContextSignals,
    pub branch: ReplyBranch,
    pub reply: StructuredReply,
}

impl ComposedReply {
    pub fn into_output(self) -> EngineOutput {
        EngineOutput {
            category: self.category,
            reply: self.reply.render(),
        }
    }
}

/// The keyword-driven dialogue engine.
#[derive(Debug, Clone, Copy, Default)]
pub struct RuleEngine;

impl RuleEngine {
    pub fn new() -> Self {
        Self
    }

    /// Produces the reply for `utterance` given prior `context`.
    pub fn reply(&self, utterance: &str, context: &ConversationContext) -> EngineOutput {
        self.compose(utterance, context).into_output()
    }

    /// Runs the pipeline without rendering.
    ///
    /// Decision order, first match wins:
    /// 1. strong emotion in the utterance -> calming reply
    /// 2. interpersonal -> chores or general variant, with a script
    /// 3. academic, 4. workplace -> fixed templates
    /// 5. anything else -> supportive template
    ///
    /// The reported category is always the classifier's, even when the
    /// calming branch answers.
    pub fn compose(&self, utterance: &str, context: &ConversationContext) -> ComposedReply {
        let category = classify(utterance);
        let signals = ContextSignals::from_user_text(&issue_text(&context.history, utterance));

        let (branch, reply) = if has_strong_emotion(utterance) {
            (ReplyBranch::Calming, calming_reply())
        } else {
            match category {
                Category::Interpersonal => {
                    (ReplyBranch::Interpersonal, interpersonal_reply(signals.issue))
                }
                Category::Academic => (ReplyBranch::Academic, academic_reply()),
                Category::Workplace => (ReplyBranch::Workplace, workplace_reply()),
                Category::Emotional => (ReplyBranch::Supportive, supportive_reply()),
            }
        };

        tracing::debug!(
            category = %category,
            issue = %signals.issue,
            bad_day = signals.bad_day,
            apologized_tone = signals.apologized_tone,
            branch = ?branch,
            "Composed reply"
        );

        ComposedReply {
            category,
            signals,
            branch,
            reply,
        }
    }
}

/// Engine entry point: one reply per user turn.
pub fn get_bot_reply(utterance: &str, context: &ConversationContext) -> EngineOutput {
    RuleEngine.reply(utterance, context)
}

/// User history text with the current utterance appended as the newest turn.
fn issue_text(history: &[Turn], utterance: &str) -> String {
    let mut text = user_text(history);
    if !text.is_empty() && !utterance.is_empty() {
        text.push(' ');
    }
    text.push_str(utterance);
    text
}

fn calming_reply() -> StructuredReply {
    StructuredReply::new()
        .with_summary("You’re feeling a lot right now — let’s slow it down and prevent more damage.")
        .with_steps([
            "Take 20 seconds: inhale 4s → hold 2s → exhale 6s (repeat 2x).",
            "Decide your goal: apology, boundary, or a chore plan.",
            "Then we’ll draft a short message together.",
        ])
        .with_question(
            "What do you want most right now: (A) apologize, (B) set a chore plan, or (C) cool down first?",
        )
}

// Respect, money and general share one variant here; only the script differs.
fn interpersonal_reply(issue: Issue) -> StructuredReply {
    let reply = if issue == Issue::Chores {
        StructuredReply::new()
            .with_summary("Conflict about shared chores (dishes) + your frustration after a rough day.")
            .with_steps([
                "Start with a quick repair: apologize for yelling (tone), not for the boundary.",
                "State the expectation clearly: dishes need to be done by a time (ex: same night).",
                "Agree on a simple system: a schedule or “same-day rule” + reminder method.",
            ])
    } else {
        StructuredReply::new()
            .with_summary("Interpersonal tension — likely a mismatch in expectations and communication.")
            .with_steps([
                "Repair the tone first so they can hear you.",
                "Explain your need/expectation in one sentence.",
                "Ask for a shared agreement (a specific behavior change).",
            ])
    };

    reply
        .with_script(generate_script(issue))
        .with_question(TONE_QUESTION)
}

fn academic_reply() -> StructuredReply {
    StructuredReply::new()
        .with_summary("This sounds like an academic / coordination problem.")
        .with_steps([
            "Write the problem as facts (no blame).",
            "Propose a 10-minute meeting + assign tasks with deadlines.",
            "If it repeats, escalate to instructor with evidence.",
        ])
        .with_question("Is this a team member not contributing, or unclear expectations?")
}

fn workplace_reply() -> StructuredReply {
    StructuredReply::new()
        .with_summary("Work conflicts need calm + documentation.")
        .with_steps([
            "Write down facts (what, when, where).",
            "Request a short 1:1 to clarify expectations.",
            "Use neutral language and propose a solution.",
        ])
        .with_question("Is this about communication, workload, or respect?")
}

fn supportive_reply() -> StructuredReply {
    StructuredReply::new()
        .with_summary("I’m here with you — let’s make this easier to handle.")
        .with_steps([
            "Tell me what happened in one sentence.",
            "How did it make you feel?",
            "What outcome do you want?",
        ])
        .with_question("What’s the one outcome you want most right now?")
}
