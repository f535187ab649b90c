//! End-to-end scenarios for the dialogue engine through its public API.

use peace_bridge::domain::dialogue::{
    classify, extract_context, generate_script, get_bot_reply, Category, ConversationContext,
    EngineOutput, Issue, Turn,
};

const CALMING_STEPS: [&str; 3] = [
    "- Take 20 seconds: inhale 4s → hold 2s → exhale 6s (repeat 2x).",
    "- Decide your goal: apology, boundary, or a chore plan.",
    "- Then we’ll draft a short message together.",
];

const CALMING_QUESTION: &str = "**Quick question:** What do you want most right now: (A) apologize, (B) set a chore plan, or (C) cool down first?";

fn reply(utterance: &str, history: Vec<Turn>) -> EngineOutput {
    get_bot_reply(utterance, &ConversationContext::new(None, history))
}

// =============================================================================
// Documented scenarios
// =============================================================================

#[test]
fn dishes_after_roommate_complaint_gets_chores_script() {
    let output = reply(
        "the dishes are a mess again",
        vec![Turn::user("my roommate never helps")],
    );

    assert_eq!(output.category, Category::Interpersonal);
    for line in generate_script(Issue::Chores).lines() {
        assert!(output.reply.contains(line), "missing script line: {line}");
    }
    assert!(output
        .reply
        .contains("**Summary:** Conflict about shared chores (dishes) + your frustration after a rough day."));
}

#[test]
fn empty_utterance_and_history_gets_default_reply() {
    let output = reply("", vec![]);

    assert_eq!(output.category, Category::Interpersonal);
    assert_eq!(
        output.reply,
        [
            "**Summary:** Interpersonal tension — likely a mismatch in expectations and communication.",
            "**Try this (3 steps):**",
            "- Repair the tone first so they can hear you.",
            "- Explain your need/expectation in one sentence.",
            "- Ask for a shared agreement (a specific behavior change).",
            "**Message you can send:**",
            "“I’m sorry my tone was harsh.”",
            "“I want to solve this, not fight.”",
            "“Can we talk for 5 minutes about what each of us needs going forward?”",
            "**Quick question:** Do you want a **soft** message (more empathetic) or a **firm** message (more boundary-based)?",
        ]
        .join("\n")
    );
}

#[test]
fn strong_emotion_overrides_money_issue() {
    let utterance = "I'm so overwhelmed and furious about the rent";
    let output = reply(utterance, vec![]);

    assert_eq!(output.category, classify(utterance));
    assert!(!output.reply.contains("bills/rent"));
    for step in CALMING_STEPS {
        assert!(output.reply.contains(step));
    }
    assert!(output.reply.ends_with(CALMING_QUESTION));
}

#[test]
fn boss_message_gets_workplace_template() {
    let output = reply("My boss keeps changing my schedule", vec![]);

    assert_eq!(output.category, Category::Workplace);
    assert_eq!(
        output.reply,
        [
            "**Summary:** Work conflicts need calm + documentation.",
            "**Try this (3 steps):**",
            "- Write down facts (what, when, where).",
            "- Request a short 1:1 to clarify expectations.",
            "- Use neutral language and propose a solution.",
            "**Quick question:** Is this about communication, workload, or respect?",
        ]
        .join("\n")
    );
}

#[test]
fn academic_message_gets_coordination_template() {
    let output = reply("nobody in my project team replies", vec![]);

    assert_eq!(output.category, Category::Academic);
    assert!(output
        .reply
        .starts_with("**Summary:** This sounds like an academic / coordination problem."));
    assert!(output
        .reply
        .contains("- Propose a 10-minute meeting + assign tasks with deadlines."));
    assert!(!output.reply.contains("**Message you can send:**"));
}

#[test]
fn emotional_message_gets_supportive_template() {
    let output = reply("I feel so anxious lately", vec![]);

    assert_eq!(output.category, Category::Emotional);
    assert_eq!(
        output.reply,
        [
            "**Summary:** I’m here with you — let’s make this easier to handle.",
            "**Try this (3 steps):**",
            "- Tell me what happened in one sentence.",
            "- How did it make you feel?",
            "- What outcome do you want?",
            "**Quick question:** What’s the one outcome you want most right now?",
        ]
        .join("\n")
    );
}

// =============================================================================
// Cross-cutting behavior
// =============================================================================

#[test]
fn boss_and_roommate_classify_as_interpersonal() {
    assert_eq!(classify("my boss and my roommate"), Category::Interpersonal);
}

#[test]
fn money_script_is_used_for_interpersonal_money_conversations() {
    let output = reply("my roommate", vec![Turn::user("we keep fighting over rent")]);

    assert!(output.reply.contains("“I want to talk about bills/rent calmly.”"));
    assert!(output
        .reply
        .contains("- Repair the tone first so they can hear you."));
}

#[test]
fn history_bot_turns_never_affect_issue() {
    let history = vec![
        Turn::bot("Can we agree on a simple plan for dishes?"),
        Turn::user("my friend ignored my texts"),
    ];
    assert_eq!(extract_context(&history).issue, Issue::Respect);
}

#[test]
fn same_input_twice_gives_identical_output() {
    let context = ConversationContext::new(
        Some(Category::Workplace),
        vec![Turn::user("rent is late"), Turn::bot("ok")],
    );
    let first = get_bot_reply("my partner yelled", &context);
    let second = get_bot_reply("my partner yelled", &context);
    assert_eq!(first, second);
    assert_eq!(first.reply.as_bytes(), second.reply.as_bytes());
}

#[test]
fn wire_shape_round_trips_through_json() {
    let context: ConversationContext = serde_json::from_str(
        r#"{"last_category":"academic","history":[{"sender":"user","text":"my boss"},{"sender":"bot","text":"..."}]}"#,
    )
    .unwrap();

    let output = get_bot_reply("and the office is cold", &context);
    let json = serde_json::to_value(&output).unwrap();

    assert_eq!(json["category"], "workplace");
    assert_eq!(json.as_object().unwrap().len(), 2);
}
