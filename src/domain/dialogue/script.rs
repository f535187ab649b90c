//! Ready-to-send message scripts.

use super::signals::Issue;

const CHORES_SCRIPT: [&str; 3] = [
    "“Hey — I’m sorry I raised my voice earlier. I had a rough day and I reacted badly.”",
    "“Can we agree on a simple plan for dishes (who does what + by when) so it doesn’t build up?”",
    "“If it slips, can we remind each other calmly instead of letting it explode?”",
];

const MONEY_SCRIPT: [&str; 3] = [
    "“I want to talk about bills/rent calmly.”",
    "“Can we list what’s due and set a clear split + payment date?”",
    "“If something changes, can we message early so no one feels surprised?”",
];

const GENERIC_SCRIPT: [&str; 3] = [
    "“I’m sorry my tone was harsh.”",
    "“I want to solve this, not fight.”",
    "“Can we talk for 5 minutes about what each of us needs going forward?”",
];

/// Returns the three quoted script lines for an issue.
///
/// Only chores and money have their own wording; respect and general share
/// the generic lines.
pub fn script_lines(issue: Issue) -> &'static [&'static str; 3] {
    match issue {
        Issue::Chores => &CHORES_SCRIPT,
        Issue::Money => &MONEY_SCRIPT,
        Issue::Respect | Issue::General => &GENERIC_SCRIPT,
    }
}

/// Produces a newline-joined, three-line message the user can send as-is.
pub fn generate_script(issue: Issue) -> String {
    script_lines(issue).join("\n")
}
