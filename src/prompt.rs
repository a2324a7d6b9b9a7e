use crate::display::{Color, Painter};
use crate::naming::BranchName;

const SAMPLE_SUFFIXES: [&str; 3] = [
    "implement-sample-system",
    "support-xxx-for-xxx",
    "fix-xxx-bugs",
];

/// Renders the prompt asking for a branch description.
///
/// The returned text ends without a newline so the answer is typed right
/// after the prefix.
pub fn description_prompt(painter: &Painter, prefix: &str) -> String {
    let prefix = prefix.trim_matches('/');
    let lead = if prefix.is_empty() {
        String::new()
    } else {
        format!("{prefix}/")
    };

    let samples = SAMPLE_SUFFIXES
        .iter()
        .map(|suffix| painter.paint(&format!("{lead}{suffix}"), Color::Green))
        .collect::<Vec<_>>()
        .join(",\n          ");

    format!(
        "{}\n Example: {samples}\n          -----------------------------------\n  Create: {lead}",
        painter.paint("Describe the name of the branch.", Color::Cyan),
    )
}

pub fn confirmation_prompt(painter: &Painter, branch: &BranchName) -> String {
    painter.paint(
        &format!(
            "Really create {}? Yes(y)/No(n): ",
            painter.paint(branch.suffix(), Color::Green)
        ),
        Color::Cyan,
    )
}

/// Returns true for `y` or `yes` in any case, ignoring surrounding whitespace
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_lowercase().as_str(), "y" | "yes")
}
