//! Prompts sent to the external advisor.

use shared::chart::LABELS;

/// Label the advisor may use when nothing fits.
pub const OTHER_LABEL: &str = "other";

/// Ask for a single chart label for the pair of columns.
pub fn suggestion_prompt(x: &str, y: &str) -> String {
    let labels: Vec<&str> = LABELS.iter().map(|row| row.label).collect();
    format!(
        "What is the best chart type to visualize the relationship between the columns '{}' and '{}'?\n\
         Answer with only one of: {} or {}.",
        x,
        y,
        labels.join(", "),
        OTHER_LABEL
    )
}

/// Ask for a short reading of the chart built from the two columns.
pub fn analysis_prompt(x: &str, y: &str) -> String {
    format!(
        "What does this chart show about the relationship between {} and {}?",
        x, y
    )
}
