//! Maps free-text advisor replies onto a chart kind.

use shared::ChartKind;

/// Kind used whenever the advisor reply is empty or unrecognized.
pub const FALLBACK: ChartKind = ChartKind::Column;

/// Normalize an untrusted suggestion. Total: any input yields a kind.
pub fn normalize(raw: &str) -> ChartKind {
    match ChartKind::from_label(raw) {
        Some(kind) => kind,
        None => {
            if !raw.trim().is_empty() {
                tracing::debug!(raw = %raw.trim(), fallback = %FALLBACK, "unrecognized suggestion");
            }
            FALLBACK
        }
    }
}
