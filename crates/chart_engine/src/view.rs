//! Per-interaction view-model.
//!
//! Everything the front end needs after the user changes the axis or chart
//! selection, derived from explicit inputs with no retained state.

use serde::Serialize;
use shared::{AxisSelection, ChartError, ChartKind};

use crate::inference::ColumnSet;
use crate::normalizer::normalize;
use crate::registry::compatible_kinds;
use crate::render::{plan, Decision};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChartView {
    pub selection: AxisSelection,
    /// Normalized advisor suggestion, also the default selection.
    pub suggested: ChartKind,
    pub chosen: ChartKind,
    pub compatible: Vec<ChartKind>,
    pub decision: Decision,
}

impl ChartView {
    /// Build the view for one selection.
    ///
    /// `chosen_label` is the user's explicit pick; when absent the suggestion
    /// is used. An unrecognized pick is an error rather than a silent default.
    pub fn build(
        columns: &ColumnSet,
        x_name: &str,
        y_name: &str,
        raw_suggestion: &str,
        chosen_label: Option<&str>,
    ) -> Result<Self, ChartError> {
        let x = columns.get(x_name)?.clone();
        let y = columns.get(y_name)?.clone();

        let suggested = normalize(raw_suggestion);
        let chosen = match chosen_label {
            Some(label) => label.parse()?,
            None => suggested,
        };

        let selection = AxisSelection::new(x, y);
        let compatible = compatible_kinds(selection.x.kind, selection.y.kind);
        let decision = plan(chosen, &selection);

        tracing::info!(
            x = %selection.x.name,
            y = %selection.y.name,
            %suggested,
            %chosen,
            rendered = decision.plan().is_some(),
            "chart selection evaluated"
        );

        Ok(Self {
            selection,
            suggested,
            chosen,
            compatible,
            decision,
        })
    }

    /// Whether the suggested kind would render for this selection.
    pub fn suggestion_fits(&self) -> bool {
        self.compatible.contains(&self.suggested)
    }
}
