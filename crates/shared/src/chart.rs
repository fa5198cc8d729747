//! Chart kinds and their canonical label table.
//!
//! Chart kinds cross the process boundary as text (advisor replies, CLI
//! arguments, JSON reports). Every conversion goes through [`LABELS`] so there
//! is exactly one place that knows how a kind is spelled.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ChartError;

/// Minimum normalized similarity for a "did you mean" hint.
const SUGGESTION_THRESHOLD: f64 = 0.6;

/// The closed set of supported chart kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum ChartKind {
    #[default]
    #[serde(rename = "coluna", alias = "column")]
    Column,
    #[serde(rename = "barra", alias = "bar")]
    Bar,
    #[serde(rename = "linha", alias = "line")]
    Line,
    #[serde(rename = "dispersão", alias = "scatter")]
    Scatter,
    #[serde(rename = "pizza", alias = "pie")]
    Pie,
    #[serde(rename = "rosca", alias = "donut")]
    Donut,
    #[serde(rename = "histograma", alias = "histogram")]
    Histogram,
}

/// One row of the label table.
#[derive(Debug, Clone, Copy)]
pub struct ChartLabel {
    pub kind: ChartKind,
    /// Canonical boundary label, used for serialization.
    pub label: &'static str,
    /// Accepted alternative spelling.
    pub alias: &'static str,
}

/// Canonical label table, in [`ChartKind::ALL`] order.
pub const LABELS: [ChartLabel; 7] = [
    ChartLabel {
        kind: ChartKind::Column,
        label: "coluna",
        alias: "column",
    },
    ChartLabel {
        kind: ChartKind::Bar,
        label: "barra",
        alias: "bar",
    },
    ChartLabel {
        kind: ChartKind::Line,
        label: "linha",
        alias: "line",
    },
    ChartLabel {
        kind: ChartKind::Scatter,
        label: "dispersão",
        alias: "scatter",
    },
    ChartLabel {
        kind: ChartKind::Pie,
        label: "pizza",
        alias: "pie",
    },
    ChartLabel {
        kind: ChartKind::Donut,
        label: "rosca",
        alias: "donut",
    },
    ChartLabel {
        kind: ChartKind::Histogram,
        label: "histograma",
        alias: "histogram",
    },
];

impl ChartKind {
    pub const ALL: [ChartKind; 7] = [
        ChartKind::Column,
        ChartKind::Bar,
        ChartKind::Line,
        ChartKind::Scatter,
        ChartKind::Pie,
        ChartKind::Donut,
        ChartKind::Histogram,
    ];

    fn entry(&self) -> &'static ChartLabel {
        let idx = match self {
            ChartKind::Column => 0,
            ChartKind::Bar => 1,
            ChartKind::Line => 2,
            ChartKind::Scatter => 3,
            ChartKind::Pie => 4,
            ChartKind::Donut => 5,
            ChartKind::Histogram => 6,
        };
        &LABELS[idx]
    }

    pub fn label(&self) -> &'static str {
        self.entry().label
    }

    /// Look up a kind by canonical label or alias, ignoring surrounding
    /// whitespace and case.
    pub fn from_label(text: &str) -> Option<ChartKind> {
        let wanted = text.trim().to_lowercase();
        LABELS
            .iter()
            .find(|row| row.label == wanted || row.alias == wanted)
            .map(|row| row.kind)
    }

    /// Closest kind by label similarity, if any is close enough to be a typo.
    pub fn closest(text: &str) -> Option<ChartKind> {
        let wanted = text.trim().to_lowercase();
        if wanted.is_empty() {
            return None;
        }

        LABELS
            .iter()
            .flat_map(|row| [(row.kind, row.label), (row.kind, row.alias)])
            .map(|(kind, candidate)| (kind, strsim::normalized_levenshtein(&wanted, candidate)))
            .filter(|(_, score)| *score >= SUGGESTION_THRESHOLD)
            .max_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal))
            .map(|(kind, _)| kind)
    }
}

impl fmt::Display for ChartKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChartKind {
    type Err = ChartError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChartKind::from_label(s).ok_or_else(|| ChartError::UnsupportedChartKind {
            label: s.to_string(),
            did_you_mean: ChartKind::closest(s),
        })
    }
}
