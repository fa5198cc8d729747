//! Render planning: what the plotting collaborator is asked to draw.

use serde::Serialize;
use shared::{AxisSelection, ChartKind};

use crate::validator::{validate, Validation};

/// Hole ratio used for donut charts.
pub const DONUT_HOLE: f32 = 0.4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Orientation {
    Vertical,
    Horizontal,
}

/// Drawing instructions for a validated selection.
///
/// Pie and donut use `x` as the slice names and `y` as the slice values.
/// Histograms only bin `x`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderPlan {
    pub kind: ChartKind,
    pub x: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub y: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub orientation: Option<Orientation>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hole: Option<f32>,
}

/// Either a plan to render or the reason rendering is suppressed.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Decision {
    Render(RenderPlan),
    Blocked { reason: &'static str },
}

impl Decision {
    pub fn plan(&self) -> Option<&RenderPlan> {
        match self {
            Decision::Render(plan) => Some(plan),
            Decision::Blocked { .. } => None,
        }
    }
}

pub fn plan(kind: ChartKind, selection: &AxisSelection) -> Decision {
    if let Validation::Incompatible { reason } = validate(kind, &selection.x, &selection.y) {
        return Decision::Blocked { reason };
    }

    let x = selection.x.name.clone();
    let y = Some(selection.y.name.clone());

    let plan = match kind {
        ChartKind::Column => RenderPlan {
            kind,
            x,
            y,
            orientation: Some(Orientation::Vertical),
            hole: None,
        },
        ChartKind::Bar => RenderPlan {
            kind,
            x,
            y,
            orientation: Some(Orientation::Horizontal),
            hole: None,
        },
        ChartKind::Line | ChartKind::Scatter | ChartKind::Pie => RenderPlan {
            kind,
            x,
            y,
            orientation: None,
            hole: None,
        },
        ChartKind::Donut => RenderPlan {
            kind,
            x,
            y,
            orientation: None,
            hole: Some(DONUT_HOLE),
        },
        ChartKind::Histogram => RenderPlan {
            kind,
            x,
            y: None,
            orientation: None,
            hole: None,
        },
    };

    Decision::Render(plan)
}
