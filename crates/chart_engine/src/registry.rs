//! Static compatibility table: which column kinds each chart kind accepts.
//!
//! Column draws vertical bars, so its value axis is Y. Bar is the horizontal
//! variant and its value axis is X. The two rows are mirror images and must
//! stay that way.

use shared::{ChartKind, ColumnKind};

use ColumnKind::{Categorical, Numeric};

/// One row of the table.
#[derive(Debug)]
pub struct Requirement {
    pub kinds: &'static [ChartKind],
    rule: fn(ColumnKind, ColumnKind) -> bool,
    pub explanation: &'static str,
}

impl Requirement {
    pub fn accepts(&self, x: ColumnKind, y: ColumnKind) -> bool {
        (self.rule)(x, y)
    }
}

fn category_and_value(x: ColumnKind, y: ColumnKind) -> bool {
    x == Categorical && y == Numeric
}

fn numeric_x(x: ColumnKind, _y: ColumnKind) -> bool {
    x == Numeric
}

fn both_numeric(x: ColumnKind, y: ColumnKind) -> bool {
    x == Numeric && y == Numeric
}

fn numeric_y_any_x(x: ColumnKind, y: ColumnKind) -> bool {
    y == Numeric && matches!(x, Categorical | Numeric)
}

fn numeric_x_any_y(x: ColumnKind, y: ColumnKind) -> bool {
    x == Numeric && matches!(y, Categorical | Numeric)
}

pub static REQUIREMENTS: [Requirement; 5] = [
    Requirement {
        kinds: &[ChartKind::Pie, ChartKind::Donut],
        rule: category_and_value,
        explanation: "X must be categorical and Y numeric for Pie/Donut.",
    },
    Requirement {
        kinds: &[ChartKind::Histogram],
        rule: numeric_x,
        explanation: "X must be numeric for Histogram.",
    },
    Requirement {
        kinds: &[ChartKind::Line, ChartKind::Scatter],
        rule: both_numeric,
        explanation: "Both axes must be numeric for Line/Scatter.",
    },
    Requirement {
        kinds: &[ChartKind::Column],
        rule: numeric_y_any_x,
        explanation: "Y must be numeric; X may be categorical or numeric, for Column.",
    },
    Requirement {
        kinds: &[ChartKind::Bar],
        rule: numeric_x_any_y,
        explanation: "X must be numeric; Y may be categorical or numeric, for Bar.",
    },
];

/// The table row governing `kind`.
pub fn requirement(kind: ChartKind) -> &'static Requirement {
    match kind {
        ChartKind::Pie | ChartKind::Donut => &REQUIREMENTS[0],
        ChartKind::Histogram => &REQUIREMENTS[1],
        ChartKind::Line | ChartKind::Scatter => &REQUIREMENTS[2],
        ChartKind::Column => &REQUIREMENTS[3],
        ChartKind::Bar => &REQUIREMENTS[4],
    }
}

/// All chart kinds valid for the given pair, in `ChartKind::ALL` order.
pub fn compatible_kinds(x: ColumnKind, y: ColumnKind) -> Vec<ChartKind> {
    ChartKind::ALL
        .into_iter()
        .filter(|kind| requirement(*kind).accepts(x, y))
        .collect()
}
