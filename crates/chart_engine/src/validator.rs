//! Compatibility validation between a chart kind and an axis selection.

use serde::Serialize;
use shared::{ChartError, ChartKind, Column};

use crate::registry::requirement;

/// Outcome of checking a chart kind against two columns.
///
/// `Incompatible` is an expected result, not a failure. The reason is the
/// fixed per-kind explanation and never mentions the actual columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Validation {
    Compatible,
    Incompatible { reason: &'static str },
}

impl Validation {
    pub fn is_ok(&self) -> bool {
        matches!(self, Validation::Compatible)
    }

    pub fn reason(&self) -> Option<&'static str> {
        match self {
            Validation::Compatible => None,
            Validation::Incompatible { reason } => Some(*reason),
        }
    }
}

pub fn validate(kind: ChartKind, x: &Column, y: &Column) -> Validation {
    let row = requirement(kind);
    if row.accepts(x.kind, y.kind) {
        Validation::Compatible
    } else {
        tracing::debug!(%kind, x = %x.name, y = %y.name, "incompatible selection");
        Validation::Incompatible {
            reason: row.explanation,
        }
    }
}

/// Validate a chart kind given as boundary text. Labels outside the closed
/// set fail with `UnsupportedChartKind`; they are never substituted.
pub fn validate_label(label: &str, x: &Column, y: &Column) -> Result<Validation, ChartError> {
    let kind: ChartKind = label.parse()?;
    Ok(validate(kind, x, y))
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ColumnKind;

    fn region() -> Column {
        Column::categorical("Region")
    }

    fn sales() -> Column {
        Column::numeric("Sales")
    }

    fn col(kind: ColumnKind) -> Column {
        Column::new("c", kind)
    }

    const KINDS: [ColumnKind; 2] = [ColumnKind::Numeric, ColumnKind::Categorical];

    #[test]
    fn test_pie_on_category_and_value() {
        assert_eq!(validate(ChartKind::Pie, &region(), &sales()), Validation::Compatible);
    }

    #[test]
    fn test_histogram_ignores_y() {
        assert!(validate(ChartKind::Histogram, &sales(), &region()).is_ok());
        assert!(!validate(ChartKind::Histogram, &region(), &sales()).is_ok());
    }

    #[test]
    fn test_line_needs_numeric_axes() {
        let result = validate(ChartKind::Line, &region(), &sales());
        assert_eq!(
            result,
            Validation::Incompatible {
                reason: "Both axes must be numeric for Line/Scatter."
            }
        );
    }

    #[test]
    fn test_bar_value_axis_is_x() {
        let numeric = col(ColumnKind::Numeric);
        let categorical = col(ColumnKind::Categorical);

        assert!(validate(ChartKind::Bar, &numeric, &categorical).is_ok());
        assert_eq!(
            validate(ChartKind::Bar, &categorical, &numeric).reason(),
            Some("X must be numeric; Y may be categorical or numeric, for Bar.")
        );
    }

    #[test]
    fn test_column_value_axis_is_y() {
        let numeric = col(ColumnKind::Numeric);
        let categorical = col(ColumnKind::Categorical);

        assert!(validate(ChartKind::Column, &categorical, &numeric).is_ok());
        assert!(validate(ChartKind::Column, &numeric, &numeric).is_ok());
        assert_eq!(
            validate(ChartKind::Column, &numeric, &categorical).reason(),
            Some("Y must be numeric; X may be categorical or numeric, for Column.")
        );
    }

    #[test]
    fn test_predicates_over_all_pairs() {
        for xk in KINDS {
            for yk in KINDS {
                let (x, y) = (col(xk), col(yk));
                let cat_num = xk == ColumnKind::Categorical && yk == ColumnKind::Numeric;
                let both_num = xk == ColumnKind::Numeric && yk == ColumnKind::Numeric;

                assert_eq!(validate(ChartKind::Pie, &x, &y).is_ok(), cat_num);
                assert_eq!(validate(ChartKind::Donut, &x, &y).is_ok(), cat_num);
                assert_eq!(validate(ChartKind::Line, &x, &y).is_ok(), both_num);
                assert_eq!(validate(ChartKind::Scatter, &x, &y).is_ok(), both_num);
                assert_eq!(
                    validate(ChartKind::Histogram, &x, &y).is_ok(),
                    xk == ColumnKind::Numeric
                );
            }
        }
    }

    #[test]
    fn test_same_column_on_both_axes() {
        let s = sales();
        assert!(validate(ChartKind::Scatter, &s, &s).is_ok());
    }

    #[test]
    fn test_validate_is_repeatable() {
        let first = validate(ChartKind::Donut, &sales(), &region());
        let second = validate(ChartKind::Donut, &sales(), &region());
        assert_eq!(first, second);
        assert_eq!(
            first.reason(),
            Some("X must be categorical and Y numeric for Pie/Donut.")
        );
    }

    #[test]
    fn test_validate_label() {
        let result = validate_label("Pizza", &region(), &sales()).unwrap();
        assert!(result.is_ok());

        let err = validate_label("radar", &region(), &sales()).unwrap_err();
        assert!(matches!(err, ChartError::UnsupportedChartKind { .. }));
    }
}
