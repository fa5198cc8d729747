use crate::chart::ChartKind;

/// Errors raised by the chart decision core.
///
/// An incompatible axis selection is not an error; see `Validation` in the
/// engine crate.
#[derive(Debug, thiserror::Error)]
pub enum ChartError {
    #[error("Unsupported chart kind: {label}{}", hint(.did_you_mean))]
    UnsupportedChartKind {
        label: String,
        did_you_mean: Option<ChartKind>,
    },

    #[error("Unreadable dataset: {reason}")]
    UnreadableDataset { reason: String },

    #[error("Column not found: {name}")]
    ColumnNotFound { name: String },

    #[error("Dataset has no columns")]
    EmptyDataset,
}

fn hint(did_you_mean: &Option<ChartKind>) -> String {
    match did_you_mean {
        Some(kind) => format!(" (did you mean {}?)", kind.label()),
        None => String::new(),
    }
}

impl ChartError {
    pub fn unreadable(reason: impl ToString) -> Self {
        ChartError::UnreadableDataset {
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unsupported_kind_message() {
        let err = ChartError::UnsupportedChartKind {
            label: "pizzza".into(),
            did_you_mean: Some(ChartKind::Pie),
        };
        assert_eq!(
            err.to_string(),
            "Unsupported chart kind: pizzza (did you mean pizza?)"
        );

        let err = ChartError::UnsupportedChartKind {
            label: "radar".into(),
            did_you_mean: None,
        };
        assert_eq!(err.to_string(), "Unsupported chart kind: radar");
    }
}
