//! Column type inference.
//!
//! Every column lands in exactly one of two buckets. A column is Numeric iff
//! its inferred storage type is integer or floating point; booleans, dates and
//! free text are all Categorical. This is a known simplification.

use serde::Serialize;
use shared::{ChartError, Column, StorageType};

use crate::dataset::Dataset;

/// Cell texts treated as missing values. Matched exactly: a whitespace-only
/// cell or a padded marker such as `" NA"` is a present value.
const MISSING_MARKERS: &[&str] = &[
    "", "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN",
    "<NA>", "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn is_missing(cell: &str) -> bool {
    MISSING_MARKERS.contains(&cell)
}

/// Infer the storage type of a column from its raw cells.
///
/// A column with no present values is Float, matching how an all-missing
/// column loads.
pub fn infer_storage<S: AsRef<str>>(values: &[S]) -> StorageType {
    // Numbers tolerate surrounding spaces; a blank cell trims to "" and
    // fails every parse below, leaving the column Text.
    let present: Vec<&str> = values
        .iter()
        .map(|v| v.as_ref())
        .filter(|v| !is_missing(v))
        .map(str::trim)
        .collect();

    if present.iter().all(|v| v.parse::<i64>().is_ok()) {
        if present.is_empty() {
            return StorageType::Float;
        }
        return StorageType::Integer;
    }
    if present.iter().all(|v| v.parse::<f64>().is_ok()) {
        return StorageType::Float;
    }
    if present
        .iter()
        .all(|v| v.eq_ignore_ascii_case("true") || v.eq_ignore_ascii_case("false"))
    {
        return StorageType::Boolean;
    }
    StorageType::Text
}

/// An inferred column together with its storage type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TypedColumn {
    #[serde(flatten)]
    pub column: Column,
    pub storage: StorageType,
}

/// Columns of one dataset with their derived kinds, in dataset order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ColumnSet {
    columns: Vec<TypedColumn>,
}

impl ColumnSet {
    pub fn columns(&self) -> impl Iterator<Item = &Column> {
        self.columns.iter().map(|c| &c.column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Look up a column by exact name. Duplicate names resolve to the first.
    pub fn get(&self, name: &str) -> Result<&Column, ChartError> {
        self.columns
            .iter()
            .map(|c| &c.column)
            .find(|c| c.name == name)
            .ok_or_else(|| ChartError::ColumnNotFound {
                name: name.to_string(),
            })
    }
}

/// Classify every column of a dataset.
pub fn infer_columns(dataset: &Dataset) -> ColumnSet {
    let columns = dataset
        .columns()
        .iter()
        .map(|raw| {
            let storage = infer_storage(&raw.values);
            let kind = storage.column_kind();
            tracing::debug!(column = %raw.name, ?storage, ?kind, "column classified");
            TypedColumn {
                column: Column::new(raw.name.clone(), kind),
                storage,
            }
        })
        .collect();

    ColumnSet { columns }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::RawColumn;
    use shared::ColumnKind;

    fn raw(name: &str, values: &[&str]) -> RawColumn {
        RawColumn {
            name: name.to_string(),
            values: values.iter().map(|v| v.to_string()).collect(),
        }
    }

    #[test]
    fn test_infer_storage() {
        assert_eq!(infer_storage(&["1", "2", "-3"]), StorageType::Integer);
        assert_eq!(infer_storage(&["1", "2.5", "1e3"]), StorageType::Float);
        assert_eq!(infer_storage(&["True", "false"]), StorageType::Boolean);
        assert_eq!(infer_storage(&["North", "12"]), StorageType::Text);
        assert_eq!(infer_storage(&["2024-01-01"]), StorageType::Text);
    }

    #[test]
    fn test_missing_values_are_ignored() {
        assert_eq!(infer_storage(&["1", "", "NA", "3"]), StorageType::Integer);
        assert_eq!(infer_storage(&["", "NaN", "<NA>"]), StorageType::Float);
        assert_eq!(infer_storage::<&str>(&[]), StorageType::Float);
    }

    #[test]
    fn test_every_missing_marker_keeps_column_numeric() {
        for marker in MISSING_MARKERS {
            let storage = infer_storage(&["1", *marker, "3"]);
            assert_eq!(storage.column_kind(), ColumnKind::Numeric, "marker {marker:?}");
        }
    }

    #[test]
    fn test_lowercase_and_spreadsheet_markers() {
        assert_eq!(infer_storage(&["1", "n/a", "3"]), StorageType::Integer);
        assert_eq!(infer_storage(&["1.5", "#NA", "#N/A N/A"]), StorageType::Float);
        assert_eq!(infer_storage(&["2", "-NaN", "1.#QNAN", "-1.#IND"]), StorageType::Integer);
    }

    #[test]
    fn test_blank_cells_are_present_values() {
        assert_eq!(infer_storage(&["1", "  ", "3"]), StorageType::Text);
        assert_eq!(infer_storage(&["1", " NA", "3"]), StorageType::Text);
        assert_eq!(infer_storage(&[" 1", "2 "]), StorageType::Integer);
    }

    #[test]
    fn test_infer_columns_keeps_order_and_kinds() {
        let dataset = Dataset::from_columns(vec![
            raw("Region", &["North", "South"]),
            raw("Sales", &["10", "20.5"]),
            raw("Active", &["true", "false"]),
        ]);
        let set = infer_columns(&dataset);

        let names: Vec<&str> = set.columns().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Region", "Sales", "Active"]);
        assert_eq!(set.get("Region").unwrap().kind, ColumnKind::Categorical);
        assert_eq!(set.get("Sales").unwrap().kind, ColumnKind::Numeric);
        assert_eq!(set.get("Active").unwrap().kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_csv_column_with_na_spellings_is_numeric() {
        let data = "Qty,Note\n1,ok\nn/a,  \n3,ok\n";
        let set = infer_columns(&Dataset::from_reader(data.as_bytes(), b',').unwrap());
        assert_eq!(set.get("Qty").unwrap().kind, ColumnKind::Numeric);
        assert_eq!(set.get("Note").unwrap().kind, ColumnKind::Categorical);
    }

    #[test]
    fn test_inference_is_stable() {
        let dataset = Dataset::from_columns(vec![raw("Qty", &["1", "x"])]);
        assert_eq!(infer_columns(&dataset), infer_columns(&dataset));
    }

    #[test]
    fn test_unknown_column() {
        let set = infer_columns(&Dataset::from_columns(vec![raw("A", &["1"])]));
        let err = set.get("B").unwrap_err();
        assert!(matches!(err, ChartError::ColumnNotFound { name } if name == "B"));
    }
}
