//! Column typing vocabulary.

use serde::{Deserialize, Serialize};

/// Semantic kind of a column as far as chart compatibility is concerned.
///
/// This is a deliberate two-bucket model: dates, booleans and ordinals are
/// all Categorical.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

/// Storage type inferred for a column when the dataset is loaded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StorageType {
    Integer,
    Float,
    Boolean,
    Text,
}

impl StorageType {
    pub fn column_kind(&self) -> ColumnKind {
        match self {
            StorageType::Integer | StorageType::Float => ColumnKind::Numeric,
            StorageType::Boolean | StorageType::Text => ColumnKind::Categorical,
        }
    }
}

/// A named dataset column with its derived kind. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    pub kind: ColumnKind,
}

impl Column {
    pub fn new(name: impl Into<String>, kind: ColumnKind) -> Self {
        Self {
            name: name.into(),
            kind,
        }
    }

    pub fn numeric(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Numeric)
    }

    pub fn categorical(name: impl Into<String>) -> Self {
        Self::new(name, ColumnKind::Categorical)
    }
}

/// The pair of columns mapped to the X and Y roles. Both may be the same column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisSelection {
    pub x: Column,
    pub y: Column,
}

impl AxisSelection {
    pub fn new(x: Column, y: Column) -> Self {
        Self { x, y }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_type_buckets() {
        assert_eq!(StorageType::Integer.column_kind(), ColumnKind::Numeric);
        assert_eq!(StorageType::Float.column_kind(), ColumnKind::Numeric);
        assert_eq!(StorageType::Boolean.column_kind(), ColumnKind::Categorical);
        assert_eq!(StorageType::Text.column_kind(), ColumnKind::Categorical);
    }

    #[test]
    fn test_column_constructors() {
        assert_eq!(Column::numeric("Sales").kind, ColumnKind::Numeric);
        assert_eq!(Column::categorical("Region").kind, ColumnKind::Categorical);
    }
}
