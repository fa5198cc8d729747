//! Tabular dataset loaded from CSV/TSV.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use shared::ChartError;

/// A named column with its raw cell text, in row order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawColumn {
    pub name: String,
    pub values: Vec<String>,
}

/// Ordered collection of raw columns. A newly loaded file replaces the
/// previous dataset wholesale; there is no in-place update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    columns: Vec<RawColumn>,
    row_count: usize,
}

impl Dataset {
    pub fn from_columns(columns: Vec<RawColumn>) -> Self {
        let row_count = columns.iter().map(|c| c.values.len()).max().unwrap_or(0);
        Self { columns, row_count }
    }

    pub fn from_path(path: &Path) -> Result<Self, ChartError> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| e.to_lowercase());

        let delimiter = match ext.as_deref() {
            Some("tsv") => b'\t',
            Some("xls" | "xlsx" | "xlsm") => {
                return Err(ChartError::unreadable(format!(
                    "spreadsheet files are not supported, export {} as CSV",
                    path.display()
                )));
            }
            _ => b',',
        };

        let file = File::open(path)
            .map_err(|e| ChartError::unreadable(format!("{}: {}", path.display(), e)))?;
        Self::from_reader(BufReader::new(file), delimiter)
    }

    pub fn from_reader<R: Read>(reader: R, delimiter: u8) -> Result<Self, ChartError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .delimiter(delimiter)
            .flexible(true)
            .from_reader(reader);

        let headers: Vec<String> = csv_reader
            .headers()
            .map_err(ChartError::unreadable)?
            .iter()
            .map(|s| s.trim().to_string())
            .collect();

        if headers.is_empty() || headers.iter().all(|h| h.is_empty()) {
            return Err(ChartError::EmptyDataset);
        }

        let mut columns: Vec<RawColumn> = headers
            .into_iter()
            .map(|name| RawColumn {
                name,
                values: Vec::new(),
            })
            .collect();

        let mut row_count = 0;
        for result in csv_reader.records() {
            let record = result.map_err(ChartError::unreadable)?;
            // Short rows pad with empty cells, extra cells are dropped
            for (i, column) in columns.iter_mut().enumerate() {
                column
                    .values
                    .push(record.get(i).unwrap_or("").to_string());
            }
            row_count += 1;
        }

        tracing::debug!(
            columns = columns.len(),
            rows = row_count,
            "dataset loaded"
        );

        Ok(Self { columns, row_count })
    }

    pub fn columns(&self) -> &[RawColumn] {
        &self.columns
    }

    pub fn column(&self, name: &str) -> Option<&RawColumn> {
        self.columns.iter().find(|c| c.name == name)
    }

    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}
