pub mod chart;
pub mod column;
pub mod error;
pub mod settings;

pub use chart::ChartKind;
pub use column::{AxisSelection, Column, ColumnKind, StorageType};
pub use error::ChartError;
pub use settings::AdvisorSettings;
