//! Chart-kind recommendation and compatibility engine.
//!
//! Provides:
//! - Dataset loading from CSV/TSV
//! - Numeric/categorical column inference
//! - The static chart compatibility table
//! - Validation of a chart kind against an axis selection
//! - Normalization of free-text suggestions
//! - Render plans and the per-selection view-model
//!
//! Every operation is a pure function of its inputs.

pub mod dataset;
pub mod inference;
pub mod normalizer;
pub mod registry;
pub mod render;
pub mod validator;
pub mod view;

pub use dataset::{Dataset, RawColumn};
pub use inference::{infer_columns, infer_storage, ColumnSet, TypedColumn};
pub use normalizer::normalize;
pub use registry::{compatible_kinds, requirement, Requirement};
pub use render::{plan, Decision, Orientation, RenderPlan};
pub use validator::{validate, validate_label, Validation};
pub use view::ChartView;
