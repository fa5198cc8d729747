//! JSON report printed for each run.

use std::path::Path;

use anyhow::Result;
use chart_engine::{infer_columns, ChartView, ColumnSet, Dataset};
use chrono::{DateTime, Utc};
use providers::ChartAdvisor;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Report {
    pub file: String,
    pub generated_at: DateTime<Utc>,
    pub rows: usize,
    pub columns: ColumnSet,
    pub suggestion_raw: String,
    #[serde(flatten)]
    pub view: ChartView,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub analysis_error: Option<String>,
}

/// What the user asked for in one run.
pub struct Request<'a> {
    pub file: &'a Path,
    pub x: &'a str,
    pub y: &'a str,
    pub kind: Option<&'a str>,
    pub explain: bool,
}

pub async fn build(request: Request<'_>, advisor: &dyn ChartAdvisor) -> Result<Report> {
    let dataset = Dataset::from_path(request.file)?;
    let columns = infer_columns(&dataset);

    // Fail on unknown columns before spending an advisor call
    columns.get(request.x)?;
    columns.get(request.y)?;

    let suggestion_raw = advisor.suggest(request.x, request.y).await;
    let view = ChartView::build(
        &columns,
        request.x,
        request.y,
        &suggestion_raw,
        request.kind,
    )?;

    let (analysis, analysis_error) = if request.explain && view.decision.plan().is_some() {
        match advisor.explain(request.x, request.y).await {
            Ok(text) => (Some(text), None),
            Err(e) => {
                tracing::warn!(error = %e, "analysis unavailable");
                (None, Some(e.to_string()))
            }
        }
    } else {
        (None, None)
    };

    Ok(Report {
        file: request.file.display().to_string(),
        generated_at: Utc::now(),
        rows: dataset.row_count(),
        columns,
        suggestion_raw,
        view,
        analysis,
        analysis_error,
    })
}
