pub mod decimal;
pub mod json;
pub mod text;

use crate::error::GradeError;
use crate::types::outcome::{CompositeResult, ThresholdReport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

pub fn render_outcome(result: &CompositeResult, format: OutputFormat) -> Result<String, GradeError> {
    match format {
        OutputFormat::Text => Ok(text::outcome_to_text(result)),
        OutputFormat::Json => json::outcome_to_json(result).map_err(GradeError::Json),
    }
}

pub fn render_threshold(report: &ThresholdReport, format: OutputFormat) -> Result<String, GradeError> {
    match format {
        OutputFormat::Text => Ok(text::threshold_to_text(report)),
        OutputFormat::Json => json::threshold_to_json(report).map_err(GradeError::Json),
    }
}
