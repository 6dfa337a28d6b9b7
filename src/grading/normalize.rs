use crate::error::{GradeError, Result};
use crate::types::scores::{Component, ComponentScores, ScoreEntry};
use std::collections::HashMap;
use tracing::debug;

pub const MIN_SCORE: f64 = 0.0;
pub const MAX_SCORE: f64 = 100.0;
/// Explicit marker for a component that has not been taken yet.
pub const PENDING_TOKEN: &str = "-";
pub const FINAL_FIELD: &str = "final";

/// Raw, unparsed score fields as they arrive from the command line.
#[derive(Debug, Clone, Default)]
pub struct RawScores {
    components: HashMap<Component, String>,
    pub final_exam: Option<String>,
}

impl RawScores {
    pub fn new() -> Self {
        Self::default()
    }

    #[cfg(test)]
    pub fn with(mut self, component: Component, raw: impl Into<String>) -> Self {
        self.set(component, Some(raw.into()));
        self
    }

    pub fn with_final(mut self, raw: impl Into<String>) -> Self {
        self.final_exam = Some(raw.into());
        self
    }

    pub fn set(&mut self, component: Component, raw: Option<String>) {
        match raw {
            Some(raw) => {
                self.components.insert(component, raw);
            }
            None => {
                self.components.remove(&component);
            }
        }
    }

    pub fn get(&self, component: Component) -> Option<&str> {
        self.components.get(&component).map(String::as_str)
    }
}

/// Parses a raw score and clamps it into [0, 100].
///
/// Returns `None` for empty input and for anything that is not a finite
/// number. A lone decimal comma is read as a decimal point.
pub fn normalize(raw: &str) -> Option<f64> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }

    let parsed = if !trimmed.contains('.') && trimmed.matches(',').count() == 1 {
        trimmed.replacen(',', ".", 1).parse::<f64>()
    } else {
        trimmed.parse::<f64>()
    };

    parsed
        .ok()
        .filter(|value| value.is_finite())
        .map(|value| value.clamp(MIN_SCORE, MAX_SCORE))
}

pub fn normalize_field(field: &str, raw: &str) -> Result<f64> {
    normalize(raw).ok_or_else(|| GradeError::InvalidScore {
        field: field.to_string(),
        raw: raw.to_string(),
    })
}

/// Validates a full score set for the year-end outcome. Every component and
/// the final exam must be present and numeric; the first failure rejects
/// the whole batch.
pub fn normalize_complete(raw: &RawScores) -> Result<(ComponentScores, f64)> {
    let mut scores = ComponentScores::new();
    for component in Component::ALL {
        let value = raw
            .get(component)
            .ok_or_else(|| GradeError::MissingScore(component.key().to_string()))?;
        scores.set(
            component,
            ScoreEntry::Value(normalize_field(component.key(), value)?),
        );
    }

    let final_raw = raw
        .final_exam
        .as_deref()
        .ok_or_else(|| GradeError::MissingScore(FINAL_FIELD.to_string()))?;
    let final_score = normalize_field(FINAL_FIELD, final_raw)?;

    Ok((scores, final_score))
}

/// Validates a partial score set for threshold queries. Omitted fields and
/// the pending token become `Pending`; with `zero_is_pending` an entered 0
/// is read as pending too.
pub fn normalize_partial(raw: &RawScores, zero_is_pending: bool) -> Result<ComponentScores> {
    let mut scores = ComponentScores::new();
    for component in Component::ALL {
        let entry = match raw.get(component) {
            None => ScoreEntry::Pending,
            Some(value) if value.trim() == PENDING_TOKEN => ScoreEntry::Pending,
            Some(value) => {
                let score = normalize_field(component.key(), value)?;
                if zero_is_pending && score == MIN_SCORE {
                    debug!(component = component.key(), "zero score read as pending");
                    ScoreEntry::Pending
                } else {
                    ScoreEntry::Value(score)
                }
            }
        };
        scores.set(component, entry);
    }
    Ok(scores)
}
