use thiserror::Error;

#[derive(Error, Debug)]
pub enum GradeError {
    #[error("invalid score for {field}: {raw:?} is not a number")]
    InvalidScore { field: String, raw: String },

    #[error("missing score: {0}")]
    MissingScore(String),

    #[error("config file not found: {0}")]
    ConfigNotFound(String),

    #[error("config parse error: {0}")]
    ConfigParse(String),

    #[error("telemetry error: {0}")]
    Telemetry(String),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("toml parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}

impl GradeError {
    /// Input errors ask for re-entry; everything else is a runtime failure.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            GradeError::InvalidScore { .. } | GradeError::MissingScore(_)
        )
    }
}

pub type Result<T> = std::result::Result<T, GradeError>;
