use crate::error::GradeError;
use serde::Deserialize;

pub const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, Default, Deserialize)]
pub struct KurulConfig {
    pub input: Option<InputConfig>,
    pub output: Option<OutputConfig>,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct InputConfig {
    /// Treat an entered 0 as "not taken yet" in threshold calculations.
    pub zero_is_pending: Option<bool>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl KurulConfig {
    pub fn zero_is_pending(&self) -> bool {
        self.input
            .as_ref()
            .and_then(|input| input.zero_is_pending)
            .unwrap_or(true)
    }

    pub fn output_format(&self) -> Option<&str> {
        self.output
            .as_ref()
            .and_then(|output| output.format.as_deref())
    }

    pub fn log_level(&self) -> &str {
        self.logging
            .as_ref()
            .and_then(|logging| logging.level.as_deref())
            .unwrap_or(DEFAULT_LOG_LEVEL)
    }

    pub fn validate(&self) -> Result<(), GradeError> {
        if let Some(format) = self.output_format() {
            if !matches!(format, "text" | "json") {
                return Err(GradeError::ConfigParse(format!(
                    "unsupported output.format: {format}"
                )));
            }
        }

        if self.log_level().trim().is_empty() {
            return Err(GradeError::ConfigParse(
                "logging.level must be a non-empty filter directive".to_string(),
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_config_uses_defaults() {
        let cfg: KurulConfig = toml::from_str("").expect("empty config should parse");
        assert!(cfg.zero_is_pending());
        assert_eq!(cfg.output_format(), None);
        assert_eq!(cfg.log_level(), DEFAULT_LOG_LEVEL);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn parses_all_sections() {
        let toml_str = r#"
[input]
zero_is_pending = false

[output]
format = "json"

[logging]
level = "kurul=debug"
"#;
        let cfg: KurulConfig = toml::from_str(toml_str).expect("config should parse");
        assert!(!cfg.zero_is_pending());
        assert_eq!(cfg.output_format(), Some("json"));
        assert_eq!(cfg.log_level(), "kurul=debug");
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn validate_rejects_unknown_output_format() {
        let toml_str = r#"
[output]
format = "html"
"#;
        let cfg: KurulConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("unsupported output.format"));
    }

    #[test]
    fn validate_rejects_blank_log_level() {
        let toml_str = r#"
[logging]
level = "  "
"#;
        let cfg: KurulConfig = toml::from_str(toml_str).expect("config should parse");
        let err = cfg.validate().expect_err("validation should fail");
        assert!(err.to_string().contains("logging.level"));
    }
}
