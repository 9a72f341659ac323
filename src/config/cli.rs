use crate::core::input::parse_date;
use crate::utils::error::{LifeWeeksError, Result};
use crate::utils::validation::Validate;
use clap::{Parser, ValueEnum};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "life-weeks")]
#[command(about = "Your life in weeks, drawn as a grid")]
pub struct CliConfig {
    /// Date of birth, e.g. 1990-04-21
    #[arg(long)]
    pub dob: Option<String>,

    /// Freeze the current time (date or RFC 3339 timestamp)
    #[arg(long)]
    pub now: Option<String>,

    #[arg(long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Path to TOML display configuration
    #[arg(short, long)]
    pub config: Option<String>,

    /// Keep reading dates from stdin, one per line
    #[arg(short, long)]
    pub interactive: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Interactive when asked to, or when there is no date to submit.
    pub fn is_interactive(&self) -> bool {
        self.interactive || self.dob.is_none()
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(now) = &self.now {
            parse_date(now).map_err(|e| LifeWeeksError::InvalidConfigValue {
                field: "now".to_string(),
                value: now.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_one_shot() {
        let config =
            CliConfig::try_parse_from(["life-weeks", "--dob", "1990-04-21", "--format", "json"])
                .unwrap();
        assert_eq!(config.dob.as_deref(), Some("1990-04-21"));
        assert_eq!(config.format, OutputFormat::Json);
        assert!(!config.is_interactive());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_interactive_without_dob() {
        let config = CliConfig::try_parse_from(["life-weeks"]).unwrap();
        assert_eq!(config.format, OutputFormat::Text);
        assert!(config.is_interactive());
    }

    #[test]
    fn test_invalid_now_fails_validation() {
        let config = CliConfig::try_parse_from(["life-weeks", "--now", "someday"]).unwrap();
        match config.validate() {
            Err(LifeWeeksError::InvalidConfigValue { field, .. }) => assert_eq!(field, "now"),
            other => panic!("expected InvalidConfigValue, got {:?}", other),
        }
    }
}
