use crate::core::summary::NumberFormat;
use crate::utils::error::{LifeWeeksError, Result};
use crate::utils::validation::{
    validate_max_chars, validate_non_empty_string, validate_one_of, Validate,
};
use serde::{Deserialize, Serialize};
use std::path::Path;

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TomlConfig {
    pub display: DisplayConfig,
    pub logging: Option<LoggingConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub past_glyph: String,
    pub future_glyph: String,
    /// Blank line before every decade row.
    pub decade_spacing: bool,
    pub thousands_separator: String,
    pub show_legend: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            past_glyph: "■".to_string(),
            future_glyph: "□".to_string(),
            decade_spacing: true,
            thousands_separator: ",".to_string(),
            show_legend: true,
        }
    }
}

impl DisplayConfig {
    pub fn number_format(&self) -> NumberFormat {
        NumberFormat::new(self.thousands_separator.clone())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    pub level: Option<String>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(LifeWeeksError::Io)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| LifeWeeksError::Config {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PAST_GLYPH})
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| LifeWeeksError::Config {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn log_level(&self) -> Option<&str> {
        self.logging.as_ref().and_then(|l| l.level.as_deref())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("display.past_glyph", &self.display.past_glyph)?;
        validate_max_chars("display.past_glyph", &self.display.past_glyph, 1)?;
        validate_non_empty_string("display.future_glyph", &self.display.future_glyph)?;
        validate_max_chars("display.future_glyph", &self.display.future_glyph, 1)?;
        validate_max_chars(
            "display.thousands_separator",
            &self.display.thousands_separator,
            1,
        )?;

        if let Some(level) = self.log_level() {
            validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }
}
