use chrono::{DateTime, Utc};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LifeWeeksError {
    #[error("No date of birth supplied")]
    EmptyInput,

    #[error("Could not parse '{input}' as a date")]
    InvalidDate { input: String },

    #[error("Date of birth {dob} is later than the current time {now}")]
    FutureDateOfBirth {
        dob: DateTime<Utc>,
        now: DateTime<Utc>,
    },

    #[error("Computed age of {years:.1} years is not plausible")]
    ImplausibleAge { years: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Configuration,
    Output,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl LifeWeeksError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::EmptyInput
            | Self::InvalidDate { .. }
            | Self::FutureDateOfBirth { .. }
            | Self::ImplausibleAge { .. } => ErrorCategory::Input,
            Self::Config { .. } | Self::InvalidConfigValue { .. } => ErrorCategory::Configuration,
            Self::Io(_) | Self::Serialization(_) => ErrorCategory::Output,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Input => ErrorSeverity::Medium,
            ErrorCategory::Configuration => ErrorSeverity::High,
            ErrorCategory::Output => ErrorSeverity::Critical,
        }
    }

    /// Whether the submission can simply be retried with different input.
    pub fn is_user_correctable(&self) -> bool {
        self.category() == ErrorCategory::Input
    }

    /// Message shown in the feedback display.
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::EmptyInput => "Please enter your date of birth.".to_string(),
            Self::InvalidDate { input } => {
                format!("'{}' is not a valid date.", input)
            }
            Self::FutureDateOfBirth { .. } => {
                "Your date of birth cannot be in the future.".to_string()
            }
            Self::ImplausibleAge { years } => format!(
                "An age of {:.1} years seems unlikely. Please check the date.",
                years
            ),
            Self::InvalidConfigValue { field, reason, .. } => {
                format!("Configuration value for '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::EmptyInput | Self::InvalidDate { .. } => {
                "Enter a date such as 1990-04-21 (YYYY-MM-DD)"
            }
            Self::FutureDateOfBirth { .. } => "Pick a date on or before today",
            Self::ImplausibleAge { .. } => "Double-check the year of birth",
            Self::Config { .. } | Self::InvalidConfigValue { .. } => {
                "Fix the configuration file and try again"
            }
            Self::Io(_) => "Check that the output stream is writable",
            Self::Serialization(_) => "Report this as a bug",
        }
    }
}

pub type Result<T> = std::result::Result<T, LifeWeeksError>;
