use crate::domain::model::{SummaryFields, WeekModelResult};

/// Thousands grouping used for week counts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NumberFormat {
    pub thousands_separator: String,
}

impl Default for NumberFormat {
    fn default() -> Self {
        Self {
            thousands_separator: ",".to_string(),
        }
    }
}

impl NumberFormat {
    pub fn new(thousands_separator: impl Into<String>) -> Self {
        Self {
            thousands_separator: thousands_separator.into(),
        }
    }

    pub fn group(&self, value: i64) -> String {
        let digits = value.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

        for (i, digit) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push_str(&self.thousands_separator);
            }
            grouped.push(digit);
        }

        if value < 0 {
            grouped.insert(0, '-');
        }
        grouped
    }
}

pub fn format(result: &WeekModelResult) -> SummaryFields {
    format_with(result, &NumberFormat::default())
}

/// Rounds to one decimal with ties away from zero; `{:.1}` alone rounds
/// ties to even.
fn round_tenths(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Remaining weeks use the unclamped `weeks_lived`, floored at zero.
pub fn format_with(result: &WeekModelResult, numbers: &NumberFormat) -> SummaryFields {
    let remaining = (i64::from(result.total_weeks) - result.weeks_lived).max(0);

    SummaryFields {
        age_text: format!("{:.1}", round_tenths(result.years_lived)),
        lived_text: numbers.group(result.weeks_lived),
        remaining_text: numbers.group(remaining),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(weeks_lived: i64, years_lived: f64) -> WeekModelResult {
        WeekModelResult {
            total_weeks: 4680,
            weeks_lived,
            years_lived,
        }
    }

    #[test]
    fn test_grouping() {
        let numbers = NumberFormat::default();
        assert_eq!(numbers.group(0), "0");
        assert_eq!(numbers.group(999), "999");
        assert_eq!(numbers.group(1000), "1,000");
        assert_eq!(numbers.group(4680), "4,680");
        assert_eq!(numbers.group(1234567), "1,234,567");
        assert_eq!(numbers.group(-12345), "-12,345");
    }

    #[test]
    fn test_custom_separator() {
        assert_eq!(NumberFormat::new(".").group(3115), "3.115");
        assert_eq!(NumberFormat::new("").group(3115), "3115");
        assert_eq!(NumberFormat::new("\u{a0}").group(1565), "1\u{a0}565");
    }

    #[test]
    fn test_format_summary() {
        let summary = format(&result(1565, 30.0014));
        assert_eq!(summary.age_text, "30.0");
        assert_eq!(summary.lived_text, "1,565");
        assert_eq!(summary.remaining_text, "3,115");
    }

    #[test]
    fn test_remaining_floors_at_zero() {
        let summary = format(&result(4957, 95.0));
        assert_eq!(summary.lived_text, "4,957");
        assert_eq!(summary.remaining_text, "0");
    }

    #[test]
    fn test_age_rounds_to_one_decimal() {
        assert_eq!(format(&result(0, 0.0027)).age_text, "0.0");
        assert_eq!(format(&result(2, 0.06)).age_text, "0.1");
        assert_eq!(format(&result(2347, 44.987)).age_text, "45.0");
    }

    #[test]
    fn test_age_ties_round_up() {
        assert_eq!(format(&result(13, 0.25)).age_text, "0.3");
        assert_eq!(format(&result(39, 0.75)).age_text, "0.8");
        assert_eq!(format(&result(117, 2.25)).age_text, "2.3");
        assert_eq!(format(&result(2347, 45.0)).age_text, "45.0");
    }
}
