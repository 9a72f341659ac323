use crate::domain::model::WeekModelResult;
use crate::utils::error::{LifeWeeksError, Result};
use chrono::{DateTime, Utc};

/// Modeled lifespan used to size the grid.
pub const LIFESPAN_YEARS: u32 = 90;
pub const WEEKS_PER_YEAR: u32 = 52;
pub const TOTAL_WEEKS: i32 = (LIFESPAN_YEARS * WEEKS_PER_YEAR) as i32;

pub const MS_PER_WEEK: i64 = 7 * 24 * 60 * 60 * 1000;
/// 365.25 days, averaging in leap years.
pub const MS_PER_YEAR: f64 = 365.25 * 24.0 * 60.0 * 60.0 * 1000.0;

/// Computes elapsed weeks and years between `dob` and `now`.
///
/// `weeks_lived` is floored and may exceed [`TOTAL_WEEKS`] for anyone past the
/// modeled lifespan; `years_lived` is continuous.
pub fn compute_weeks(dob: DateTime<Utc>, now: DateTime<Utc>) -> Result<WeekModelResult> {
    if dob > now {
        return Err(LifeWeeksError::FutureDateOfBirth { dob, now });
    }

    let elapsed_ms = now.signed_duration_since(dob).num_milliseconds();

    Ok(WeekModelResult {
        total_weeks: TOTAL_WEEKS,
        weeks_lived: elapsed_ms.div_euclid(MS_PER_WEEK),
        years_lived: elapsed_ms as f64 / MS_PER_YEAR,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration, TimeZone};

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_total_weeks_is_constant() {
        assert_eq!(TOTAL_WEEKS, 4680);
        let result = compute_weeks(now() - Duration::days(3), now()).unwrap();
        assert_eq!(result.total_weeks, 4680);
    }

    #[test]
    fn test_weeks_lived_floors() {
        let result = compute_weeks(now() - Duration::days(13), now()).unwrap();
        assert_eq!(result.weeks_lived, 1);

        let result = compute_weeks(now() - Duration::days(14), now()).unwrap();
        assert_eq!(result.weeks_lived, 2);

        let almost = now() - Duration::days(7) + Duration::milliseconds(1);
        assert_eq!(compute_weeks(almost, now()).unwrap().weeks_lived, 0);
    }

    #[test]
    fn test_same_instant_is_zero() {
        let result = compute_weeks(now(), now()).unwrap();
        assert_eq!(result.weeks_lived, 0);
        assert_eq!(result.years_lived, 0.0);
    }

    #[test]
    fn test_thirty_calendar_years() {
        let dob = Utc.with_ymd_and_hms(1994, 6, 15, 12, 0, 0).unwrap();
        let result = compute_weeks(dob, now()).unwrap();
        assert!((result.years_lived - 30.0).abs() < 0.05);
        assert_eq!(result.weeks_lived, 1565);
    }

    #[test]
    fn test_weeks_may_exceed_total() {
        let result = compute_weeks(now() - Duration::days(365 * 95), now()).unwrap();
        assert!(result.weeks_lived > i64::from(TOTAL_WEEKS));
    }

    #[test]
    fn test_future_date_fails() {
        let dob = now() + Duration::days(1);
        match compute_weeks(dob, now()) {
            Err(LifeWeeksError::FutureDateOfBirth { dob: d, now: n }) => {
                assert_eq!(d, dob);
                assert_eq!(n, now());
            }
            other => panic!("expected FutureDateOfBirth, got {:?}", other),
        }
    }
}
