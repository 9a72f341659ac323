use crate::core::grid;
use crate::core::input::parse_date;
use crate::core::summary::{self, NumberFormat};
use crate::core::week_model::{compute_weeks, LIFESPAN_YEARS};
use crate::domain::model::{Message, Notice, WeekModelResult};
use crate::domain::ports::{Clock, RenderTarget};
use crate::utils::error::{LifeWeeksError, Result};

/// Ages above this are rejected as a likely typo.
pub const MAX_REASONABLE_AGE_YEARS: f64 = 110.0;
pub const NEWBORN_THRESHOLD_YEARS: f64 = 0.1;

/// `Idle → Validating → (Error | Computed) → Idle`, once per submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Validating,
    /// Submission rejected; its message is on display.
    Error,
    /// Submission rendered.
    Computed,
}

/// Result of one submission.
#[derive(Debug)]
pub enum Outcome {
    Rendered {
        result: WeekModelResult,
        notice: Option<Notice>,
    },
    Rejected(LifeWeeksError),
}

impl Outcome {
    pub fn is_rendered(&self) -> bool {
        matches!(self, Outcome::Rendered { .. })
    }
}

/// Classifies an age into a blocking error, an advisory notice or nothing.
pub fn assess_age(years_lived: f64) -> Result<Option<Notice>> {
    if years_lived > MAX_REASONABLE_AGE_YEARS {
        Err(LifeWeeksError::ImplausibleAge { years: years_lived })
    } else if years_lived > f64::from(LIFESPAN_YEARS) {
        Ok(Some(Notice::ExceededLifespan))
    } else if years_lived < NEWBORN_THRESHOLD_YEARS {
        Ok(Some(Notice::Newborn))
    } else {
        Ok(None)
    }
}

/// Sequences validation, the week model, layout and formatting for each
/// submitted date, and writes the results to its render target.
pub struct InteractionController<C: Clock, R: RenderTarget> {
    clock: C,
    target: R,
    numbers: NumberFormat,
    state: ControllerState,
    last_branch: Option<ControllerState>,
}

impl<C: Clock, R: RenderTarget> InteractionController<C, R> {
    pub fn new(clock: C, target: R) -> Self {
        Self {
            clock,
            target,
            numbers: NumberFormat::default(),
            state: ControllerState::Idle,
            last_branch: None,
        }
    }

    pub fn with_number_format(mut self, numbers: NumberFormat) -> Self {
        self.numbers = numbers;
        self
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    /// `Error` or `Computed` for the most recent submission, `None` before the first.
    pub fn last_branch(&self) -> Option<ControllerState> {
        self.last_branch
    }

    fn transition(&mut self, next: ControllerState) {
        tracing::debug!("Controller state {:?} -> {:?}", self.state, next);
        self.state = next;
    }

    pub fn target(&self) -> &R {
        &self.target
    }

    pub fn into_target(self) -> R {
        self.target
    }

    /// Handles one submitted date string.
    ///
    /// Rejected input is reported through the render target and returned as
    /// [`Outcome::Rejected`]; `Err` is reserved for render target failures.
    pub fn submit(&mut self, raw: &str) -> Result<Outcome> {
        self.transition(ControllerState::Validating);
        tracing::debug!("Validating submission: {:?}", raw);

        let applied = match self.evaluate(raw) {
            Ok((result, notice)) => self.apply(&result, notice).map(|_| Outcome::Rendered {
                result,
                notice,
            }),
            Err(error) => self.reject(error),
        };

        let branch = match &applied {
            Ok(Outcome::Rendered { .. }) => ControllerState::Computed,
            _ => ControllerState::Error,
        };
        self.transition(branch);
        self.last_branch = Some(branch);
        self.transition(ControllerState::Idle);
        applied
    }

    fn evaluate(&self, raw: &str) -> Result<(WeekModelResult, Option<Notice>)> {
        let dob = parse_date(raw)?;
        let now = self.clock.now();
        let result = compute_weeks(dob, now)?;
        tracing::debug!(
            "Computed {} weeks lived ({:.3} years) of {}",
            result.weeks_lived,
            result.years_lived,
            result.total_weeks
        );
        let notice = assess_age(result.years_lived)?;
        Ok((result, notice))
    }

    fn apply(&mut self, result: &WeekModelResult, notice: Option<Notice>) -> Result<()> {
        let grid = grid::layout(result.total_weeks, result.weeks_lived);
        let fields = summary::format_with(result, &self.numbers);

        self.target.render_grid(&grid)?;
        self.target.render_summary(&fields)?;

        match notice {
            Some(notice) => {
                tracing::info!("Notice: {:?}", notice);
                self.target.render_message(Some(&Message::notice(notice)))?;
            }
            None => self.target.render_message(None)?,
        }

        self.target.refresh()?;
        tracing::info!(
            "Rendered {} weeks lived, {} remaining",
            fields.lived_text,
            fields.remaining_text
        );
        Ok(())
    }

    fn reject(&mut self, error: LifeWeeksError) -> Result<Outcome> {
        tracing::warn!(
            "Submission rejected: {} (Category: {:?}, Severity: {:?})",
            error,
            error.category(),
            error.severity()
        );
        let message = Message::error(error.user_friendly_message());
        self.target.render_message(Some(&message))?;
        Ok(Outcome::Rejected(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assess_age_thresholds() {
        assert_eq!(assess_age(0.0).unwrap(), Some(Notice::Newborn));
        assert_eq!(assess_age(0.099).unwrap(), Some(Notice::Newborn));
        assert_eq!(assess_age(0.1).unwrap(), None);
        assert_eq!(assess_age(45.0).unwrap(), None);
        assert_eq!(assess_age(90.0).unwrap(), None);
        assert_eq!(assess_age(90.01).unwrap(), Some(Notice::ExceededLifespan));
        assert_eq!(assess_age(110.0).unwrap(), Some(Notice::ExceededLifespan));
        assert!(matches!(
            assess_age(110.01),
            Err(LifeWeeksError::ImplausibleAge { .. })
        ));
    }
}
