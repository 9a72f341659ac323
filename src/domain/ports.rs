use crate::domain::model::{GridSpec, Message, SummaryFields};
use crate::utils::error::Result;
use chrono::{DateTime, Utc};

/// Source of the current time.
pub trait Clock {
    fn now(&self) -> DateTime<Utc>;
}

/// Presentation sink the controller writes its outputs to.
pub trait RenderTarget {
    fn render_grid(&mut self, grid: &GridSpec) -> Result<()>;
    fn render_summary(&mut self, summary: &SummaryFields) -> Result<()>;
    /// `None` clears the feedback display.
    fn render_message(&mut self, message: Option<&Message>) -> Result<()>;
    /// Cue that a full update has been applied.
    fn refresh(&mut self) -> Result<()>;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now(&self) -> DateTime<Utc> {
        (**self).now()
    }
}

impl<R: RenderTarget + ?Sized> RenderTarget for &mut R {
    fn render_grid(&mut self, grid: &GridSpec) -> Result<()> {
        (**self).render_grid(grid)
    }

    fn render_summary(&mut self, summary: &SummaryFields) -> Result<()> {
        (**self).render_summary(summary)
    }

    fn render_message(&mut self, message: Option<&Message>) -> Result<()> {
        (**self).render_message(message)
    }

    fn refresh(&mut self) -> Result<()> {
        (**self).refresh()
    }
}
