use crate::domain::model::{GridSpec, Message, SummaryFields};
use crate::domain::ports::RenderTarget;
use crate::utils::error::Result;

/// Keeps the latest output of each kind in memory.
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    pub grid: Option<GridSpec>,
    pub summary: Option<SummaryFields>,
    pub message: Option<Message>,
    pub grid_renders: usize,
    pub refreshes: usize,
}

impl RecordingRenderer {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderTarget for RecordingRenderer {
    fn render_grid(&mut self, grid: &GridSpec) -> Result<()> {
        self.grid = Some(grid.clone());
        self.grid_renders += 1;
        Ok(())
    }

    fn render_summary(&mut self, summary: &SummaryFields) -> Result<()> {
        self.summary = Some(summary.clone());
        Ok(())
    }

    fn render_message(&mut self, message: Option<&Message>) -> Result<()> {
        self.message = message.cloned();
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.refreshes += 1;
        Ok(())
    }
}
