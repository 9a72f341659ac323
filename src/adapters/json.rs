use crate::domain::model::{GridSpec, Message, SummaryFields};
use crate::domain::ports::RenderTarget;
use crate::utils::error::Result;
use serde::Serialize;
use std::io::Write;

#[derive(Debug, Default, Serialize)]
struct Frame {
    #[serde(skip_serializing_if = "Option::is_none")]
    grid: Option<GridSpec>,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<SummaryFields>,
    #[serde(skip_serializing_if = "Option::is_none")]
    message: Option<Message>,
}

/// Writes one JSON document per line for each submission.
///
/// Rendered submissions are emitted on refresh; rejected ones as soon as
/// their error message arrives.
pub struct JsonRenderer<W: Write> {
    writer: W,
    pending: Frame,
}

impl<W: Write> JsonRenderer<W> {
    pub fn new(writer: W) -> Self {
        Self {
            writer,
            pending: Frame::default(),
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn emit(&mut self) -> Result<()> {
        let frame = std::mem::take(&mut self.pending);
        serde_json::to_writer(&mut self.writer, &frame)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

impl<W: Write> RenderTarget for JsonRenderer<W> {
    fn render_grid(&mut self, grid: &GridSpec) -> Result<()> {
        self.pending.grid = Some(grid.clone());
        Ok(())
    }

    fn render_summary(&mut self, summary: &SummaryFields) -> Result<()> {
        self.pending.summary = Some(summary.clone());
        Ok(())
    }

    fn render_message(&mut self, message: Option<&Message>) -> Result<()> {
        self.pending.message = message.cloned();
        if message.is_some_and(Message::is_error) {
            self.emit()?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        self.emit()
    }
}
