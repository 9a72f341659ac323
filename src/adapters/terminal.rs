use crate::config::toml_config::DisplayConfig;
use crate::domain::model::{GridSpec, Message, SummaryFields};
use crate::domain::ports::RenderTarget;
use crate::utils::error::Result;
use std::io::Write;

/// Draws the grid as text, one row per year.
pub struct TerminalRenderer<W: Write> {
    writer: W,
    display: DisplayConfig,
}

impl<W: Write> TerminalRenderer<W> {
    pub fn new(writer: W, display: DisplayConfig) -> Self {
        Self { writer, display }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn row_label(index: u32, decade: bool) -> String {
        if index == 0 || decade {
            format!("{:>3}", index)
        } else {
            "   ".to_string()
        }
    }
}

impl<W: Write> RenderTarget for TerminalRenderer<W> {
    fn render_grid(&mut self, grid: &GridSpec) -> Result<()> {
        let past = self.display.past_glyph.as_str();
        let future = self.display.future_glyph.as_str();

        for row in &grid.rows {
            if row.decade && self.display.decade_spacing {
                writeln!(self.writer)?;
            }
            let cells: String = row
                .cells
                .iter()
                .map(|cell| if cell.is_past() { past } else { future })
                .collect();
            writeln!(
                self.writer,
                "{} {}",
                Self::row_label(row.index, row.decade),
                cells
            )?;
        }

        if self.display.show_legend {
            writeln!(self.writer)?;
            writeln!(self.writer, "{} lived   {} remaining", past, future)?;
        }
        Ok(())
    }

    fn render_summary(&mut self, summary: &SummaryFields) -> Result<()> {
        writeln!(
            self.writer,
            "Age: {} years | Weeks lived: {} | Weeks remaining: {}",
            summary.age_text, summary.lived_text, summary.remaining_text
        )?;
        Ok(())
    }

    fn render_message(&mut self, message: Option<&Message>) -> Result<()> {
        if let Some(message) = message {
            let marker = if message.is_error() { "❌" } else { "💡" };
            writeln!(self.writer, "{} {}", marker, message.text)?;
        }
        Ok(())
    }

    fn refresh(&mut self) -> Result<()> {
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::grid::layout;

    fn ascii_display() -> DisplayConfig {
        DisplayConfig {
            past_glyph: "#".to_string(),
            future_glyph: ".".to_string(),
            decade_spacing: true,
            thousands_separator: ",".to_string(),
            show_legend: false,
        }
    }

    fn render(grid: &GridSpec, display: DisplayConfig) -> String {
        let mut renderer = TerminalRenderer::new(Vec::new(), display);
        renderer.render_grid(grid).unwrap();
        String::from_utf8(renderer.into_inner()).unwrap()
    }

    #[test]
    fn test_rows_and_glyphs() {
        let output = render(&layout(104, 53), ascii_display());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], format!("  0 {}", "#".repeat(52)));
        assert_eq!(lines[1], format!("    #{}", ".".repeat(51)));
    }

    #[test]
    fn test_decade_spacing_and_labels() {
        let output = render(&layout(52 * 11, 0), ascii_display());
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 12);
        assert_eq!(lines[10], "");
        assert!(lines[11].starts_with(" 10 "));

        let mut compact = ascii_display();
        compact.decade_spacing = false;
        assert_eq!(render(&layout(52 * 11, 0), compact).lines().count(), 11);
    }

    #[test]
    fn test_legend() {
        let mut display = ascii_display();
        display.show_legend = true;
        let output = render(&layout(52, 0), display);
        assert!(output.ends_with("# lived   . remaining\n"));
    }

    #[test]
    fn test_summary_and_messages() {
        let mut renderer = TerminalRenderer::new(Vec::new(), ascii_display());
        renderer
            .render_summary(&SummaryFields {
                age_text: "30.0".to_string(),
                lived_text: "1,565".to_string(),
                remaining_text: "3,115".to_string(),
            })
            .unwrap();
        renderer
            .render_message(Some(&Message::error("Please enter your date of birth.")))
            .unwrap();
        renderer.render_message(None).unwrap();

        let output = String::from_utf8(renderer.into_inner()).unwrap();
        assert_eq!(
            output,
            "Age: 30.0 years | Weeks lived: 1,565 | Weeks remaining: 3,115\n\
             ❌ Please enter your date of birth.\n"
        );
    }
}
