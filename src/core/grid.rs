use crate::core::week_model::WEEKS_PER_YEAR;
use crate::domain::model::{Cell, CellState, GridSpec, Row};

/// Rows between decade markers.
pub const DECADE_ROWS: u32 = 10;

pub fn is_decade_row(row_index: u32) -> bool {
    row_index > 0 && row_index % DECADE_ROWS == 0
}

/// Lays out `total_weeks` cells in rows of [`WEEKS_PER_YEAR`], marking the
/// first `weeks_lived` (clamped to `0..=total_weeks`) as past.
///
/// The last row is shorter when the total is not a whole number of years.
/// A non-negative `i32` total always fits the `u32` cell indices.
pub fn layout(total_weeks: i32, weeks_lived: i64) -> GridSpec {
    let safe_total = total_weeks.max(0).unsigned_abs();
    let safe_lived = weeks_lived.clamp(0, i64::from(safe_total)) as u32;

    let row_count = safe_total.div_ceil(WEEKS_PER_YEAR);
    let mut rows = Vec::with_capacity(row_count as usize);
    let mut week_index: u32 = 0;

    for row_index in 0..row_count {
        let mut cells = Vec::with_capacity(WEEKS_PER_YEAR as usize);
        for _ in 0..WEEKS_PER_YEAR {
            if week_index >= safe_total {
                break;
            }
            let state = if week_index < safe_lived {
                CellState::Past
            } else {
                CellState::Future
            };
            cells.push(Cell {
                index: week_index,
                state,
            });
            week_index += 1;
        }

        rows.push(Row {
            index: row_index,
            decade: is_decade_row(row_index),
            cells,
        });
    }

    tracing::debug!(
        "Laid out {} rows, {} cells, {} lived",
        rows.len(),
        week_index,
        safe_lived
    );

    GridSpec { rows }
}
