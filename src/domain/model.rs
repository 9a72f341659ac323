use serde::{Deserialize, Serialize};

/// Output of the week model for one date of birth.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeekModelResult {
    pub total_weeks: i32,
    /// Whole weeks elapsed since birth; may exceed `total_weeks`.
    pub weeks_lived: i64,
    pub years_lived: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CellState {
    Past,
    Future,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cell {
    /// Global week index in row-major order.
    pub index: u32,
    pub state: CellState,
}

impl Cell {
    pub fn is_past(&self) -> bool {
        self.state == CellState::Past
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Row {
    pub index: u32,
    pub decade: bool,
    pub cells: Vec<Cell>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    pub rows: Vec<Row>,
}

impl GridSpec {
    pub fn cell_count(&self) -> usize {
        self.rows.iter().map(|row| row.cells.len()).sum()
    }

    pub fn lived_count(&self) -> usize {
        self.cells().filter(|cell| cell.is_past()).count()
    }

    pub fn cells(&self) -> impl Iterator<Item = &Cell> {
        self.rows.iter().flat_map(|row| row.cells.iter())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SummaryFields {
    pub age_text: String,
    pub lived_text: String,
    pub remaining_text: String,
}

/// Advisory notices; rendering still happens when one is raised.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Notice {
    Newborn,
    ExceededLifespan,
}

impl Notice {
    pub fn text(&self) -> &'static str {
        match self {
            Notice::Newborn => "Welcome to the world! Your first weeks are just beginning.",
            Notice::ExceededLifespan => {
                "You have exceeded the modeled lifespan; remaining weeks are shown as zero."
            }
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Error,
    Notice,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Message {
    pub text: String,
    pub kind: MessageKind,
}

impl Message {
    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            kind: MessageKind::Error,
        }
    }

    pub fn notice(notice: Notice) -> Self {
        Self {
            text: notice.text().to_string(),
            kind: MessageKind::Notice,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == MessageKind::Error
    }
}
