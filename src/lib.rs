pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::{CliConfig, OutputFormat};
pub use crate::config::{DisplayConfig, TomlConfig};

pub use crate::adapters::{FixedClock, JsonRenderer, RecordingRenderer, SystemClock, TerminalRenderer};
pub use crate::core::controller::{ControllerState, InteractionController, Outcome};
pub use crate::core::grid::layout;
pub use crate::core::summary::{format as format_summary, NumberFormat};
pub use crate::core::week_model::{compute_weeks, TOTAL_WEEKS};
pub use crate::domain::model::{
    Cell, CellState, GridSpec, Message, MessageKind, Notice, Row, SummaryFields, WeekModelResult,
};
pub use crate::domain::ports::{Clock, RenderTarget};
pub use crate::utils::error::{LifeWeeksError, Result};
