pub mod controller;
pub mod grid;
pub mod input;
pub mod summary;
pub mod week_model;

pub use crate::domain::model::{
    Cell, CellState, GridSpec, Message, MessageKind, Notice, Row, SummaryFields, WeekModelResult,
};
pub use crate::domain::ports::{Clock, RenderTarget};
pub use crate::utils::error::Result;
