// Adapters layer: concrete clocks and render targets behind the domain ports.

pub mod clock;
pub mod json;
pub mod recording;
pub mod terminal;

pub use clock::{FixedClock, SystemClock};
pub use json::JsonRenderer;
pub use recording::RecordingRenderer;
pub use terminal::TerminalRenderer;
