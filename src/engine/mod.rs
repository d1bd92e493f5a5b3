#[allow(clippy::module_inception)]
mod engine;
pub mod projection;
pub mod types;

pub use engine::{Engine, Frame};
pub use projection::{Shading, StripColumn, column_rect, scale_colour};
pub use types::{Screen, Viewport};
