mod export;
mod grid;

pub use export::{DEFAULT_SVG_HEIGHT, ExportError};

pub use grid::{Cell, Direction, MazeError, MazeGrid, Walls};
