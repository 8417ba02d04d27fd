//! Freehand and shape drawing on a software raster surface, with linear
//! snapshot-based undo/redo.

pub mod app;
pub mod color;
pub mod config;
pub mod draw;
pub mod error;
pub mod history;
pub mod keymap;
pub mod logging;
pub mod raster;
pub mod session;
pub mod shapes;
pub mod surface;
pub mod tool;
pub mod types;

pub use error::Error;
pub use history::{History, HistoryState};
pub use session::{Sketchpad, StrokeSession};
pub use surface::{Canvas, RasterSurface};
pub use tool::{ToolKind, ToolSelection};
pub use types::{Point, Snapshot};
