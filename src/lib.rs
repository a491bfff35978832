#![warn(clippy::all, rust_2018_idioms)]

pub mod app;
pub mod canvas;
pub mod interaction;
pub mod palette;
pub mod shape;
pub mod snapshot;
pub mod tool;

pub use app::CanvasApp;
pub use canvas::Canvas;
pub use interaction::{Corner, Gesture, GestureStart};
pub use shape::{Shape, ShapeKind};
pub use snapshot::SnapshotError;
pub use tool::{InteractionContext, ToolMode};
