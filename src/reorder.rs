//! Drag-and-drop reordering of a shared list, served with htmx and Sortable.js.

pub mod api;
pub mod list;
pub mod render;
mod templates;

use thiserror::Error;

pub use api::{ApiError, AppState, create_router};
pub use list::{MovieList, ORDER_FIELD, SAMPLE_MOVIES, parse_indices};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReorderError {
    #[error("invalid index {0:?}")]
    InvalidIndex(String),
    #[error("index {index} out of range for {len} items")]
    OutOfRange { index: usize, len: usize },
    #[error("index {0} submitted more than once")]
    Duplicate(usize),
    #[error("expected {expected} indices, got {got}")]
    LengthMismatch { expected: usize, got: usize },
}
