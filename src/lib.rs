//! Small techniques from a "Today I Learned" notebook: tag-overlap keyword
//! ranking over a binary term matrix, and an htmx drag-and-drop reorder demo.

pub mod config;
pub mod keywords;
pub mod reorder;
pub mod utils;
