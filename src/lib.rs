pub mod config;
pub mod error;
pub mod extract;
pub mod graph;
pub mod render;

pub use config::Config;
pub use error::{FingraphError, Result};
pub use graph::{graph_from_records, RelationGraph};
