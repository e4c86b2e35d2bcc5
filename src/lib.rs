pub mod config;
pub mod constants;
pub mod error;
pub mod frame;
pub mod logging;
pub mod pipeline;

pub use config::CleanerConfig;
pub use error::{CleanerError, Result};
pub use frame::{Cell, ColumnKind, Frame};
pub use pipeline::{Pipeline, PipelineResult};
