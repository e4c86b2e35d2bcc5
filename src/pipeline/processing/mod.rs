// Pipeline processing: row filtering, deduplication and imputation

pub mod dedup;
pub mod filter;
pub mod impute;

use serde::Serialize;

use crate::error::Result;
use crate::frame::Frame;

pub use dedup::DedupStep;
pub use filter::CategoryFilter;
pub use impute::{CategoricalFill, MedianImputer};

/// What a single step did to the frame
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StepReport {
    pub step: &'static str,
    pub rows_before: usize,
    pub rows_after: usize,
    /// Cells replaced by an imputed value
    pub cells_filled: usize,
    /// Numeric cells that failed to parse and were turned into missing values
    pub cells_coerced: usize,
    /// Per-column fill value chosen by median imputation
    pub medians: Vec<(String, Option<f64>)>,
}

impl StepReport {
    pub fn new(step: &'static str, rows_before: usize, rows_after: usize) -> Self {
        Self {
            step,
            rows_before,
            rows_after,
            cells_filled: 0,
            cells_coerced: 0,
            medians: Vec::new(),
        }
    }

    pub fn rows_removed(&self) -> usize {
        self.rows_before.saturating_sub(self.rows_after)
    }
}

/// One in-place pass over the frame
pub trait CleaningStep {
    fn name(&self) -> &'static str;

    fn apply(&self, frame: &mut Frame) -> Result<StepReport>;
}
