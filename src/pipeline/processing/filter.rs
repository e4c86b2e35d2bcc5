use tracing::debug;

use super::{CleaningStep, StepReport};
use crate::error::{CleanerError, Result};
use crate::frame::{Cell, Frame};

/// Keeps only rows whose group column holds one of the target values.
/// Missing group values never match.
pub struct CategoryFilter {
    pub column: String,
    pub targets: Vec<String>,
}

impl CategoryFilter {
    pub fn new(column: impl Into<String>, targets: Vec<String>) -> Self {
        Self {
            column: column.into(),
            targets,
        }
    }

    fn matches(&self, cell: &Cell) -> bool {
        cell.as_text()
            .is_some_and(|value| self.targets.iter().any(|t| t == value))
    }
}

impl CleaningStep for CategoryFilter {
    fn name(&self) -> &'static str {
        "filter"
    }

    fn apply(&self, frame: &mut Frame) -> Result<StepReport> {
        let idx = frame.column_index(&self.column).ok_or_else(|| {
            CleanerError::MissingColumns {
                missing: vec![self.column.clone()],
            }
        })?;

        let before = frame.height();
        let removed = frame.retain_rows(|row| self.matches(&row[idx]));
        debug!(column = %self.column, removed, "Filtered rows by category");

        Ok(StepReport::new(self.name(), before, frame.height()))
    }
}
