use tracing::{debug, warn};

use super::{CleaningStep, StepReport};
use crate::error::{CleanerError, Result};
use crate::frame::{Cell, Frame};

fn missing_column(column: &str) -> CleanerError {
    CleanerError::MissingColumns {
        missing: vec![column.to_string()],
    }
}

/// Parse a raw field as a float. Unparseable text and NaN yield `None`.
pub fn parse_number(raw: &str) -> Option<f64> {
    raw.trim().parse::<f64>().ok().filter(|n| !n.is_nan())
}

/// Convert every cell of `column` to a number; anything non-numeric becomes
/// missing. Returns how many non-missing cells were lost to coercion.
pub fn coerce_numeric(frame: &mut Frame, column: &str) -> Result<usize> {
    let cells = frame.column_mut(column).ok_or_else(|| missing_column(column))?;
    let mut coerced = 0;
    for cell in cells {
        let replacement = match cell {
            Cell::Text(raw) => match parse_number(raw) {
                Some(n) => Cell::Number(n),
                None => {
                    coerced += 1;
                    Cell::Missing
                }
            },
            Cell::Number(n) => Cell::number(*n),
            Cell::Missing => Cell::Missing,
        };
        *cell = replacement;
    }
    Ok(coerced)
}

/// Median of the given values; mean of the two middle values for even counts
pub fn median(values: &[f64]) -> Option<f64> {
    let mut sorted: Vec<f64> = values.iter().copied().filter(|v| !v.is_nan()).collect();
    if sorted.is_empty() {
        return None;
    }
    sorted.sort_by(f64::total_cmp);

    let mid = sorted.len() / 2;
    if sorted.len() % 2 == 0 {
        Some((sorted[mid - 1] + sorted[mid]) / 2.0)
    } else {
        Some(sorted[mid])
    }
}

/// Median of the numeric cells of `column`
pub fn column_median(frame: &Frame, column: &str) -> Result<Option<f64>> {
    let values: Vec<f64> = frame
        .column(column)
        .ok_or_else(|| missing_column(column))?
        .filter_map(Cell::as_number)
        .collect();
    Ok(median(&values))
}

/// Replace missing cells of a coerced numeric column with its median.
/// A column with no numbers at all stays missing. Returns the median used and
/// the number of cells filled.
pub fn fill_numeric_median(frame: &mut Frame, column: &str) -> Result<(Option<f64>, usize)> {
    let Some(fill) = column_median(frame, column)? else {
        return Ok((None, 0));
    };

    let mut filled = 0;
    for cell in frame.column_mut(column).ok_or_else(|| missing_column(column))? {
        if cell.is_missing() {
            *cell = Cell::Number(fill);
            filled += 1;
        }
    }
    Ok((Some(fill), filled))
}

/// Replace missing cells of `column` with `placeholder`. Returns the fill count.
pub fn fill_categorical(frame: &mut Frame, column: &str, placeholder: &str) -> Result<usize> {
    let mut filled = 0;
    for cell in frame.column_mut(column).ok_or_else(|| missing_column(column))? {
        if cell.is_missing() {
            *cell = Cell::Text(placeholder.to_string());
            filled += 1;
        }
    }
    Ok(filled)
}

/// Numeric coercion followed by median imputation, column by column
pub struct MedianImputer {
    pub columns: Vec<String>,
}

impl MedianImputer {
    pub fn new(columns: Vec<String>) -> Self {
        Self { columns }
    }
}

impl CleaningStep for MedianImputer {
    fn name(&self) -> &'static str {
        "impute_numeric"
    }

    fn apply(&self, frame: &mut Frame) -> Result<StepReport> {
        let mut report = StepReport::new(self.name(), frame.height(), frame.height());

        for column in &self.columns {
            let coerced = coerce_numeric(frame, column)?;
            let (fill, filled) = fill_numeric_median(frame, column)?;

            match fill {
                Some(m) => debug!(column = %column, median = m, filled, coerced, "Imputed numeric column"),
                None if frame.height() > 0 => {
                    warn!(column = %column, "Column has no numeric values; left missing")
                }
                None => {}
            }

            report.cells_coerced += coerced;
            report.cells_filled += filled;
            report.medians.push((column.clone(), fill));
        }

        Ok(report)
    }
}

/// Fills missing categorical cells with a placeholder string
pub struct CategoricalFill {
    pub columns: Vec<String>,
    pub placeholder: String,
}

impl CategoricalFill {
    pub fn new(columns: Vec<String>, placeholder: impl Into<String>) -> Self {
        Self {
            columns,
            placeholder: placeholder.into(),
        }
    }
}

impl CleaningStep for CategoricalFill {
    fn name(&self) -> &'static str {
        "fill_categorical"
    }

    fn apply(&self, frame: &mut Frame) -> Result<StepReport> {
        let mut report = StepReport::new(self.name(), frame.height(), frame.height());
        for column in &self.columns {
            let filled = fill_categorical(frame, column, &self.placeholder)?;
            debug!(column = %column, filled, "Filled categorical column");
            report.cells_filled += filled;
        }
        Ok(report)
    }
}
