use tracing::debug;

use super::impute::parse_number;
use super::{CleaningStep, StepReport};
use crate::error::Result;
use crate::frame::{Cell, Frame};

/// Drops duplicate rows, first occurrence wins. Cells of numeric columns are
/// compared by parsed value, so `530` and `530.0` are the same.
#[derive(Debug, Default)]
pub struct DedupStep {
    pub numeric_columns: Vec<String>,
}

impl DedupStep {
    pub fn new(numeric_columns: Vec<String>) -> Self {
        Self { numeric_columns }
    }
}

fn canonical(cell: &Cell) -> Cell {
    match cell {
        Cell::Text(raw) => parse_number(raw).map_or_else(|| cell.clone(), Cell::Number),
        other => other.clone(),
    }
}

impl CleaningStep for DedupStep {
    fn name(&self) -> &'static str {
        "dedup"
    }

    fn apply(&self, frame: &mut Frame) -> Result<StepReport> {
        let numeric: Vec<bool> = frame
            .columns()
            .iter()
            .map(|c| self.numeric_columns.contains(c))
            .collect();

        let before = frame.height();
        let removed = frame.drop_duplicates_by(|row| {
            row.iter()
                .zip(&numeric)
                .map(|(cell, &is_numeric)| if is_numeric { canonical(cell) } else { cell.clone() })
                .collect::<Vec<Cell>>()
        });
        debug!(removed, "Dropped duplicate rows");
        Ok(StepReport::new(self.name(), before, frame.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn kcal_frame(rows: &[(&str, &str)]) -> Frame {
        let mut frame = Frame::new(vec!["name".to_string(), "kcal".to_string()]);
        for (name, kcal) in rows {
            frame.push_row(vec![text(name), text(kcal)]);
        }
        frame
    }

    #[test]
    fn removes_repeated_rows() {
        let mut frame = Frame::new(vec!["a".to_string(), "b".to_string()]);
        for _ in 0..3 {
            frame.push_row(vec![text("x"), Cell::Missing]);
        }
        frame.push_row(vec![text("y"), Cell::Missing]);

        let report = DedupStep::default().apply(&mut frame).unwrap();
        assert_eq!(report.rows_before, 4);
        assert_eq!(report.rows_after, 2);
    }

    #[test]
    fn numeric_spellings_of_one_value_are_duplicates() {
        let mut frame = kcal_frame(&[
            ("Chips", "530"),
            ("Chips", "530.0"),
            ("Chips", " 530"),
            ("Chips", "5.3e2"),
            ("Bar", "300"),
        ]);

        let report = DedupStep::new(vec!["kcal".to_string()])
            .apply(&mut frame)
            .unwrap();
        assert_eq!(report.rows_removed(), 3);
        assert_eq!(frame.rows()[0], vec![text("Chips"), text("530")]);
        assert_eq!(frame.rows()[1], vec![text("Bar"), text("300")]);
    }

    #[test]
    fn unparseable_numeric_text_compares_as_text() {
        let mut frame = kcal_frame(&[("Chips", "abc"), ("Chips", "xyz"), ("Chips", "abc")]);
        let report = DedupStep::new(vec!["kcal".to_string()])
            .apply(&mut frame)
            .unwrap();
        assert_eq!(report.rows_after, 2);
    }

    #[test]
    fn categorical_columns_keep_exact_text() {
        let mut frame = kcal_frame(&[("1", "10"), ("1.0", "10")]);
        let report = DedupStep::new(vec!["kcal".to_string()])
            .apply(&mut frame)
            .unwrap();
        assert_eq!(report.rows_after, 2);
    }
}
