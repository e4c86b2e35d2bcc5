use std::collections::HashSet;
use std::fmt;
use std::hash::{Hash, Hasher};

/// A single table value
#[derive(Debug, Clone)]
pub enum Cell {
    Missing,
    Text(String),
    /// Never NaN; NaN values are stored as `Missing`
    Number(f64),
}

impl Cell {
    /// Builds a number cell, mapping NaN to `Missing`
    pub fn number(value: f64) -> Self {
        if value.is_nan() {
            Cell::Missing
        } else {
            Cell::Number(value)
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, Cell::Missing)
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Cell::Text(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) => Some(*n),
            _ => None,
        }
    }
}

// Numbers compare by bit pattern with -0.0 folded into 0.0, so equal cells hash equally.
fn number_bits(n: f64) -> u64 {
    if n == 0.0 {
        0.0f64.to_bits()
    } else {
        n.to_bits()
    }
}

impl PartialEq for Cell {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Cell::Missing, Cell::Missing) => true,
            (Cell::Text(a), Cell::Text(b)) => a == b,
            (Cell::Number(a), Cell::Number(b)) => number_bits(*a) == number_bits(*b),
            _ => false,
        }
    }
}

impl Eq for Cell {}

impl Hash for Cell {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            Cell::Missing => 0u8.hash(state),
            Cell::Text(s) => {
                1u8.hash(state);
                s.hash(state);
            }
            Cell::Number(n) => {
                2u8.hash(state);
                number_bits(*n).hash(state);
            }
        }
    }
}

/// How a column is treated by the cleaning steps
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ColumnKind {
    Numeric,
    Categorical,
}

impl fmt::Display for ColumnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // pandas dtype names, as shown by DataFrame.info()
        match self {
            ColumnKind::Numeric => write!(f, "float64"),
            ColumnKind::Categorical => write!(f, "object"),
        }
    }
}

/// Row-oriented in-memory table. Every row is exactly as wide as `columns`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Frame {
    columns: Vec<String>,
    rows: Vec<Vec<Cell>>,
}

impl Frame {
    pub fn new(columns: Vec<String>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    /// Appends a row, padding with `Missing` or truncating to the frame width
    pub fn push_row(&mut self, mut row: Vec<Cell>) {
        row.resize(self.columns.len(), Cell::Missing);
        self.rows.push(row);
    }

    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn width(&self) -> usize {
        self.columns.len()
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    /// Cells of one column, top to bottom
    pub fn column(&self, name: &str) -> Option<impl Iterator<Item = &Cell> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter().map(move |row| &row[idx]))
    }

    pub fn column_mut(&mut self, name: &str) -> Option<impl Iterator<Item = &mut Cell> + '_> {
        let idx = self.column_index(name)?;
        Some(self.rows.iter_mut().map(move |row| &mut row[idx]))
    }

    pub fn non_null_count(&self, name: &str) -> Option<usize> {
        self.column(name)
            .map(|cells| cells.filter(|c| !c.is_missing()).count())
    }

    /// Keeps rows for which `keep` returns true. Returns the number removed.
    pub fn retain_rows<F>(&mut self, mut keep: F) -> usize
    where
        F: FnMut(&[Cell]) -> bool,
    {
        let before = self.rows.len();
        self.rows.retain(|row| keep(row));
        before - self.rows.len()
    }

    /// Drops rows equal in every column to an earlier row, keeping the first
    /// occurrence and the original order. Returns the number removed.
    pub fn drop_duplicates(&mut self) -> usize {
        self.drop_duplicates_by(|row| row.to_vec())
    }

    /// Like [`Frame::drop_duplicates`], comparing rows by the key `key` builds
    pub fn drop_duplicates_by<K, F>(&mut self, mut key: F) -> usize
    where
        K: Eq + Hash,
        F: FnMut(&[Cell]) -> K,
    {
        let mut seen: HashSet<K> = HashSet::with_capacity(self.rows.len());
        self.retain_rows(|row| seen.insert(key(row)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(s: &str) -> Cell {
        Cell::Text(s.to_string())
    }

    fn sample() -> Frame {
        let mut frame = Frame::new(vec!["name".to_string(), "kcal".to_string()]);
        frame.push_row(vec![text("chips"), text("500")]);
        frame.push_row(vec![text("cookie"), Cell::Missing]);
        frame.push_row(vec![text("chips"), text("500")]);
        frame.push_row(vec![text("bar"), text("300")]);
        frame
    }

    #[test]
    fn push_row_pads_short_rows() {
        let mut frame = Frame::new(vec!["a".to_string(), "b".to_string()]);
        frame.push_row(vec![text("x")]);
        assert_eq!(frame.rows()[0], vec![text("x"), Cell::Missing]);
    }

    #[test]
    fn drop_duplicates_keeps_first_occurrence_in_order() {
        let mut frame = sample();
        let removed = frame.drop_duplicates();
        assert_eq!(removed, 1);
        assert_eq!(frame.height(), 3);
        assert_eq!(frame.rows()[0][0], text("chips"));
        assert_eq!(frame.rows()[1][0], text("cookie"));
        assert_eq!(frame.rows()[2][0], text("bar"));
    }

    #[test]
    fn drop_duplicates_by_compares_keys() {
        let mut frame = sample();
        let removed = frame.drop_duplicates_by(|row| row[0].clone());
        assert_eq!(removed, 1);
        assert_eq!(frame.height(), 3);
    }

    #[test]
    fn missing_cells_count_as_equal_for_dedup() {
        let mut frame = Frame::new(vec!["a".to_string()]);
        frame.push_row(vec![Cell::Missing]);
        frame.push_row(vec![Cell::Missing]);
        assert_eq!(frame.drop_duplicates(), 1);
    }

    #[test]
    fn number_cells_fold_signed_zero() {
        assert_eq!(Cell::Number(0.0), Cell::Number(-0.0));
        assert!(Cell::number(f64::NAN).is_missing());
    }

    #[test]
    fn non_null_count_skips_missing() {
        let frame = sample();
        assert_eq!(frame.non_null_count("kcal"), Some(3));
        assert_eq!(frame.non_null_count("nope"), None);
    }

    #[test]
    fn retain_rows_reports_removed() {
        let mut frame = sample();
        let removed = frame.retain_rows(|row| row[0] == text("cookie"));
        assert_eq!(removed, 3);
        assert_eq!(frame.height(), 1);
    }
}
