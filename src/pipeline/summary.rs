use serde::Serialize;
use std::fmt;

use crate::frame::{ColumnKind, Frame};

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColumnSummary {
    pub name: String,
    pub non_null: usize,
    pub dtype: String,
}

/// Column overview of a frame, rendered like `DataFrame.info()`
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct FrameSummary {
    pub rows: usize,
    pub columns: Vec<ColumnSummary>,
}

impl FrameSummary {
    pub fn from_frame<F>(frame: &Frame, kind_of: F) -> Self
    where
        F: Fn(&str) -> ColumnKind,
    {
        let columns = frame
            .columns()
            .iter()
            .map(|name| ColumnSummary {
                name: name.clone(),
                non_null: frame.non_null_count(name).unwrap_or(0),
                dtype: kind_of(name).to_string(),
            })
            .collect();

        Self {
            rows: frame.height(),
            columns,
        }
    }
}

impl fmt::Display for FrameSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "RangeIndex: {} entries", self.rows)?;
        writeln!(f, "Data columns (total {} columns):", self.columns.len())?;

        let width = self
            .columns
            .iter()
            .map(|c| c.name.len())
            .max()
            .unwrap_or(0)
            .max("Column".len());
        writeln!(f, " #   {:<width$}  Non-Null Count  Dtype", "Column")?;
        for (i, col) in self.columns.iter().enumerate() {
            writeln!(
                f,
                " {:<3} {:<width$}  {:>5} non-null  {}",
                i, col.name, col.non_null, col.dtype
            )?;
        }

        let float_cols = self.columns.iter().filter(|c| c.dtype == "float64").count();
        let object_cols = self.columns.len() - float_cols;
        write!(f, "dtypes: float64({}), object({})", float_cols, object_cols)
    }
}
