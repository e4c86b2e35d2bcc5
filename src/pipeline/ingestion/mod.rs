// Ingestion: read the source CSV into a Frame restricted to the kept columns

use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::{self, Read};
use std::path::Path;
use tracing::{debug, instrument};

use crate::constants::is_na_token;
use crate::error::{CleanerError, Result};
use crate::frame::{Cell, Frame};

/// Load `columns` from the CSV at `path`.
///
/// Columns come back in file order. Fails with `FileNotFound` when the file
/// does not exist and with `MissingColumns` when any requested column is
/// absent from the header.
#[instrument(skip_all, fields(path = %path.display()))]
pub fn load_columns(path: &Path, columns: &[String]) -> Result<Frame> {
    let file = File::open(path).map_err(|e| match e.kind() {
        io::ErrorKind::NotFound => CleanerError::FileNotFound(path.to_path_buf()),
        _ => CleanerError::Io(e),
    })?;
    load_columns_from_reader(file, columns)
}

/// Same as [`load_columns`] over any reader
pub fn load_columns_from_reader<R: Read>(reader: R, columns: &[String]) -> Result<Frame> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let headers = reader.headers()?.clone();
    let selection = select_columns(&headers, columns)?;
    let mut frame = Frame::new(selection.iter().map(|(_, name)| name.clone()).collect());
    debug!("Selected {} of {} source columns", frame.width(), headers.len());

    for result in reader.records() {
        let record = result?;
        let row = selection
            .iter()
            .map(|(idx, _)| to_cell(record.get(*idx)))
            .collect();
        frame.push_row(row);
    }

    Ok(frame)
}

/// Map requested column names to their header positions, in file order
fn select_columns(headers: &StringRecord, columns: &[String]) -> Result<Vec<(usize, String)>> {
    let missing: Vec<String> = columns
        .iter()
        .filter(|c| !headers.iter().any(|h| h == c.as_str()))
        .cloned()
        .collect();
    if !missing.is_empty() {
        return Err(CleanerError::MissingColumns { missing });
    }

    let mut selection: Vec<(usize, String)> = Vec::with_capacity(columns.len());
    for (idx, header) in headers.iter().enumerate() {
        let wanted = columns.iter().any(|c| c == header);
        let taken = selection.iter().any(|(_, name)| name == header);
        if wanted && !taken {
            selection.push((idx, header.to_string()));
        }
    }
    Ok(selection)
}

fn to_cell(field: Option<&str>) -> Cell {
    match field {
        Some(value) if !is_na_token(value) => Cell::Text(value.to_string()),
        _ => Cell::Missing,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn keeps_requested_columns_in_file_order() {
        let csv = "c,a,b,z\n1,2,3,4\n";
        let frame = load_columns_from_reader(csv.as_bytes(), &cols(&["a", "b", "c"])).unwrap();
        assert_eq!(frame.width(), 3);
        assert_eq!(frame.columns(), &cols(&["c", "a", "b"])[..]);
        assert_eq!(
            frame.rows()[0],
            vec![
                Cell::Text("1".to_string()),
                Cell::Text("2".to_string()),
                Cell::Text("3".to_string())
            ]
        );
    }

    #[test]
    fn na_tokens_and_short_rows_become_missing() {
        let csv = "a,b,c\nNaN,,x\nnull\n";
        let frame = load_columns_from_reader(csv.as_bytes(), &cols(&["a", "b", "c"])).unwrap();
        assert_eq!(frame.height(), 2);
        assert!(frame.rows()[0][0].is_missing());
        assert!(frame.rows()[0][1].is_missing());
        assert_eq!(frame.rows()[0][2], Cell::Text("x".to_string()));
        assert!(frame.rows()[1].iter().all(Cell::is_missing));
    }

    #[test]
    fn quoted_fields_keep_commas() {
        let csv = "name,brands\n\"Chips, salted\",Acme\n";
        let frame = load_columns_from_reader(csv.as_bytes(), &cols(&["name"])).unwrap();
        assert_eq!(frame.rows()[0][0], Cell::Text("Chips, salted".to_string()));
    }

    #[test]
    fn missing_columns_are_all_reported() {
        let csv = "a,b\n1,2\n";
        let err = load_columns_from_reader(csv.as_bytes(), &cols(&["a", "x", "y"])).unwrap_err();
        match err {
            CleanerError::MissingColumns { missing } => assert_eq!(missing, cols(&["x", "y"])),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn absent_file_is_file_not_found() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.csv");
        let err = load_columns(&path, &cols(&["a"])).unwrap_err();
        assert!(matches!(err, CleanerError::FileNotFound(p) if p == path));
    }
}
