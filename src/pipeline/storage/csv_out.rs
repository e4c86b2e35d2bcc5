use csv::WriterBuilder;
use std::fs;
use std::io::Write;
use std::path::Path;
use tracing::instrument;

use crate::error::Result;
use crate::frame::{Cell, Frame};

/// Render a cell the way pandas writes it: missing as an empty field,
/// floats with at least one decimal (`12.0`).
pub fn format_cell(cell: &Cell) -> String {
    match cell {
        Cell::Missing => String::new(),
        Cell::Text(s) => s.clone(),
        Cell::Number(n) => format_float(*n),
    }
}

/// Python `repr` of a float. Rust's `{:?}` picks scientific notation at the
/// same limits (below 1e-4, from 1e16 up) but writes the exponent as `e-7`
/// where Python writes `e-07`.
fn format_float(n: f64) -> String {
    let repr = format!("{n:?}");
    match repr.split_once('e') {
        Some((mantissa, exponent)) => {
            let (sign, digits) = match exponent.strip_prefix('-') {
                Some(digits) => ('-', digits),
                None => ('+', exponent),
            };
            format!("{mantissa}e{sign}{digits:0>2}")
        }
        None => repr,
    }
}

/// Write the frame with a header row to any writer
pub fn write_frame<W: Write>(frame: &Frame, writer: W) -> Result<()> {
    let mut writer = WriterBuilder::new().has_headers(false).from_writer(writer);
    writer.write_record(frame.columns())?;
    for row in frame.rows() {
        writer.write_record(row.iter().map(format_cell))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write the frame to `path`, creating the parent directory when needed
#[instrument(skip_all, fields(path = %path.display(), rows = frame.height()))]
pub fn persist_to_csv(frame: &Frame, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    let file = fs::File::create(path)?;
    write_frame(frame, file)
}
