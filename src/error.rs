use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CleanerError {
    #[error("Usecols do not match columns, columns expected but not found: {}", quoted_list(.missing))]
    MissingColumns { missing: Vec<String> },

    #[error("File not found: {}", .0.display())]
    FileNotFound(PathBuf),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("TOML deserialization failed: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, CleanerError>;

/// Renders names as `['a', 'b']`, the list form pandas prints
fn quoted_list(names: &[String]) -> String {
    let quoted: Vec<String> = names.iter().map(|n| format!("'{}'", n)).collect();
    format!("[{}]", quoted.join(", "))
}
