use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MapperError {
    #[error("Failed to read dataset {}: {source}", .path.display())]
    DatasetRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse {} line {line}: {source}", .path.display())]
    DatasetParse {
        path: PathBuf,
        line: usize,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize GeoJSON: {0}")]
    Serialize(#[from] serde_json::Error),

    #[error("GeoJSON output is not valid UTF-8: {0}")]
    Encoding(#[from] std::string::FromUtf8Error),
}

pub type Result<T> = std::result::Result<T, MapperError>;

/// Maximum length of a dataset line quoted back in a log message
const MAX_LINE_PREVIEW_LENGTH: usize = 120;

impl MapperError {
    /// Shorten an offending input line so a bad record doesn't flood the log
    pub fn line_preview(line: &str) -> String {
        if line.len() <= MAX_LINE_PREVIEW_LENGTH {
            line.to_string()
        } else {
            let truncated: String = line.chars().take(MAX_LINE_PREVIEW_LENGTH).collect();
            format!("{}... (truncated, {} total bytes)", truncated, line.len())
        }
    }
}
