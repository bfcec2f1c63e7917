use std::path::{Path, PathBuf};

use thiserror::Error;

/// Errors produced while loading the dataset snapshot.
#[derive(Debug, Error)]
pub enum DataError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path:   PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("CSV parse error: {0}")]
    Csv(#[from] csv::Error),

    #[error("GeoJSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0} contains no data rows")]
    Empty(&'static str),

    /// A parse error from one dataset file, tagged with that file's path.
    #[error("{}: {source}", .path.display())]
    InFile {
        path:   PathBuf,
        #[source]
        source: Box<DataError>,
    },
}

impl DataError {
    /// Tag a reader-level error with the file it came from.  `Io` and
    /// already-tagged errors carry a path and are returned unchanged.
    pub(crate) fn in_file(self, path: &Path) -> Self {
        match self {
            DataError::Io { .. } | DataError::InFile { .. } => self,
            other => DataError::InFile { path: path.to_path_buf(), source: Box::new(other) },
        }
    }

    /// The underlying error, looking through any file tag.
    pub fn root(&self) -> &DataError {
        match self {
            DataError::InFile { source, .. } => source.root(),
            other => other,
        }
    }
}

pub type DataResult<T> = Result<T, DataError>;
