use std::fs::{self, File};
use std::io::{self, BufReader};
use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{StructuredDocument, TabularDataset};
use crate::error::{DashboardError, DashboardResult};

/// Whether a loader read its file or substituted the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LoadStatus {
    Loaded,
    MissingOrEmpty,
}

/// Loader output: the value plus where it came from.
#[derive(Debug, Clone, PartialEq)]
pub struct Loaded<T> {
    pub value: T,
    pub status: LoadStatus,
    /// File name shown in notices, e.g. `data.csv`.
    pub source_name: String,
}

impl<T> Loaded<T> {
    #[must_use]
    pub fn is_loaded(&self) -> bool {
        self.status == LoadStatus::Loaded
    }
}

/// Reads the tabular dataset at `path`.
///
/// An absent, zero-length or non-regular file yields the empty two-column
/// table. A file lacking `Category`/`Value` or holding unparsable rows is an
/// error.
pub fn load_table(path: &Path) -> DashboardResult<Loaded<TabularDataset>> {
    let source_name = source_name(path);
    if !has_content(path)? {
        warn!(path = %path.display(), "tabular file missing or empty");
        return Ok(Loaded {
            value: TabularDataset::empty(),
            status: LoadStatus::MissingOrEmpty,
            source_name,
        });
    }

    let file = File::open(path).map_err(|source| io_error(path, source))?;
    let table = TabularDataset::from_csv_reader(BufReader::new(file))?;
    debug!(
        path = %path.display(),
        rows = table.len(),
        columns = table.columns().len(),
        "loaded tabular file"
    );

    Ok(Loaded {
        value: table,
        status: LoadStatus::Loaded,
        source_name,
    })
}

/// Reads the structured document at `path`.
///
/// An absent, zero-length or non-regular file yields `{"data": []}`.
pub fn load_document(path: &Path) -> DashboardResult<Loaded<StructuredDocument>> {
    let source_name = source_name(path);
    if !has_content(path)? {
        warn!(path = %path.display(), "document file missing or empty");
        return Ok(Loaded {
            value: StructuredDocument::default(),
            status: LoadStatus::MissingOrEmpty,
            source_name,
        });
    }

    let text = fs::read_to_string(path).map_err(|source| io_error(path, source))?;
    let document = StructuredDocument::parse(&text)?;
    debug!(
        path = %path.display(),
        records = document.records().len(),
        "loaded document file"
    );

    Ok(Loaded {
        value: document,
        status: LoadStatus::Loaded,
        source_name,
    })
}

fn has_content(path: &Path) -> DashboardResult<bool> {
    match fs::metadata(path) {
        Ok(metadata) => Ok(metadata.is_file() && metadata.len() > 0),
        Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(false),
        Err(source) => Err(io_error(path, source)),
    }
}

fn source_name(path: &Path) -> String {
    path.file_name().map_or_else(
        || path.display().to_string(),
        |name| name.to_string_lossy().into_owned(),
    )
}

fn io_error(path: &Path, source: io::Error) -> DashboardError {
    DashboardError::Io {
        path: path.to_path_buf(),
        source,
    }
}
