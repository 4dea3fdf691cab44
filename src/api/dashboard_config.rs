use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};

/// Public page bootstrap configuration.
///
/// Serializable so hosts can keep the page setup in a JSON file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardConfig {
    #[serde(default = "default_table_path")]
    pub table_path: PathBuf,
    #[serde(default = "default_document_path")]
    pub document_path: PathBuf,
    /// Rows shown in the table preview after a successful load.
    #[serde(default = "default_preview_rows")]
    pub preview_rows: usize,
    /// Pixel area used when charts are projected into frames.
    #[serde(default)]
    pub viewport: Viewport,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new(default_table_path(), default_document_path())
    }
}

impl DashboardConfig {
    #[must_use]
    pub fn new(table_path: impl Into<PathBuf>, document_path: impl Into<PathBuf>) -> Self {
        Self {
            table_path: table_path.into(),
            document_path: document_path.into(),
            preview_rows: default_preview_rows(),
            viewport: Viewport::default(),
        }
    }

    #[must_use]
    pub fn with_preview_rows(mut self, preview_rows: usize) -> Self {
        self.preview_rows = preview_rows;
        self
    }

    #[must_use]
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn validate(&self) -> DashboardResult<()> {
        if !self.viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        if self.preview_rows == 0 {
            return Err(DashboardError::InvalidConfig(
                "preview rows must be > 0".to_owned(),
            ));
        }
        Ok(())
    }

    /// Serializes config to pretty JSON.
    pub fn to_json_pretty(&self) -> DashboardResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| DashboardError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON; missing fields take their defaults.
    pub fn from_json_str(input: &str) -> DashboardResult<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| DashboardError::InvalidConfig(format!("failed to parse config: {e}")))?;
        config.validate()?;
        Ok(config)
    }
}

fn default_table_path() -> PathBuf {
    PathBuf::from("data.csv")
}

fn default_document_path() -> PathBuf {
    PathBuf::from("data.json")
}

fn default_preview_rows() -> usize {
    5
}
