//! Option source - loads the fruit list from a JSON document
//!
//! The document has the shape `{ "fruits": [ { "id": 0, "name": "banana" }, ... ] }`.
//! Loading reads the file, then waits the configured latency so the form's
//! placeholder is visible, like a slow network would make it.

use std::io;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};
use tui_select_widget::{DuplicateOptionId, OptionList, SelectOption};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("could not read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("malformed option document {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    Duplicate(#[from] DuplicateOptionId),
}

#[derive(Deserialize)]
struct OptionDocument {
    fruits: Vec<SelectOption>,
}

/// Where the options come from and how long they take to arrive
#[derive(Clone, Debug)]
pub struct OptionSource {
    path: PathBuf,
    latency: Duration,
}

impl OptionSource {
    pub fn new(path: impl Into<PathBuf>, latency: Duration) -> Self {
        Self {
            path: path.into(),
            latency,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and validate the document, then wait out the latency
    pub async fn load(&self) -> Result<OptionList, SourceError> {
        debug!(path = %self.path.display(), "loading options");

        let bytes = tokio::fs::read(&self.path)
            .await
            .map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;

        let document: OptionDocument =
            serde_json::from_slice(&bytes).map_err(|source| SourceError::Parse {
                path: self.path.clone(),
                source,
            })?;

        let options = OptionList::new(document.fruits)?;

        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }

        info!(count = options.len(), "options loaded");
        Ok(options)
    }
}
