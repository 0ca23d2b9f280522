//! The pseudo "app download": a fixed text blob.

use std::path::{Path, PathBuf};

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::Serialize;
use tracing::{info, instrument};

/// File name of the download.
pub const FILE_NAME: &str = "senipy-mark-1.txt";

/// MIME type of the download.
pub const MIME_TYPE: &str = "text/plain";

/// The download's contents.
pub const PAYLOAD: &str = "SENIPY AI Assistant - Thank you for downloading!";

/// A blob with a name and a MIME type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Getters)]
pub struct PseudoDownload {
    #[getter(skip)]
    file_name: &'static str,
    #[getter(skip)]
    mime_type: &'static str,
    #[getter(skip)]
    payload: &'static str,
}

impl Default for PseudoDownload {
    fn default() -> Self {
        Self {
            file_name: FILE_NAME,
            mime_type: MIME_TYPE,
            payload: PAYLOAD,
        }
    }
}

impl PseudoDownload {
    /// Get field `file_name` from instance of `PseudoDownload`.
    pub fn file_name(&self) -> &&'static str {
        &self.file_name
    }

    /// Get field `mime_type` from instance of `PseudoDownload`.
    pub fn mime_type(&self) -> &&'static str {
        &self.mime_type
    }

    /// Get field `payload` from instance of `PseudoDownload`.
    pub fn payload(&self) -> &&'static str {
        &self.payload
    }

    /// Writes the blob into `dir`, creating the directory if needed.
    /// An existing file of the same name is overwritten.
    ///
    /// # Errors
    ///
    /// Returns [`DownloadError`] if the directory or file cannot be written.
    #[instrument(skip(self), fields(dir = %dir.display(), file = self.file_name))]
    pub fn save_to(&self, dir: &Path) -> Result<PathBuf, DownloadError> {
        std::fs::create_dir_all(dir).map_err(|e| {
            DownloadError::new(format!("Failed to create {}: {}", dir.display(), e))
        })?;
        let path = dir.join(self.file_name);
        std::fs::write(&path, self.payload).map_err(|e| {
            DownloadError::new(format!("Failed to write {}: {}", path.display(), e))
        })?;
        info!(path = %path.display(), bytes = self.payload.len(), "Download saved");
        Ok(path)
    }
}

/// Saving the download failed.
#[derive(Debug, Clone, Display, Error)]
#[display("Download error: {} at {}:{}", message, file, line)]
pub struct DownloadError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl DownloadError {
    /// Creates a new download error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
