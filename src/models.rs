use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::{Error, Result};
use crate::utils::mime_for_path;

/// Sentinel written to [`UiState::error_label`] when the selected file
/// exceeds the configured size limit.
pub const LARGE_FILE: &str = "large-file";

/// Sentinel written to [`UiState::status_id`] when the declared MIME type
/// matches the accepted type.
pub const TYPE_SUCCESS: &str = "type-success";

/// Sentinel written to [`UiState::status_id`] when the declared MIME type
/// does not match the accepted type.
pub const TYPE_ERROR: &str = "type-error";

/// A file picked by the user, normalized from the selection event.
///
/// Transient: lives for one validation+upload cycle and is discarded when
/// the cycle completes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectedFile {
    /// File name as declared by the selection event
    pub name: String,

    /// Size in bytes
    pub size_bytes: u64,

    /// Declared MIME type (e.g. "text/plain")
    pub mime_type: String,

    /// Raw file content handed to the transport
    pub content: Vec<u8>,
}

impl SelectedFile {
    /// Create a selected file from in-memory content; the size is derived
    /// from the content length.
    pub fn new(
        name: impl Into<String>,
        mime_type: impl Into<String>,
        content: Vec<u8>,
    ) -> Self {
        let size_bytes = content.len() as u64;
        Self {
            name: name.into(),
            size_bytes,
            mime_type: mime_type.into(),
            content,
        }
    }

    /// Read a file from disk, guessing the MIME type from its extension.
    ///
    /// Browser embeddings get the declared type from the file input; callers
    /// selecting from a path get it from the extension instead.
    pub async fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(Error::InvalidFile(format!(
                "File not found: {}",
                path.display()
            )));
        }

        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| Error::InvalidFile("Invalid file name".to_string()))?
            .to_string();

        let mime_type = mime_for_path(path).to_string();
        let content = tokio::fs::read(path).await?;

        Ok(Self::new(name, mime_type, content))
    }
}

/// A file-selection event at the widget boundary.
///
/// Wraps the selected-files collection; the controller only ever reads the
/// first entry and the length, matching a single-file input.
#[derive(Debug, Clone, Default)]
pub struct SelectionEvent {
    files: Vec<SelectedFile>,
}

impl SelectionEvent {
    /// Event carrying a single selected file
    pub fn single(file: SelectedFile) -> Self {
        Self { files: vec![file] }
    }

    /// Event with an arbitrary files collection (entry 0 is what counts)
    pub fn new(files: Vec<SelectedFile>) -> Self {
        Self { files }
    }

    /// Number of files in the selection
    pub fn len(&self) -> usize {
        self.files.len()
    }

    /// True when the selection carries no files
    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub(crate) fn into_first(self) -> Option<SelectedFile> {
        self.files.into_iter().next()
    }
}

/// UI-facing state owned by the controller, read-only to the rendering
/// layer (e.g. bound to a label's `title` and an element's `id`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct UiState {
    /// Error sentinel, present iff the last selection violated a rule
    #[serde(rename = "errorLabel")]
    pub error_label: Option<String>,

    /// Type-check sentinel, independent of the size outcome
    #[serde(rename = "statusId")]
    pub status_id: Option<String>,
}

impl UiState {
    /// Clear both signals, back to the freshly-mounted state
    pub fn reset(&mut self) {
        self.error_label = None;
        self.status_id = None;
    }
}

/// Result of a transport round-trip, opaque to the core beyond `status`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UploadResponse {
    /// HTTP status code reported by the transport
    pub status: u16,

    /// Response body when it parsed as JSON; never interpreted here
    #[serde(default)]
    pub body: Option<serde_json::Value>,
}
