//! # Upload Widget Core
//!
//! Validation-and-submission core for a single-file upload widget: takes a
//! user-selected file, checks it against the configured size limit and
//! accepted MIME type, exposes the outcome as observable UI state, and
//! forwards valid files to a remote upload endpoint.
//!
//! Rendering, styling and retry policy live with the embedder; the transport
//! is a pluggable trait whose reported status is passed through opaquely.
//!
//! ## Basic Usage Example
//!
//! ```no_run
//! use uploadwidget::{
//!     HttpTransport, SelectedFile, SelectionEvent, UploadConfig, UploadController,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = UploadConfig {
//!         max_size: 10,
//!         bytes_per_unit: Some(1_000_000),
//!         accepted_mime_type: "text/plain".to_string(),
//!         upload_url: "https://uploads.example.com/single".to_string(),
//!         ..Default::default()
//!     };
//!
//!     let transport = HttpTransport::new(config.clone())?;
//!     let mut controller = UploadController::new(config, transport)?;
//!
//!     let file = SelectedFile::from_path("./notes.txt").await?;
//!     if let Some(response) = controller
//!         .handle_selection(SelectionEvent::single(file))
//!         .await?
//!     {
//!         println!("Upload status: {}", response.status);
//!     } else {
//!         println!("Rejected: {:?}", controller.ui_state());
//!     }
//!
//!     Ok(())
//! }
//! ```

mod config;
mod controller;
mod error;
mod http;
mod models;
mod utils;
mod validator;

// Re-exports
pub use config::UploadConfig;
pub use controller::{Phase, UploadController};
pub use error::{Error, Result};
pub use http::{HttpTransport, Transport};
pub use models::{
    SelectedFile, SelectionEvent, UiState, UploadResponse, LARGE_FILE, TYPE_ERROR, TYPE_SUCCESS,
};
pub use validator::{exceeds_size_limit, mime_matches, validate, ValidationResult};
