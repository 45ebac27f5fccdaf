use crate::error::{Error, Result};

/// Configuration for one upload widget instance.
///
/// Immutable once handed to the controller; supplied by the embedding
/// caller at construction time.
#[derive(Debug, Clone, Default)]
pub struct UploadConfig {
    /// Maximum accepted file size, in units of `bytes_per_unit`
    pub max_size: u64,

    /// MIME type accepted by the widget (exact match required)
    pub accepted_mime_type: String,

    /// Endpoint the transport submits valid files to
    pub upload_url: String,

    /// Multiplier converting `max_size` into a byte threshold.
    ///
    /// Defaults to 1, i.e. `max_size` is read as a raw byte count, which is
    /// the convention the reference widget uses. Embedders that want the
    /// limit in megabytes set 1_000_000 (or 1_048_576 for mebibytes).
    pub bytes_per_unit: Option<u64>,

    /// Timeout in seconds for HTTP requests
    pub timeout_seconds: Option<u64>,
}

impl UploadConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_size == 0 {
            return Err(Error::InvalidConfig(
                "max size must be greater than zero".to_string(),
            ));
        }

        if self.accepted_mime_type.trim().is_empty() {
            return Err(Error::InvalidConfig(
                "accepted MIME type is required".to_string(),
            ));
        }

        if self.upload_url.trim().is_empty() {
            return Err(Error::InvalidConfig("upload URL is required".to_string()));
        }

        let parsed = url::Url::parse(&self.upload_url).map_err(|_| {
            Error::InvalidConfig(format!("Invalid upload URL: {}", self.upload_url))
        })?;

        match parsed.scheme() {
            "http" | "https" => {}
            _ => {
                return Err(Error::InvalidConfig(
                    "upload URL must use http or https scheme".to_string(),
                ))
            }
        }

        Ok(())
    }

    /// Get the byte multiplier, falling back to the raw-byte convention
    pub fn get_bytes_per_unit(&self) -> u64 {
        self.bytes_per_unit.unwrap_or(1)
    }

    /// Size threshold in bytes; anything strictly above it is rejected
    pub fn max_size_bytes(&self) -> u64 {
        self.max_size.saturating_mul(self.get_bytes_per_unit())
    }

    /// Get the timeout in seconds, falling back to the default if not set
    pub fn get_timeout_seconds(&self) -> u64 {
        self.timeout_seconds.unwrap_or(30)
    }
}
