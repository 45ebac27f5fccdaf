use crate::config::UploadConfig;

/// Classification of one selected file against the configured rules.
///
/// Derived per selection, never stored. When both rules fail the size
/// violation wins the classification; the type outcome is still observable
/// on its own through [`mime_matches`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationResult {
    /// Both rules passed
    Ok,
    /// Size exceeds the configured byte threshold
    TooLarge,
    /// Declared MIME type differs from the accepted type
    WrongType,
}

/// True when `size_bytes` is strictly above the configured threshold.
pub fn exceeds_size_limit(size_bytes: u64, config: &UploadConfig) -> bool {
    size_bytes > config.max_size_bytes()
}

/// True when the declared MIME type exactly equals the accepted type.
pub fn mime_matches(mime_type: &str, config: &UploadConfig) -> bool {
    mime_type == config.accepted_mime_type
}

/// Classify a file's size and declared MIME type against the config.
///
/// Total and deterministic: every input yields a result, no side effects.
pub fn validate(size_bytes: u64, mime_type: &str, config: &UploadConfig) -> ValidationResult {
    if exceeds_size_limit(size_bytes, config) {
        ValidationResult::TooLarge
    } else if !mime_matches(mime_type, config) {
        ValidationResult::WrongType
    } else {
        ValidationResult::Ok
    }
}
