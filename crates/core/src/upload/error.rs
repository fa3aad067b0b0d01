//! Upload error types.

use thiserror::Error;

use crate::storage::StorageError;

/// Upload pipeline errors.
///
/// Display strings double as the client-facing failure messages, so the
/// wording here is part of the API contract.
#[derive(Debug, Error)]
pub enum UploadError {
    /// No file was provided, or the file is empty.
    #[error("Please select a file to upload")]
    EmptyFile,

    /// File exceeds the policy size limit.
    #[error("File size exceeds maximum limit of {} MB", .max / 1_048_576)]
    FileTooLarge {
        /// Actual file size.
        size: u64,
        /// Maximum allowed size.
        max: u64,
    },

    /// Filename has no extension, or the extension is not allowed.
    #[error("Invalid file type. Only PDF, DOCX, and TXT files are allowed")]
    InvalidExtension,

    /// Reading the uploaded bytes failed.
    #[error("Error reading file: {0}")]
    StreamRead(String),

    /// The object store rejected the upload.
    #[error("Upload failed: {0}")]
    Store(#[from] StorageError),
}

impl UploadError {
    /// Create a file too large error.
    #[must_use]
    pub fn file_too_large(size: u64, max: u64) -> Self {
        Self::FileTooLarge { size, max }
    }

    /// Create a stream read error.
    #[must_use]
    pub fn stream_read(cause: impl Into<String>) -> Self {
        Self::StreamRead(cause.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_facing_messages() {
        assert_eq!(
            UploadError::EmptyFile.to_string(),
            "Please select a file to upload"
        );
        assert_eq!(
            UploadError::file_too_large(11 * 1024 * 1024, 10 * 1024 * 1024).to_string(),
            "File size exceeds maximum limit of 10 MB"
        );
        assert_eq!(
            UploadError::InvalidExtension.to_string(),
            "Invalid file type. Only PDF, DOCX, and TXT files are allowed"
        );
    }

    #[test]
    fn test_stream_read_message_prefix() {
        let err = UploadError::stream_read("unexpected end of stream");
        assert_eq!(
            err.to_string(),
            "Error reading file: unexpected end of stream"
        );
    }

    #[test]
    fn test_store_message_prefix() {
        let err = UploadError::from(StorageError::operation("connection refused"));
        assert!(err.to_string().starts_with("Upload failed: "));
        assert!(err.to_string().contains("connection refused"));
    }
}
