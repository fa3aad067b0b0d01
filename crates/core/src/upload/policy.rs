//! Upload acceptance policy and validation.

use super::error::UploadError;
use super::types::UploadCandidate;

/// Upload acceptance policy: size ceiling and allowed extensions.
///
/// Fixed at startup and shared read-only across requests.
#[derive(Debug, Clone)]
pub struct UploadPolicy {
    /// Maximum file size in bytes.
    pub max_file_size: u64,
    /// Allowed filename extensions, lowercase.
    pub allowed_extensions: Vec<String>,
}

impl UploadPolicy {
    /// Default max file size: 10MB.
    pub const DEFAULT_MAX_FILE_SIZE: u64 = 10 * 1024 * 1024;

    /// Default allowed document extensions.
    #[must_use]
    pub fn default_extensions() -> Vec<String> {
        vec!["pdf".to_string(), "docx".to_string(), "txt".to_string()]
    }

    /// Set maximum file size.
    #[must_use]
    pub fn with_max_file_size(mut self, size: u64) -> Self {
        self.max_file_size = size;
        self
    }

    /// Set allowed extensions.
    #[must_use]
    pub fn with_allowed_extensions(mut self, extensions: Vec<String>) -> Self {
        self.allowed_extensions = extensions;
        self
    }

    /// Check if a filename extension is allowed (case-insensitive).
    #[must_use]
    pub fn is_extension_allowed(&self, extension: &str) -> bool {
        let extension = extension.to_ascii_lowercase();
        self.allowed_extensions.iter().any(|e| *e == extension)
    }

    /// Validate a candidate upload against this policy.
    ///
    /// Pure function of the candidate and the policy; no side effects.
    ///
    /// # Errors
    ///
    /// Returns an error if the file is empty, exceeds the size limit, or
    /// its filename carries no allowed extension. A file of exactly the
    /// maximum size passes.
    pub fn validate(&self, candidate: &UploadCandidate) -> Result<(), UploadError> {
        if candidate.size() == 0 {
            return Err(UploadError::EmptyFile);
        }

        if candidate.size() > self.max_file_size {
            return Err(UploadError::file_too_large(
                candidate.size(),
                self.max_file_size,
            ));
        }

        match candidate.file_name.as_deref().and_then(file_extension) {
            Some(extension) if self.is_extension_allowed(extension) => Ok(()),
            _ => Err(UploadError::InvalidExtension),
        }
    }
}

impl Default for UploadPolicy {
    fn default() -> Self {
        Self {
            max_file_size: Self::DEFAULT_MAX_FILE_SIZE,
            allowed_extensions: Self::default_extensions(),
        }
    }
}

/// Extension of a filename: the substring after the final `.`.
///
/// Returns `None` when the filename contains no `.` separator. Only the
/// last segment counts, so `"a.b.pdf"` yields `"pdf"`.
#[must_use]
pub fn file_extension(filename: &str) -> Option<&str> {
    filename.rsplit_once('.').map(|(_, extension)| extension)
}

#[cfg(test)]
mod tests {
    use super::*;
    use bytes::Bytes;
    use rstest::rstest;

    fn candidate(file_name: Option<&str>, data: &'static [u8]) -> UploadCandidate {
        UploadCandidate::new(
            file_name.map(ToString::to_string),
            "application/octet-stream",
            Bytes::from_static(data),
        )
    }

    #[test]
    fn test_empty_file_rejected() {
        let policy = UploadPolicy::default();
        let err = policy
            .validate(&candidate(Some("report.pdf"), b""))
            .unwrap_err();
        assert!(matches!(err, UploadError::EmptyFile));
    }

    #[test]
    fn test_size_boundary() {
        let policy = UploadPolicy::default().with_max_file_size(4);

        assert!(policy.validate(&candidate(Some("a.pdf"), b"1234")).is_ok());

        let err = policy
            .validate(&candidate(Some("a.pdf"), b"12345"))
            .unwrap_err();
        assert!(matches!(err, UploadError::FileTooLarge { size: 5, max: 4 }));
    }

    #[test]
    fn test_oversized_file_message() {
        let policy = UploadPolicy::default().with_max_file_size(2);
        let err = policy
            .validate(&candidate(Some("a.pdf"), b"123"))
            .unwrap_err();
        // Message text is fixed by the default 10 MiB policy.
        let err_at_default = UploadError::file_too_large(3, UploadPolicy::DEFAULT_MAX_FILE_SIZE);
        assert_eq!(
            err_at_default.to_string(),
            "File size exceeds maximum limit of 10 MB"
        );
        assert!(matches!(err, UploadError::FileTooLarge { .. }));
    }

    #[rstest]
    #[case(Some("report.pdf"))]
    #[case(Some("report.PDF"))]
    #[case(Some("notes.docx"))]
    #[case(Some("notes.txt"))]
    #[case(Some("a.b.pdf"))]
    fn test_allowed_extensions(#[case] file_name: Option<&str>) {
        let policy = UploadPolicy::default();
        assert!(policy.validate(&candidate(file_name, b"content")).is_ok());
    }

    #[rstest]
    #[case(None)]
    #[case(Some("photo.jpg"))]
    #[case(Some("archive.tar.gz"))]
    #[case(Some("no_extension"))]
    #[case(Some("trailing."))]
    fn test_rejected_extensions(#[case] file_name: Option<&str>) {
        let policy = UploadPolicy::default();
        let err = policy
            .validate(&candidate(file_name, b"content"))
            .unwrap_err();
        assert!(matches!(err, UploadError::InvalidExtension));
        assert_eq!(
            err.to_string(),
            "Invalid file type. Only PDF, DOCX, and TXT files are allowed"
        );
    }

    #[test]
    fn test_file_extension_takes_last_segment() {
        assert_eq!(file_extension("a.b.pdf"), Some("pdf"));
        assert_eq!(file_extension("report.PDF"), Some("PDF"));
        assert_eq!(file_extension("no_extension"), None);
        assert_eq!(file_extension("trailing."), Some(""));
    }

    #[test]
    fn test_empty_check_runs_before_extension_check() {
        // An empty file with a bad extension reports the empty-file error.
        let policy = UploadPolicy::default();
        let err = policy
            .validate(&candidate(Some("photo.jpg"), b""))
            .unwrap_err();
        assert!(matches!(err, UploadError::EmptyFile));
    }
}
