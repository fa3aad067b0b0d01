//! Upload domain types.

use bytes::Bytes;
use serde::Serialize;

/// An incoming file decoded from a client request.
///
/// Ephemeral: owned by the request lifecycle and dropped when the
/// request completes.
#[derive(Debug, Clone)]
pub struct UploadCandidate {
    /// Original filename as supplied by the client, if any.
    pub file_name: Option<String>,
    /// Declared MIME type.
    pub content_type: String,
    /// File contents.
    pub data: Bytes,
}

impl UploadCandidate {
    /// Create a candidate from its parts.
    #[must_use]
    pub fn new(file_name: Option<String>, content_type: impl Into<String>, data: Bytes) -> Self {
        Self {
            file_name,
            content_type: content_type.into(),
            data,
        }
    }

    /// File size in bytes.
    #[must_use]
    pub fn size(&self) -> u64 {
        self.data.len() as u64
    }
}

/// Outcome of an upload request, serialized to the client as JSON.
///
/// The three optional fields are populated together on success and stay
/// absent on failure; absent fields are omitted from the JSON body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadResponse {
    /// Whether the upload succeeded.
    pub success: bool,
    /// Human-readable outcome message.
    pub message: String,
    /// Generated storage key.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_id: Option<String>,
    /// Original filename.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_name: Option<String>,
    /// File size in bytes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub file_size: Option<u64>,
}

impl UploadResponse {
    /// Successful upload result.
    #[must_use]
    pub fn success(
        file_id: impl Into<String>,
        file_name: impl Into<String>,
        file_size: u64,
    ) -> Self {
        Self {
            success: true,
            message: "File uploaded successfully".to_string(),
            file_id: Some(file_id.into()),
            file_name: Some(file_name.into()),
            file_size: Some(file_size),
        }
    }

    /// Failed upload result. Key, filename, and size stay absent.
    #[must_use]
    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            file_id: None,
            file_name: None,
            file_size: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_size() {
        let candidate = UploadCandidate::new(
            Some("report.pdf".to_string()),
            "application/pdf",
            Bytes::from_static(b"test content"),
        );
        assert_eq!(candidate.size(), 12);
    }

    #[test]
    fn test_success_populates_all_fields() {
        let response = UploadResponse::success("abc.pdf", "report.pdf", 12);
        assert!(response.success);
        assert_eq!(response.message, "File uploaded successfully");
        assert_eq!(response.file_id.as_deref(), Some("abc.pdf"));
        assert_eq!(response.file_name.as_deref(), Some("report.pdf"));
        assert_eq!(response.file_size, Some(12));
    }

    #[test]
    fn test_failure_leaves_fields_absent() {
        let response = UploadResponse::failure("Please select a file to upload");
        assert!(!response.success);
        assert!(response.file_id.is_none());
        assert!(response.file_name.is_none());
        assert!(response.file_size.is_none());
    }

    #[test]
    fn test_serializes_camel_case_and_omits_absent_fields() {
        let json = serde_json::to_value(UploadResponse::success("abc.pdf", "report.pdf", 12))
            .expect("serializable");
        assert_eq!(json["fileId"], "abc.pdf");
        assert_eq!(json["fileName"], "report.pdf");
        assert_eq!(json["fileSize"], 12);

        let json = serde_json::to_value(UploadResponse::failure("nope")).expect("serializable");
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "nope");
        assert!(json.get("fileId").is_none());
        assert!(json.get("fileName").is_none());
        assert!(json.get("fileSize").is_none());
    }
}
