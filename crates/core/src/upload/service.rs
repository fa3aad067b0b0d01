//! Upload orchestration service.

use std::sync::Arc;

use uuid::Uuid;

use super::error::UploadError;
use super::policy::{UploadPolicy, file_extension};
use super::types::{UploadCandidate, UploadResponse};
use crate::storage::StorageService;

/// Upload service sequencing validation, key generation, and the store
/// call.
///
/// Failures are folded into the returned response rather than
/// propagated; the store is never called for an invalid candidate, and
/// no retry is attempted on store failure.
pub struct UploadService {
    storage: Arc<StorageService>,
    policy: UploadPolicy,
}

impl UploadService {
    /// Create a new upload service with the default policy.
    #[must_use]
    pub fn new(storage: Arc<StorageService>) -> Self {
        Self::with_policy(storage, UploadPolicy::default())
    }

    /// Create a new upload service with an explicit policy.
    #[must_use]
    pub fn with_policy(storage: Arc<StorageService>, policy: UploadPolicy) -> Self {
        Self { storage, policy }
    }

    /// The active upload policy.
    #[must_use]
    pub fn policy(&self) -> &UploadPolicy {
        &self.policy
    }

    /// Process a single upload: validate, generate a key, store.
    ///
    /// `None` stands for a request that carried no file at all and fails
    /// with the same message as an empty file.
    pub async fn process_upload(&self, candidate: Option<UploadCandidate>) -> UploadResponse {
        let Some(candidate) = candidate else {
            return UploadResponse::failure(UploadError::EmptyFile.to_string());
        };

        if let Err(e) = self.policy.validate(&candidate) {
            return UploadResponse::failure(e.to_string());
        }

        let file_id = generate_file_key(candidate.file_name.as_deref());
        let file_name = candidate.file_name.clone().unwrap_or_default();
        let file_size = candidate.size();

        match self
            .storage
            .put_object(&file_id, &candidate.content_type, candidate.data)
            .await
        {
            Ok(()) => UploadResponse::success(file_id, file_name, file_size),
            Err(e) => UploadResponse::failure(UploadError::from(e).to_string()),
        }
    }
}

/// Generate a unique storage key for a file.
///
/// A random UUID concatenated with the original filename's extension
/// (leading dot included, case preserved) when one is present. The
/// original base name is never reused, so concurrent uploads of
/// identically named files cannot collide.
#[must_use]
pub fn generate_file_key(original_filename: Option<&str>) -> String {
    let uuid = Uuid::new_v4();
    match original_filename.and_then(file_extension) {
        Some(extension) if !extension.is_empty() => format!("{uuid}.{extension}"),
        _ => uuid.to_string(),
    }
}
