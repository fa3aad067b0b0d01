//! Upload pipeline: validation, key generation, and orchestration.
//!
//! The pipeline is a single synchronous call chain per request:
//! validate the candidate against the fixed policy, generate a unique
//! storage key, put the bytes into the object store, and fold the
//! outcome into a response value.

mod error;
mod policy;
mod service;
mod types;

pub use error::UploadError;
pub use policy::{UploadPolicy, file_extension};
pub use service::{UploadService, generate_file_key};
pub use types::{UploadCandidate, UploadResponse};
