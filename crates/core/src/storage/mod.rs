//! Object store client backed by Apache OpenDAL.
//!
//! Vendor-agnostic blob storage with support for:
//! - S3-compatible: Cloudflare R2, Supabase Storage, AWS S3, DigitalOcean Spaces
//! - Azure Blob Storage
//! - Local filesystem (development only)
//!
//! From the caller's perspective every upload is a single atomic put:
//! either the object lands fully under its key, or nothing is stored.

mod config;
mod error;
mod service;

pub use config::StorageProvider;
pub use error::StorageError;
pub use service::StorageService;
