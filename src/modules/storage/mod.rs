//! Storage module for media files
//!
//! Provides a MinIO/S3-compatible storage client for uploading and
//! deleting athlete media under a public-read prefix.

mod minio_client;

pub use minio_client::MinIOClient;
