//! Asset service facade
//!
//! Public operations of the client: uploads, deletes and upload-mapping
//! administration, behind a trait so dry runs and tests can swap in an
//! in-memory implementation.

pub mod client;
pub mod mock;

pub use client::Service;
pub use mock::MockAssetService;

use crate::models::{DeleteResult, MappingMessage, ResourceType, UploadMappings, UploadResult};
use crate::Result;
use async_trait::async_trait;
use std::path::Path;

#[async_trait]
pub trait AssetService: Send + Sync {
    /// Upload a file, or every file under a directory, one request per file.
    /// Stops at the first failure.
    ///
    /// `use_random_id` applies to directory uploads too; every walked file is
    /// then given a service-generated id instead of a path-derived one.
    async fn upload(
        &self,
        path: &Path,
        use_random_id: bool,
        resource_type: ResourceType,
    ) -> Result<Vec<UploadResult>>;

    async fn delete(&self, public_id: &str, resource_type: ResourceType) -> Result<DeleteResult>;

    async fn list_upload_mappings(&self) -> Result<UploadMappings>;

    async fn create_upload_mapping(&self, folder: &str, template: &str) -> Result<MappingMessage>;

    async fn update_upload_mapping(&self, folder: &str, template: &str) -> Result<MappingMessage>;

    async fn delete_upload_mapping(&self, folder: &str) -> Result<MappingMessage>;
}
