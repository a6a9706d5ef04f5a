use super::AssetService;
use crate::models::{
    DeleteResult, Mapping, MappingMessage, ResourceType, UploadMappings, UploadResult,
};
use crate::walker;
use crate::{Error, Result};
use async_trait::async_trait;
use reqwest::StatusCode;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// In-memory stand-in for [`super::Service`]. Uploads only touch the local
/// filesystem to discover files; nothing leaves the process.
#[derive(Clone, Default)]
pub struct MockAssetService {
    uploaded: Arc<Mutex<BTreeMap<String, ResourceType>>>,
    mappings: Arc<Mutex<BTreeMap<String, String>>>,
    upload_count: Arc<Mutex<usize>>,
    random_counter: Arc<Mutex<u64>>,
}

impl MockAssetService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_mapping(self, folder: &str, template: &str) -> Self {
        self.mappings
            .lock()
            .unwrap()
            .insert(folder.to_string(), template.to_string());
        self
    }

    pub fn get_upload_count(&self) -> usize {
        *self.upload_count.lock().unwrap()
    }

    pub fn get_public_ids(&self) -> Vec<String> {
        self.uploaded.lock().unwrap().keys().cloned().collect()
    }

    fn record_upload(
        &self,
        path: &Path,
        use_random_id: bool,
        resource_type: ResourceType,
    ) -> UploadResult {
        *self.upload_count.lock().unwrap() += 1;

        let public_id = if use_random_id {
            let mut counter = self.random_counter.lock().unwrap();
            *counter += 1;
            format!("random{:06}", *counter)
        } else {
            walker::public_id_for(path, resource_type)
        };

        self.uploaded
            .lock()
            .unwrap()
            .insert(public_id.clone(), resource_type);

        UploadResult {
            format: path
                .extension()
                .map(|ext| ext.to_string_lossy().into_owned()),
            public_id,
            version: 1,
            resource_type: resource_type.to_string(),
            bytes: std::fs::metadata(path).ok().map(|m| m.len()),
            url: None,
            secure_url: None,
        }
    }

    fn missing_mapping(folder: &str) -> Error {
        Error::Api {
            status: StatusCode::NOT_FOUND,
            message: format!("Mapping for folder {} not found", folder),
        }
    }
}

#[async_trait]
impl AssetService for MockAssetService {
    async fn upload(
        &self,
        path: &Path,
        use_random_id: bool,
        resource_type: ResourceType,
    ) -> Result<Vec<UploadResult>> {
        let metadata = std::fs::metadata(path)?;

        if !metadata.is_dir() {
            return Ok(vec![self.record_upload(path, use_random_id, resource_type)]);
        }

        walker::walk_files(path)
            .map(|entry| entry.map(|file| self.record_upload(&file, use_random_id, resource_type)))
            .collect()
    }

    async fn delete(&self, public_id: &str, resource_type: ResourceType) -> Result<DeleteResult> {
        let mut uploaded = self.uploaded.lock().unwrap();
        let result = if uploaded.get(public_id) == Some(&resource_type) {
            uploaded.remove(public_id);
            "ok"
        } else {
            "not found"
        };

        Ok(DeleteResult {
            result: result.to_string(),
        })
    }

    async fn list_upload_mappings(&self) -> Result<UploadMappings> {
        let mappings = self
            .mappings
            .lock()
            .unwrap()
            .iter()
            .map(|(folder, template)| Mapping {
                folder: folder.clone(),
                template: template.clone(),
            })
            .collect();

        Ok(UploadMappings { mappings })
    }

    async fn create_upload_mapping(&self, folder: &str, template: &str) -> Result<MappingMessage> {
        let mut mappings = self.mappings.lock().unwrap();
        if mappings.contains_key(folder) {
            return Err(Error::Api {
                status: StatusCode::CONFLICT,
                message: format!("Mapping for folder {} already exists", folder),
            });
        }
        mappings.insert(folder.to_string(), template.to_string());

        Ok(MappingMessage {
            message: "created".to_string(),
        })
    }

    async fn update_upload_mapping(&self, folder: &str, template: &str) -> Result<MappingMessage> {
        let mut mappings = self.mappings.lock().unwrap();
        match mappings.get_mut(folder) {
            Some(existing) => *existing = template.to_string(),
            None => return Err(Self::missing_mapping(folder)),
        }

        Ok(MappingMessage {
            message: "updated".to_string(),
        })
    }

    async fn delete_upload_mapping(&self, folder: &str) -> Result<MappingMessage> {
        self.mappings
            .lock()
            .unwrap()
            .remove(folder)
            .ok_or_else(|| Self::missing_mapping(folder))?;

        Ok(MappingMessage {
            message: "deleted".to_string(),
        })
    }
}
