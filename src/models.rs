//! Data models and structures
//!
//! Defines resource types, the JSON payloads exchanged with the upload and
//! admin APIs, and environment-driven configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Classification of an asset. Selects the endpoint path and how the
/// public id is derived from a local path.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ResourceType {
    #[default]
    Image,
    Raw,
}

impl ResourceType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResourceType::Image => "image",
            ResourceType::Raw => "raw",
        }
    }
}

impl fmt::Display for ResourceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResourceType {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "image" => Ok(ResourceType::Image),
            "raw" => Ok(ResourceType::Raw),
            other => Err(format!(
                "Invalid resource type '{}'. Expected 'image' or 'raw'",
                other
            )),
        }
    }
}

/// Response body after uploading a file, e.g.
/// `{"public_id":"Downloads/file","version":1369431906,"format":"png","resource_type":"image"}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResult {
    pub public_id: String,
    pub version: u64,
    #[serde(default)]
    pub format: Option<String>,
    pub resource_type: String,
    #[serde(default)]
    pub bytes: Option<u64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(default)]
    pub secure_url: Option<String>,
}

/// Response body of a destroy call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DeleteResult {
    pub result: String,
}

/// Folder-to-template routing rule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mapping {
    pub folder: String,
    pub template: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UploadMappings {
    #[serde(default)]
    pub mappings: Vec<Mapping>,
}

/// Acknowledgement returned by mapping mutations (`{"message":"created"}`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MappingMessage {
    pub message: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorBody {
    pub message: String,
}

/// `{"error":{"message":"..."}}`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ApiErrorEnvelope {
    pub error: ApiErrorBody,
}

/// Either an error envelope or the expected payload.
///
/// Variant order matters for `#[serde(untagged)]` decoding: the envelope is
/// tried first so payloads with all-optional fields cannot swallow it.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum ApiResponse<T> {
    Failure(ApiErrorEnvelope),
    Success(T),
}

// Configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub cloudinary_url: String,
    pub api_base: Option<String>,
    pub dry_run: bool,
}

impl Config {
    pub fn from_env() -> crate::Result<Self> {
        dotenvy::dotenv().ok();

        Ok(Self {
            cloudinary_url: std::env::var("CLOUDINARY_URL")
                .map_err(|_| crate::Error::Config("CLOUDINARY_URL not set".to_string()))?,
            api_base: std::env::var("CLOUDINARY_API_BASE").ok(),
            dry_run: std::env::var("DRY_RUN")
                .map(|v| matches!(v.to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
                .unwrap_or(false),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_resource_type_parsing() {
        assert_eq!("image".parse::<ResourceType>(), Ok(ResourceType::Image));
        assert_eq!("RAW".parse::<ResourceType>(), Ok(ResourceType::Raw));
        assert!("video".parse::<ResourceType>().is_err());
        assert_eq!(ResourceType::default(), ResourceType::Image);
        assert_eq!(ResourceType::Raw.to_string(), "raw");
    }

    #[test]
    fn test_upload_result_minimal_body() {
        let json = r#"{"public_id":"Downloads/file","version":1369431906,
            "format":"png","resource_type":"image"}"#;
        let result: UploadResult = serde_json::from_str(json).unwrap();

        assert_eq!(result.public_id, "Downloads/file");
        assert_eq!(result.version, 1369431906);
        assert_eq!(result.format.as_deref(), Some("png"));
        assert_eq!(result.resource_type, "image");
        assert!(result.secure_url.is_none());
    }

    #[test]
    fn test_api_response_prefers_error_envelope() {
        let json = r#"{"error":{"message":"Missing required parameter - public_id"}}"#;
        let response: ApiResponse<UploadMappings> = serde_json::from_str(json).unwrap();

        match response {
            ApiResponse::Failure(envelope) => {
                assert_eq!(envelope.error.message, "Missing required parameter - public_id")
            }
            ApiResponse::Success(_) => panic!("error envelope decoded as success"),
        }
    }

    #[test]
    fn test_api_response_success() {
        let json = r#"{"mappings":[{"folder":"wiki","template":"https://example.org/wiki/"}]}"#;
        let response: ApiResponse<UploadMappings> = serde_json::from_str(json).unwrap();

        match response {
            ApiResponse::Success(list) => assert_eq!(
                list.mappings,
                vec![Mapping {
                    folder: "wiki".to_string(),
                    template: "https://example.org/wiki/".to_string(),
                }]
            ),
            ApiResponse::Failure(_) => panic!("payload decoded as failure"),
        }
    }
}
