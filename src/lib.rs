//! Client for the Cloudinary asset-hosting service
//!
//! Uploads local files or whole directory trees with signed multipart
//! requests, deletes assets, and manages upload mappings through the admin API.

pub mod error;
pub mod mime;
pub mod models;
pub mod request;
pub mod service;
pub mod signer;
pub mod transport;
pub mod walker;

pub use error::{Error, Result};
pub use models::ResourceType;
pub use service::{AssetService, MockAssetService, Service};
