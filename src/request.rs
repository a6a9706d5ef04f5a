//! Request bodies for the upload, destroy and mapping endpoints.

use crate::mime;
use crate::models::ResourceType;
use crate::signer::Signer;
use crate::Result;
use reqwest::multipart::{Form, Part};

/// Signed multipart upload of a single file.
#[derive(Debug)]
pub struct UploadRequest {
    public_id: Option<String>,
    api_key: String,
    timestamp: i64,
    signature: String,
    file_name: String,
    content: Vec<u8>,
    content_type: &'static str,
}

impl UploadRequest {
    pub fn new(
        signer: &Signer,
        api_key: &str,
        public_id: Option<String>,
        timestamp: i64,
        file_name: String,
        content: Vec<u8>,
        resource_type: ResourceType,
    ) -> Self {
        let signature = signer.sign_request(public_id.as_deref(), timestamp);
        let content_type = mime::content_type_for(&content, resource_type);

        Self {
            public_id,
            api_key: api_key.to_string(),
            timestamp,
            signature,
            file_name,
            content,
            content_type,
        }
    }

    pub fn public_id(&self) -> Option<&str> {
        self.public_id.as_deref()
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    /// Text fields in the order they are written to the form.
    pub fn text_fields(&self) -> Vec<(&'static str, String)> {
        let mut fields = Vec::with_capacity(4);
        if let Some(id) = &self.public_id {
            fields.push(("public_id", id.clone()));
        }
        fields.push(("api_key", self.api_key.clone()));
        fields.push(("timestamp", self.timestamp.to_string()));
        fields.push(("signature", self.signature.clone()));
        fields
    }

    pub fn into_form(self) -> Result<Form> {
        let form = self
            .text_fields()
            .into_iter()
            .fold(Form::new(), |form, (name, value)| form.text(name, value));

        let file = Part::bytes(self.content)
            .file_name(self.file_name)
            .mime_str(self.content_type)?;

        Ok(form.part("file", file))
    }
}

/// Signed urlencoded destroy request.
#[derive(Debug)]
pub struct DestroyRequest {
    api_key: String,
    public_id: String,
    timestamp: i64,
    signature: String,
}

impl DestroyRequest {
    pub fn new(signer: &Signer, api_key: &str, public_id: &str, timestamp: i64) -> Self {
        Self {
            api_key: api_key.to_string(),
            public_id: public_id.to_string(),
            timestamp,
            signature: signer.sign_request(Some(public_id), timestamp),
        }
    }

    pub fn signature(&self) -> &str {
        &self.signature
    }

    pub fn form_params(&self) -> Vec<(&'static str, String)> {
        vec![
            ("api_key", self.api_key.clone()),
            ("public_id", self.public_id.clone()),
            ("timestamp", self.timestamp.to_string()),
            ("signature", self.signature.clone()),
        ]
    }
}

/// Query parameters for the upload-mapping admin endpoint.
pub fn mapping_query<'a>(
    folder: &'a str,
    template: Option<&'a str>,
) -> Vec<(&'static str, &'a str)> {
    let mut query = vec![("folder", folder)];
    if let Some(template) = template {
        query.push(("template", template));
    }
    query
}
