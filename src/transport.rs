//! HTTP transport and JSON response decoding.

use crate::models::{ApiErrorEnvelope, ApiResponse};
use crate::{Error, Result};
use reqwest::{Client, RequestBuilder, StatusCode};
use serde::de::DeserializeOwned;

/// Thin wrapper over a shared `reqwest::Client`.
#[derive(Debug, Clone, Default)]
pub struct Transport {
    pub(crate) client: Client,
}

impl Transport {
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// Send a request and decode its JSON body into `T`.
    pub async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> Result<T> {
        let response = request.send().await.map_err(|e| {
            tracing::error!("Failed to send request to Cloudinary: {}", e);
            e
        })?;

        let status = response.status();
        let body = response.text().await?;
        decode_response(status, &body)
    }
}

/// Decode a response body.
///
/// Non-success statuses surface the `{"error":{"message":...}}` message, or
/// the bare status line when the body carries no such envelope. Success
/// bodies decode into `T`; an error envelope is still reported as an error.
pub fn decode_response<T: DeserializeOwned>(status: StatusCode, body: &str) -> Result<T> {
    if !status.is_success() {
        return Err(match serde_json::from_str::<ApiErrorEnvelope>(body) {
            Ok(envelope) => {
                tracing::error!(
                    "Cloudinary API error (status {}): {}",
                    status,
                    envelope.error.message
                );
                Error::Api {
                    status,
                    message: envelope.error.message,
                }
            }
            Err(_) => {
                tracing::error!("Cloudinary request failed (status {}): {}", status, body);
                Error::Status(status)
            }
        });
    }

    match serde_json::from_str::<ApiResponse<T>>(body) {
        Ok(ApiResponse::Success(value)) => Ok(value),
        Ok(ApiResponse::Failure(envelope)) => Err(Error::Api {
            status,
            message: envelope.error.message,
        }),
        Err(_) => {
            // Re-decode as `T` so the error names the offending field.
            serde_json::from_str::<T>(body).map_err(|e| {
                tracing::error!("Failed to parse Cloudinary response: {}\nBody: {}", e, body);
                Error::Decode(e)
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{DeleteResult, UploadMappings};
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[test]
    fn test_error_envelope_message_surfaces_verbatim() {
        let err = decode_response::<DeleteResult>(
            StatusCode::BAD_REQUEST,
            r#"{"error":{"message":"Missing required parameter - public_id"}}"#,
        )
        .unwrap_err();

        assert!(matches!(err, Error::Api { status, .. } if status == StatusCode::BAD_REQUEST));
        assert_eq!(err.to_string(), "Missing required parameter - public_id");
    }

    #[test]
    fn test_non_success_without_envelope_uses_status_line() {
        let err = decode_response::<DeleteResult>(StatusCode::UNAUTHORIZED, r#"{"oops":true}"#)
            .unwrap_err();

        assert!(matches!(err, Error::Status(status) if status == StatusCode::UNAUTHORIZED));
        assert_eq!(err.to_string(), "Request error: 401 Unauthorized");
    }

    #[test]
    fn test_success_with_error_envelope_is_an_error() {
        let err = decode_response::<UploadMappings>(
            StatusCode::OK,
            r#"{"error":{"message":"Invalid folder"}}"#,
        )
        .unwrap_err();

        assert_eq!(err.to_string(), "Invalid folder");
    }

    #[test]
    fn test_malformed_success_body_is_decode_error() {
        let err = decode_response::<DeleteResult>(StatusCode::OK, "not json").unwrap_err();
        assert!(matches!(err, Error::Decode(_)));

        let err = decode_response::<DeleteResult>(StatusCode::OK, r#"{"other":1}"#).unwrap_err();
        assert!(matches!(err, Error::Decode(_)));
    }

    #[test]
    fn test_success_body_decodes() {
        let result = decode_response::<DeleteResult>(StatusCode::OK, r#"{"result":"ok"}"#).unwrap();
        assert_eq!(result.result, "ok");
    }

    #[tokio::test]
    async fn test_send_decodes_json_body() {
        let server = MockServer::start().await;

        Mock::given(method("GET"))
            .and(path("/demo/upload_mappings"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "mappings": [{ "folder": "wiki", "template": "https://example.org/" }]
            })))
            .mount(&server)
            .await;

        let transport = Transport::default();
        let request = transport
            .client()
            .get(format!("{}/demo/upload_mappings", server.uri()));
        let list: UploadMappings = transport.send(request).await.unwrap();

        assert_eq!(list.mappings.len(), 1);
        assert_eq!(list.mappings[0].folder, "wiki");
    }
}
