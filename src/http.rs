use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client as ReqwestClient, ClientBuilder};
use std::time::Duration;

use crate::config::UploadConfig;
use crate::error::Result;
use crate::models::{SelectedFile, UploadResponse};

/// The upload mechanism the controller hands valid files to.
///
/// Opaque to the core: the controller records the returned status for
/// observation and never branches on it. Test code substitutes stubs here.
#[async_trait]
pub trait Transport {
    /// Submit one file, returning the transport's reported status.
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse>;
}

/// HTTP transport posting files to the configured endpoint as a
/// multipart form.
pub struct HttpTransport {
    client: ReqwestClient,
    config: UploadConfig,
}

impl HttpTransport {
    /// Create a new HTTP transport with the given configuration
    pub fn new(config: UploadConfig) -> Result<Self> {
        config.validate()?;

        let client = ClientBuilder::new()
            .user_agent("uploadwidget-rust/0.1")
            .timeout(Duration::from_secs(config.get_timeout_seconds()))
            .build()?;

        Ok(Self { client, config })
    }
}

#[async_trait]
impl Transport for HttpTransport {
    async fn upload(&self, file: &SelectedFile) -> Result<UploadResponse> {
        let part = Part::bytes(file.content.clone())
            .file_name(file.name.clone())
            .mime_str(&file.mime_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .client
            .post(&self.config.upload_url)
            .multipart(form)
            .send()
            .await?;

        let status = response.status().as_u16();
        let body = response.bytes().await?;

        log::debug!("upload of {} returned status {}", file.name, status);

        // Status and body pass through uninterpreted; non-2xx is the
        // caller's concern.
        Ok(UploadResponse {
            status,
            body: serde_json::from_slice(&body).ok(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn config(url: String) -> UploadConfig {
        UploadConfig {
            max_size: 10,
            accepted_mime_type: "text/plain".to_string(),
            upload_url: url,
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn test_transport_new_validates_config() {
        let transport = HttpTransport::new(config("".to_string()));
        assert!(transport.is_err());

        let transport = HttpTransport::new(config("https://uploads.example.com".to_string()));
        assert!(transport.is_ok());
    }

    #[tokio::test]
    async fn test_upload_posts_multipart_and_returns_status() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/single")
            .match_header(
                "content-type",
                mockito::Matcher::Regex("multipart/form-data.*".to_string()),
            )
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "ok": true }).to_string())
            .create_async()
            .await;

        let transport = HttpTransport::new(config(format!("{}/single", server.url()))).unwrap();
        let file = SelectedFile::new("foo.txt", "text/plain", b"27".to_vec());

        let response = transport.upload(&file).await.unwrap();

        assert_eq!(response.status, 200);
        assert_eq!(response.body.unwrap()["ok"], true);

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_passes_non_2xx_status_through() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/single")
            .with_status(500)
            .with_body("upload rejected")
            .create_async()
            .await;

        let transport = HttpTransport::new(config(format!("{}/single", server.url()))).unwrap();
        let file = SelectedFile::new("foo.txt", "text/plain", b"27".to_vec());

        // A 500 is not an error at this layer, just a status to report
        let response = transport.upload(&file).await.unwrap();

        assert_eq!(response.status, 500);
        assert!(response.body.is_none());

        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_upload_ignores_unparseable_body() {
        let mut server = mockito::Server::new_async().await;

        let _m = server
            .mock("POST", "/single")
            .with_status(201)
            .with_body("plain text ack")
            .create_async()
            .await;

        let transport = HttpTransport::new(config(format!("{}/single", server.url()))).unwrap();
        let file = SelectedFile::new("foo.txt", "text/plain", b"27".to_vec());

        let response = transport.upload(&file).await.unwrap();

        assert_eq!(response.status, 201);
        assert!(response.body.is_none());
    }
}
