//! Anonymous file-host upload of the compressed artifact.
//!
//! The host accepts a multipart POST with a named file part plus an expiry
//! hint, and answers with JSON carrying the public link under `data.link`.
//! A response without that field is treated as a failed upload, with the raw
//! body surfaced for diagnosis.

use reqwest::multipart::{Form, Part};
use serde::Deserialize;

use crate::config::UploadConfig;
use crate::errors::{Error, Result};

#[derive(Debug, Deserialize)]
struct UploadResponse {
    data: Option<UploadData>,
}

#[derive(Debug, Deserialize)]
struct UploadData {
    link: Option<String>,
}

/// Derive the upload filename from the source URL's final path segment,
/// with `.gz` appended. Falls back to `document.gz` when the URL has no
/// usable basename (e.g. `https://host/`).
pub fn gz_filename(file_url: &str) -> String {
    let basename = url::Url::parse(file_url)
        .ok()
        .and_then(|u| u.path_segments().and_then(|mut segments| segments.next_back().map(str::to_string)))
        .filter(|s| !s.is_empty())
        .unwrap_or_else(|| "document".to_string());
    format!("{basename}.gz")
}

/// Upload the compressed bytes and return the public link from the host's response.
pub async fn publish(client: &reqwest::Client, config: &UploadConfig, filename: &str, gzipped: Vec<u8>) -> Result<String> {
    tracing::debug!(endpoint = %config.endpoint, filename, bytes = gzipped.len(), "Uploading compressed file");

    let form = Form::new()
        .part("file", Part::bytes(gzipped).file_name(filename.to_string()))
        .text("expires", config.expires.clone());

    let response = client
        .post(config.endpoint.clone())
        .multipart(form)
        .send()
        .await
        .map_err(|e| Error::Upload { raw_response: e.to_string() })?;

    let body = response
        .text()
        .await
        .map_err(|e| Error::Upload { raw_response: e.to_string() })?;

    // The host signals failure through the body shape, not the status code:
    // anything without data.link is a failed upload.
    let link = serde_json::from_str::<UploadResponse>(&body)
        .ok()
        .and_then(|r| r.data)
        .and_then(|d| d.link);

    match link {
        Some(link) => Ok(link),
        None => {
            tracing::warn!(body = %body, "Upload response missing link field");
            Err(Error::Upload { raw_response: body })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn test_upload_config(host: &MockServer) -> UploadConfig {
        UploadConfig {
            endpoint: url::Url::parse(&host.uri()).expect("mock server URI"),
            expires: "1d".to_string(),
        }
    }

    #[test]
    fn test_gz_filename_from_url_basename() {
        assert_eq!(gz_filename("https://example.test/files/invoice.pdf"), "invoice.pdf.gz");
        assert_eq!(gz_filename("https://example.test/report"), "report.gz");
    }

    #[test]
    fn test_gz_filename_falls_back_without_basename() {
        assert_eq!(gz_filename("https://example.test/"), "document.gz");
        assert_eq!(gz_filename("not a url"), "document.gz");
    }

    #[tokio::test]
    async fn test_publish_extracts_link() {
        let host = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(serde_json::json!({"success": true, "data": {"link": "https://example.test/abc"}})),
            )
            .expect(1)
            .mount(&host)
            .await;

        let client = reqwest::Client::new();
        let link = publish(&client, &test_upload_config(&host), "file.pdf.gz", b"gz bytes".to_vec())
            .await
            .expect("upload should succeed");
        assert_eq!(link, "https://example.test/abc");
    }

    #[tokio::test]
    async fn test_publish_sends_filename_and_expiry() {
        let host = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"data": {"link": "https://example.test/x"}})))
            .expect(1)
            .mount(&host)
            .await;

        let client = reqwest::Client::new();
        publish(&client, &test_upload_config(&host), "invoice.pdf.gz", b"payload".to_vec())
            .await
            .expect("upload should succeed");

        let requests = host.received_requests().await.expect("requests recorded");
        let body = String::from_utf8_lossy(&requests[0].body);
        assert!(body.contains(r#"filename="invoice.pdf.gz""#), "multipart body: {body}");
        assert!(body.contains(r#"name="expires""#), "multipart body: {body}");
        assert!(body.contains("1d"), "multipart body: {body}");
    }

    #[tokio::test]
    async fn test_publish_fails_when_link_missing() {
        let host = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"success": false, "message": "quota"})))
            .expect(1)
            .mount(&host)
            .await;

        let client = reqwest::Client::new();
        let err = publish(&client, &test_upload_config(&host), "file.gz", b"payload".to_vec())
            .await
            .unwrap_err();
        match err {
            Error::Upload { raw_response } => {
                assert!(raw_response.contains("quota"), "raw body should be surfaced: {raw_response}");
            }
            other => panic!("expected Upload error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_publish_fails_on_unparseable_response() {
        let host = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway timeout</html>"))
            .mount(&host)
            .await;

        let client = reqwest::Client::new();
        let err = publish(&client, &test_upload_config(&host), "file.gz", b"payload".to_vec())
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Upload { .. }));
    }
}
