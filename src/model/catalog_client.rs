//! Google Books catalog client

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;

use super::content::{CatalogPage, VolumesResponse};
use super::query::RequestParams;
use crate::error::CatalogError;
use crate::{log_api_request, log_api_result};

/// A source of paged book search results
#[async_trait]
pub trait Catalog: Send + Sync {
    async fn search(&self, params: &RequestParams) -> Result<CatalogPage, CatalogError>;
}

#[derive(Clone)]
pub struct GoogleBooksClient {
    http: Client,
    base_url: String,
}

impl GoogleBooksClient {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, CatalogError> {
        let http = Client::builder()
            .timeout(timeout)
            .user_agent(concat!("book-finder/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }
}

#[async_trait]
impl Catalog for GoogleBooksClient {
    async fn search(&self, params: &RequestParams) -> Result<CatalogPage, CatalogError> {
        let url = params.to_url(&self.base_url);
        log_api_request!("search_volumes", url = %url, offset = params.offset);

        let result = fetch_page(&self.http, &url).await;
        log_api_result!("search_volumes", result);
        result
    }
}

async fn fetch_page(http: &Client, url: &str) -> Result<CatalogPage, CatalogError> {
    let response = http.get(url).send().await?;

    let status = response.status();
    if !status.is_success() {
        return Err(CatalogError::Status(status.as_u16()));
    }

    // Read the body first so decode failures surface as `Decode`, not `Transport`
    let body = response.bytes().await?;
    let decoded: VolumesResponse = serde_json::from_slice(&body)?;
    Ok(decoded.into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::query::build_request;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    /// Serves one canned HTTP response on a local port and returns the base url
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buf = [0u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = socket.read(&mut buf).await.unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            let response = format!(
                "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                status_line,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            socket.shutdown().await.unwrap();
        });

        format!("http://{}/books/v1/volumes", addr)
    }

    async fn search(base_url: String) -> Result<CatalogPage, CatalogError> {
        let client = GoogleBooksClient::new(base_url, Duration::from_secs(5)).unwrap();
        client.search(&build_request("rust lang", 1, 10)).await
    }

    #[tokio::test]
    async fn test_error_status_maps_to_status() {
        let url = serve_once("503 Service Unavailable", "{}").await;
        let result = search(url).await;
        assert!(matches!(result, Err(CatalogError::Status(503))), "{:?}", result.err());
    }

    #[tokio::test]
    async fn test_malformed_body_maps_to_decode() {
        let url = serve_once("200 OK", "{not json").await;
        let result = search(url).await;
        assert!(matches!(result, Err(CatalogError::Decode(_))), "{:?}", result.err());
    }

    #[tokio::test]
    async fn test_body_without_items_is_an_empty_page() {
        let url = serve_once("200 OK", r#"{"kind":"books#volumes","totalItems":0}"#).await;
        let page = search(url).await.unwrap();
        assert!(page.volumes.is_empty());
        assert_eq!(page.total_items, 0);
    }

    #[tokio::test]
    async fn test_volumes_are_decoded() {
        let url = serve_once(
            "200 OK",
            r#"{"totalItems":42,"items":[{"id":"zyTCAlFPjgYC","volumeInfo":{"title":"The Google Story"}}]}"#,
        )
        .await;
        let page = search(url).await.unwrap();
        assert_eq!(page.total_items, 42);
        assert_eq!(page.volumes.len(), 1);
        assert_eq!(page.volumes[0].id, "zyTCAlFPjgYC");
    }
}
