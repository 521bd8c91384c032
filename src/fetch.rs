//! Loading raw page markup.
//!
//! Pages come either from the listing site over HTTP or from HTML files saved
//! on disk. Nothing here retries: a failed fetch is reported to the caller,
//! which decides whether to skip the tender.

use crate::error::{Error, Result};
use crate::utils::is_remote_source;
use reqwest::Client;
use std::time::Duration;
use tokio::fs;
use tracing::{debug, info, instrument};

/// User-Agent string for page requests.
pub const USER_AGENT: &str = concat!("tender_scrape/", env!("CARGO_PKG_VERSION"));

/// Build the HTTP client used for every page fetch.
pub fn build_client(timeout: Duration) -> Result<Client> {
    let client = Client::builder()
        .user_agent(USER_AGENT)
        .timeout(timeout)
        .build()?;
    Ok(client)
}

/// GET `url` and return the response body as text.
///
/// # Arguments
///
/// * `client` - Client from [`build_client`] (user agent and timeout set)
/// * `url` - Absolute `http(s)` URL of the page
///
/// # Returns
///
/// The decoded body of a 2xx response.
///
/// # Errors
///
/// Returns [`Error::Http`] on transport failures, timeouts, and non-success
/// statuses. Nothing is retried.
#[instrument(level = "info", skip(client))]
pub async fn fetch_document(client: &Client, url: &str) -> Result<String> {
    let response = client.get(url).send().await?.error_for_status()?;
    let body = response.text().await?;
    info!(bytes = body.len(), "Fetched page");
    Ok(body)
}

/// Load markup from an `http(s)` URL or a local file path.
#[instrument(level = "info", skip(client))]
pub async fn load_source(client: &Client, source: &str) -> Result<String> {
    if is_remote_source(source) {
        return fetch_document(client, source).await;
    }

    let body = fs::read_to_string(source)
        .await
        .map_err(|e| Error::io(source, e))?;
    debug!(bytes = body.len(), "Read page from disk");
    Ok(body)
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client() -> Client {
        build_client(Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_document_returns_body() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tender/1"))
            .and(header("user-agent", USER_AGENT))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>ok</html>"))
            .mount(&server)
            .await;

        let body = fetch_document(&client(), &format!("{}/tender/1", server.uri()))
            .await
            .unwrap();
        assert_eq!(body, "<html>ok</html>");
    }

    #[tokio::test]
    async fn test_fetch_document_rejects_error_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tender/404"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let result = fetch_document(&client(), &format!("{}/tender/404", server.uri())).await;
        assert!(matches!(result, Err(Error::Http(_))));
    }

    #[tokio::test]
    async fn test_load_source_reads_local_file() {
        let file = std::env::temp_dir().join(format!("tender_scrape_fetch_{}.html", std::process::id()));
        std::fs::write(&file, "<p>saved</p>").unwrap();

        let body = load_source(&client(), &file.to_string_lossy()).await.unwrap();
        assert_eq!(body, "<p>saved</p>");

        std::fs::remove_file(&file).unwrap();
    }

    #[tokio::test]
    async fn test_load_source_missing_file() {
        let result = load_source(&client(), "/definitely/not/here.html").await;
        assert!(matches!(result, Err(Error::Io { .. })));
    }
}
