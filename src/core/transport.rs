// src/core/transport.rs

//! Network capabilities consumed by the collectors.
//!
//! Collectors only see the `PageFetcher` and `HostResolver` traits, so the
//! session can be driven by stubs in tests.

use async_trait::async_trait;
use hickory_resolver::TokioAsyncResolver;
use hickory_resolver::config::{ResolverConfig, ResolverOpts};
use std::time::Duration;
use tracing::{debug, warn};

use crate::core::error::TransportError;

/// A successfully fetched response body.
#[derive(Debug, Clone)]
pub struct FetchedPage {
    pub status: u16,
    pub body: String,
}

#[async_trait]
pub trait PageFetcher: Send + Sync {
    /// Issues a GET. Timeouts, connection failures and non-2xx statuses are all
    /// reported as `TransportError`.
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<FetchedPage, TransportError>;
}

#[async_trait]
pub trait HostResolver: Send + Sync {
    /// Forward lookup; the first address returned wins.
    async fn resolve(&self, hostname: &str) -> Result<String, TransportError>;
}

// --- reqwest ---

pub struct HttpFetcher {
    client: reqwest::Client,
}

impl HttpFetcher {
    pub fn new(user_agent: &str) -> Result<Self, TransportError> {
        let client = reqwest::Client::builder().user_agent(user_agent).build()?;
        Ok(Self { client })
    }
}

#[async_trait]
impl PageFetcher for HttpFetcher {
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<FetchedPage, TransportError> {
        let mut request = self.client.get(url);
        if let Some(timeout) = timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await?.error_for_status()?;
        let status = response.status().as_u16();
        debug!(url, status, "Received HTTP response.");

        let body = response.text().await?;
        debug!(bytes = %body.len(), "Read response body.");
        Ok(FetchedPage { status, body })
    }
}

// --- hickory ---

pub struct SystemResolver {
    resolver: TokioAsyncResolver,
}

impl SystemResolver {
    /// Uses the host's resolver configuration, falling back to the library
    /// defaults when it cannot be read.
    pub fn new() -> Self {
        let resolver = TokioAsyncResolver::tokio_from_system_conf().unwrap_or_else(|e| {
            warn!(error = %e, "Could not read system resolver configuration, using defaults.");
            TokioAsyncResolver::tokio(ResolverConfig::default(), ResolverOpts::default())
        });
        Self { resolver }
    }
}

impl Default for SystemResolver {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HostResolver for SystemResolver {
    async fn resolve(&self, hostname: &str) -> Result<String, TransportError> {
        let lookup = self
            .resolver
            .lookup_ip(hostname)
            .await
            .map_err(|e| TransportError::Resolve {
                host: hostname.to_string(),
                reason: e.to_string(),
            })?;

        lookup
            .iter()
            .next()
            .map(|ip| ip.to_string())
            .ok_or_else(|| TransportError::NoAddress(hostname.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;

    // Proxy variables in the environment must not reroute loopback requests.
    fn local_fetcher() -> HttpFetcher {
        HttpFetcher {
            client: reqwest::Client::builder().no_proxy().build().unwrap(),
        }
    }

    /// Answers a single request with `status_line` and `body`, then closes.
    async fn serve_once(status_line: &'static str, body: &'static str) -> String {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 4096];
            let _ = socket.read(&mut request).await;
            let response = format!(
                "HTTP/1.1 {status_line}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
                body.len()
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
        });
        format!("http://{addr}/")
    }

    #[tokio::test]
    async fn ok_response_returns_body_unchanged() {
        let url = serve_once("200 OK", "<a href=\"/about\">About</a>").await;
        let page = local_fetcher().get(&url, Some(Duration::from_secs(5))).await.unwrap();
        assert_eq!(page.status, 200);
        assert_eq!(page.body, "<a href=\"/about\">About</a>");
    }

    #[tokio::test]
    async fn not_found_is_a_status_error_not_a_page() {
        let url = serve_once("404 Not Found", "admin").await;
        let result = local_fetcher().get(&url, Some(Duration::from_secs(5))).await;
        assert!(
            matches!(result, Err(TransportError::Status { status: 404, .. })),
            "unexpected result {result:?}"
        );
    }

    #[tokio::test]
    async fn silent_server_times_out() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            // Accept and hold the connection without ever answering.
            let (_socket, _) = listener.accept().await.unwrap();
            tokio::time::sleep(Duration::from_secs(30)).await;
        });

        let result = local_fetcher()
            .get(&format!("http://{addr}/"), Some(Duration::from_millis(200)))
            .await;
        assert!(matches!(result, Err(TransportError::Timeout(_))), "unexpected result {result:?}");
    }
}
