// src/core/scanner/stubs.rs

//! In-memory network capabilities for collector and session tests.

use async_trait::async_trait;
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::Settings;
use crate::core::error::TransportError;
use crate::core::scanner::ScanContext;
use crate::core::transport::{FetchedPage, HostResolver, PageFetcher};

/// Serves canned bodies by URL prefix and records every request.
#[derive(Default)]
pub struct StubFetcher {
    routes: Vec<(String, Result<String, String>)>,
    calls: Mutex<Vec<(String, Option<Duration>)>>,
}

impl StubFetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn route(mut self, prefix: &str, body: &str) -> Self {
        self.routes.push((prefix.to_string(), Ok(body.to_string())));
        self
    }

    pub fn fail(mut self, prefix: &str, message: &str) -> Self {
        self.routes.push((prefix.to_string(), Err(message.to_string())));
        self
    }

    pub fn calls(&self) -> Vec<(String, Option<Duration>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl PageFetcher for StubFetcher {
    async fn get(&self, url: &str, timeout: Option<Duration>) -> Result<FetchedPage, TransportError> {
        self.calls.lock().unwrap().push((url.to_string(), timeout));
        match self.routes.iter().find(|(prefix, _)| url.starts_with(prefix.as_str())) {
            Some((_, Ok(body))) => Ok(FetchedPage { status: 200, body: body.clone() }),
            Some((_, Err(message))) => Err(TransportError::Request(message.clone())),
            None => Err(TransportError::Connect(format!("no stub route for {url}"))),
        }
    }
}

pub enum StubResolver {
    Address(String),
    Fail(String),
}

#[async_trait]
impl HostResolver for StubResolver {
    async fn resolve(&self, hostname: &str) -> Result<String, TransportError> {
        match self {
            StubResolver::Address(address) => Ok(address.clone()),
            StubResolver::Fail(reason) => Err(TransportError::Resolve {
                host: hostname.to_string(),
                reason: reason.clone(),
            }),
        }
    }
}

pub fn context(fetcher: Arc<StubFetcher>, resolver: StubResolver) -> ScanContext {
    ScanContext::new(&Settings::default(), fetcher, Arc::new(resolver))
}
