//! HTTP client module
//!
//! [`Client`] owns the request options and a transport. Every call is one
//! blocking round trip: build the request, send it, return the body bytes.
//! The response status is not interpreted, so a 404 or 500 body comes back
//! as `Ok` like any other.

use std::collections::HashMap;
use std::time::Duration;

use log::debug;

use crate::config::{ClientConfig, ContentType, Cookie, HttpMethod};
use crate::error::Result;
use crate::payload::Payload;

pub mod request;
pub mod response;
pub mod transport;

pub use request::{PreparedRequest, RequestBuilder};
pub use response::{RawResponse, ResponseFormatter};
pub use transport::{ReqwestTransport, Transport};

/// HTTP client wrapper.
///
/// Setters take `&mut self` and requests take `&self`, so options cannot
/// change under a request in flight. Sharing one client across threads is
/// left to the caller.
#[derive(Debug, Clone)]
pub struct Client<T = ReqwestTransport> {
    config: ClientConfig,
    transport: T,
}

impl Client<ReqwestTransport> {
    /// Create a client for `host` backed by reqwest
    pub fn new(host: impl Into<String>) -> Result<Self> {
        Ok(Self::with_transport(host, ReqwestTransport::new()?))
    }
}

impl<T: Transport> Client<T> {
    pub fn with_transport(host: impl Into<String>, transport: T) -> Self {
        Self::from_config(ClientConfig::new(host), transport)
    }

    pub fn from_config(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Replace all request headers
    pub fn set_headers(&mut self, headers: HashMap<String, String>) -> &mut Self {
        self.config.headers = headers;
        self
    }

    /// Replace all request cookies
    pub fn set_cookies(&mut self, cookies: Vec<Cookie>) -> &mut Self {
        self.config.cookies = cookies;
        self
    }

    pub fn set_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.config.timeout = timeout;
        self
    }

    /// Body sent with [`ContentType::Raw`] requests
    pub fn set_body(&mut self, body: impl Into<String>) -> &mut Self {
        self.config.body = Some(body.into());
        self
    }

    pub fn get(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Get, payload, ContentType::Json)
    }

    pub fn delete(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Delete, payload, ContentType::Json)
    }

    pub fn post(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Post, payload, ContentType::Json)
    }

    pub fn post_by_form(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Post, payload, ContentType::Form)
    }

    pub fn put(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Put, payload, ContentType::Json)
    }

    pub fn put_by_form(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Put, payload, ContentType::Form)
    }

    pub fn patch(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Patch, payload, ContentType::Json)
    }

    pub fn patch_by_form(&self, path: &str, payload: impl Into<Payload>) -> Result<Vec<u8>> {
        self.request(path, HttpMethod::Patch, payload, ContentType::Form)
    }

    /// Build and send one request, returning the raw response body
    pub fn request(
        &self,
        path: &str,
        method: HttpMethod,
        payload: impl Into<Payload>,
        content_type: ContentType,
    ) -> Result<Vec<u8>> {
        let request = self.prepare(path, method, &payload.into(), content_type)?;
        self.execute(&request)
    }

    /// Build the request without sending it
    pub fn prepare(
        &self,
        path: &str,
        method: HttpMethod,
        payload: &Payload,
        content_type: ContentType,
    ) -> Result<PreparedRequest> {
        RequestBuilder::new(&self.config).prepare(path, method, payload, content_type)
    }

    /// Send a prepared request with the configured timeout
    pub fn execute(&self, request: &PreparedRequest) -> Result<Vec<u8>> {
        let response = self.transport.send(request, self.config.timeout)?;
        if !(200..300).contains(&response.status) {
            debug!("{} {} returned {}", request.method, request.url, response.status);
        }
        Ok(response.body)
    }
}
