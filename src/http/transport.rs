//! Network transports
//!
//! The request core never opens sockets itself. A [`Transport`] takes a
//! [`PreparedRequest`] and hands back the raw response; [`ReqwestTransport`]
//! is the default, built on `reqwest::blocking`.

use std::time::Duration;

use log::debug;
use reqwest::blocking::{Client, ClientBuilder};

use super::request::PreparedRequest;
use super::response::RawResponse;
use crate::error::{Result, ReqcurlError};

/// Sends a prepared request and returns whatever the server answered.
///
/// Implementations must not treat non-2xx statuses as errors.
pub trait Transport {
    fn send(&self, request: &PreparedRequest, timeout: Duration) -> Result<RawResponse>;
}

impl<T: Transport + ?Sized> Transport for &T {
    fn send(&self, request: &PreparedRequest, timeout: Duration) -> Result<RawResponse> {
        (**self).send(request, timeout)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn send(&self, request: &PreparedRequest, timeout: Duration) -> Result<RawResponse> {
        (**self).send(request, timeout)
    }
}

/// Longest timeout handed to reqwest. Larger values overflow its deadline arithmetic.
pub const MAX_TIMEOUT: Duration = Duration::from_secs(365 * 24 * 60 * 60);

/// Blocking transport over reqwest
#[derive(Debug, Clone)]
pub struct ReqwestTransport {
    client: Client,
}

impl ReqwestTransport {
    /// Create a transport with redirects disabled
    pub fn new() -> Result<Self> {
        let client = ClientBuilder::new()
            .redirect(reqwest::redirect::Policy::none())
            .user_agent(format!("reqcurl/{}", crate::VERSION))
            .build()
            .map_err(ReqcurlError::Http)?;

        Ok(Self { client })
    }

    /// Wrap an already configured reqwest client
    pub fn from_client(client: Client) -> Self {
        Self { client }
    }
}

impl Transport for ReqwestTransport {
    fn send(&self, request: &PreparedRequest, timeout: Duration) -> Result<RawResponse> {
        let mut builder = self
            .client
            .request(request.method.as_reqwest(), request.url.as_str())
            .timeout(timeout.min(MAX_TIMEOUT));

        for (name, value) in &request.headers {
            builder = builder.header(name.as_str(), value.as_str());
        }

        if !request.body.is_empty() {
            builder = builder.body(request.body.clone());
        }

        let response = builder.send().map_err(transport_error)?;
        let status = response.status().as_u16();
        let headers = response
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();
        let body = response.bytes().map_err(transport_error)?.to_vec();

        debug!("< {} ({} bytes)", status, body.len());

        Ok(RawResponse {
            status,
            headers,
            body,
        })
    }
}

fn transport_error(err: reqwest::Error) -> ReqcurlError {
    if err.is_timeout() {
        ReqcurlError::Timeout
    } else {
        ReqcurlError::Http(err)
    }
}
