//! Request construction
//!
//! Turns a path, method, payload and content type into a [`PreparedRequest`]:
//! read methods carry map payloads in the query string, write methods carry
//! them in the body encoded per content type.

use std::collections::BTreeMap;

use log::{debug, trace};
use url::{form_urlencoded, Url};

use crate::config::{ClientConfig, ContentType, Cookie, HttpMethod};
use crate::error::{Result, ReqcurlError};
use crate::payload::Payload;

/// An unsent request, ready for a [`Transport`](super::Transport)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PreparedRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl PreparedRequest {
    pub fn new(method: HttpMethod, url: impl Into<String>, body: impl Into<String>) -> Self {
        PreparedRequest {
            method,
            url: url.into(),
            headers: Vec::new(),
            body: body.into(),
        }
    }

    /// Look up a header by case-insensitive name
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Set a header, replacing any existing header with the same name
    pub fn set_header(&mut self, name: &str, value: &str) {
        self.headers.retain(|(key, _)| !key.eq_ignore_ascii_case(name));
        self.headers.push((name.to_string(), value.to_string()));
    }
}

/// Builds requests from a client configuration
pub struct RequestBuilder<'a> {
    config: &'a ClientConfig,
}

impl<'a> RequestBuilder<'a> {
    pub fn new(config: &'a ClientConfig) -> Self {
        Self { config }
    }

    /// Build the full request for one call
    pub fn prepare(
        &self,
        path: &str,
        method: HttpMethod,
        payload: &Payload,
        content_type: ContentType,
    ) -> Result<PreparedRequest> {
        let url = self.resolve_url(path);
        let (url, body) = self.encode_payload(url, method, content_type, payload)?;
        Url::parse(&url)
            .map_err(|e| ReqcurlError::InvalidUrl(format!("Invalid URL '{}': {}", url, e)))?;

        debug!("{} {} ({:?})", method, url, content_type);
        trace!("request body: {} bytes", body.len());

        Ok(self.build_request(method, url, body, content_type))
    }

    /// Join host and path. No slash normalization is done.
    pub fn resolve_url(&self, path: &str) -> String {
        format!("{}{}", self.config.host, path)
    }

    /// Encode the payload into the URL and the body, returning both
    pub fn encode_payload(
        &self,
        url: String,
        method: HttpMethod,
        content_type: ContentType,
        payload: &Payload,
    ) -> Result<(String, String)> {
        let url = if method.is_read() {
            match payload {
                Payload::Empty => url,
                Payload::Text(text) => append_raw_query(url, text),
                Payload::Map(pairs) => replace_query(&url, pairs)?,
            }
        } else {
            url
        };

        let body = match (content_type, payload) {
            (ContentType::Raw, _) => self.config.body.clone().unwrap_or_default(),
            _ if method.is_read() => String::new(),
            (_, Payload::Empty) => String::new(),
            (_, Payload::Text(text)) => text.clone(),
            (ContentType::Json, Payload::Map(pairs)) => serde_json::to_string(pairs)?,
            (ContentType::Form, Payload::Map(pairs)) => encode_pairs(pairs),
        };

        Ok((url, body))
    }

    /// Attach content type, configured headers and cookies
    pub fn build_request(
        &self,
        method: HttpMethod,
        url: String,
        body: String,
        content_type: ContentType,
    ) -> PreparedRequest {
        let mut request = PreparedRequest::new(method, url, body);

        if let Some(value) = content_type.header_value() {
            request.set_header("Content-Type", value);
        }

        // Sorted so names differing only in case resolve the same way every time.
        let mut headers: Vec<_> = self.config.headers.iter().collect();
        headers.sort();
        for (name, value) in headers {
            request.set_header(name, value);
        }

        if !self.config.cookies.is_empty() {
            let mut value = cookies_to_header(&self.config.cookies);
            if let Some(existing) = request.header("Cookie") {
                value = format!("{}; {}", existing, value);
            }
            request.set_header("Cookie", &value);
        }

        request
    }
}

fn encode_pairs(pairs: &BTreeMap<String, String>) -> String {
    form_urlencoded::Serializer::new(String::new())
        .extend_pairs(pairs)
        .finish()
}

// The encoded pairs become the whole query; anything already in the path is dropped.
fn replace_query(url: &str, pairs: &BTreeMap<String, String>) -> Result<String> {
    let mut parsed = Url::parse(url)
        .map_err(|e| ReqcurlError::InvalidUrl(format!("Invalid URL '{}': {}", url, e)))?;
    let query = encode_pairs(pairs);
    parsed.set_query(if query.is_empty() { None } else { Some(&query) });
    Ok(parsed.to_string())
}

fn append_raw_query(url: String, text: &str) -> String {
    let query = text.strip_prefix('?').unwrap_or(text);
    if query.is_empty() {
        return url;
    }
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}", url, separator, query)
}

fn cookies_to_header(cookies: &[Cookie]) -> String {
    cookies
        .iter()
        .map(|cookie| format!("{}={}", cookie.name, cookie.value))
        .collect::<Vec<_>>()
        .join("; ")
}
