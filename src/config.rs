//! Configuration management for reqcurl

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;
use std::time::Duration;

/// Timeout applied when the caller never sets one
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP method enumeration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

impl HttpMethod {
    /// Methods whose payload is carried in the URL query
    pub fn is_read(self) -> bool {
        matches!(self, HttpMethod::Get | HttpMethod::Delete)
    }

    pub fn as_reqwest(self) -> reqwest::Method {
        match self {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Patch => reqwest::Method::PATCH,
            HttpMethod::Delete => reqwest::Method::DELETE,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Delete => "DELETE",
        };
        write!(f, "{}", method)
    }
}

impl FromStr for HttpMethod {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_uppercase().as_str() {
            "GET" => Ok(HttpMethod::Get),
            "POST" => Ok(HttpMethod::Post),
            "PUT" => Ok(HttpMethod::Put),
            "PATCH" => Ok(HttpMethod::Patch),
            "DELETE" => Ok(HttpMethod::Delete),
            _ => Err(()),
        }
    }
}

/// Declared encoding strategy for a payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentType {
    Json,
    Form,
    /// Caller manages both the `Content-Type` header and the body
    Raw,
}

impl ContentType {
    /// Value for the `Content-Type` header, if this type sets one
    pub fn header_value(self) -> Option<&'static str> {
        match self {
            ContentType::Json => Some("application/json"),
            ContentType::Form => Some("application/x-www-form-urlencoded"),
            ContentType::Raw => None,
        }
    }
}

/// A cookie attached to outgoing requests.
///
/// Only `name` and `value` are sent; the remaining fields are kept so callers
/// can carry cookies around with their original attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    pub domain: Option<String>,
    pub path: Option<String>,
    pub secure: bool,
    pub http_only: bool,
    pub expires: Option<i64>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
            domain: None,
            path: None,
            secure: false,
            http_only: false,
            expires: None,
        }
    }
}

/// Per-client request options
#[derive(Debug, Clone)]
pub struct ClientConfig {
    pub host: String,
    pub headers: HashMap<String, String>,
    pub cookies: Vec<Cookie>,
    pub timeout: Duration,
    /// Body sent for [`ContentType::Raw`] requests
    pub body: Option<String>,
}

impl ClientConfig {
    pub fn new(host: impl Into<String>) -> Self {
        ClientConfig {
            host: host.into(),
            ..ClientConfig::default()
        }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        ClientConfig {
            host: String::new(),
            headers: HashMap::new(),
            cookies: Vec::new(),
            timeout: DEFAULT_TIMEOUT,
            body: None,
        }
    }
}
