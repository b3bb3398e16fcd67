//! reqcurl - a small HTTP request helper
//!
//! Builds one request from a host, a path, a method, a payload and a content
//! type, sends it through a pluggable transport and hands back the raw
//! response body. Read methods (GET, DELETE) carry map payloads in the query
//! string; write methods (POST, PUT, PATCH) carry them in a JSON or form body.
//!
//! ```no_run
//! use reqcurl::{Client, Payload};
//!
//! # fn main() -> reqcurl::Result<()> {
//! let client = Client::new("http://localhost:8083")?;
//! let body = client.get("/items", Payload::map([("namespace", "1")]))?;
//! println!("{}", String::from_utf8_lossy(&body));
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod exit_code;
pub mod http;
pub mod logging;
pub mod output;
pub mod payload;
pub mod utils;

pub use config::{ClientConfig, ContentType, Cookie, HttpMethod};
pub use error::{ReqcurlError, Result};
pub use http::{Client, PreparedRequest, RawResponse, RequestBuilder, ReqwestTransport, Transport};
pub use payload::Payload;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
