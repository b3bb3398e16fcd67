//! HTTP response handling and formatting

use crate::error::Result;
use serde_json::Value;

/// A response as returned by a transport
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<Vec<u8>>) -> Self {
        RawResponse {
            status,
            headers: Vec::new(),
            body: body.into(),
        }
    }

    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Response formatter for different output formats
pub struct ResponseFormatter {
    format_json: bool,
}

impl ResponseFormatter {
    pub fn new(format_json: bool) -> Self {
        Self { format_json }
    }

    /// Format a response body, pretty printing it when it holds JSON
    pub fn format(&self, body: &[u8]) -> Result<Vec<u8>> {
        if self.format_json && looks_like_json(body) {
            self.format_json_body(body)
        } else {
            Ok(body.to_vec())
        }
    }

    fn format_json_body(&self, body: &[u8]) -> Result<Vec<u8>> {
        let value: Value = serde_json::from_slice(body)?;
        let mut pretty = serde_json::to_vec_pretty(&value)?;
        pretty.push(b'\n');
        Ok(pretty)
    }
}

fn looks_like_json(body: &[u8]) -> bool {
    matches!(
        body.iter().find(|b| !b.is_ascii_whitespace()),
        Some(b'{') | Some(b'[')
    )
}
