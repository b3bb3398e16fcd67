//! Utility functions and helpers

use crate::config::Cookie;
use crate::error::{Result, ReqcurlError};
use std::path::PathBuf;
use url::Url;

/// URL validation utilities
pub struct UrlUtils;

impl UrlUtils {
    /// Validate a host, adding `http://` when no scheme is given.
    ///
    /// The returned string is the host exactly as it will be prefixed to
    /// request paths; a trailing slash is not added or removed.
    pub fn validate_host(input: &str) -> Result<String> {
        let host = if input.contains("://") {
            input.to_string()
        } else {
            format!("http://{}", input)
        };

        let url = Url::parse(&host)
            .map_err(|e| ReqcurlError::InvalidUrl(format!("Invalid URL '{}': {}", input, e)))?;
        if url.host_str().is_none() {
            return Err(ReqcurlError::InvalidUrl(format!(
                "Invalid URL '{}': missing host",
                input
            )));
        }

        Ok(host)
    }
}

/// File system utilities
pub struct FileUtils;

impl FileUtils {
    /// Expand tilde (~) in file paths
    pub fn expand_path(path: &str) -> Result<PathBuf> {
        if let Some(rest) = path.strip_prefix("~/") {
            if let Some(home_dir) = dirs::home_dir() {
                Ok(home_dir.join(rest))
            } else {
                Err(ReqcurlError::Config(
                    "Cannot determine home directory".to_string(),
                ))
            }
        } else {
            Ok(PathBuf::from(path))
        }
    }
}

/// String utilities
pub struct StringUtils;

impl StringUtils {
    /// Parse `key: value` headers
    pub fn parse_header(input: &str) -> Result<(String, String)> {
        match input.split_once(':') {
            Some((key, value)) if !key.trim().is_empty() => {
                Ok((key.trim().to_string(), value.trim().to_string()))
            }
            _ => Err(ReqcurlError::Config(format!(
                "Invalid header format: '{}'. Expected 'key: value'",
                input
            ))),
        }
    }

    /// Parse `key=value` payload fields
    pub fn parse_pair(input: &str) -> Result<(String, String)> {
        match input.split_once('=') {
            Some((key, value)) if !key.is_empty() => Ok((key.to_string(), value.to_string())),
            _ => Err(ReqcurlError::Config(format!(
                "Invalid field format: '{}'. Expected 'key=value'",
                input
            ))),
        }
    }

    /// Parse `name=value` cookies
    pub fn parse_cookie(input: &str) -> Result<Cookie> {
        match input.split_once('=') {
            Some((name, value)) if !name.trim().is_empty() => {
                Ok(Cookie::new(name.trim(), value.trim()))
            }
            _ => Err(ReqcurlError::Config(format!(
                "Invalid cookie format: '{}'. Expected 'name=value'",
                input
            ))),
        }
    }

    /// Parse timeout values (supports suffixes like 's', 'm', 'h')
    pub fn parse_timeout(input: &str) -> Result<std::time::Duration> {
        if let Ok(seconds) = input.parse::<u64>() {
            return Ok(std::time::Duration::from_secs(seconds));
        }

        let (number_part, suffix) = if let Some(stripped) = input.strip_suffix("ms") {
            let millis: u64 = stripped.parse().map_err(|_| {
                ReqcurlError::Config(format!("Invalid timeout number: '{}'", stripped))
            })?;
            return Ok(std::time::Duration::from_millis(millis));
        } else if let Some(stripped) = input.strip_suffix('s') {
            (stripped, 1)
        } else if let Some(stripped) = input.strip_suffix('m') {
            (stripped, 60)
        } else if let Some(stripped) = input.strip_suffix('h') {
            (stripped, 3600)
        } else {
            return Err(ReqcurlError::Config(format!(
                "Invalid timeout format: '{}'. Use number with optional suffix (ms/s/m/h)",
                input
            )));
        };

        let number: u64 = number_part.parse().map_err(|_| {
            ReqcurlError::Config(format!("Invalid timeout number: '{}'", number_part))
        })?;

        let seconds = number.checked_mul(suffix).ok_or_else(|| {
            ReqcurlError::Config(format!("Invalid timeout number: '{}'", number_part))
        })?;

        Ok(std::time::Duration::from_secs(seconds))
    }
}
