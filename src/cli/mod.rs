//! CLI argument parsing module
//!
//! This module handles command-line argument parsing and application entry point.

use std::path::PathBuf;

use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;

use crate::config::{ClientConfig, ContentType, HttpMethod};
use crate::error::{Result, ReqcurlError};
use crate::exit_code::exit_code_for_error;
use crate::http::{Client, ReqwestTransport, ResponseFormatter};
use crate::output::OutputWriter;
use crate::payload::Payload;
use crate::utils::{FileUtils, StringUtils, UrlUtils};

/// Everything needed to perform one request from the command line
#[derive(Debug, Clone)]
pub struct Invocation {
    pub config: ClientConfig,
    pub path: String,
    pub method: HttpMethod,
    pub payload: Payload,
    pub content_type: ContentType,
    pub output: Option<PathBuf>,
    pub pretty: bool,
}

/// Main entry point for the CLI application
pub fn run() {
    let matches = create_app().get_matches();
    crate::logging::init(matches.get_flag("verbose"));

    if let Err(e) = run_with_args(&matches) {
        eprintln!("reqcurl: error: {}", e);
        std::process::exit(exit_code_for_error(&e));
    }
}

fn run_with_args(matches: &ArgMatches) -> Result<()> {
    let invocation = build_invocation(matches)?;

    let client = Client::from_config(invocation.config, ReqwestTransport::new()?);
    let body = client.request(
        &invocation.path,
        invocation.method,
        invocation.payload,
        invocation.content_type,
    )?;

    let body = ResponseFormatter::new(invocation.pretty).format(&body)?;
    OutputWriter::new(invocation.output).write(&body)
}

/// Create the CLI application structure
pub fn create_app() -> Command {
    Command::new("reqcurl")
        .version(crate::VERSION)
        .about("Send one HTTP request and print the raw response body")
        .arg(Arg::new("host")
            .help("Base host, e.g. http://localhost:8083")
            .required(true)
            .index(1))
        .arg(Arg::new("path")
            .help("Path appended to the host, e.g. /items?x=1")
            .default_value("")
            .index(2))
        .arg(Arg::new("request")
            .short('X')
            .long("request")
            .value_name("METHOD")
            .help("HTTP request method (GET, POST, PUT, PATCH, DELETE)")
            .default_value("GET"))
        .arg(Arg::new("data")
            .short('d')
            .long("data")
            .value_name("KEY=VALUE")
            .help("Payload field; query for GET/DELETE, body otherwise")
            .action(ArgAction::Append)
            .conflicts_with_all(["json-data", "text"]))
        .arg(Arg::new("json-data")
            .long("json-data")
            .value_name("JSON")
            .help("Payload as JSON: a string or an object of strings")
            .conflicts_with("text"))
        .arg(Arg::new("text")
            .long("text")
            .value_name("TEXT")
            .help("Payload sent verbatim"))
        .arg(Arg::new("form")
            .long("form")
            .help("Encode the body as application/x-www-form-urlencoded")
            .action(ArgAction::SetTrue)
            .conflicts_with("raw"))
        .arg(Arg::new("raw")
            .long("raw")
            .value_name("BODY")
            .help("Send BODY as-is without setting Content-Type"))
        .arg(Arg::new("header")
            .short('H')
            .long("header")
            .value_name("HEADER")
            .help("Add custom HTTP header")
            .action(ArgAction::Append))
        .arg(Arg::new("cookie")
            .short('b')
            .long("cookie")
            .value_name("NAME=VALUE")
            .help("Add a cookie")
            .action(ArgAction::Append))
        .arg(Arg::new("timeout")
            .long("timeout")
            .value_name("DURATION")
            .help("Maximum time for the request (e.g. 30, 500ms, 10s, 2m)")
            .env("REQCURL_TIMEOUT")
            .default_value("30"))
        .arg(Arg::new("output")
            .short('o')
            .long("output")
            .value_name("FILE")
            .help("Write the body to FILE instead of stdout"))
        .arg(Arg::new("pretty")
            .long("pretty")
            .help("Pretty print JSON bodies")
            .action(ArgAction::SetTrue))
        .arg(Arg::new("verbose")
            .short('v')
            .long("verbose")
            .help("Log request details to stderr")
            .action(ArgAction::SetTrue))
}

/// Build an invocation from command line arguments
pub fn build_invocation(matches: &ArgMatches) -> Result<Invocation> {
    let host = matches
        .get_one::<String>("host")
        .ok_or_else(|| ReqcurlError::Config("Missing host".to_string()))?;
    let mut config = ClientConfig::new(UrlUtils::validate_host(host)?);

    let path = matches.get_one::<String>("path").cloned().unwrap_or_default();

    let method = match matches.get_one::<String>("request") {
        Some(method_str) => method_str
            .parse::<HttpMethod>()
            .map_err(|_| ReqcurlError::Config(format!("Unknown HTTP method: {}", method_str)))?,
        None => HttpMethod::Get,
    };

    let payload = if let Some(fields) = matches.get_many::<String>("data") {
        let pairs = fields
            .map(|field| StringUtils::parse_pair(field))
            .collect::<Result<Vec<_>>>()?;
        Payload::map(pairs)
    } else if let Some(json) = matches.get_one::<String>("json-data") {
        let value: Value = serde_json::from_str(json)?;
        Payload::try_from(value)?
    } else if let Some(text) = matches.get_one::<String>("text") {
        Payload::Text(text.clone())
    } else {
        Payload::Empty
    };

    let content_type = if let Some(raw) = matches.get_one::<String>("raw") {
        config.body = Some(raw.clone());
        ContentType::Raw
    } else if matches.get_flag("form") {
        ContentType::Form
    } else {
        ContentType::Json
    };

    if let Some(headers) = matches.get_many::<String>("header") {
        for header_str in headers {
            let (key, value) = StringUtils::parse_header(header_str)?;
            config.headers.insert(key, value);
        }
    }

    if let Some(cookies) = matches.get_many::<String>("cookie") {
        for cookie_str in cookies {
            config.cookies.push(StringUtils::parse_cookie(cookie_str)?);
        }
    }

    if let Some(timeout_str) = matches.get_one::<String>("timeout") {
        config.timeout = StringUtils::parse_timeout(timeout_str)?;
    }

    let output = matches
        .get_one::<String>("output")
        .map(|file| FileUtils::expand_path(file))
        .transpose()?;

    Ok(Invocation {
        config,
        path,
        method,
        payload,
        content_type,
        output,
        pretty: matches.get_flag("pretty"),
    })
}
