//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! These types describe one inbound call and its outcome as plain data. The
//! host (the axum server, a test, or any other embedder) decodes the wire
//! request into an `HttpRequest`, hands it to a handler, and writes the
//! returned `GreetingResult` back out. Handlers never touch the network.
//!
//! All fields use owned types (`String`, `Vec`, `BTreeMap`) so values can be
//! built by any host without lifetime concerns.

use std::collections::BTreeMap;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
}

/// An inbound HTTP call described as plain data.
///
/// Query parameter keys are unique; inserting a key twice keeps the last
/// value. `body` is the raw payload, `None` when the caller sent nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub query: BTreeMap<String, String>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    pub fn get(path: &str) -> Self {
        Self {
            method: HttpMethod::Get,
            path: path.to_string(),
            query: BTreeMap::new(),
            body: None,
        }
    }

    pub fn post(path: &str, body: impl Into<Vec<u8>>) -> Self {
        Self {
            method: HttpMethod::Post,
            path: path.to_string(),
            query: BTreeMap::new(),
            body: Some(body.into()),
        }
    }

    pub fn with_query(mut self, key: &str, value: &str) -> Self {
        self.query.insert(key.to_string(), value.to_string());
        self
    }

    pub fn query_param(&self, key: &str) -> Option<&str> {
        self.query.get(key).map(String::as_str)
    }
}

/// The outcome of one handler invocation: a status code and a text body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingResult {
    pub status: u16,
    pub body: String,
}

impl GreetingResult {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status: 200,
            body: body.into(),
        }
    }

    pub fn bad_request(body: impl Into<String>) -> Self {
        Self {
            status: 400,
            body: body.into(),
        }
    }
}
