//! The two greeting endpoints.
//!
//! Each handler maps one `HttpRequest` to one `GreetingResult` in a single
//! pass and cannot fail: body errors are folded into a 400 result before
//! returning. Handlers keep no state, so repeated calls with the same request
//! always produce the same result.

use serde_json::{Deserializer, Map, Value};

use crate::error::GreetError;
use crate::http::{GreetingResult, HttpRequest};
use crate::types::{ParsedPerson, Person};

const DEFAULT_NAME: &str = "World";

/// `GET /httpget`: greets the `name` query parameter, or "World".
///
/// The name is used verbatim, with no trimming or escaping.
pub fn greet_by_query(request: &HttpRequest) -> GreetingResult {
    tracing::info!(method = ?request.method, path = %request.path, "processed a GET request");

    let name = request.query_param("name").unwrap_or(DEFAULT_NAME);
    GreetingResult::ok(format!("Hello, {name}"))
}

/// `POST /httppost`: greets the `name` and `age` carried in a JSON body.
pub fn greet_by_body(request: &HttpRequest) -> GreetingResult {
    tracing::info!(method = ?request.method, path = %request.path, "processed a POST request");

    match parse_person(request.body.as_deref()) {
        Ok(person) => GreetingResult::ok(format!(
            "Hello, {}! You are {} years old.",
            person.name, person.age
        )),
        Err(err) => {
            match &err {
                GreetError::MalformedInput(source) => {
                    tracing::error!(error = %source, "error parsing request body");
                }
                GreetError::MissingField => {
                    tracing::debug!("request body lacks name or age");
                }
            }
            err.into()
        }
    }
}

/// Decode and validate a POST body.
///
/// An absent or blank body reads as `{}`. Only the first JSON value is read;
/// anything after it is ignored. Valid JSON whose top level is not an object
/// has no fields and fails validation rather than parsing.
pub fn parse_person(body: Option<&[u8]>) -> Result<Person, GreetError> {
    let first = body.and_then(|bytes| Deserializer::from_slice(bytes).into_iter::<Value>().next());
    let document = match first {
        Some(document) => document.map_err(GreetError::MalformedInput)?,
        None => Value::Object(Map::new()),
    };

    let parsed: ParsedPerson = match document {
        Value::Object(_) => serde_json::from_value(document).map_err(GreetError::MalformedInput)?,
        _ => ParsedPerson::default(),
    };
    parsed.into_person()
}
