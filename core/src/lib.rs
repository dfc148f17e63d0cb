//! Host-independent core of the greeting service.
//!
//! # Overview
//! Two stateless handlers map a plain-data `HttpRequest` to a plain-data
//! `GreetingResult` without touching the network (host-does-IO pattern).
//! The embedding host decodes the wire request and writes the result back,
//! which keeps the handlers deterministic and testable.
//!
//! # Design
//! - `greet_by_query` reads the optional `name` query parameter.
//! - `greet_by_body` decodes a typed `ParsedPerson` from the JSON body and
//!   distinguishes a malformed document from one with missing fields.
//! - Diagnostics go through `tracing`; whoever installs the subscriber
//!   decides where they land.

pub mod error;
pub mod handlers;
pub mod http;
pub mod types;

pub use error::GreetError;
pub use handlers::{greet_by_body, greet_by_query, parse_person};
pub use http::{GreetingResult, HttpMethod, HttpRequest};
pub use types::{ParsedPerson, Person};
