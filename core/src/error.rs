//! Error types for the greeting handlers.
//!
//! Both variants end up as a 400 response. The `Display` text of each variant
//! is the exact response body the caller sees, so the two failure modes stay
//! distinguishable from the outside.

use thiserror::Error;

use crate::http::GreetingResult;

/// Reasons a request body cannot produce a greeting.
#[derive(Debug, Error)]
pub enum GreetError {
    /// The body is not a JSON document at all.
    #[error("Error parsing request body")]
    MalformedInput(#[source] serde_json::Error),

    /// The body parsed, but `name` or `age` has no usable value.
    #[error("Please provide both name and age in the request body.")]
    MissingField,
}

impl From<GreetError> for GreetingResult {
    fn from(err: GreetError) -> Self {
        GreetingResult::bad_request(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_field_maps_to_400_with_literal_message() {
        let result = GreetingResult::from(GreetError::MissingField);
        assert_eq!(result.status, 400);
        assert_eq!(result.body, "Please provide both name and age in the request body.");
    }

    #[test]
    fn malformed_input_hides_parser_detail_from_body() {
        let source = serde_json::from_str::<serde_json::Value>("not-json").unwrap_err();
        let err = GreetError::MalformedInput(source);
        assert!(std::error::Error::source(&err).is_some());

        let result = GreetingResult::from(err);
        assert_eq!(result.status, 400);
        assert_eq!(result.body, "Error parsing request body");
    }
}
