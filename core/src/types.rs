//! Typed view of the POST body.
//!
//! # Design
//! `ParsedPerson` is decoded straight from the JSON object with serde, no
//! field-by-field tree lookups. Only JSON `null` or a missing key decode to
//! `None`; every other value is coerced to text (name) or an integer (age).
//! Validation into `Person` is a separate step. Empty strings and zero are
//! ordinary values.

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer};

use crate::error::GreetError;

/// Fields read from the request body, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParsedPerson {
    #[serde(default, deserialize_with = "usable_name")]
    pub name: Option<String>,
    #[serde(default, deserialize_with = "usable_age")]
    pub age: Option<i64>,
}

impl ParsedPerson {
    /// Both fields must carry a value; anything else is `MissingField`.
    pub fn into_person(self) -> Result<Person, GreetError> {
        match (self.name, self.age) {
            (Some(name), Some(age)) => Ok(Person { name, age }),
            _ => Err(GreetError::MissingField),
        }
    }
}

/// A validated body with both fields present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Person {
    pub name: String,
    pub age: i64,
}

/// Any present, non-null JSON value, as read for one field.
#[derive(Deserialize)]
#[serde(untagged)]
enum FieldValue {
    Text(String),
    Integer(i64),
    Float(f64),
    Bool(bool),
    Container(IgnoredAny),
}

// Scalars read as their JSON text; arrays and objects read as "".
fn usable_name<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FieldValue>::deserialize(deserializer)?.map(|value| match value {
        FieldValue::Text(name) => name,
        FieldValue::Integer(n) => n.to_string(),
        FieldValue::Float(f) => f.to_string(),
        FieldValue::Bool(b) => b.to_string(),
        FieldValue::Container(_) => String::new(),
    }))
}

// Fractions truncate toward zero, booleans read as 1/0, anything else that
// is not a number reads as 0.
fn usable_age<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<FieldValue>::deserialize(deserializer)?.map(|value| match value {
        FieldValue::Integer(n) => n,
        FieldValue::Float(f) => f as i64,
        FieldValue::Bool(b) => i64::from(b),
        FieldValue::Text(text) => age_from_text(&text),
        FieldValue::Container(_) => 0,
    }))
}

fn age_from_text(text: &str) -> i64 {
    let text = text.trim();
    text.parse::<i64>()
        .ok()
        .or_else(|| text.parse::<f64>().ok().map(|f| f as i64))
        .unwrap_or(0)
}
