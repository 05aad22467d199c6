//! Parameter encoding: query-string pairs and JSON bodies.
//!
//! Each params type declares its query fields explicitly through
//! [`QueryParams`]; body fields go through `serde`. Query-only fields on a
//! body-carrying type are marked `#[serde(skip)]`. Nothing here inspects or
//! rewrites field values.

use std::fmt::Display;

use serde::Serialize;

use crate::HelixError;

/// Ordered list of query-string pairs.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryPairs {
    pairs: Vec<(&'static str, String)>,
}

impl QueryPairs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append `key=value` unless `value` is empty.
    pub fn push(&mut self, key: &'static str, value: &str) -> &mut Self {
        if !value.is_empty() {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Append `key=value` when a value is present.
    pub fn push_opt<V: Display>(&mut self, key: &'static str, value: Option<V>) -> &mut Self {
        if let Some(value) = value {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Append `key=value` unless `value` is zero.
    pub fn push_nonzero(&mut self, key: &'static str, value: u32) -> &mut Self {
        if value != 0 {
            self.pairs.push((key, value.to_string()));
        }
        self
    }

    /// Append one `key=item` pair per non-empty item, preserving order.
    pub fn push_each<S: AsRef<str>>(&mut self, key: &'static str, values: &[S]) -> &mut Self {
        for value in values {
            self.push(key, value.as_ref());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str()))
    }
}

/// Types that render themselves as query-string pairs.
pub trait QueryParams {
    fn write_query(&self, query: &mut QueryPairs);

    fn to_query(&self) -> QueryPairs {
        let mut query = QueryPairs::new();
        self.write_query(&mut query);
        query
    }
}

/// No parameters.
impl QueryParams for () {
    fn write_query(&self, _query: &mut QueryPairs) {}
}

/// Encode an optional params value; `None` yields no pairs.
pub fn encode_query<P: QueryParams + ?Sized>(params: Option<&P>) -> QueryPairs {
    params.map(|p| p.to_query()).unwrap_or_default()
}

/// Encode the JSON body of a write request.
pub fn encode_body<B: Serialize + ?Sized>(body: &B) -> Result<String, HelixError> {
    serde_json::to_string(body).map_err(HelixError::Encode)
}

/// Fail with a validation error when a required identifier is empty.
pub fn require(name: &str, value: &str) -> Result<(), HelixError> {
    if value.trim().is_empty() {
        return Err(HelixError::Validation(format!("{name} must be provided")));
    }
    Ok(())
}

/// Fail with a validation error when a multi-valued field is outside `min..=max`.
pub fn require_count(name: &str, count: usize, min: usize, max: usize) -> Result<(), HelixError> {
    if count < min || count > max {
        return Err(HelixError::Validation(format!(
            "{name} requires between {min} and {max} values, got {count}"
        )));
    }
    Ok(())
}
