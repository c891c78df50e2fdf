/*
[INPUT]:  Endpoint parameters in declaration order
[OUTPUT]: Deterministic URL query strings
[POS]:    HTTP layer - query string construction shared by all endpoints
[UPDATE]: When encoding rules or parameter handling change
*/

use std::fmt::Display;

use url::form_urlencoded;

/// Ordered query parameter set.
///
/// Parameters serialize in insertion order; the request signature is
/// computed over the resulting string, so order must be deterministic.
/// Unset optional parameters are skipped entirely, never serialized as
/// empty values.
#[derive(Debug, Clone, Default)]
pub(crate) struct QueryParams {
    pairs: Vec<(&'static str, String)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, key: &'static str, value: impl Display) {
        self.pairs.push((key, value.to_string()));
    }

    pub fn push_opt(&mut self, key: &'static str, value: Option<impl Display>) {
        if let Some(value) = value {
            self.push(key, value);
        }
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Encode as an RFC 1738 query string (space becomes `+`)
    pub fn encode(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.pairs {
            serializer.append_pair(key, value);
        }
        serializer.finish()
    }
}
