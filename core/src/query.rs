//! Search terms and their URL-query encoding.

use std::fmt;

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};

/// The terms searched for when the button is tapped.
pub const DEFAULT_TERMS: &str = "out from boneville";

/// Bytes escaped inside a query component.
///
/// Everything outside the URL-query-allowed set: controls, space and
/// `"#%<>[\]^`{|}`. Sub-delimiters, `:`, `@`, `/` and `?` pass through
/// unchanged. Non-ASCII input is always escaped as UTF-8.
const QUERY_COMPONENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'#')
    .add(b'%')
    .add(b'<')
    .add(b'>')
    .add(b'[')
    .add(b'\\')
    .add(b']')
    .add(b'^')
    .add(b'`')
    .add(b'{')
    .add(b'|')
    .add(b'}');

/// Immutable search terms.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    terms: String,
}

impl SearchQuery {
    pub fn new(terms: impl Into<String>) -> Self {
        Self {
            terms: terms.into(),
        }
    }

    pub fn terms(&self) -> &str {
        &self.terms
    }

    /// Percent-encode the terms for use as a query value.
    pub fn encoded(&self) -> String {
        utf8_percent_encode(&self.terms, QUERY_COMPONENT).to_string()
    }
}

impl Default for SearchQuery {
    fn default() -> Self {
        Self::new(DEFAULT_TERMS)
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.terms)
    }
}
