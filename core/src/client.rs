//! Request builder for the book search endpoint.
//!
//! # Design
//! `SearchClient` holds only a `base_url` and never touches the network. It
//! turns a `SearchQuery` into an `HttpRequest`; executing that request is the
//! job of whichever `Transport` the caller injected.

use url::Url;

use crate::error::RequestError;
use crate::http::HttpRequest;
use crate::query::SearchQuery;

/// Host of the public search API.
pub const ITUNES_BASE_URL: &str = "https://itunes.apple.com";

/// Media type every search is restricted to.
pub const MEDIA: &str = "ebook";

/// Stateless builder for search requests.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchClient {
    base_url: String,
}

impl SearchClient {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Build `GET <base>/search?media=ebook&term=<encoded terms>`.
    ///
    /// The returned URL is the formatted string itself; parsing only
    /// validates it, so no normalization sneaks into the request.
    pub fn build_search(&self, query: &SearchQuery) -> Result<HttpRequest, RequestError> {
        let url = format!(
            "{}/search?media={MEDIA}&term={}",
            self.base_url,
            query.encoded()
        );
        if let Err(source) = Url::parse(&url) {
            return Err(RequestError::InvalidUrl { url, source });
        }
        Ok(HttpRequest::get(url))
    }
}

impl Default for SearchClient {
    fn default() -> Self {
        Self::new(ITUNES_BASE_URL)
    }
}
