//! HTTP types passed across the transport seam.
//!
//! # Design
//! Requests and responses are plain data. `SearchClient` builds an
//! `HttpRequest` without touching the network and a `Transport` turns it into
//! an `HttpResponse`. Keeping both sides as owned values lets a test double
//! capture requests and fabricate responses without any I/O.

use std::fmt;

/// HTTP method for a request. The search endpoint only needs `GET`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
}

impl HttpMethod {
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// Built by `SearchClient::build_search`. `url` is the exact string that was
/// validated, so tests can compare it byte for byte.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

impl HttpRequest {
    /// A bodiless `GET` with no custom headers.
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: HttpMethod::Get,
            url: url.into(),
            headers: Vec::new(),
            body: None,
        }
    }
}

/// An HTTP response described as plain data.
///
/// `body` holds the raw payload bytes; nothing here assumes they are text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Everything but the payload.
    pub fn metadata(&self) -> ResponseMetadata {
        ResponseMetadata {
            url: self.url.clone(),
            status: self.status,
            headers: self.headers.clone(),
        }
    }

    /// The payload as UTF-8 text, or `None` if it is not valid UTF-8.
    pub fn text(&self) -> Option<String> {
        std::str::from_utf8(&self.body).ok().map(str::to_owned)
    }
}

/// Status line and headers of a response, kept after the payload is gone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseMetadata {
    pub url: String,
    pub status: u16,
    pub headers: Vec<(String, String)>,
}

impl ResponseMetadata {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn response(body: &[u8]) -> HttpResponse {
        HttpResponse {
            url: "http://localhost:3000/search".to_string(),
            status: 200,
            headers: vec![("Content-Type".to_string(), "application/json".to_string())],
            body: body.to_vec(),
        }
    }

    #[test]
    fn get_request_has_no_headers_or_body() {
        let req = HttpRequest::get("http://localhost:3000/search");
        assert_eq!(req.method, HttpMethod::Get);
        assert!(req.headers.is_empty());
        assert!(req.body.is_none());
    }

    #[test]
    fn text_decodes_utf8_payload() {
        assert_eq!(response(b"{\"resultCount\":0}").text().as_deref(), Some("{\"resultCount\":0}"));
    }

    #[test]
    fn text_is_absent_for_invalid_utf8() {
        assert!(response(&[0xff, 0xfe, 0x00]).text().is_none());
    }

    #[test]
    fn metadata_header_lookup_ignores_case() {
        let meta = response(b"").metadata();
        assert_eq!(meta.status, 200);
        assert_eq!(meta.header("content-type"), Some("application/json"));
        assert!(meta.header("x-missing").is_none());
    }

    #[test]
    fn method_displays_verb() {
        assert_eq!(HttpMethod::Get.to_string(), "GET");
    }
}
