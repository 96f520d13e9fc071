//! Plain-data HTTP request and response types.
//!
//! The client never performs I/O itself. It hands the host an `HttpRequest`
//! and later receives the matching `HttpResponse`; how the round-trip happens
//! (browser fetch, ureq, a test double) is the host's business.

pub(crate) const JSON_CONTENT_TYPE: (&str, &str) = ("content-type", "application/json");

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

/// Built by `ItemClient::build_*`.
#[derive(Debug, Clone)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub path: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    pub(crate) fn without_body(method: HttpMethod, path: String) -> Self {
        Self {
            method,
            path,
            headers: Vec::new(),
            body: None,
        }
    }

    pub(crate) fn with_json(method: HttpMethod, path: String, body: String) -> Self {
        let (name, value) = JSON_CONTENT_TYPE;
        Self {
            method,
            path,
            headers: vec![(name.to_string(), value.to_string())],
            body: Some(body),
        }
    }
}

/// Filled in by the host after executing an `HttpRequest`. A 204 carries an
/// empty `body`.
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
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

    #[test]
    fn header_lookup_ignores_case() {
        let response = HttpResponse {
            status: 200,
            headers: vec![("X-Request-Id".to_string(), "abc".to_string())],
            body: String::new(),
        };
        assert_eq!(response.header("x-request-id"), Some("abc"));
        assert_eq!(response.header("content-type"), None);
    }

    #[test]
    fn method_names_are_uppercase() {
        assert_eq!(HttpMethod::Delete.as_str(), "DELETE");
    }
}
