use bytes::Bytes;
use http::{HeaderMap, StatusCode, header};

/// HTTP Response representation
///
/// Carries everything a processor produces: a status code, headers and an
/// opaque byte body. The server boundary owns the conversion to the wire.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: StatusCode,
    pub headers: HeaderMap,
    pub body: Bytes,
}

impl Response {
    /// Create a new Response with the given status code
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    /// use http::StatusCode;
    ///
    /// let response = Response::new(StatusCode::OK);
    /// assert_eq!(response.status, StatusCode::OK);
    /// assert!(response.body.is_empty());
    /// ```
    pub fn new(status: StatusCode) -> Self {
        Self {
            status,
            headers: HeaderMap::new(),
            body: Bytes::new(),
        }
    }
    /// Create a Response with HTTP 200 OK status
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    /// use http::StatusCode;
    ///
    /// let response = Response::ok();
    /// assert_eq!(response.status, StatusCode::OK);
    /// ```
    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }
    /// Create a Response with HTTP 406 Not Acceptable status
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    /// use http::StatusCode;
    ///
    /// let response = Response::not_acceptable();
    /// assert_eq!(response.status, StatusCode::NOT_ACCEPTABLE);
    /// ```
    pub fn not_acceptable() -> Self {
        Self::new(StatusCode::NOT_ACCEPTABLE)
    }
    /// Create a Response with HTTP 500 Internal Server Error status
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    /// use http::StatusCode;
    ///
    /// let response = Response::internal_server_error();
    /// assert_eq!(response.status, StatusCode::INTERNAL_SERVER_ERROR);
    /// ```
    pub fn internal_server_error() -> Self {
        Self::new(StatusCode::INTERNAL_SERVER_ERROR)
    }
    /// Set the response body
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    /// use bytes::Bytes;
    ///
    /// let response = Response::ok().with_body("Hello, World!");
    /// assert_eq!(response.body, Bytes::from("Hello, World!"));
    /// ```
    pub fn with_body(mut self, body: impl Into<Bytes>) -> Self {
        self.body = body.into();
        self
    }
    /// Add a custom header to the response
    ///
    /// Invalid header names or values are silently ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    ///
    /// let response = Response::ok().with_header("Vary", "Accept");
    /// assert_eq!(
    ///     response.headers.get("vary").unwrap().to_str().unwrap(),
    ///     "Accept"
    /// );
    /// ```
    pub fn with_header(mut self, name: &str, value: &str) -> Self {
        if let Ok(header_name) = header::HeaderName::from_bytes(name.as_bytes()) {
            if let Ok(header_value) = header::HeaderValue::from_str(value) {
                self.headers.insert(header_name, header_value);
            }
        }
        self
    }
    /// Set the Content-Type header
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    ///
    /// let response = Response::ok().with_content_type("application/json");
    /// assert_eq!(response.content_type(), Some("application/json"));
    /// ```
    pub fn with_content_type(mut self, content_type: &str) -> Self {
        if let Ok(value) = header::HeaderValue::from_str(content_type) {
            self.headers.insert(header::CONTENT_TYPE, value);
        }
        self
    }
    /// Returns the Content-Type header value, if present and valid UTF-8
    ///
    /// # Examples
    ///
    /// ```
    /// use hardy_http::Response;
    ///
    /// let response = Response::ok();
    /// assert_eq!(response.content_type(), None);
    /// ```
    pub fn content_type(&self) -> Option<&str> {
        self.headers
            .get(header::CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
    }
}

impl Default for Response {
    fn default() -> Self {
        Self::ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_response_has_empty_body() {
        let response = Response::new(StatusCode::OK);
        assert!(response.body.is_empty());
        assert!(response.headers.is_empty());
    }

    #[test]
    fn test_with_header_overwrites() {
        let response = Response::ok()
            .with_header("Vary", "Accept")
            .with_header("Vary", "Accept-Encoding");
        assert_eq!(
            response.headers.get("vary").unwrap().to_str().unwrap(),
            "Accept-Encoding"
        );
    }

    #[test]
    fn test_invalid_header_is_ignored() {
        let response = Response::ok().with_header("Bad\nName", "value");
        assert!(response.headers.is_empty());
    }

    #[test]
    fn test_content_type_roundtrip() {
        let response = Response::ok().with_content_type("text/plain");
        assert_eq!(response.content_type(), Some("text/plain"));
    }
}
