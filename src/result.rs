use crate::headers::Headers;
use std::fmt;

/// Outcome of evaluating one request against a policy.
///
/// A denied request is a normal result, not an error: the hosting runtime
/// completes the exchange without the allow headers and the browser blocks
/// script access to the response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdmissionResult {
    pub allow: bool,
    pub headers: Headers,
    pub rejection: Option<Rejection>,
}

impl AdmissionResult {
    /// No `Origin` header: nothing to check and nothing to attach.
    pub fn same_origin() -> Self {
        Self::allowed(Headers::new())
    }

    pub(crate) fn allowed(headers: Headers) -> Self {
        Self {
            allow: true,
            headers,
            rejection: None,
        }
    }

    pub(crate) fn rejected(rejection: Rejection, headers: Headers) -> Self {
        Self {
            allow: false,
            headers,
            rejection: Some(rejection),
        }
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }
}

/// Why a cross-origin request was not admitted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rejection {
    OriginNotAllowed,
    MissingRequestMethod,
    MethodNotAllowed(String),
    HeaderNotAllowed(String),
}

impl fmt::Display for Rejection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OriginNotAllowed => write!(f, "origin is not allowed"),
            Self::MissingRequestMethod => {
                write!(f, "preflight is missing Access-Control-Request-Method")
            }
            Self::MethodNotAllowed(method) => write!(f, "method `{method}` is not allowed"),
            Self::HeaderNotAllowed(header) => write!(f, "header `{header}` is not allowed"),
        }
    }
}
