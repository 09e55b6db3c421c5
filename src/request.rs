use crate::constants::method;
use crate::util::split_comma_list;

/// One inbound exchange as seen by the policy engine.
///
/// The hosting runtime extracts these fields from the HTTP request; the
/// engine never reads headers itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CorsRequest<'a> {
    /// Value of the `Origin` header; `None` for same-origin traffic.
    pub origin: Option<&'a str>,
    pub method: &'a str,
    pub path: &'a str,
    pub is_preflight: bool,
    /// Value of `Access-Control-Request-Method` on a preflight.
    pub requested_method: Option<&'a str>,
    /// Entries of `Access-Control-Request-Headers` on a preflight.
    pub requested_headers: Vec<&'a str>,
    /// Whether `Access-Control-Request-Private-Network: true` was sent.
    pub private_network: bool,
}

impl<'a> CorsRequest<'a> {
    /// A same-origin request; use the builder methods to add CORS fields.
    pub fn new(method: &'a str, path: &'a str) -> Self {
        Self {
            origin: None,
            method,
            path,
            is_preflight: false,
            requested_method: None,
            requested_headers: Vec::new(),
            private_network: false,
        }
    }

    /// A preflight request asking whether `requested_method` may be used.
    pub fn preflight(path: &'a str, origin: &'a str, requested_method: &'a str) -> Self {
        Self {
            origin: Some(origin),
            is_preflight: true,
            requested_method: Some(requested_method),
            ..Self::new(method::OPTIONS, path)
        }
    }

    /// Builds a descriptor from raw header values.
    ///
    /// The exchange is a preflight when the method is `OPTIONS` and both
    /// `Origin` and `Access-Control-Request-Method` are present.
    pub fn from_headers(
        method: &'a str,
        path: &'a str,
        origin: Option<&'a str>,
        access_control_request_method: Option<&'a str>,
        access_control_request_headers: Option<&'a str>,
        access_control_request_private_network: Option<&'a str>,
    ) -> Self {
        let is_preflight = method.eq_ignore_ascii_case(method::OPTIONS)
            && origin.is_some()
            && access_control_request_method.is_some();

        Self {
            origin,
            method,
            path,
            is_preflight,
            requested_method: access_control_request_method.map(str::trim),
            requested_headers: access_control_request_headers
                .map(|value| split_comma_list(value).collect())
                .unwrap_or_default(),
            private_network: access_control_request_private_network
                .is_some_and(|value| value.trim().eq_ignore_ascii_case("true")),
        }
    }

    pub fn with_origin(mut self, origin: &'a str) -> Self {
        self.origin = Some(origin);
        self
    }

    pub fn with_requested_headers<I>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = &'a str>,
    {
        self.requested_headers = headers.into_iter().collect();
        self
    }

    pub fn with_private_network(mut self, enabled: bool) -> Self {
        self.private_network = enabled;
        self
    }

    /// The trimmed origin, unless absent or blank.
    pub(crate) fn cross_origin(&self) -> Option<&'a str> {
        self.origin
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
    }
}

#[cfg(test)]
#[path = "request_test.rs"]
mod request_test;
