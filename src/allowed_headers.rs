use crate::constants::WILDCARD;
use crate::util::{dedup_ignore_case, is_http_token};

/// Request headers a preflight may ask for.
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub enum AllowedHeaders {
    /// Wildcard: any well-formed header name is permitted.
    #[default]
    Any,
    /// Explicit names, compared case-insensitively.
    List(Vec<String>),
}

impl AllowedHeaders {
    /// Construct an explicit list. A `*` entry yields [`Self::Any`].
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let values = dedup_ignore_case(values);
        if values.iter().any(|value| value == WILDCARD) {
            return Self::Any;
        }
        Self::List(values)
    }

    pub fn any() -> Self {
        Self::Any
    }

    pub fn allows_header(&self, name: &str) -> bool {
        if !is_http_token(name) {
            return false;
        }
        match self {
            Self::Any => true,
            Self::List(allowed) => allowed
                .iter()
                .any(|allowed_header| allowed_header.eq_ignore_ascii_case(name)),
        }
    }

    /// Returns the first requested header that is not permitted.
    pub fn first_rejected<'a, I>(&self, requested: I) -> Option<&'a str>
    where
        I: IntoIterator<Item = &'a str>,
    {
        requested
            .into_iter()
            .map(str::trim)
            .filter(|header| !header.is_empty())
            .find(|header| !self.allows_header(header))
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        match self {
            Self::Any => None,
            Self::List(values) => values
                .iter()
                .map(String::as_str)
                .find(|value| !is_http_token(value)),
        }
    }
}

#[cfg(test)]
#[path = "allowed_headers_test.rs"]
mod allowed_headers_test;
