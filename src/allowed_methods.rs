use crate::constants::{GATEWAY_METHODS, WILDCARD};
use crate::util::{dedup_ignore_case, is_http_token};

/// Methods a preflight may ask for, advertised via `Access-Control-Allow-Methods`.
#[derive(Clone, PartialEq, Eq, Debug)]
pub enum AllowedMethods {
    /// Any method; the response echoes the requested method.
    Any,
    /// Explicit list, advertised in configured order joined with `,`.
    List(Vec<String>),
}

impl AllowedMethods {
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

    pub fn allows(&self, method: &str) -> bool {
        match self {
            Self::Any => is_http_token(method),
            Self::List(values) => values
                .iter()
                .any(|allowed| allowed.eq_ignore_ascii_case(method)),
        }
    }

    /// Header value advertised in answer to a preflight asking for `requested`.
    pub fn header_value(&self, requested: &str) -> Option<String> {
        match self {
            Self::Any => Some(requested.to_string()),
            Self::List(values) if values.is_empty() => None,
            Self::List(values) => Some(values.join(",")),
        }
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

impl Default for AllowedMethods {
    fn default() -> Self {
        Self::list(GATEWAY_METHODS)
    }
}

#[cfg(test)]
#[path = "allowed_methods_test.rs"]
mod allowed_methods_test;
