use crate::constants::WILDCARD;
use crate::util::{dedup_ignore_case, is_http_token};

/// Response headers scripts may read, advertised on actual requests via
/// `Access-Control-Expose-Headers`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum ExposedHeaders {
    #[default]
    None,
    List(Vec<String>),
    Any,
}

impl ExposedHeaders {
    /// Builds the list, trimming whitespace and dropping blanks and duplicates.
    pub fn list<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut values = dedup_ignore_case(values);
        values.retain(|value| !value.is_empty());

        match values.as_slice() {
            [] => Self::None,
            [only] if only == WILDCARD => Self::Any,
            _ => Self::List(values),
        }
    }

    pub fn header_value(&self) -> Option<String> {
        match self {
            Self::None => None,
            Self::List(values) => Some(values.join(",")),
            Self::Any => Some(WILDCARD.to_string()),
        }
    }

    pub(crate) fn first_invalid(&self) -> Option<&str> {
        match self {
            Self::List(values) => values
                .iter()
                .map(String::as_str)
                .find(|value| !is_http_token(value) || *value == WILDCARD),
            _ => None,
        }
    }
}

#[cfg(test)]
#[path = "exposed_headers_test.rs"]
mod exposed_headers_test;
