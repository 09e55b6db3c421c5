use crate::constants::WILDCARD;
use crate::util::escape_regex;
use once_cell::sync::Lazy;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const MAX_PATTERN_LENGTH: usize = 50_000;
const MAX_ORIGIN_LENGTH: usize = 4_096;

static PORT_LIST: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:\*|[0-9]{1,5}(?:,[0-9]{1,5})*)$").expect("port list grammar compiles")
});

#[derive(Debug, Error)]
pub enum PatternError {
    #[error("origin pattern must not be empty")]
    Empty,
    #[error("origin pattern length {length} exceeds maximum allowed {max}")]
    TooLong { length: usize, max: usize },
    #[error("origin pattern `{0}` has a malformed port list")]
    InvalidPortList(String),
    #[error("failed to compile origin pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// A compiled origin pattern such as `https://*.example.com:[8080,8081]`.
///
/// `*` matches any run of characters, a trailing `:[p1,p2]` restricts the port
/// and `:[*]` accepts any port (or none). Matching ignores ASCII case only.
#[derive(Clone)]
pub struct OriginPattern {
    source: String,
    regex: Regex,
}

impl OriginPattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let trimmed = pattern.trim();
        if trimmed.is_empty() {
            return Err(PatternError::Empty);
        }
        if trimmed.len() > MAX_PATTERN_LENGTH {
            return Err(PatternError::TooLong {
                length: trimmed.len(),
                max: MAX_PATTERN_LENGTH,
            });
        }

        let (base, ports) = split_port_list(trimmed)?;
        let body = base
            .to_ascii_lowercase()
            .trim_end_matches('/')
            .split('*')
            .map(escape_regex)
            .collect::<Vec<_>>()
            .join(".*");
        let port_suffix = match ports {
            None => String::new(),
            Some(WILDCARD) => "(?::[0-9]+)?".to_string(),
            Some(list) => format!(":(?:{})", list.replace(',', "|")),
        };

        let regex = Regex::new(&format!("^{body}{port_suffix}$")).map_err(|err| {
            PatternError::Build {
                pattern: trimmed.to_string(),
                source: Box::new(err),
            }
        })?;

        Ok(Self {
            source: trimmed.to_string(),
            regex,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, origin: &str) -> bool {
        normalize_origin(origin).is_some_and(|candidate| self.matches_normalized(&candidate))
    }

    fn matches_normalized(&self, candidate: &str) -> bool {
        self.regex.is_match(candidate)
    }
}

/// Lowercases ASCII letters only; non-ASCII characters never fold onto ASCII ones.
fn normalize_origin(origin: &str) -> Option<String> {
    let candidate = origin.strip_suffix('/').unwrap_or(origin);
    if candidate.len() > MAX_ORIGIN_LENGTH {
        return None;
    }
    Some(candidate.to_ascii_lowercase())
}

impl fmt::Debug for OriginPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("OriginPattern").field(&self.source).finish()
    }
}

fn split_port_list(pattern: &str) -> Result<(&str, Option<&str>), PatternError> {
    if !pattern.ends_with(']') {
        return Ok((pattern, None));
    }

    // A bracket without `:[` closes an IPv6 host such as `http://[::1]`.
    let Some(index) = pattern.rfind(":[") else {
        return Ok((pattern, None));
    };
    let ports = &pattern[index + 2..pattern.len() - 1];
    if !PORT_LIST.is_match(ports) {
        return Err(PatternError::InvalidPortList(pattern.to_string()));
    }

    Ok((&pattern[..index], Some(ports)))
}

/// Origins admitted by a policy.
#[derive(Debug, Clone, Default)]
pub enum AllowedOrigins {
    /// The `*` pattern: every origin matches and is echoed back.
    #[default]
    Any,
    List(Vec<OriginPattern>),
}

impl AllowedOrigins {
    pub fn any() -> Self {
        Self::Any
    }

    /// Compiles each pattern. A bare `*` anywhere in the input yields [`Self::Any`].
    pub fn patterns<I, S>(values: I) -> Result<Self, PatternError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut compiled = Vec::new();
        for value in values {
            let value = value.as_ref().trim();
            if value == WILDCARD {
                return Ok(Self::Any);
            }
            compiled.push(OriginPattern::parse(value)?);
        }
        Ok(Self::List(compiled))
    }

    pub fn is_any(&self) -> bool {
        matches!(self, Self::Any)
    }

    pub fn matches(&self, origin: &str) -> bool {
        match self {
            Self::Any => true,
            Self::List(patterns) => normalize_origin(origin).is_some_and(|candidate| {
                patterns
                    .iter()
                    .any(|pattern| pattern.matches_normalized(&candidate))
            }),
        }
    }

    pub fn describe(&self) -> Vec<&str> {
        match self {
            Self::Any => vec![WILDCARD],
            Self::List(patterns) => patterns.iter().map(OriginPattern::as_str).collect(),
        }
    }
}

#[cfg(test)]
#[path = "origin_test.rs"]
mod origin_test;
