use crate::constants::ALL_PATHS;
use crate::util::escape_regex;
use regex_automata::meta::{BuildError, Regex};
use std::fmt;
use thiserror::Error;

const DOUBLE_WILDCARD: &str = "**";

#[derive(Debug, Error)]
pub enum PathPatternError {
    #[error("path pattern `{0}` must start with `/`")]
    MissingLeadingSlash(String),
    #[error("path pattern `{0}` may only use `**` as its final segment")]
    MisplacedDoubleWildcard(String),
    #[error("failed to compile path pattern `{pattern}`")]
    Build {
        pattern: String,
        #[source]
        source: Box<BuildError>,
    },
}

/// URL path glob selecting the requests a policy governs.
///
/// `*` matches within one segment, `?` matches one character and a trailing
/// `/**` matches the prefix itself plus everything below it.
#[derive(Clone)]
pub struct PathPattern {
    source: String,
    regex: Regex,
}

impl PathPattern {
    pub fn parse(pattern: &str) -> Result<Self, PathPatternError> {
        let pattern = pattern.trim();
        if !pattern.starts_with('/') {
            return Err(PathPatternError::MissingLeadingSlash(pattern.to_string()));
        }

        let (prefix, recursive) = match pattern.strip_suffix("/**") {
            Some(prefix) => (prefix, true),
            None => (pattern, false),
        };
        if prefix.contains(DOUBLE_WILDCARD) {
            return Err(PathPatternError::MisplacedDoubleWildcard(
                pattern.to_string(),
            ));
        }

        let mut body = String::with_capacity(prefix.len() + 16);
        for ch in prefix.chars() {
            match ch {
                '*' => body.push_str("[^/]*"),
                '?' => body.push_str("[^/]"),
                other => body.push_str(&escape_regex(other.encode_utf8(&mut [0; 4]))),
            }
        }
        if recursive {
            body.push_str("(?:/.*)?");
        }

        let regex = Regex::new(&format!("^{body}$")).map_err(|err| PathPatternError::Build {
            pattern: pattern.to_string(),
            source: Box::new(err),
        })?;

        Ok(Self {
            source: pattern.to_string(),
            regex,
        })
    }

    /// The catch-all `/**` pattern.
    pub fn all() -> Self {
        Self::parse(ALL_PATHS).expect("catch-all path pattern compiles")
    }

    pub fn as_str(&self) -> &str {
        &self.source
    }

    pub fn matches(&self, path: &str) -> bool {
        let path = path.split(['?', '#']).next().unwrap_or_default();
        self.regex.is_match(path)
    }
}

impl Default for PathPattern {
    fn default() -> Self {
        Self::all()
    }
}

impl fmt::Debug for PathPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("PathPattern").field(&self.source).finish()
    }
}

impl PartialEq for PathPattern {
    fn eq(&self, other: &Self) -> bool {
        self.source == other.source
    }
}

impl Eq for PathPattern {}

#[cfg(test)]
#[path = "path_test.rs"]
mod path_test;
