use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{ALL_PATHS, GATEWAY_MAX_AGE_SECONDS, GATEWAY_METHODS, WILDCARD};
use crate::exposed_headers::ExposedHeaders;
use crate::options::{CorsOptions, ValidationError};
use crate::origin::{AllowedOrigins, PatternError};
use crate::path::{PathPattern, PathPatternError};
use crate::policy::CorsPolicy;
use crate::registry::CorsRegistry;
use serde::{Deserialize, Deserializer, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read cors configuration from {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse cors configuration")]
    Parse(#[from] serde_yaml::Error),
    #[error("invalid allowed origin pattern")]
    OriginPattern(#[from] PatternError),
    #[error("invalid cors path pattern")]
    PathPattern(#[from] PathPatternError),
    #[error("invalid cors policy")]
    Invalid(#[from] ValidationError),
}

/// One policy as written in a configuration file.
///
/// Keys are camelCase; every key is optional and falls back to the gateway
/// default. List-valued keys also accept a single string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct CorsConfig {
    #[serde(alias = "allowedOriginPattern", deserialize_with = "one_or_many")]
    pub allowed_origin_patterns: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub allowed_methods: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub allowed_headers: Vec<String>,
    #[serde(deserialize_with = "one_or_many")]
    pub exposed_headers: Vec<String>,
    pub allow_credentials: bool,
    pub allow_private_network: bool,
    pub max_age_seconds: Option<u64>,
    pub path: String,
    pub vary: bool,
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            allowed_origin_patterns: vec![WILDCARD.to_string()],
            allowed_methods: GATEWAY_METHODS.iter().map(|m| m.to_string()).collect(),
            allowed_headers: vec![WILDCARD.to_string()],
            exposed_headers: Vec::new(),
            allow_credentials: false,
            allow_private_network: false,
            max_age_seconds: Some(GATEWAY_MAX_AGE_SECONDS),
            path: ALL_PATHS.to_string(),
            vary: false,
        }
    }
}

impl CorsConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_yaml_str(&read_config(path)?)?;
        tracing::info!(path = %path.display(), "loaded cors configuration");
        Ok(config)
    }

    pub fn to_options(&self) -> Result<CorsOptions, ConfigError> {
        Ok(CorsOptions {
            origin: AllowedOrigins::patterns(&self.allowed_origin_patterns)?,
            methods: AllowedMethods::list(self.allowed_methods.iter().cloned()),
            allowed_headers: AllowedHeaders::list(self.allowed_headers.iter().cloned()),
            exposed_headers: ExposedHeaders::list(self.exposed_headers.iter().cloned()),
            credentials: self.allow_credentials,
            allow_private_network: self.allow_private_network,
            max_age: self.max_age_seconds,
            path: PathPattern::parse(&self.path)?,
            vary: self.vary,
        })
    }

    pub fn into_policy(self) -> Result<CorsPolicy, ConfigError> {
        Ok(CorsPolicy::new(self.to_options()?)?)
    }
}

/// Several policies, evaluated in file order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RegistryConfig {
    pub policies: Vec<CorsConfig>,
}

impl Default for RegistryConfig {
    fn default() -> Self {
        Self {
            policies: vec![CorsConfig::default()],
        }
    }
}

impl RegistryConfig {
    pub fn from_yaml_str(source: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(source)?)
    }

    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let config = Self::from_yaml_str(&read_config(path)?)?;
        tracing::info!(
            path = %path.display(),
            policies = config.policies.len(),
            "loaded cors configuration"
        );
        Ok(config)
    }

    pub fn into_registry(self) -> Result<CorsRegistry, ConfigError> {
        self.policies
            .into_iter()
            .map(CorsConfig::into_policy)
            .collect()
    }
}

fn read_config(path: &Path) -> Result<String, ConfigError> {
    fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(value) => vec![value],
        OneOrMany::Many(values) => values,
    })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;
