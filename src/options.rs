use crate::allowed_headers::AllowedHeaders;
use crate::allowed_methods::AllowedMethods;
use crate::constants::GATEWAY_MAX_AGE_SECONDS;
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;
use crate::path::PathPattern;
use thiserror::Error;

/// Typed policy options. The default is the gateway's global policy: any
/// origin, `GET,POST,PUT,DELETE,OPTIONS`, any header, no credentials, a one
/// hour preflight cache, applied to `/**`.
#[derive(Clone, Debug)]
pub struct CorsOptions {
    pub origin: AllowedOrigins,
    pub methods: AllowedMethods,
    pub allowed_headers: AllowedHeaders,
    pub exposed_headers: ExposedHeaders,
    pub credentials: bool,
    pub allow_private_network: bool,
    /// Seconds a browser may cache a preflight result; `None` omits the header.
    pub max_age: Option<u64>,
    pub path: PathPattern,
    /// Emit `Vary` on every cross-origin response.
    pub vary: bool,
}

impl Default for CorsOptions {
    fn default() -> Self {
        Self {
            origin: AllowedOrigins::Any,
            methods: AllowedMethods::default(),
            allowed_headers: AllowedHeaders::Any,
            exposed_headers: ExposedHeaders::None,
            credentials: false,
            allow_private_network: false,
            max_age: Some(GATEWAY_MAX_AGE_SECONDS),
            path: PathPattern::all(),
            vary: false,
        }
    }
}

/// Configuration rejected when a policy is constructed.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error(
        "credentials cannot be allowed together with the \"*\" origin pattern; browsers reject this combination, list explicit origin patterns instead"
    )]
    CredentialsRequireSpecificOrigin,
    #[error(
        "private network access cannot be allowed together with the \"*\" origin pattern; list explicit origin patterns instead"
    )]
    PrivateNetworkRequiresSpecificOrigin,
    #[error("allowed method `{0}` is not a valid HTTP method token")]
    InvalidMethod(String),
    #[error("header name `{0}` is not a valid HTTP header token")]
    InvalidHeaderName(String),
}

impl CorsOptions {
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.credentials && self.origin.is_any() {
            return Err(ValidationError::CredentialsRequireSpecificOrigin);
        }

        if self.allow_private_network && self.origin.is_any() {
            return Err(ValidationError::PrivateNetworkRequiresSpecificOrigin);
        }

        if let Some(method) = self.methods.first_invalid() {
            return Err(ValidationError::InvalidMethod(method.to_string()));
        }

        if let Some(name) = self
            .allowed_headers
            .first_invalid()
            .or_else(|| self.exposed_headers.first_invalid())
        {
            return Err(ValidationError::InvalidHeaderName(name.to_string()));
        }

        Ok(())
    }
}

#[cfg(test)]
#[path = "options_test.rs"]
mod options_test;
