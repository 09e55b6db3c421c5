use crate::header_builder::HeaderBuilder;
use crate::headers::HeaderCollection;
use crate::options::{CorsOptions, ValidationError};
use crate::path::PathPattern;
use crate::request::CorsRequest;
use crate::result::{AdmissionResult, Rejection};
use crate::util::is_http_token;

/// Validated, immutable CORS policy.
///
/// Construct once at startup and share by reference (or `Arc`) with every
/// request handler; evaluation never mutates it.
#[derive(Debug, Clone)]
pub struct CorsPolicy {
    options: CorsOptions,
}

impl CorsPolicy {
    pub fn new(options: CorsOptions) -> Result<Self, ValidationError> {
        if let Err(err) = options.validate() {
            tracing::warn!(
                path = options.path.as_str(),
                error = %err,
                "rejecting cors policy"
            );
            return Err(err);
        }

        tracing::debug!(
            path = options.path.as_str(),
            origins = ?options.origin.describe(),
            credentials = options.credentials,
            max_age = ?options.max_age,
            "cors policy constructed"
        );
        Ok(Self { options })
    }

    pub fn options(&self) -> &CorsOptions {
        &self.options
    }

    pub fn path(&self) -> &PathPattern {
        &self.options.path
    }

    pub fn applies_to(&self, path: &str) -> bool {
        self.options.path.matches(path)
    }

    /// Decides whether `request` is admitted and which headers to attach.
    ///
    /// Requests without an `Origin` are same-origin and pass untouched.
    /// Preflights fail closed on a missing or unknown method or header.
    pub fn evaluate(&self, request: &CorsRequest<'_>) -> AdmissionResult {
        let Some(origin) = request.cross_origin() else {
            return AdmissionResult::same_origin();
        };

        let builder = HeaderBuilder::new(&self.options);
        if !self.options.origin.matches(origin) {
            return Self::reject(&builder, Rejection::OriginNotAllowed);
        }

        if request.is_preflight {
            self.evaluate_preflight(&builder, origin, request)
        } else {
            Self::evaluate_actual(&builder, origin)
        }
    }

    fn evaluate_preflight(
        &self,
        builder: &HeaderBuilder<'_>,
        origin: &str,
        request: &CorsRequest<'_>,
    ) -> AdmissionResult {
        let Some(requested_method) = request
            .requested_method
            .map(str::trim)
            .filter(|value| !value.is_empty())
        else {
            return Self::reject(builder, Rejection::MissingRequestMethod);
        };

        if !is_http_token(requested_method) || !self.options.methods.allows(requested_method) {
            return Self::reject(
                builder,
                Rejection::MethodNotAllowed(requested_method.to_string()),
            );
        }

        if let Some(rejected) = self
            .options
            .allowed_headers
            .first_rejected(request.requested_headers.iter().copied())
        {
            return Self::reject(builder, Rejection::HeaderNotAllowed(rejected.to_string()));
        }

        let mut headers = HeaderCollection::with_estimate(7);
        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_methods_header(requested_method));
        headers.extend(builder.build_allowed_headers(&request.requested_headers));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_private_network_header(request));
        headers.extend(builder.build_max_age_header());
        headers.extend(builder.build_vary_header());

        AdmissionResult::allowed(headers.into_headers())
    }

    fn evaluate_actual(builder: &HeaderBuilder<'_>, origin: &str) -> AdmissionResult {
        let mut headers = HeaderCollection::with_estimate(4);
        headers.extend(builder.build_origin_header(origin));
        headers.extend(builder.build_credentials_header());
        headers.extend(builder.build_exposed_headers());
        headers.extend(builder.build_vary_header());

        AdmissionResult::allowed(headers.into_headers())
    }

    fn reject(builder: &HeaderBuilder<'_>, rejection: Rejection) -> AdmissionResult {
        AdmissionResult::rejected(rejection, builder.build_vary_header().into_headers())
    }
}

/// Evaluates `request` against `policy`. Same as [`CorsPolicy::evaluate`].
pub fn evaluate(policy: &CorsPolicy, request: &CorsRequest<'_>) -> AdmissionResult {
    policy.evaluate(request)
}

#[cfg(test)]
#[path = "policy_test.rs"]
mod policy_test;
