#![allow(dead_code)]

use gateway_cors::constants::method;
use gateway_cors::{
    AdmissionResult, AllowedHeaders, AllowedMethods, AllowedOrigins, CorsOptions, CorsPolicy,
    CorsRequest, ExposedHeaders, PathPattern,
};

#[derive(Default)]
pub struct PolicyBuilder {
    origins: Option<Vec<String>>,
    methods: Option<AllowedMethods>,
    allowed_headers: Option<AllowedHeaders>,
    exposed_headers: Option<ExposedHeaders>,
    credentials: Option<bool>,
    max_age: Option<Option<u64>>,
    private_network: Option<bool>,
    vary: Option<bool>,
    path: Option<String>,
}

impl PolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn origins<I, S>(mut self, patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.origins = Some(patterns.into_iter().map(Into::into).collect());
        self
    }

    pub fn methods<I, S>(mut self, methods: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.methods = Some(AllowedMethods::list(methods));
        self
    }

    pub fn methods_any(mut self) -> Self {
        self.methods = Some(AllowedMethods::any());
        self
    }

    pub fn allowed_headers(mut self, headers: AllowedHeaders) -> Self {
        self.allowed_headers = Some(headers);
        self
    }

    pub fn exposed_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.exposed_headers = Some(ExposedHeaders::list(headers));
        self
    }

    pub fn credentials(mut self, enabled: bool) -> Self {
        self.credentials = Some(enabled);
        self
    }

    pub fn max_age(mut self, value: Option<u64>) -> Self {
        self.max_age = Some(value);
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.private_network = Some(enabled);
        self
    }

    pub fn vary(mut self, enabled: bool) -> Self {
        self.vary = Some(enabled);
        self
    }

    pub fn path(mut self, pattern: impl Into<String>) -> Self {
        self.path = Some(pattern.into());
        self
    }

    pub fn options(self) -> CorsOptions {
        let defaults = CorsOptions::default();

        CorsOptions {
            origin: match self.origins {
                Some(patterns) => {
                    AllowedOrigins::patterns(patterns).expect("valid origin patterns")
                }
                None => defaults.origin,
            },
            methods: self.methods.unwrap_or(defaults.methods),
            allowed_headers: self.allowed_headers.unwrap_or(defaults.allowed_headers),
            exposed_headers: self.exposed_headers.unwrap_or(defaults.exposed_headers),
            credentials: self.credentials.unwrap_or(defaults.credentials),
            allow_private_network: self
                .private_network
                .unwrap_or(defaults.allow_private_network),
            max_age: self.max_age.unwrap_or(defaults.max_age),
            path: match self.path {
                Some(pattern) => PathPattern::parse(&pattern).expect("valid path pattern"),
                None => defaults.path,
            },
            vary: self.vary.unwrap_or(defaults.vary),
        }
    }

    pub fn build(self) -> CorsPolicy {
        CorsPolicy::new(self.options()).expect("valid CORS configuration")
    }
}

pub struct SimpleRequestBuilder {
    method: String,
    path: String,
    origin: Option<String>,
}

impl Default for SimpleRequestBuilder {
    fn default() -> Self {
        Self {
            method: method::GET.into(),
            path: "/api/x".into(),
            origin: None,
        }
    }
}

impl SimpleRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn method(mut self, method: impl Into<String>) -> Self {
        self.method = method.into();
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn evaluate(self, policy: &CorsPolicy) -> AdmissionResult {
        let request = CorsRequest::from_headers(
            &self.method,
            &self.path,
            self.origin.as_deref(),
            None,
            None,
            None,
        );
        policy.evaluate(&request)
    }
}

#[derive(Default)]
pub struct PreflightRequestBuilder {
    path: Option<String>,
    origin: Option<String>,
    request_method: Option<String>,
    request_headers: Option<String>,
    private_network: bool,
}

impl PreflightRequestBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn origin(mut self, origin: impl Into<String>) -> Self {
        self.origin = Some(origin.into());
        self
    }

    pub fn request_method(mut self, method: impl Into<String>) -> Self {
        self.request_method = Some(method.into());
        self
    }

    pub fn request_headers(mut self, headers: impl Into<String>) -> Self {
        self.request_headers = Some(headers.into());
        self
    }

    pub fn private_network(mut self, enabled: bool) -> Self {
        self.private_network = enabled;
        self
    }

    /// Evaluates as a preflight even when the request-method header is absent.
    pub fn evaluate(self, policy: &CorsPolicy) -> AdmissionResult {
        let path = self.path.as_deref().unwrap_or("/api/x");
        let mut request = CorsRequest::from_headers(
            method::OPTIONS,
            path,
            self.origin.as_deref(),
            self.request_method.as_deref(),
            self.request_headers.as_deref(),
            self.private_network.then_some("true"),
        );
        request.is_preflight = true;
        policy.evaluate(&request)
    }
}

pub fn policy() -> PolicyBuilder {
    PolicyBuilder::new()
}

pub fn simple_request() -> SimpleRequestBuilder {
    SimpleRequestBuilder::new()
}

pub fn preflight_request() -> PreflightRequestBuilder {
    PreflightRequestBuilder::new()
}
