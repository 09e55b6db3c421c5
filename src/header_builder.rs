use crate::constants::header;
use crate::headers::HeaderCollection;
use crate::options::CorsOptions;
use crate::request::CorsRequest;

pub(crate) struct HeaderBuilder<'a> {
    options: &'a CorsOptions,
}

impl<'a> HeaderBuilder<'a> {
    pub(crate) fn new(options: &'a CorsOptions) -> Self {
        Self { options }
    }

    /// Echoes the request origin; the `*` literal is never emitted.
    pub(crate) fn build_origin_header(&self, origin: &str) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_ORIGIN, origin);
        headers
    }

    pub(crate) fn build_methods_header(&self, requested_method: &str) -> HeaderCollection {
        match self.options.methods.header_value(requested_method) {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_ALLOW_METHODS, value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    /// Echoes the requested headers; omitted when none were requested.
    pub(crate) fn build_allowed_headers(&self, requested: &[&str]) -> HeaderCollection {
        let entries = requested
            .iter()
            .map(|entry| entry.trim())
            .filter(|entry| !entry.is_empty())
            .collect::<Vec<_>>();

        if entries.is_empty() {
            return HeaderCollection::new();
        }

        let mut headers = HeaderCollection::with_estimate(1);
        headers.push(header::ACCESS_CONTROL_ALLOW_HEADERS, entries.join(","));
        headers
    }

    pub(crate) fn build_credentials_header(&self) -> HeaderCollection {
        if self.options.credentials {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_CREDENTIALS, "true");
            headers
        } else {
            HeaderCollection::new()
        }
    }

    pub(crate) fn build_private_network_header(
        &self,
        request: &CorsRequest<'_>,
    ) -> HeaderCollection {
        if self.options.allow_private_network && request.is_preflight && request.private_network {
            let mut headers = HeaderCollection::with_estimate(1);
            headers.push(header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK, "true");
            return headers;
        }
        HeaderCollection::new()
    }

    pub(crate) fn build_max_age_header(&self) -> HeaderCollection {
        match self.options.max_age {
            Some(seconds) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_MAX_AGE, seconds.to_string());
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_exposed_headers(&self) -> HeaderCollection {
        match self.options.exposed_headers.header_value() {
            Some(value) => {
                let mut headers = HeaderCollection::with_estimate(1);
                headers.push(header::ACCESS_CONTROL_EXPOSE_HEADERS, value);
                headers
            }
            None => HeaderCollection::new(),
        }
    }

    pub(crate) fn build_vary_header(&self) -> HeaderCollection {
        let mut headers = HeaderCollection::with_estimate(1);
        if self.options.vary {
            headers.add_vary(header::ORIGIN);
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_METHOD);
            headers.add_vary(header::ACCESS_CONTROL_REQUEST_HEADERS);
        }
        headers
    }
}

#[cfg(test)]
#[path = "header_builder_test.rs"]
mod header_builder_test;
