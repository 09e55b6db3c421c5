use super::*;
use crate::allowed_methods::AllowedMethods;
use crate::constants::{header, method};
use crate::exposed_headers::ExposedHeaders;
use crate::origin::AllowedOrigins;

fn default_options() -> CorsOptions {
    CorsOptions::default()
}

fn explicit_origin_options() -> CorsOptions {
    CorsOptions {
        origin: AllowedOrigins::patterns(["https://app.test"]).expect("valid origin pattern"),
        ..CorsOptions::default()
    }
}

mod build_origin_header {
    use super::*;

    #[test]
    fn should_echo_request_origin_when_origin_any_then_never_emit_wildcard() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        let map = builder
            .build_origin_header("https://api.test")
            .into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_ALLOW_ORIGIN),
            Some(&"https://api.test".to_string())
        );
        assert_eq!(map.len(), 1);
    }
}

mod build_methods_header {
    use super::*;

    #[test]
    fn should_join_configured_methods_when_list_then_ignore_requested_method() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_methods_header(method::PUT).into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some(&"GET,POST,PUT,DELETE,OPTIONS".to_string())
        );
    }

    #[test]
    fn should_echo_requested_method_when_methods_any() {
        let options = CorsOptions {
            methods: AllowedMethods::any(),
            ..default_options()
        };
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_methods_header("PROPFIND").into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_ALLOW_METHODS),
            Some(&"PROPFIND".to_string())
        );
    }

    #[test]
    fn should_omit_header_when_method_list_empty() {
        let options = CorsOptions {
            methods: AllowedMethods::list(Vec::<String>::new()),
            ..default_options()
        };
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_methods_header(method::GET).into_headers();

        assert!(map.is_empty());
    }
}

mod build_allowed_headers {
    use super::*;

    #[test]
    fn should_join_requested_headers_when_present() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        let map = builder
            .build_allowed_headers(&["Content-Type", " X-Trace ", ""])
            .into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_ALLOW_HEADERS),
            Some(&"Content-Type,X-Trace".to_string())
        );
    }

    #[test]
    fn should_omit_header_when_nothing_requested() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_allowed_headers(&[]).into_headers();

        assert!(map.is_empty());
    }
}

mod build_credentials_header {
    use super::*;

    #[test]
    fn should_omit_header_when_credentials_disabled() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        assert!(builder.build_credentials_header().into_headers().is_empty());
    }

    #[test]
    fn should_emit_true_when_credentials_enabled() {
        let options = CorsOptions {
            credentials: true,
            ..explicit_origin_options()
        };
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_credentials_header().into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_ALLOW_CREDENTIALS),
            Some(&"true".to_string())
        );
    }
}

mod build_private_network_header {
    use super::*;

    #[test]
    fn should_emit_header_when_enabled_and_preflight_asks() {
        let options = CorsOptions {
            allow_private_network: true,
            ..explicit_origin_options()
        };
        let builder = HeaderBuilder::new(&options);
        let request =
            CorsRequest::preflight("/", "https://app.test", method::GET).with_private_network(true);

        let map = builder
            .build_private_network_header(&request)
            .into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_ALLOW_PRIVATE_NETWORK),
            Some(&"true".to_string())
        );
    }

    #[test]
    fn should_omit_header_when_preflight_does_not_ask() {
        let options = CorsOptions {
            allow_private_network: true,
            ..explicit_origin_options()
        };
        let builder = HeaderBuilder::new(&options);
        let request = CorsRequest::preflight("/", "https://app.test", method::GET);

        assert!(
            builder
                .build_private_network_header(&request)
                .into_headers()
                .is_empty()
        );
    }

    #[test]
    fn should_omit_header_when_disabled() {
        let options = explicit_origin_options();
        let builder = HeaderBuilder::new(&options);
        let request =
            CorsRequest::preflight("/", "https://app.test", method::GET).with_private_network(true);

        assert!(
            builder
                .build_private_network_header(&request)
                .into_headers()
                .is_empty()
        );
    }
}

mod build_max_age_header {
    use super::*;

    #[test]
    fn should_render_seconds_when_configured() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_max_age_header().into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_MAX_AGE),
            Some(&"3600".to_string())
        );
    }

    #[test]
    fn should_render_zero_when_caching_disabled() {
        let options = CorsOptions {
            max_age: Some(0),
            ..default_options()
        };
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_max_age_header().into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_MAX_AGE),
            Some(&"0".to_string())
        );
    }

    #[test]
    fn should_omit_header_when_unset() {
        let options = CorsOptions {
            max_age: None,
            ..default_options()
        };
        let builder = HeaderBuilder::new(&options);

        assert!(builder.build_max_age_header().into_headers().is_empty());
    }
}

mod build_exposed_headers {
    use super::*;

    #[test]
    fn should_join_configured_headers() {
        let options = CorsOptions {
            exposed_headers: ExposedHeaders::list(["X-Trace", "X-Span"]),
            ..default_options()
        };
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_exposed_headers().into_headers();

        assert_eq!(
            map.get(header::ACCESS_CONTROL_EXPOSE_HEADERS),
            Some(&"X-Trace,X-Span".to_string())
        );
    }

    #[test]
    fn should_omit_header_when_none_configured() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        assert!(builder.build_exposed_headers().into_headers().is_empty());
    }
}

mod build_vary_header {
    use super::*;

    #[test]
    fn should_list_request_dimensions_when_enabled() {
        let options = CorsOptions {
            vary: true,
            ..default_options()
        };
        let builder = HeaderBuilder::new(&options);

        let map = builder.build_vary_header().into_headers();

        assert_eq!(
            map.get(header::VARY).map(String::as_str),
            Some("Origin, Access-Control-Request-Method, Access-Control-Request-Headers")
        );
    }

    #[test]
    fn should_omit_header_when_disabled() {
        let options = default_options();
        let builder = HeaderBuilder::new(&options);

        assert!(builder.build_vary_header().into_headers().is_empty());
    }
}
