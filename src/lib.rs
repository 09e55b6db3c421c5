mod allowed_headers;
mod allowed_methods;
mod config;
pub mod constants;
mod exposed_headers;
mod header_builder;
mod headers;
mod options;
mod origin;
mod path;
mod policy;
mod registry;
mod request;
mod result;
mod util;

pub use allowed_headers::AllowedHeaders;
pub use allowed_methods::AllowedMethods;
pub use config::{ConfigError, CorsConfig, RegistryConfig};
pub use exposed_headers::ExposedHeaders;
pub use headers::Headers;
pub use options::{CorsOptions, ValidationError};
pub use origin::{AllowedOrigins, OriginPattern, PatternError};
pub use path::{PathPattern, PathPatternError};
pub use policy::{CorsPolicy, evaluate};
pub use registry::CorsRegistry;
pub use request::CorsRequest;
pub use result::{AdmissionResult, Rejection};
