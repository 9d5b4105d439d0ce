//! # Types Module
//! Configuration, envelope and error types

mod envelope;
mod errors;
mod issuer_metadata;
mod service_configuration;

pub use envelope::Envelope;
pub use errors::{
    FormatError, InvalidArgumentError, NullFieldError, OidcClientError, OidcReturnType,
};
pub use issuer_metadata::IssuerMetadata;
pub use service_configuration::ServiceConfiguration;
