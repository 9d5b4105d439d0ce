#![warn(missing_docs)]
//! # OpenID End Session
//!
//! [RP-Initiated Logout](https://openid.net/specs/openid-connect-rpinitiated-1_0.html) requests
//! and responses for an OpenID Connect RP. This crate builds and persists the data, dispatching
//! the redirect and receiving the callback is left to the caller.
//!
//! ## Service Configuration
//! - [types::ServiceConfiguration::new]
//! - [types::ServiceConfiguration::from_issuer_metadata]
//!
//! ## End Session Request
//! - [end_session::EndSessionRequestBuilder::new]
//! - [end_session::EndSessionRequest::new]
//! - [end_session::EndSessionRequest::to_uri]
//! - [end_session::EndSessionRequest::json_serialize]
//! - [end_session::EndSessionRequest::json_deserialize]
//! - [end_session::EndSessionRequest::is_end_session_request]
//!
//! ## End Session Response
//! - [end_session::EndSessionResponseBuilder::new]
//! - [end_session::EndSessionResponse::json_serialize]
//! - [end_session::EndSessionResponse::json_deserialize]
//! - [end_session::EndSessionResponse::to_envelope]
//! - [end_session::EndSessionResponse::from_envelope]
//! - [end_session::EndSessionResponse::contains_end_session_response]
//!
//! ## Persisted Requests
//! - [management::PersistedRequest::from_json]

pub mod end_session;
mod helpers;
pub mod management;
mod tests;
pub mod types;

/// Re exports from the crate
pub mod re_exports {
    pub use serde_json::{self, json, Map, Value};
    pub use url;
}
