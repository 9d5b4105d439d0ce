//! # Authorization management requests and responses
//! Traits shared by the request/response kinds that are dispatched through a browser redirect,
//! and [PersistedRequest] which picks the right kind back out of persisted JSON.

use serde_json::{Map, Value};
use url::Url;

use crate::end_session::EndSessionRequest;
use crate::types::{Envelope, OidcReturnType};

/// A request that is dispatched by redirecting the user agent to the provider
pub trait AuthorizationManagementRequest {
    /// The url the user agent should be redirected to
    fn to_uri(&self) -> Url;

    /// The `state` value the response must echo back, if the request has one
    fn state(&self) -> Option<&str>;

    /// JSON representation for persistent storage or local transmission
    fn json_serialize(&self) -> Map<String, Value>;

    /// [`AuthorizationManagementRequest::json_serialize()`] as JSON text
    fn json_serialize_string(&self) -> String {
        Value::Object(self.json_serialize()).to_string()
    }
}

/// The result handed back after the provider redirected to the client
pub trait AuthorizationManagementResponse {
    /// The `state` value returned by the provider, if any
    fn state(&self) -> Option<&str>;

    /// JSON representation for persistent storage or local transmission
    fn json_serialize(&self) -> Map<String, Value>;

    /// [`AuthorizationManagementResponse::json_serialize()`] as JSON text
    fn json_serialize_string(&self) -> String {
        Value::Object(self.json_serialize()).to_string()
    }

    /// Wraps the response in an [Envelope] to pass it to the component waiting for it
    fn to_envelope(&self) -> Envelope;
}

/// # PersistedRequest
/// A request read back from persisted state. Kinds this crate does not model are kept
/// verbatim in [`PersistedRequest::Other`] for their own deserializers.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistedRequest {
    /// An end session request
    EndSession(EndSessionRequest),
    /// Any other request kind
    Other(Map<String, Value>),
}

impl PersistedRequest {
    /// # From Json
    /// Probes `json` with [`EndSessionRequest::is_end_session_request()`] and only deserializes
    /// it as an [EndSessionRequest] when the probe matches
    pub fn from_json(json: Map<String, Value>) -> OidcReturnType<Self> {
        if EndSessionRequest::is_end_session_request(&json) {
            return EndSessionRequest::json_deserialize(&json).map(Self::EndSession);
        }

        Ok(Self::Other(json))
    }

    /// Returns the end session request if this is one
    pub fn as_end_session(&self) -> Option<&EndSessionRequest> {
        match self {
            Self::EndSession(r) => Some(r),
            Self::Other(_) => None,
        }
    }

    /// JSON of the underlying request
    pub fn json_serialize(&self) -> Map<String, Value> {
        match self {
            Self::EndSession(r) => r.json_serialize(),
            Self::Other(json) => json.clone(),
        }
    }
}
