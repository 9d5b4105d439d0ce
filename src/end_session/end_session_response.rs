use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};

use crate::helpers::json::{get_object, parse_object};
use crate::management::AuthorizationManagementResponse;
use crate::types::{Envelope, OidcClientError, OidcReturnType};

use super::EndSessionRequest;

/// The [Envelope] key [`EndSessionResponse::to_envelope()`] stores the response under
pub const END_SESSION_RESPONSE_KEY: &str = "openid_end_session.end_session_response";

const KEY_REQUEST: &str = "request";

/// # EndSessionResponse
/// The result of an [EndSessionRequest] after the provider redirected back to the client.
/// The provider returns no parameters, so the response only holds the originating request.
#[derive(Debug, Clone, PartialEq)]
pub struct EndSessionResponse {
    request: EndSessionRequest,
}

/// # EndSessionResponseBuilder
/// Creates instances of [EndSessionResponse]
#[derive(Debug, Clone)]
pub struct EndSessionResponseBuilder {
    request: EndSessionRequest,
}

impl EndSessionResponseBuilder {
    /// Creates a builder for the response to `request`
    pub fn new(request: Option<EndSessionRequest>) -> OidcReturnType<Self> {
        Ok(Self {
            request: Self::require_request(request)?,
        })
    }

    fn require_request(request: Option<EndSessionRequest>) -> OidcReturnType<EndSessionRequest> {
        request.ok_or_else(|| {
            Box::new(OidcClientError::new_null_field(
                "request",
                "request cannot be null",
            ))
        })
    }

    /// Replaces the request
    pub fn set_request(mut self, request: Option<EndSessionRequest>) -> OidcReturnType<Self> {
        self.request = Self::require_request(request)?;
        Ok(self)
    }

    /// # From Uri
    /// Absorbs the parameters of the provider's return redirect. The current provider does
    /// not return any, so nothing is extracted and any input is accepted.
    pub fn from_uri(self, uri: &str) -> Self {
        tracing::trace!(uri, "end session return uri carries no response parameters");
        self
    }

    /// Builds the [EndSessionResponse]
    pub fn build(self) -> EndSessionResponse {
        EndSessionResponse {
            request: self.request,
        }
    }
}

impl EndSessionResponse {
    /// The request this is a response to
    pub fn request(&self) -> &EndSessionRequest {
        &self.request
    }

    /// Always `None`, logout responses carry no state
    pub fn state(&self) -> Option<&str> {
        None
    }

    /// Produces a JSON representation of the response for persistent storage or local transmission
    pub fn json_serialize(&self) -> Map<String, Value> {
        let mut json = Map::new();
        json.insert(
            KEY_REQUEST.to_string(),
            Value::Object(self.request.json_serialize()),
        );
        json
    }

    /// Same as [`EndSessionResponse::json_serialize()`] as JSON text
    pub fn json_serialize_string(&self) -> String {
        Value::Object(self.json_serialize()).to_string()
    }

    /// # Json Deserialize
    /// Reads a response from the JSON produced by [`EndSessionResponse::json_serialize()`].
    /// Errors from reading the nested request are returned unchanged.
    pub fn json_deserialize(json: &Map<String, Value>) -> OidcReturnType<Self> {
        if !json.contains_key(KEY_REQUEST) {
            return Err(Box::new(OidcClientError::new_invalid_argument(
                "end session request not provided and not found in JSON",
                None,
            )));
        }

        let request = EndSessionRequest::json_deserialize(get_object(json, KEY_REQUEST)?)?;

        Ok(Self { request })
    }

    /// Same as [`EndSessionResponse::json_deserialize()`] from JSON text
    pub fn json_deserialize_str(json: &str) -> OidcReturnType<Self> {
        Self::json_deserialize(&parse_object(json)?)
    }

    /// # To Envelope
    /// Stores the serialized JSON text of this response under [END_SESSION_RESPONSE_KEY]
    pub fn to_envelope(&self) -> Envelope {
        let mut envelope = Envelope::new();
        envelope.put_extra(END_SESSION_RESPONSE_KEY, self.json_serialize_string());
        envelope
    }

    /// # From Envelope
    /// Extracts a response stored with [`EndSessionResponse::to_envelope()`].
    ///
    /// Returns `Ok(None)` when the envelope holds no end session response, and an
    /// [`OidcClientError::InvalidArgument`] wrapping the cause when the stored payload is malformed.
    pub fn from_envelope(envelope: &Envelope) -> OidcReturnType<Option<Self>> {
        let Some(payload) = envelope.get_extra(END_SESSION_RESPONSE_KEY) else {
            tracing::debug!("envelope does not contain an end session response");
            return Ok(None);
        };

        match Self::json_deserialize_str(payload) {
            Ok(response) => Ok(Some(response)),
            Err(e) => {
                tracing::warn!(error = %e, "envelope contains a malformed end session response");
                Err(Box::new(OidcClientError::new_invalid_argument(
                    "envelope contains malformed end session response",
                    Some(e),
                )))
            }
        }
    }

    /// Checks if the envelope holds an end session response. The payload is not validated.
    pub fn contains_end_session_response(envelope: &Envelope) -> bool {
        envelope.has_extra(END_SESSION_RESPONSE_KEY)
    }
}

impl AuthorizationManagementResponse for EndSessionResponse {
    fn state(&self) -> Option<&str> {
        EndSessionResponse::state(self)
    }

    fn json_serialize(&self) -> Map<String, Value> {
        EndSessionResponse::json_serialize(self)
    }

    fn to_envelope(&self) -> Envelope {
        EndSessionResponse::to_envelope(self)
    }
}

impl Serialize for EndSessionResponse {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json_serialize().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EndSessionResponse {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Map::<String, Value>::deserialize(deserializer)?;
        Self::json_deserialize(&json).map_err(de::Error::custom)
    }
}
