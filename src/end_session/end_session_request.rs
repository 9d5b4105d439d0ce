use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use serde_json::{Map, Value};
use url::Url;

use crate::helpers::json::{get_object, get_string, get_uri, parse_object};
use crate::management::AuthorizationManagementRequest;
use crate::types::{OidcClientError, OidcReturnType, ServiceConfiguration};

const PARAM_LOGOUT_URI: &str = "logout_uri";
const PARAM_CLIENT_ID: &str = "client_id";

const KEY_CONFIGURATION: &str = "configuration";
const KEY_CLIENT_ID: &str = "client_id";
const KEY_LOGOUT_URI: &str = "logout_uri";

/// # EndSessionRequest
/// An OpenID Connect [RP-Initiated Logout](https://openid.net/specs/openid-connect-rpinitiated-1_0.html#RPLogout) request.
///
/// The target provider does not echo a `state` on its logout redirect, so this request never carries one.
#[derive(Debug, Clone, PartialEq)]
pub struct EndSessionRequest {
    configuration: ServiceConfiguration,
    client_id: String,
    logout_uri: Url,
}

/// # EndSessionRequestBuilder
/// Creates instances of [EndSessionRequest]. Every setter validates its argument
/// immediately, so [`EndSessionRequestBuilder::build()`] cannot fail.
#[derive(Debug, Clone)]
pub struct EndSessionRequestBuilder {
    configuration: ServiceConfiguration,
    client_id: String,
    logout_uri: Url,
}

fn require<T>(value: Option<T>, field: &'static str, message: &str) -> OidcReturnType<T> {
    value.ok_or_else(|| Box::new(OidcClientError::new_null_field(field, message)))
}

fn validate_client_id(client_id: &str) -> OidcReturnType<()> {
    if client_id.is_empty() {
        return Err(Box::new(OidcClientError::new_invalid_argument(
            "client id cannot be empty",
            None,
        )));
    }
    Ok(())
}

impl EndSessionRequestBuilder {
    /// Creates a builder with all the required fields
    ///
    /// - `configuration` - [ServiceConfiguration] the request is dispatched with
    /// - `client_id` - Non empty client identifier
    /// - `logout_uri` - Where the provider redirects to after logout
    pub fn new(
        configuration: Option<ServiceConfiguration>,
        client_id: Option<&str>,
        logout_uri: Option<Url>,
    ) -> OidcReturnType<Self> {
        let configuration =
            require(configuration, "configuration", "configuration cannot be null")?;
        let client_id = require(client_id, "client_id", "client id cannot be null")?;
        validate_client_id(client_id)?;
        let logout_uri = require(logout_uri, "logout_uri", "logout uri cannot be null")?;

        Ok(Self {
            configuration,
            client_id: client_id.to_string(),
            logout_uri,
        })
    }

    /// Replaces the service configuration
    pub fn set_configuration(
        mut self,
        configuration: Option<ServiceConfiguration>,
    ) -> OidcReturnType<Self> {
        self.configuration =
            require(configuration, "configuration", "configuration cannot be null")?;
        Ok(self)
    }

    /// Replaces the client id
    pub fn set_client_id(mut self, client_id: Option<&str>) -> OidcReturnType<Self> {
        let client_id = require(client_id, "client_id", "client id cannot be null")?;
        validate_client_id(client_id)?;
        self.client_id = client_id.to_string();
        Ok(self)
    }

    /// Replaces the logout uri
    pub fn set_logout_uri(mut self, logout_uri: Option<Url>) -> OidcReturnType<Self> {
        self.logout_uri = require(logout_uri, "logout_uri", "logout uri cannot be null")?;
        Ok(self)
    }

    /// Constructs the [EndSessionRequest]
    pub fn build(self) -> EndSessionRequest {
        tracing::debug!(
            client_id = %self.client_id,
            logout_uri = %self.logout_uri,
            "end session request built"
        );

        EndSessionRequest {
            configuration: self.configuration,
            client_id: self.client_id,
            logout_uri: self.logout_uri,
        }
    }
}

impl EndSessionRequest {
    /// # New End Session Request
    /// Validates and creates the request in one step
    pub fn new(
        configuration: ServiceConfiguration,
        client_id: &str,
        logout_uri: Url,
    ) -> OidcReturnType<Self> {
        let builder =
            EndSessionRequestBuilder::new(Some(configuration), Some(client_id), Some(logout_uri))?;
        Ok(builder.build())
    }

    /// The [ServiceConfiguration] of the provider
    pub fn configuration(&self) -> &ServiceConfiguration {
        &self.configuration
    }

    /// Client identifier
    pub fn client_id(&self) -> &str {
        &self.client_id
    }

    /// The client's post logout redirect target
    pub fn logout_uri(&self) -> &Url {
        &self.logout_uri
    }

    /// Always `None`. The provider's logout endpoint does not support `state`.
    pub fn state(&self) -> Option<&str> {
        None
    }

    /// # To Uri
    /// Builds the logout redirect url: the configured end session endpoint with
    /// `logout_uri` and `client_id` appended in that order
    pub fn to_uri(&self) -> Url {
        let mut end_session_endpoint = self.configuration.end_session_endpoint().clone();

        end_session_endpoint
            .query_pairs_mut()
            .append_pair(PARAM_LOGOUT_URI, self.logout_uri.as_str())
            .append_pair(PARAM_CLIENT_ID, &self.client_id);

        tracing::debug!(url = %end_session_endpoint, "end session url created");

        end_session_endpoint
    }

    /// Produces a JSON representation of the request for persistent storage or local transmission
    pub fn json_serialize(&self) -> Map<String, Value> {
        let mut json = Map::new();
        json.insert(
            KEY_CONFIGURATION.to_string(),
            Value::Object(self.configuration.to_json()),
        );
        json.insert(
            KEY_CLIENT_ID.to_string(),
            Value::String(self.client_id.clone()),
        );
        json.insert(
            KEY_LOGOUT_URI.to_string(),
            Value::String(self.logout_uri.to_string()),
        );
        json
    }

    /// Same as [`EndSessionRequest::json_serialize()`] as JSON text
    pub fn json_serialize_string(&self) -> String {
        Value::Object(self.json_serialize()).to_string()
    }

    /// # Json Deserialize
    /// Reads a request from the JSON produced by [`EndSessionRequest::json_serialize()`]
    pub fn json_deserialize(json: &Map<String, Value>) -> OidcReturnType<Self> {
        let configuration =
            ServiceConfiguration::from_json(get_object(json, KEY_CONFIGURATION)?)?;

        let client_id = get_string(json, KEY_CLIENT_ID)?;
        if client_id.is_empty() {
            return Err(Box::new(OidcClientError::new_format_error(
                Some(KEY_CLIENT_ID),
                "field \"client_id\" must be a non-empty string",
            )));
        }

        let logout_uri = get_uri(json, KEY_LOGOUT_URI)?;

        Ok(Self {
            configuration,
            client_id,
            logout_uri,
        })
    }

    /// Same as [`EndSessionRequest::json_deserialize()`] from JSON text
    pub fn json_deserialize_str(json: &str) -> OidcReturnType<Self> {
        Self::json_deserialize(&parse_object(json)?)
    }

    /// Checks whether a persisted request JSON object is an end session request.
    /// Only looks for the `logout_uri` key, the object is not validated.
    pub fn is_end_session_request(json: &Map<String, Value>) -> bool {
        json.contains_key(KEY_LOGOUT_URI)
    }
}

impl AuthorizationManagementRequest for EndSessionRequest {
    fn to_uri(&self) -> Url {
        EndSessionRequest::to_uri(self)
    }

    fn state(&self) -> Option<&str> {
        EndSessionRequest::state(self)
    }

    fn json_serialize(&self) -> Map<String, Value> {
        EndSessionRequest::json_serialize(self)
    }
}

impl Serialize for EndSessionRequest {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.json_serialize().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for EndSessionRequest {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let json = Map::<String, Value>::deserialize(deserializer)?;
        Self::json_deserialize(&json).map_err(de::Error::custom)
    }
}
