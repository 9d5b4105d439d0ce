use serde_json::{Map, Value};
use url::Url;

use crate::helpers::json::{
    get_object, get_uri, get_uri_if_defined, put_uri_if_defined, JsonObject,
};
use crate::helpers::validate_url;

use super::{IssuerMetadata, OidcClientError, OidcReturnType};

const KEY_AUTHORIZATION_ENDPOINT: &str = "authorization_endpoint";
const KEY_TOKEN_ENDPOINT: &str = "token_endpoint";
const KEY_REGISTRATION_ENDPOINT: &str = "registration_endpoint";
const KEY_END_SESSION_ENDPOINT: &str = "end_session_endpoint";
const KEY_DISCOVERY_DOC: &str = "discovery_doc";

const METADATA_FIELDS: [&str; 5] = [
    "issuer",
    KEY_AUTHORIZATION_ENDPOINT,
    KEY_TOKEN_ENDPOINT,
    KEY_REGISTRATION_ENDPOINT,
    KEY_END_SESSION_ENDPOINT,
];

/// # ServiceConfiguration
/// Endpoints of the Authorization Server an end session request is dispatched to.
///
/// Create one manually with [`ServiceConfiguration::new()`] or from discovery metadata
/// with [`ServiceConfiguration::from_issuer_metadata()`].
#[derive(Debug, Clone, PartialEq)]
pub struct ServiceConfiguration {
    pub(crate) authorization_endpoint: Option<Url>,
    pub(crate) token_endpoint: Option<Url>,
    pub(crate) registration_endpoint: Option<Url>,
    pub(crate) end_session_endpoint: Url,
    pub(crate) discovery_doc: Option<IssuerMetadata>,
}

impl ServiceConfiguration {
    /// Creates a configuration with only the end session endpoint set
    pub fn new(end_session_endpoint: Url) -> Self {
        Self {
            authorization_endpoint: None,
            token_endpoint: None,
            registration_endpoint: None,
            end_session_endpoint,
            discovery_doc: None,
        }
    }

    /// Sets the authorization endpoint
    pub fn with_authorization_endpoint(mut self, endpoint: Url) -> Self {
        self.authorization_endpoint = Some(endpoint);
        self
    }

    /// Sets the token endpoint
    pub fn with_token_endpoint(mut self, endpoint: Url) -> Self {
        self.token_endpoint = Some(endpoint);
        self
    }

    /// Sets the dynamic client registration endpoint
    pub fn with_registration_endpoint(mut self, endpoint: Url) -> Self {
        self.registration_endpoint = Some(endpoint);
        self
    }

    /// # From Issuer Metadata
    /// Builds the configuration from discovery metadata. The metadata is kept and
    /// serialized along with the configuration.
    ///
    /// - `metadata` - [IssuerMetadata] : Must carry a valid `end_session_endpoint`. Its
    ///   `other_fields` must not repeat any of the named metadata fields.
    pub fn from_issuer_metadata(metadata: IssuerMetadata) -> OidcReturnType<Self> {
        if let Some(field) = METADATA_FIELDS
            .iter()
            .find(|f| metadata.other_fields.contains_key(**f))
        {
            return Err(Box::new(OidcClientError::new_invalid_argument(
                &format!("{field} cannot be set in other_fields"),
                None,
            )));
        }

        let end_session_endpoint = match &metadata.end_session_endpoint {
            Some(e) => validate_url(e)?,
            None => {
                return Err(Box::new(OidcClientError::new_invalid_argument(
                    "end_session_endpoint must be configured on the issuer",
                    None,
                )))
            }
        };

        let optional = |endpoint: &Option<String>| -> OidcReturnType<Option<Url>> {
            endpoint.as_deref().map(validate_url).transpose()
        };

        Ok(Self {
            authorization_endpoint: optional(&metadata.authorization_endpoint)?,
            token_endpoint: optional(&metadata.token_endpoint)?,
            registration_endpoint: optional(&metadata.registration_endpoint)?,
            end_session_endpoint,
            discovery_doc: Some(metadata),
        })
    }

    /// Returns the end session endpoint
    pub fn end_session_endpoint(&self) -> &Url {
        &self.end_session_endpoint
    }

    /// Returns the authorization endpoint
    pub fn authorization_endpoint(&self) -> Option<&Url> {
        self.authorization_endpoint.as_ref()
    }

    /// Returns the token endpoint
    pub fn token_endpoint(&self) -> Option<&Url> {
        self.token_endpoint.as_ref()
    }

    /// Returns the registration endpoint
    pub fn registration_endpoint(&self) -> Option<&Url> {
        self.registration_endpoint.as_ref()
    }

    /// Returns the discovery metadata this configuration was created from, if any
    pub fn discovery_doc(&self) -> Option<&IssuerMetadata> {
        self.discovery_doc.as_ref()
    }

    /// Converts the configuration to a JSON object
    pub fn to_json(&self) -> Map<String, Value> {
        let mut json = JsonObject::new();

        put_uri_if_defined(
            &mut json,
            KEY_AUTHORIZATION_ENDPOINT,
            self.authorization_endpoint.as_ref(),
        );
        put_uri_if_defined(&mut json, KEY_TOKEN_ENDPOINT, self.token_endpoint.as_ref());
        put_uri_if_defined(
            &mut json,
            KEY_REGISTRATION_ENDPOINT,
            self.registration_endpoint.as_ref(),
        );
        put_uri_if_defined(
            &mut json,
            KEY_END_SESSION_ENDPOINT,
            Some(&self.end_session_endpoint),
        );

        if let Some(doc) = &self.discovery_doc {
            match serde_json::to_value(doc) {
                Ok(value) => {
                    json.insert(KEY_DISCOVERY_DOC.to_string(), value);
                }
                Err(e) => {
                    tracing::warn!(error = %e, "discovery document could not be serialized");
                }
            }
        }

        json
    }

    /// Reads a configuration from the JSON produced by [`ServiceConfiguration::to_json()`].
    ///
    /// When `discovery_doc` is present the configuration is rebuilt from it, and the top level
    /// endpoints that are present take precedence over the ones in the document.
    pub fn from_json(json: &Map<String, Value>) -> OidcReturnType<Self> {
        let authorization_endpoint = get_uri_if_defined(json, KEY_AUTHORIZATION_ENDPOINT)?;
        let token_endpoint = get_uri_if_defined(json, KEY_TOKEN_ENDPOINT)?;
        let registration_endpoint = get_uri_if_defined(json, KEY_REGISTRATION_ENDPOINT)?;

        if json.contains_key(KEY_DISCOVERY_DOC) {
            let doc = get_object(json, KEY_DISCOVERY_DOC)?;

            let metadata = serde_json::from_value::<IssuerMetadata>(Value::Object(doc.clone()))
                .map_err(|e| {
                    Box::new(OidcClientError::new_format_error(
                        Some(KEY_DISCOVERY_DOC),
                        &format!("invalid discovery document: {e}"),
                    ))
                })?;

            let mut configuration = Self::from_issuer_metadata(metadata).map_err(|e| {
                Box::new(OidcClientError::new_format_error(
                    Some(KEY_DISCOVERY_DOC),
                    &e.to_string(),
                ))
            })?;

            if let Some(endpoint) = get_uri_if_defined(json, KEY_END_SESSION_ENDPOINT)? {
                configuration.end_session_endpoint = endpoint;
            }
            configuration.authorization_endpoint =
                authorization_endpoint.or(configuration.authorization_endpoint);
            configuration.token_endpoint = token_endpoint.or(configuration.token_endpoint);
            configuration.registration_endpoint =
                registration_endpoint.or(configuration.registration_endpoint);

            return Ok(configuration);
        }

        Ok(Self {
            authorization_endpoint,
            token_endpoint,
            registration_endpoint,
            end_session_endpoint: get_uri(json, KEY_END_SESSION_ENDPOINT)?,
            discovery_doc: None,
        })
    }
}
