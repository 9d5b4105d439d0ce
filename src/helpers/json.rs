use serde_json::{Map, Value};
use url::Url;

use crate::types::{OidcClientError, OidcReturnType};

pub(crate) type JsonObject = Map<String, Value>;

fn missing(key: &str) -> Box<OidcClientError> {
    Box::new(OidcClientError::new_format_error(
        Some(key),
        &format!("field \"{key}\" not found in json object"),
    ))
}

pub(crate) fn parse_object(json: &str) -> OidcReturnType<JsonObject> {
    match serde_json::from_str::<Value>(json) {
        Ok(Value::Object(o)) => Ok(o),
        Ok(_) => Err(Box::new(OidcClientError::new_format_error(
            None,
            "json value is not an object",
        ))),
        Err(e) => Err(Box::new(OidcClientError::new_format_error(
            None,
            &format!("invalid json: {e}"),
        ))),
    }
}

pub(crate) fn get_string(json: &JsonObject, key: &str) -> OidcReturnType<String> {
    get_string_if_defined(json, key)?.ok_or_else(|| missing(key))
}

pub(crate) fn get_string_if_defined(
    json: &JsonObject,
    key: &str,
) -> OidcReturnType<Option<String>> {
    match json.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s.to_string())),
        Some(_) => Err(Box::new(OidcClientError::new_format_error(
            Some(key),
            &format!("field \"{key}\" must be a string"),
        ))),
    }
}

pub(crate) fn get_uri(json: &JsonObject, key: &str) -> OidcReturnType<Url> {
    get_uri_if_defined(json, key)?.ok_or_else(|| missing(key))
}

pub(crate) fn get_uri_if_defined(json: &JsonObject, key: &str) -> OidcReturnType<Option<Url>> {
    let Some(raw) = get_string_if_defined(json, key)? else {
        return Ok(None);
    };

    Url::parse(&raw).map(Some).map_err(|e| {
        Box::new(OidcClientError::new_format_error(
            Some(key),
            &format!("field \"{key}\" is not a valid absolute URL: {e}"),
        ))
    })
}

pub(crate) fn get_object<'a>(
    json: &'a JsonObject,
    key: &str,
) -> OidcReturnType<&'a JsonObject> {
    match json.get(key) {
        None | Some(Value::Null) => Err(missing(key)),
        Some(Value::Object(o)) => Ok(o),
        Some(_) => Err(Box::new(OidcClientError::new_format_error(
            Some(key),
            &format!("field \"{key}\" must be a json object"),
        ))),
    }
}

pub(crate) fn put_uri_if_defined(json: &mut JsonObject, key: &str, uri: Option<&Url>) {
    if let Some(u) = uri {
        json.insert(key.to_string(), Value::String(u.to_string()));
    }
}
