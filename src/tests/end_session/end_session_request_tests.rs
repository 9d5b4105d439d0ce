use assert_json_diff::assert_json_eq;
use serde_json::{json, Map, Value};
use url::Url;

use crate::end_session::{EndSessionRequest, EndSessionRequestBuilder};
use crate::management::AuthorizationManagementRequest;
use crate::tests::helpers::{
    get_query, test_end_session_request, test_end_session_request_builder, test_logout_uri,
    test_service_config, TEST_CLIENT_ID, TEST_LOGOUT_URI,
};
use crate::types::ServiceConfiguration;

fn as_object(value: Value) -> Map<String, Value> {
    match value {
        Value::Object(o) => o,
        _ => panic!("not an object"),
    }
}

mod builder {
    use super::*;

    #[test]
    fn returns_null_field_error_if_configuration_is_none() {
        let err = EndSessionRequestBuilder::new(None, Some(TEST_CLIENT_ID), Some(test_logout_uri()))
            .unwrap_err();

        let null_field = err.null_field();
        assert_eq!("configuration", null_field.field);
        assert_eq!("configuration cannot be null", null_field.message);
    }

    #[test]
    fn returns_null_field_error_if_client_id_is_none() {
        let err = EndSessionRequestBuilder::new(
            Some(test_service_config()),
            None,
            Some(test_logout_uri()),
        )
        .unwrap_err();

        assert_eq!("client_id", err.null_field().field);
    }

    #[test]
    fn returns_invalid_argument_error_if_client_id_is_empty() {
        let err = EndSessionRequestBuilder::new(
            Some(test_service_config()),
            Some(""),
            Some(test_logout_uri()),
        )
        .unwrap_err();

        assert!(err.is_invalid_argument());
        assert_eq!("client id cannot be empty", err.to_string());
    }

    #[test]
    fn returns_null_field_error_if_logout_uri_is_none() {
        let err = EndSessionRequestBuilder::new(
            Some(test_service_config()),
            Some(TEST_CLIENT_ID),
            None,
        )
        .unwrap_err();

        assert_eq!("logout_uri", err.null_field().field);
    }

    #[test]
    fn setters_validate_eagerly() {
        assert!(test_end_session_request_builder()
            .set_configuration(None)
            .unwrap_err()
            .is_null_field());
        assert!(test_end_session_request_builder()
            .set_client_id(None)
            .unwrap_err()
            .is_null_field());
        assert!(test_end_session_request_builder()
            .set_client_id(Some(""))
            .unwrap_err()
            .is_invalid_argument());
        assert!(test_end_session_request_builder()
            .set_logout_uri(None)
            .unwrap_err()
            .is_null_field());
    }

    #[test]
    fn setters_overwrite_previous_values() {
        let configuration =
            ServiceConfiguration::new(Url::parse("https://other.example.com/logout").unwrap());

        let request = test_end_session_request_builder()
            .set_configuration(Some(configuration.clone()))
            .unwrap()
            .set_client_id(Some("other"))
            .unwrap()
            .set_logout_uri(Some(Url::parse("https://rp.example.com/other").unwrap()))
            .unwrap()
            .build();

        assert_eq!(&configuration, request.configuration());
        assert_eq!("other", request.client_id());
        assert_eq!("https://rp.example.com/other", request.logout_uri().as_str());
    }

    #[test]
    fn new_creates_the_same_request_as_the_builder() {
        let request =
            EndSessionRequest::new(test_service_config(), TEST_CLIENT_ID, test_logout_uri())
                .unwrap();

        assert_eq!(test_end_session_request(), request);
    }

    #[test]
    fn new_rejects_an_empty_client_id() {
        let err = EndSessionRequest::new(test_service_config(), "", test_logout_uri()).unwrap_err();

        assert!(err.is_invalid_argument());
    }
}

mod to_uri {
    use super::*;

    #[test]
    fn appends_logout_uri_and_client_id_to_the_end_session_endpoint() {
        let url = test_end_session_request().to_uri();

        assert_eq!(
            "https://op.example.com/session/end?logout_uri=https%3A%2F%2Frp.example.com%2Flogout%2Fcb&client_id=test_client_id",
            url.to_string()
        );
    }

    #[test]
    fn query_contains_only_the_request_values() {
        let request = test_end_session_request();
        let url = request.to_uri();

        assert_eq!(
            Some(request.logout_uri().to_string()),
            get_query(&url, "logout_uri")
        );
        assert_eq!(
            Some(request.client_id().to_string()),
            get_query(&url, "client_id")
        );
        assert_eq!(2, url.query_pairs().count());
        assert!(get_query(&url, "state").is_none());
    }

    #[test]
    fn keeps_the_existing_query_of_the_end_session_endpoint() {
        let configuration = ServiceConfiguration::new(
            Url::parse("https://op.example.com/session/end?foo=bar").unwrap(),
        );
        let request =
            EndSessionRequest::new(configuration, TEST_CLIENT_ID, test_logout_uri()).unwrap();

        let url = request.to_uri();

        let keys: Vec<String> = url.query_pairs().map(|(k, _)| k.to_string()).collect();
        assert_eq!(vec!["foo", "logout_uri", "client_id"], keys);
        assert_eq!(Some("bar".to_string()), get_query(&url, "foo"));
    }

    #[test]
    fn is_deterministic() {
        let request = test_end_session_request();

        assert_eq!(request.to_uri(), request.to_uri());
        assert_eq!(
            request.to_uri(),
            AuthorizationManagementRequest::to_uri(&request)
        );
    }
}

mod json {
    use super::*;

    #[test]
    fn serializes_with_the_fixed_key_names() {
        let json = test_end_session_request().json_serialize();

        assert_json_eq!(
            json!({
                "configuration": {
                    "authorization_endpoint": "https://op.example.com/auth",
                    "token_endpoint": "https://op.example.com/token",
                    "end_session_endpoint": "https://op.example.com/session/end"
                },
                "client_id": TEST_CLIENT_ID,
                "logout_uri": TEST_LOGOUT_URI
            }),
            Value::Object(json)
        );
    }

    #[test]
    fn round_trips_through_json_text() {
        let request = test_end_session_request();

        let copy = EndSessionRequest::json_deserialize_str(&request.json_serialize_string()).unwrap();

        assert_eq!(request.client_id(), copy.client_id());
        assert_eq!(request.logout_uri(), copy.logout_uri());
        assert_eq!(request.configuration(), copy.configuration());
    }

    #[test]
    fn round_trips_through_serde() {
        let request = test_end_session_request();

        let text = serde_json::to_string(&request).unwrap();
        let copy: EndSessionRequest = serde_json::from_str(&text).unwrap();

        assert_eq!(request, copy);
    }

    #[test]
    fn serde_reports_codec_errors() {
        let err = serde_json::from_value::<EndSessionRequest>(json!({"client_id": "a"}))
            .unwrap_err();

        assert!(err.to_string().contains("configuration"));
    }

    #[test]
    fn missing_keys_are_format_errors_naming_the_key() {
        for key in ["configuration", "client_id", "logout_uri"] {
            let mut json = test_end_session_request().json_serialize();
            json.remove(key);

            let err = EndSessionRequest::json_deserialize(&json).unwrap_err();

            assert_eq!(Some(key.to_string()), err.format_error().key);
        }
    }

    #[test]
    fn malformed_logout_uri_is_a_format_error() {
        let mut json = test_end_session_request().json_serialize();
        json.insert("logout_uri".to_string(), json!("not a uri"));

        let err = EndSessionRequest::json_deserialize(&json).unwrap_err();

        assert_eq!(Some("logout_uri".to_string()), err.format_error().key);
    }

    #[test]
    fn empty_client_id_is_a_format_error() {
        let mut json = test_end_session_request().json_serialize();
        json.insert("client_id".to_string(), json!(""));

        let err = EndSessionRequest::json_deserialize(&json).unwrap_err();

        assert_eq!(Some("client_id".to_string()), err.format_error().key);
    }

    #[test]
    fn configuration_errors_propagate_unchanged() {
        let mut json = test_end_session_request().json_serialize();
        json.insert("configuration".to_string(), json!({}));

        let err = EndSessionRequest::json_deserialize(&json).unwrap_err();

        assert_eq!(
            Some("end_session_endpoint".to_string()),
            err.format_error().key
        );
    }

    #[test]
    fn configuration_must_be_an_object() {
        let mut json = test_end_session_request().json_serialize();
        json.insert("configuration".to_string(), json!("https://op.example.com"));

        let err = EndSessionRequest::json_deserialize(&json).unwrap_err();

        assert_eq!(Some("configuration".to_string()), err.format_error().key);
    }

    #[test]
    fn invalid_json_text_is_a_format_error() {
        let err = EndSessionRequest::json_deserialize_str("{").unwrap_err();

        let format = err.format_error();
        assert!(format.key.is_none());
    }
}

#[test]
fn state_is_always_none() {
    let request = test_end_session_request();

    assert!(request.state().is_none());
    assert!(AuthorizationManagementRequest::state(&request).is_none());
}

#[test]
fn is_end_session_request_when_logout_uri_is_present() {
    let json = test_end_session_request().json_serialize();

    assert!(EndSessionRequest::is_end_session_request(&json));
    assert!(EndSessionRequest::is_end_session_request(&as_object(
        json!({ "logout_uri": "https://x/r" })
    )));
}

#[test]
fn is_not_end_session_request_without_logout_uri() {
    assert!(!EndSessionRequest::is_end_session_request(&as_object(
        json!({ "redirect_uri": "https://x/r" })
    )));
    assert!(!EndSessionRequest::is_end_session_request(&Map::new()));
}

#[test]
fn trait_serialization_matches_inherent_serialization() {
    let request = test_end_session_request();

    assert_eq!(
        request.json_serialize_string(),
        AuthorizationManagementRequest::json_serialize_string(&request)
    );
}
