use url::Url;

use crate::end_session::{EndSessionRequest, EndSessionRequestBuilder};
use crate::types::ServiceConfiguration;

pub(crate) const TEST_CLIENT_ID: &str = "test_client_id";
pub(crate) const TEST_LOGOUT_URI: &str = "https://rp.example.com/logout/cb";
pub(crate) const TEST_END_SESSION_ENDPOINT: &str = "https://op.example.com/session/end";

pub(crate) fn get_query(url: &Url, name: &str) -> Option<String> {
    let mut query = url.query_pairs();
    query
        .find(|(q_name, _)| q_name == name)
        .map(|(_, q_value)| q_value.to_string())
}

pub(crate) fn test_logout_uri() -> Url {
    Url::parse(TEST_LOGOUT_URI).unwrap()
}

pub(crate) fn test_service_config() -> ServiceConfiguration {
    ServiceConfiguration::new(Url::parse(TEST_END_SESSION_ENDPOINT).unwrap())
        .with_authorization_endpoint(Url::parse("https://op.example.com/auth").unwrap())
        .with_token_endpoint(Url::parse("https://op.example.com/token").unwrap())
}

pub(crate) fn test_end_session_request_builder() -> EndSessionRequestBuilder {
    EndSessionRequestBuilder::new(
        Some(test_service_config()),
        Some(TEST_CLIENT_ID),
        Some(test_logout_uri()),
    )
    .unwrap()
}

pub(crate) fn test_end_session_request() -> EndSessionRequest {
    test_end_session_request_builder().build()
}
