pub(crate) mod json;

use url::Url;

use crate::types::{OidcClientError, OidcReturnType};

pub(crate) fn validate_url(url: &str) -> OidcReturnType<Url> {
    if let Ok(u) = Url::parse(url) {
        return Ok(u);
    }

    Err(Box::new(OidcClientError::new_invalid_argument(
        "only valid absolute URLs can be used",
        None,
    )))
}
