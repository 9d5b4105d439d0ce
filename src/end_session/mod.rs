//! # End Session module
//! RP-Initiated Logout request and response

mod end_session_request;
mod end_session_response;

pub use end_session_request::{EndSessionRequest, EndSessionRequestBuilder};
pub use end_session_response::{
    EndSessionResponse, EndSessionResponseBuilder, END_SESSION_RESPONSE_KEY,
};
