mod end_session_request_tests;
