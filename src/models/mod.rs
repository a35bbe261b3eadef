pub mod config;
pub mod generate_tests_request;
pub mod generate_tests_response;
