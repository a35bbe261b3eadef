pub mod request_form;
pub mod submit_error;
