use log::{error, info, warn};

use crate::form::submit_error::SubmitError;
use crate::models::generate_tests_response::GenerateTestsResponse;
use crate::services::test_generation_service::TestGenerationService;

pub const GENERIC_ERROR_MESSAGE: &str = "An error occurred. Please try again later.";
pub const NO_LANGUAGE_DETECTED: &str = "Could not detect language.";
pub const NO_TEST_CASES_GENERATED: &str = "No test cases generated.";

const TITLE: &str = "Unit Test Case Generator";
const SUBTITLE: &str = "Paste your code below to automatically generate unit test cases.";
const SUBMIT_LABEL: &str = "[ Generate Test Cases ]";
const BUSY_LABEL: &str = "Generating test cases...";
const LANGUAGE_PLACEHOLDER: &str = "Language will be detected when you generate test cases.";
const TEST_CASES_PLACEHOLDER: &str = "Test cases will appear here after generation.";

/// State of the single test generation view.
///
/// `loading` is the only gate: while it is set, [`RequestForm::begin_submit`]
/// refuses to start another request, but the input can still be edited.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct RequestForm {
    input_code: String,
    detected_language: String,
    generated_test_cases: String,
    loading: bool,
    error: String,
}

impl RequestForm {
    pub fn new() -> RequestForm {
        RequestForm::default()
    }

    pub fn update_code(&mut self, text: impl Into<String>) {
        self.input_code = text.into();
    }

    pub fn input_code(&self) -> &str {
        &self.input_code
    }

    pub fn detected_language(&self) -> &str {
        &self.detected_language
    }

    pub fn generated_test_cases(&self) -> &str {
        &self.generated_test_cases
    }

    pub fn error(&self) -> &str {
        &self.error
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    pub fn can_submit(&self) -> bool {
        !self.loading
    }

    /// Validates the input and enters the in-flight state.
    ///
    /// Returns the code to send, or `None` when no request may be issued.
    pub fn begin_submit(&mut self) -> Option<String> {
        if !self.can_submit() {
            warn!("Submission rejected, a request is already in flight");
            return None;
        }

        if self.input_code.trim().is_empty() {
            self.error = SubmitError::EmptyInput.to_string();
            return None;
        }

        self.loading = true;
        self.error.clear();

        Some(self.input_code.clone())
    }

    /// Applies a settled outcome and leaves the in-flight state.
    pub fn finish_submit(&mut self, outcome: Result<GenerateTestsResponse, SubmitError>) {
        match outcome {
            Ok(response) => match response.results() {
                Some((language, tests)) => {
                    info!("Received test cases for detected language {}", language);
                    self.detected_language = language.to_string();
                    self.generated_test_cases = tests.to_string();
                }
                None => {
                    warn!("Response is missing the detected language or the generated tests");
                    self.detected_language = NO_LANGUAGE_DETECTED.to_string();
                    self.generated_test_cases = NO_TEST_CASES_GENERATED.to_string();
                }
            },
            Err(err) => {
                error!("Error: {}", err);
                let detail = format!("Error: {}", err);
                self.error = GENERIC_ERROR_MESSAGE.to_string();
                self.detected_language = detail.clone();
                self.generated_test_cases = detail;
            }
        }

        self.loading = false;
    }

    pub async fn submit(&mut self, service: &TestGenerationService) {
        let code = match self.begin_submit() {
            Some(code) => code,
            None => return,
        };

        let outcome = service.generate_tests(&code).await;
        self.finish_submit(outcome);
    }

    pub fn render(&self) -> String {
        let action = if self.is_loading() {
            BUSY_LABEL
        } else {
            SUBMIT_LABEL
        };

        let error = if self.error().is_empty() {
            String::new()
        } else {
            format!("{}\n", self.error())
        };

        format!(
            "{}\n{}\n\n{}\n{}\nDetected Language\n{}\n\nGenerated Test Cases\n{}\n",
            TITLE,
            SUBTITLE,
            action,
            error,
            or_placeholder(self.detected_language(), LANGUAGE_PLACEHOLDER),
            or_placeholder(self.generated_test_cases(), TEST_CASES_PLACEHOLDER)
        )
    }
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}
