use std::time::Duration;

use anyhow::Error;
use hyper::ext::ReasonPhrase;
use log::{debug, info, warn};

use crate::form::submit_error::SubmitError;
use crate::models::{
    config::Config, generate_tests_request::GenerateTestsRequest,
    generate_tests_response::GenerateTestsResponse,
};
use crate::utils::code_fence_utils::strip_code_fences;

pub struct TestGenerationService {
    client: reqwest::Client,
    endpoint: String,
    framework: Option<String>,
    strip_code_fences: bool,
}

impl TestGenerationService {
    pub fn new(config: &Config) -> Result<TestGenerationService, Error> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(TestGenerationService {
            client: builder.build()?,
            endpoint: config.endpoint.clone(),
            framework: config.framework.clone(),
            strip_code_fences: config.strip_code_fences,
        })
    }

    /// One POST to the generation endpoint. Any non-2xx status is a failure.
    pub async fn generate_tests(&self, code: &str) -> Result<GenerateTestsResponse, SubmitError> {
        let request = GenerateTestsRequest {
            code: code.to_string(),
            framework: self.framework.clone(),
        };

        info!("Requesting test cases from {}", self.endpoint);

        let resp = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        let status = resp.status();
        debug!("Test generation service answered {}", status);

        if !status.is_success() {
            return Err(SubmitError::Status(status_text(&resp)));
        }

        let body = resp.json::<serde_json::Value>().await?;
        let mut response =
            serde_json::from_value::<GenerateTestsResponse>(body).unwrap_or_else(|err| {
                warn!("Response body is not a JSON object: {}", err);
                GenerateTestsResponse::default()
            });

        if self.strip_code_fences {
            response.generated_tests = response
                .generated_tests
                .map(|tests| strip_code_fences(&tests));
        }

        Ok(response)
    }
}

/// The reason phrase the server sent, else the canonical one, else the bare code.
fn status_text(resp: &reqwest::Response) -> String {
    let reason = resp
        .extensions()
        .get::<ReasonPhrase>()
        .filter(|reason| !reason.as_bytes().is_empty());

    if let Some(reason) = reason {
        return String::from_utf8_lossy(reason.as_bytes()).to_string();
    }

    let status = resp.status();
    status
        .canonical_reason()
        .unwrap_or(status.as_str())
        .to_string()
}
