use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GenerateTestsRequest {
    pub code: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub framework: Option<String>,
}
