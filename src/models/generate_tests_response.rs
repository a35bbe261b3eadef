use serde::{Deserialize, Deserializer};

#[derive(Default, Debug, Clone, PartialEq, Deserialize)]
pub struct GenerateTestsResponse {
    #[serde(default, deserialize_with = "string_or_none")]
    pub detected_language: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub generated_tests: Option<String>,
}

impl GenerateTestsResponse {
    /// Both fields, only when the service filled in both with non-empty text.
    pub fn results(&self) -> Option<(&str, &str)> {
        match (&self.detected_language, &self.generated_tests) {
            (Some(language), Some(tests)) if !language.is_empty() && !tests.is_empty() => {
                Some((language.as_str(), tests.as_str()))
            }
            _ => None,
        }
    }
}

// Anything other than a JSON string counts as a missing field.
fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(value.and_then(|value| value.as_str().map(str::to_string)))
}
