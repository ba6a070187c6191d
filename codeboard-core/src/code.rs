use crate::source::LoadError;
use serde::{Deserialize, Deserializer, Serialize};

/// A redemption code record as served by `/api/codes/{game}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedemptionCode {
    pub code: String,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub reward: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub start: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub end: Option<String>,
    #[serde(default, deserialize_with = "blank_as_none")]
    pub url: Option<String>,
    pub date: String,
}

impl RedemptionCode {
    #[must_use]
    pub fn new(code: impl Into<String>, date: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            reward: None,
            start: None,
            end: None,
            url: None,
            date: date.into(),
        }
    }

    #[must_use]
    pub fn with_reward(mut self, reward: impl Into<String>) -> Self {
        self.reward = Some(reward.into());
        self
    }

    #[must_use]
    pub fn with_window(mut self, start: Option<&str>, end: Option<&str>) -> Self {
        self.start = start.map(str::to_string);
        self.end = end.map(str::to_string);
        self
    }

    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }
}

// The backend writes "" for fields the extractor could not find.
fn blank_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<String>::deserialize(deserializer)?;
    Ok(value.filter(|s| !s.trim().is_empty()))
}

/// Decode a response body into the list of records.
///
/// # Errors
///
/// Returns [`LoadError::Decode`] when the body is not a JSON array of records.
pub fn decode_codes(body: &str) -> Result<Vec<RedemptionCode>, LoadError> {
    serde_json::from_str(body).map_err(LoadError::Decode)
}
