// src/report/model.rs
use serde::de::Error as _;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::collections::BTreeMap;

/// Usability report produced by the analysis service for one video.
///
/// Every section defaults to empty, so a report that omits a key still
/// decodes and simply renders that section with no rows.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AnalysisReport {
    pub events: Vec<Event>,
    pub scenarios: BTreeMap<String, Scenario>,
    #[serde(rename = "recommendation", alias = "recommendations")]
    pub recommendations: Vec<String>,
}

impl AnalysisReport {
    pub fn is_empty(&self) -> bool {
        self.events.is_empty() && self.scenarios.is_empty() && self.recommendations.is_empty()
    }
}

/// A single friction point detected in the video.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Event {
    #[serde(deserialize_with = "nullable_string")]
    pub timestamp: String,
    // Error / Pause / Repetition / Hesitation by convention
    #[serde(rename = "type", deserialize_with = "nullable_string")]
    pub kind: String,
    #[serde(deserialize_with = "nullable_string")]
    pub description: String,
    #[serde(deserialize_with = "nullable_string")]
    pub severity: String,
}

/// Projected outcome of a hypothetical product change.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Scenario {
    /// Shown exactly as sent: `72`, `85.5` and `"72"` all keep their text.
    /// Empty when the service left it out.
    #[serde(deserialize_with = "score_label")]
    pub score: String,
    #[serde(deserialize_with = "nullable_string")]
    pub risk: String,
}

fn nullable_string<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

fn score_label<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match Value::deserialize(deserializer)? {
        Value::Null => Ok(String::new()),
        Value::Number(number) => Ok(number.to_string()),
        Value::String(text) => Ok(text),
        other => Err(D::Error::custom(format!(
            "expected a number or string score, found {}",
            other
        ))),
    }
}
