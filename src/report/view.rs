// src/report/view.rs
use super::level::Level;
use super::model::AnalysisReport;

/// Scenario key the service uses for the unmodified product.
pub const BASELINE_KEY: &str = "baseline";
const BASELINE_LABEL: &str = "current";

#[derive(Debug, Clone, PartialEq)]
pub struct EventRow {
    pub timestamp: String,
    pub kind: String,
    pub description: String,
    pub severity: String,
    pub level: Level,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScenarioRow {
    pub key: String,
    pub name: String,
    pub score: String,
    pub risk: String,
    pub level: Level,
}

/// Display-ready rows for the three report cards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ReportView {
    pub events: Vec<EventRow>,
    pub recommendations: Vec<String>,
    pub scenarios: Vec<ScenarioRow>,
}

impl ReportView {
    pub fn from_report(report: &AnalysisReport) -> Self {
        let events = report
            .events
            .iter()
            .map(|event| EventRow {
                timestamp: event.timestamp.clone(),
                kind: event.kind.clone(),
                description: event.description.clone(),
                severity: event.severity.clone(),
                level: Level::classify(&event.severity),
            })
            .collect();

        // Baseline first so the reference row heads the table
        let baseline = report.scenarios.get_key_value(BASELINE_KEY);
        let others = report
            .scenarios
            .iter()
            .filter(|(key, _)| key.as_str() != BASELINE_KEY);

        let scenarios = baseline
            .into_iter()
            .chain(others)
            .map(|(key, scenario)| ScenarioRow {
                key: key.clone(),
                name: scenario_display_name(key),
                score: scenario.score.clone(),
                risk: scenario.risk.clone(),
                level: Level::classify(&scenario.risk),
            })
            .collect();

        Self {
            events,
            recommendations: report.recommendations.clone(),
            scenarios,
        }
    }
}

/// `"reduced onboarding steps"` -> `"Reduced Onboarding Steps"`, with the
/// baseline scenario shown as `"Current"`.
pub fn scenario_display_name(key: &str) -> String {
    let key = if key == BASELINE_KEY { BASELINE_LABEL } else { key };

    key.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
