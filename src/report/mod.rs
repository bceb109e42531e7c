// src/report/mod.rs
pub mod decode;
pub mod level;
pub mod model;
pub mod view;

// Re-export commonly used types
pub use decode::{decode_envelope, DecodeError};
pub use level::Level;
pub use model::{AnalysisReport, Event, Scenario};
pub use view::{scenario_display_name, EventRow, ReportView, ScenarioRow};
