// src/state/upload_state.rs
use std::sync::mpsc::Receiver;
use std::time::Instant;
use uuid::Uuid;

use super::progress_state::ProgressState;
use crate::client::{AnalysisError, VideoUpload};
use crate::report::AnalysisReport;

/// The only failure text the user ever sees; causes go to the log.
pub const GENERIC_FAILURE_MESSAGE: &str = "Failed to analyze video. Check the log for details.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionPhase {
    Idle,
    Submitting,
    Succeeded,
    Failed,
}

#[derive(Debug, Default)]
pub struct UploadState {
    pub selected_file: Option<VideoUpload>,
    pub is_submitting: bool,
    pub progress: ProgressState,
    pub error_message: Option<String>,
}

/// A request running on the worker thread.
#[derive(Debug)]
pub(crate) struct PendingSubmission {
    pub id: Uuid,
    pub file_name: String,
    pub started: Instant,
    pub outcome_rx: Receiver<Result<AnalysisReport, AnalysisError>>,
}
