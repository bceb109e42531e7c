// src/state/mod.rs
use chrono::{DateTime, Local};
use rand::Rng;
use std::sync::mpsc::{self, RecvTimeoutError, TryRecvError};
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use uuid::Uuid;

use crate::client::{AnalysisBackend, AnalysisError, VideoUpload};
use crate::report::{AnalysisReport, ReportView};

pub mod progress_state;
pub mod upload_state;

pub use progress_state::ProgressState;
pub use upload_state::{SubmissionPhase, UploadState, GENERIC_FAILURE_MESSAGE};

use upload_state::PendingSubmission;

/// A report from the last successful submission, with its display rows.
#[derive(Debug, Clone)]
pub struct ReceivedReport {
    pub view: ReportView,
    pub file_name: String,
    pub received_at: DateTime<Local>,
}

impl ReceivedReport {
    pub fn new(report: &AnalysisReport, file_name: String) -> Self {
        Self {
            view: ReportView::from_report(report),
            file_name,
            received_at: Local::now(),
        }
    }
}

// Core application state
#[derive(Debug, Default)]
pub struct AppState {
    pub upload: UploadState,
    pub report: Option<ReceivedReport>,
    pub show_help: bool,
    pending: Option<PendingSubmission>,
}

impl AppState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the selection. Never starts a request, and a request already
    /// in flight keeps the file it was started with.
    pub fn select_file(&mut self, upload: VideoUpload) {
        log::info!("Selected {}", upload.path.display());
        self.upload.selected_file = Some(upload);
    }

    pub fn can_submit(&self) -> bool {
        self.upload.selected_file.is_some() && !self.upload.is_submitting
    }

    pub fn phase(&self) -> SubmissionPhase {
        if self.upload.is_submitting {
            SubmissionPhase::Submitting
        } else if self.upload.error_message.is_some() {
            SubmissionPhase::Failed
        } else if self.report.is_some() {
            SubmissionPhase::Succeeded
        } else {
            SubmissionPhase::Idle
        }
    }

    /// Starts one analysis on a worker thread. Returns false (and changes
    /// nothing) when no file is selected or a request is already running.
    pub fn submit(&mut self, backend: Arc<dyn AnalysisBackend>) -> bool {
        if !self.can_submit() {
            return false;
        }
        let upload = match self.upload.selected_file.clone() {
            Some(upload) => upload,
            None => return false,
        };

        let now = Instant::now();
        self.upload.error_message = None;
        self.report = None;
        self.upload.is_submitting = true;
        self.upload.progress.start(now);

        let id = Uuid::new_v4();
        let file_name = upload.file_name.clone();
        let (outcome_tx, outcome_rx) = mpsc::channel();

        log::info!("Analysis {} started for {}", id, file_name);

        let spawned = thread::Builder::new()
            .name(format!("analysis-{}", id))
            .spawn(move || {
                let outcome = backend.analyze(&upload);
                // Receiver is gone if the window closed mid-request
                let _ = outcome_tx.send(outcome);
            });

        self.pending = Some(PendingSubmission {
            id,
            file_name,
            started: now,
            outcome_rx,
        });

        if let Err(e) = spawned {
            self.complete(Err(AnalysisError::Worker(e)), now);
        }

        true
    }

    /// Non-blocking check for a finished request. Returns true when one
    /// completed during this call.
    pub fn poll(&mut self) -> bool {
        let received = match &self.pending {
            Some(pending) => pending.outcome_rx.try_recv(),
            None => return false,
        };

        match received {
            Ok(outcome) => self.complete(outcome, Instant::now()),
            Err(TryRecvError::Empty) => return false,
            Err(TryRecvError::Disconnected) => {
                self.complete(Err(AnalysisError::WorkerLost), Instant::now())
            }
        }
        true
    }

    /// Blocks up to `timeout` for the running request to finish.
    pub fn wait_for_outcome(&mut self, timeout: Duration) -> bool {
        let received = match &self.pending {
            Some(pending) => pending.outcome_rx.recv_timeout(timeout),
            None => return false,
        };

        match received {
            Ok(outcome) => self.complete(outcome, Instant::now()),
            Err(RecvTimeoutError::Timeout) => return false,
            Err(RecvTimeoutError::Disconnected) => {
                self.complete(Err(AnalysisError::WorkerLost), Instant::now())
            }
        }
        true
    }

    fn complete(&mut self, outcome: Result<AnalysisReport, AnalysisError>, now: Instant) {
        let (id, file_name, elapsed) = match self.pending.take() {
            Some(pending) => (
                pending.id.to_string(),
                pending.file_name,
                now.saturating_duration_since(pending.started),
            ),
            None => (String::from("-"), String::new(), Duration::ZERO),
        };

        self.upload.is_submitting = false;
        self.upload.progress.finish(now);

        match outcome {
            Ok(report) => {
                log::info!(
                    "Analysis {} finished in {:.1?}: {} events, {} scenarios, {} recommendations",
                    id,
                    elapsed,
                    report.events.len(),
                    report.scenarios.len(),
                    report.recommendations.len()
                );
                if report.is_empty() {
                    log::warn!("Analysis {} returned an empty report", id);
                }
                self.upload.error_message = None;
                self.report = Some(ReceivedReport::new(&report, file_name));
            }
            Err(err) => {
                log::error!(
                    "Analysis {} of {} failed after {:.1?} ({} error): {}",
                    id,
                    file_name,
                    elapsed,
                    err.kind(),
                    err
                );
                self.report = None;
                self.upload.error_message = Some(GENERIC_FAILURE_MESSAGE.to_string());
            }
        }
    }

    pub fn tick_progress<R: Rng>(&mut self, now: Instant, rng: &mut R) -> bool {
        self.upload.progress.tick(now, rng)
    }

    pub fn repaint_after(&self, now: Instant) -> Option<Duration> {
        if self.upload.is_submitting {
            // Keep polling the worker even between progress ticks
            let tick = self.upload.progress.next_change_in(now).unwrap_or(Duration::ZERO);
            Some(tick.min(Duration::from_millis(100)))
        } else {
            self.upload.progress.next_change_in(now)
        }
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }
}

impl Drop for AppState {
    fn drop(&mut self) {
        if let Some(pending) = self.pending.take() {
            log::warn!(
                "Analysis {} of {} abandoned while still running",
                pending.id,
                pending.file_name
            );
        }
        self.upload.progress.stop();
    }
}
