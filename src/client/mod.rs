// src/client/mod.rs
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::report::{AnalysisReport, DecodeError};

pub mod http;

pub use http::HttpAnalysisClient;

/// Advisory filter for the file picker; any file can still be submitted.
pub const VIDEO_EXTENSIONS: &[&str] = &[
    "mp4", "mov", "m4v", "webm", "mkv", "avi", "mpeg", "mpg", "ogv", "wmv", "3gp",
];

/// The single video chosen for analysis.
#[derive(Debug, Clone, PartialEq)]
pub struct VideoUpload {
    pub path: PathBuf,
    pub file_name: String,
    pub size_bytes: Option<u64>,
}

impl VideoUpload {
    pub fn from_path(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let file_name = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| path.display().to_string());
        let size_bytes = fs::metadata(&path).ok().map(|meta| meta.len());

        Self {
            path,
            file_name,
            size_bytes,
        }
    }

    pub fn has_video_extension(&self) -> bool {
        self.path
            .extension()
            .map(|ext| {
                let ext = ext.to_string_lossy().to_lowercase();
                VIDEO_EXTENSIONS.contains(&ext.as_str())
            })
            .unwrap_or(false)
    }

    pub fn size_label(&self) -> Option<String> {
        self.size_bytes.map(format_size)
    }
}

fn format_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];
    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }
    if unit == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.1} {}", size, UNITS[unit])
    }
}

/// Whatever turns a video into a report. The GUI talks to the HTTP service;
/// tests substitute canned responses.
pub trait AnalysisBackend: Send + Sync {
    fn analyze(&self, upload: &VideoUpload) -> Result<AnalysisReport, AnalysisError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureKind {
    Transport,
    Decode,
}

impl std::fmt::Display for FailureKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FailureKind::Transport => f.write_str("transport"),
            FailureKind::Decode => f.write_str("decode"),
        }
    }
}

#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),
    #[error("service responded with HTTP {status}: {body}")]
    Status { status: u16, body: String },
    #[error(transparent)]
    Decode(#[from] DecodeError),
    #[error("could not start analysis worker: {0}")]
    Worker(std::io::Error),
    #[error("analysis worker stopped without reporting a result")]
    WorkerLost,
}

impl AnalysisError {
    pub fn io(path: &Path, source: std::io::Error) -> Self {
        AnalysisError::Io {
            path: path.to_path_buf(),
            source,
        }
    }

    pub fn kind(&self) -> FailureKind {
        match self {
            AnalysisError::Decode(err) if !err.is_transport() => FailureKind::Decode,
            _ => FailureKind::Transport,
        }
    }
}
