// src/client/http.rs
use reqwest::blocking::{multipart, Client};
use std::time::Instant;

use super::{AnalysisBackend, AnalysisError, VideoUpload};
use crate::report::{decode_envelope, AnalysisReport};
use crate::settings::ClientSettings;

/// Multipart field the service reads the video from.
pub const FILE_FIELD: &str = "file";

// Error bodies are logged, not shown; keep them short.
const BODY_EXCERPT_CHARS: usize = 300;

#[derive(Debug, Clone)]
pub struct HttpAnalysisClient {
    endpoint: String,
    http: Client,
}

impl HttpAnalysisClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, AnalysisError> {
        // The blocking client defaults to a 30s timeout; analysis can take far
        // longer, so only apply one when explicitly configured.
        let http = Client::builder()
            .timeout(settings.request_timeout())
            .build()?;

        Ok(Self {
            endpoint: settings.analyze_url(),
            http,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl AnalysisBackend for HttpAnalysisClient {
    fn analyze(&self, upload: &VideoUpload) -> Result<AnalysisReport, AnalysisError> {
        let form = multipart::Form::new()
            .file(FILE_FIELD, &upload.path)
            .map_err(|e| AnalysisError::io(&upload.path, e))?;

        log::info!("Uploading {} to {}", upload.file_name, self.endpoint);
        let started = Instant::now();

        let response = self.http.post(&self.endpoint).multipart(form).send()?;
        let status = response.status();
        let body = response.text()?;

        log::info!(
            "{} answered HTTP {} after {:.1?} ({} bytes)",
            self.endpoint,
            status.as_u16(),
            started.elapsed(),
            body.len()
        );

        if !status.is_success() {
            return Err(AnalysisError::Status {
                status: status.as_u16(),
                body: excerpt(&body),
            });
        }

        Ok(decode_envelope(&body)?)
    }
}

fn excerpt(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.chars().count() <= BODY_EXCERPT_CHARS {
        trimmed.to_string()
    } else {
        let cut: String = trimmed.chars().take(BODY_EXCERPT_CHARS).collect();
        format!("{}…", cut)
    }
}
