// src/settings.rs
use anyhow::{bail, Context, Result};
use config::{Config, Environment, File};
use serde::Deserialize;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "http://localhost:8000";
pub const ENV_PREFIX: &str = "AUDITOR";
pub const APP_DIR_NAME: &str = "uxstream-auditor";

/// Where the analysis service lives. Read once at startup.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ClientSettings {
    pub base_url: String,
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl ClientSettings {
    /// Defaults, then the user config dir, then `./auditor.toml`, then
    /// `AUDITOR_*` environment variables. Later sources win.
    pub fn load() -> Result<Self> {
        Self::load_layered(&default_files(), ENV_PREFIX)
    }

    pub fn load_layered(files: &[PathBuf], env_prefix: &str) -> Result<Self> {
        let mut builder = Config::builder().set_default("base_url", DEFAULT_BASE_URL)?;

        for path in files {
            log::debug!("Checking for settings in {}", path.display());
            builder = builder.add_source(File::from(path.as_path()).required(false));
        }

        let config = builder
            .add_source(Environment::with_prefix(env_prefix).try_parsing(true))
            .build()
            .context("Failed to read client settings")?;

        let mut settings: ClientSettings = config
            .try_deserialize()
            .context("Invalid client settings")?;

        settings.base_url = settings.base_url.trim().trim_end_matches('/').to_string();
        if settings.base_url.is_empty() {
            bail!("base_url must not be empty");
        }

        Ok(settings)
    }

    pub fn analyze_url(&self) -> String {
        format!("{}/analyze", self.base_url)
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs
            .filter(|secs| *secs > 0)
            .map(Duration::from_secs)
    }
}

fn default_files() -> Vec<PathBuf> {
    let mut files = Vec::new();
    if let Some(dir) = dirs::config_dir() {
        files.push(dir.join(APP_DIR_NAME).join("settings.toml"));
    }
    files.push(PathBuf::from("auditor.toml"));
    files
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const UNSET_PREFIX: &str = "AUDITOR_SETTINGS_TEST_UNSET";

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn defaults_to_localhost() {
        let settings = ClientSettings::load_layered(&[], UNSET_PREFIX).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.analyze_url(), "http://localhost:8000/analyze");
        assert_eq!(settings.request_timeout(), None);
    }

    #[test]
    fn missing_files_are_skipped() {
        let files = vec![PathBuf::from("/no/such/dir/settings.toml")];
        let settings = ClientSettings::load_layered(&files, UNSET_PREFIX).unwrap();
        assert_eq!(settings.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn later_files_override_earlier_ones() {
        let first = toml_file("base_url = \"http://first:1\"\nrequest_timeout_secs = 30\n");
        let second = toml_file("base_url = \"https://second.example.com/\"\n");

        let files = vec![first.path().to_path_buf(), second.path().to_path_buf()];
        let settings = ClientSettings::load_layered(&files, UNSET_PREFIX).unwrap();

        assert_eq!(settings.base_url, "https://second.example.com");
        assert_eq!(settings.request_timeout(), Some(Duration::from_secs(30)));
    }

    #[test]
    fn environment_wins_over_files() {
        let file = toml_file("base_url = \"http://from-file:8000\"\n");
        std::env::set_var("AUDITOR_SETTINGS_TEST_ENV_BASE_URL", "http://from-env:9000");
        std::env::set_var("AUDITOR_SETTINGS_TEST_ENV_REQUEST_TIMEOUT_SECS", "120");

        let settings = ClientSettings::load_layered(
            &[file.path().to_path_buf()],
            "AUDITOR_SETTINGS_TEST_ENV",
        )
        .unwrap();

        assert_eq!(settings.base_url, "http://from-env:9000");
        assert_eq!(settings.request_timeout_secs, Some(120));
    }

    #[test]
    fn empty_base_url_is_rejected() {
        let file = toml_file("base_url = \"  \"\n");
        assert!(ClientSettings::load_layered(&[file.path().to_path_buf()], UNSET_PREFIX).is_err());
    }

    #[test]
    fn zero_timeout_means_none() {
        let settings = ClientSettings {
            base_url: DEFAULT_BASE_URL.into(),
            request_timeout_secs: Some(0),
        };
        assert_eq!(settings.request_timeout(), None);
    }
}
