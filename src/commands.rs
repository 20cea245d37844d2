//! Command handlers behind the `reading-companion` binary.
//!
//! Each handler does its own I/O and hands back what should be printed, so
//! the CLI layer stays a thin dispatcher.

use anyhow::{Context, Result};
use std::{
    fs,
    io::{self, Read},
    path::{Path, PathBuf},
};

use crate::enrichment::{EnrichmentConfig, PromptSelector, RandomSelector};
use crate::session::ReadingSession;
use crate::settings::SettingsStore;

// Set to true to enable verbose logging in this module
const ENABLE_LOGS: bool = true;

use crate::log_info;

pub const DEFAULT_EXPORT_FILE: &str = "annotations.txt";

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read text from {}", path.display())),
        None => {
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read text from stdin")?;
            Ok(text)
        }
    }
}

fn load_config(config_path: Option<&Path>) -> Result<EnrichmentConfig> {
    match config_path {
        Some(path) => Ok(SettingsStore::new(path.to_path_buf())?.enrichment().clone()),
        None => Ok(EnrichmentConfig::default()),
    }
}

pub fn load_session(path: &Path) -> Result<ReadingSession> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("Failed to read session from {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("Failed to parse session in {}", path.display()))
}

/// Builds a session from `text` and renders it as pretty JSON.
pub fn process_text_to_json(
    text: &str,
    config: &EnrichmentConfig,
    selector: &mut dyn PromptSelector,
) -> Result<String> {
    let session = ReadingSession::from_text(text, config, selector);
    log_info!("processed text into {} sections", session.len());
    Ok(serde_json::to_string_pretty(&session)?)
}

pub fn process(
    input: Option<&Path>,
    seed: Option<u64>,
    config_path: Option<&Path>,
) -> Result<String> {
    let text = read_input(input)?;
    let config = load_config(config_path)?;
    let mut selector = match seed {
        Some(seed) => RandomSelector::seeded(seed),
        None => RandomSelector::new(),
    };
    process_text_to_json(&text, &config, &mut selector)
}

/// Writes the annotation export and returns the file it went to.
pub fn export(session_path: &Path, output: Option<&Path>) -> Result<PathBuf> {
    let session = load_session(session_path)?;
    let exported = session.export_annotations()?;

    let output = output
        .map(Path::to_path_buf)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_EXPORT_FILE));
    fs::write(&output, exported)
        .with_context(|| format!("Failed to write annotations to {}", output.display()))?;

    log_info!("exported annotations to {}", output.display());
    Ok(output)
}

pub fn progress(session_path: &Path) -> Result<String> {
    let session = load_session(session_path)?;
    let progress = session.progress();
    Ok(format!(
        "{} sections read, {}% complete, {} sections left",
        progress.read_count,
        progress.percent.round(),
        progress.remaining()
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enrichment::FixedSelector;
    use tempfile::TempDir;

    fn write_session(dir: &TempDir, session: &ReadingSession) -> PathBuf {
        let path = dir.path().join("session.json");
        fs::write(&path, serde_json::to_string(session).unwrap()).unwrap();
        path
    }

    fn sample_session() -> ReadingSession {
        ReadingSession::from_text(
            "one\n\ntwo\n\nthree",
            &EnrichmentConfig::default(),
            &mut FixedSelector(0),
        )
    }

    #[test]
    fn process_reads_file_and_emits_sections() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "hello there\n\n- a\n- b").unwrap();

        let json = process(Some(input.as_path()), Some(7), None).unwrap();
        let session: ReadingSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session.len(), 2);
        assert_eq!(session.sections[1].content(), "- a\n- b");
    }

    #[test]
    fn process_uses_settings_file() {
        let dir = TempDir::new().unwrap();
        let input = dir.path().join("input.txt");
        fs::write(&input, "a b c d e f g h").unwrap();
        let config = dir.path().join("settings.json");
        fs::write(&config, r#"{"enrichment":{"gist":{"minWords":2,"maxWords":2}}}"#).unwrap();

        let json = process(Some(input.as_path()), None, Some(config.as_path())).unwrap();
        let session: ReadingSession = serde_json::from_str(&json).unwrap();
        assert_eq!(session.sections[0].segment.gist, "a b...");
    }

    #[test]
    fn missing_input_file_reports_path() {
        let err = process(Some(Path::new("/definitely/not/here.txt")), None, None).unwrap_err();
        assert!(err.to_string().contains("/definitely/not/here.txt"));
    }

    #[test]
    fn export_writes_annotations_file() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session();
        session.set_annotation(1, "middle").unwrap();
        let session_path = write_session(&dir, &session);
        let output = dir.path().join("out.txt");

        let written = export(&session_path, Some(output.as_path())).unwrap();
        assert_eq!(written, output);
        assert_eq!(
            fs::read_to_string(&output).unwrap(),
            "Section 1: two\n\nAnnotation: middle\n\n"
        );
    }

    #[test]
    fn export_refuses_when_nothing_annotated() {
        let dir = TempDir::new().unwrap();
        let session_path = write_session(&dir, &sample_session());
        let output = dir.path().join("out.txt");

        assert!(export(&session_path, Some(output.as_path())).is_err());
        assert!(!output.exists());
    }

    #[test]
    fn progress_summary_line() {
        let dir = TempDir::new().unwrap();
        let mut session = sample_session();
        session.toggle_read(0).unwrap();
        let session_path = write_session(&dir, &session);

        assert_eq!(
            progress(&session_path).unwrap(),
            "1 sections read, 33% complete, 2 sections left"
        );
    }
}
