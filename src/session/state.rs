use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};

use crate::enrichment::{process_text, EnrichmentConfig, PromptSelector};
use crate::models::Section;

const SECTION_SEPARATOR: &str = "---\n\n";

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Progress {
    pub read_count: usize,
    pub total: usize,
    /// 0.0 when there are no sections.
    pub percent: f64,
}

impl Progress {
    pub fn remaining(&self) -> usize {
        self.total.saturating_sub(self.read_count)
    }
}

/// Sections of one pasted text plus the reader's marks on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingSession {
    pub sections: Vec<Section>,
}

impl ReadingSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_text(
        text: &str,
        config: &EnrichmentConfig,
        selector: &mut dyn PromptSelector,
    ) -> Self {
        let sections = process_text(text, config, selector)
            .into_iter()
            .map(Section::new)
            .collect();
        Self { sections }
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    fn section_mut(&mut self, index: usize) -> Result<&mut Section> {
        let total = self.sections.len();
        match self.sections.get_mut(index) {
            Some(section) => Ok(section),
            None => bail!("Section {} does not exist ({} sections)", index + 1, total),
        }
    }

    /// Flips the read flag and returns the new value.
    pub fn toggle_read(&mut self, index: usize) -> Result<bool> {
        let section = self.section_mut(index)?;
        section.is_read = !section.is_read;
        Ok(section.is_read)
    }

    pub fn set_annotation(&mut self, index: usize, annotation: impl Into<String>) -> Result<()> {
        let section = self.section_mut(index)?;
        section.annotation = annotation.into();
        Ok(())
    }

    pub fn progress(&self) -> Progress {
        let total = self.sections.len();
        let read_count = self.sections.iter().filter(|s| s.is_read).count();
        let percent = if total == 0 {
            0.0
        } else {
            read_count as f64 / total as f64 * 100.0
        };

        Progress {
            read_count,
            total,
            percent,
        }
    }

    /// Plain-text dump of every annotated section, numbered in export order.
    pub fn export_annotations(&self) -> Result<String> {
        let entries: Vec<String> = self
            .sections
            .iter()
            .filter(|s| s.is_annotated())
            .enumerate()
            .map(|(i, s)| {
                format!(
                    "Section {}: {}\n\nAnnotation: {}\n\n",
                    i + 1,
                    s.content(),
                    s.annotation
                )
            })
            .collect();

        if entries.is_empty() {
            bail!("No annotations to export. Please add some annotations first.");
        }

        Ok(entries.join(SECTION_SEPARATOR))
    }
}
