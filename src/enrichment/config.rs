use serde::{Deserialize, Serialize};

/// Prompts offered for long segments, in selection order.
pub const DEFAULT_REFLECTION_PROMPTS: [&str; 5] = [
    "What's the main point here?",
    "How does this relate to the overall topic?",
    "Any key terms or concepts introduced?",
    "What questions does this raise?",
    "How might this information be applied?",
];

/// Word-count bounds for gist headings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct GistConfig {
    /// Lower clamp on the number of words taken (may exceed the words available)
    pub min_words: usize,

    /// Upper clamp on the number of words taken
    pub max_words: usize,

    /// Word count is divided by this before clamping
    pub word_divisor: usize,
}

impl Default for GistConfig {
    fn default() -> Self {
        Self {
            min_words: 5,
            max_words: 7,
            word_divisor: 4,
        }
    }
}

/// When and what to ask the reader after a segment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ReflectionConfig {
    /// Segments with more characters than this get a prompt
    pub min_chars_exclusive: usize,

    pub prompts: Vec<String>,
}

impl Default for ReflectionConfig {
    fn default() -> Self {
        Self {
            min_chars_exclusive: 200,
            prompts: DEFAULT_REFLECTION_PROMPTS
                .iter()
                .map(|p| p.to_string())
                .collect(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct EnrichmentConfig {
    pub gist: GistConfig,
    pub reflection: ReflectionConfig,
}
