use serde::{Deserialize, Serialize};

use super::segment::EnrichedSegment;

/// An enriched segment as tracked by a reading session.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    #[serde(flatten)]
    pub segment: EnrichedSegment,
    #[serde(default)]
    pub is_read: bool,
    #[serde(default)]
    pub annotation: String,
}

impl Section {
    pub fn new(segment: EnrichedSegment) -> Self {
        Self {
            segment,
            is_read: false,
            annotation: String::new(),
        }
    }

    pub fn content(&self) -> &str {
        self.segment.content()
    }

    pub fn is_annotated(&self) -> bool {
        !self.annotation.is_empty()
    }
}
