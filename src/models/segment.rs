use serde::{Deserialize, Serialize};

/// One reading unit produced by the segmenter.
///
/// `content` is always trimmed and non-empty. `timestamp` is reserved and
/// currently always empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    content: String,
    timestamp: String,
}

impl Segment {
    /// Trims a flushed raw segment and wraps it. Returns `None` when nothing
    /// survives trimming.
    pub(crate) fn from_raw(raw: &str) -> Option<Self> {
        let content = raw.trim();
        if content.is_empty() {
            return None;
        }
        Some(Self {
            content: content.to_string(),
            timestamp: String::new(),
        })
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn timestamp(&self) -> &str {
        &self.timestamp
    }
}

/// A segment plus the text derived from it at segmentation time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnrichedSegment {
    #[serde(flatten)]
    pub segment: Segment,
    pub gist: String,
    /// Empty when the segment is too short to warrant a prompt.
    pub reflection_prompt: String,
}

impl EnrichedSegment {
    pub fn content(&self) -> &str {
        self.segment.content()
    }

    pub fn has_reflection_prompt(&self) -> bool {
        !self.reflection_prompt.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_raw_trims_and_drops_blank() {
        let segment = Segment::from_raw("  hello\nworld \n").unwrap();
        assert_eq!(segment.content(), "hello\nworld");
        assert_eq!(segment.timestamp(), "");

        assert!(Segment::from_raw(" \n\t ").is_none());
        assert!(Segment::from_raw("").is_none());
    }

    #[test]
    fn enriched_segment_serializes_flat_camel_case() {
        let enriched = EnrichedSegment {
            segment: Segment::from_raw("text").unwrap(),
            gist: "text...".into(),
            reflection_prompt: String::new(),
        };
        let value = serde_json::to_value(&enriched).unwrap();
        assert_eq!(value["content"], "text");
        assert_eq!(value["timestamp"], "");
        assert_eq!(value["gist"], "text...");
        assert_eq!(value["reflectionPrompt"], "");
    }
}
