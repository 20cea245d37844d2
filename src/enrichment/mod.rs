pub mod config;
pub mod gist;
pub mod reflection;

pub use config::{EnrichmentConfig, GistConfig, ReflectionConfig, DEFAULT_REFLECTION_PROMPTS};
pub use gist::{gist, gist_with};
pub use reflection::{
    reflection_prompt, reflection_prompt_with, CyclingSelector, FixedSelector, PromptSelector,
    RandomSelector,
};

use crate::models::{EnrichedSegment, Segment};
use crate::segmentation::segment;

/// Attaches a gist and reflection prompt to each segment, in order.
pub fn enrich(
    segments: Vec<Segment>,
    config: &EnrichmentConfig,
    selector: &mut dyn PromptSelector,
) -> Vec<EnrichedSegment> {
    segments
        .into_iter()
        .map(|segment| {
            let gist = gist_with(segment.content(), &config.gist);
            let reflection_prompt =
                reflection_prompt_with(segment.content(), &config.reflection, selector);
            EnrichedSegment {
                segment,
                gist,
                reflection_prompt,
            }
        })
        .collect()
}

/// Segment `text` and enrich the result.
pub fn process_text(
    text: &str,
    config: &EnrichmentConfig,
    selector: &mut dyn PromptSelector,
) -> Vec<EnrichedSegment> {
    enrich(segment(text), config, selector)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enrich_keeps_order_and_content() {
        let long = "word ".repeat(60);
        let text = format!("short one\n\n{long}\n\n- a\n- b");
        let enriched = process_text(&text, &EnrichmentConfig::default(), &mut FixedSelector(3));

        assert_eq!(enriched.len(), 3);
        assert_eq!(enriched[0].content(), "short one");
        assert_eq!(enriched[0].gist, "short one...");
        assert!(!enriched[0].has_reflection_prompt());

        assert_eq!(enriched[1].content(), long.trim());
        assert_eq!(enriched[1].gist, "word word word word word word word...");
        assert_eq!(enriched[1].reflection_prompt, "What questions does this raise?");

        assert_eq!(enriched[2].content(), "- a\n- b");
        assert_eq!(enriched[2].gist, "- a - b...");
    }

    #[test]
    fn selector_is_only_consulted_for_long_segments() {
        let long = "y".repeat(250);
        let text = format!("tiny\n\n{long}\n\nalso tiny\n\n{long}");
        let mut selector = CyclingSelector::default();
        let enriched = process_text(&text, &EnrichmentConfig::default(), &mut selector);

        let prompts: Vec<&str> = enriched
            .iter()
            .map(|s| s.reflection_prompt.as_str())
            .collect();
        assert_eq!(
            prompts,
            vec![
                "",
                DEFAULT_REFLECTION_PROMPTS[0],
                "",
                DEFAULT_REFLECTION_PROMPTS[1]
            ]
        );
    }

    #[test]
    fn empty_text_enriches_to_nothing() {
        assert!(process_text("", &EnrichmentConfig::default(), &mut FixedSelector(0)).is_empty());
    }
}
