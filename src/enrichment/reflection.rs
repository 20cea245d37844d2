use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::enrichment::config::ReflectionConfig;

/// Picks which of `count` prompts to show. Returned indices are reduced
/// modulo `count` by the caller.
pub trait PromptSelector {
    fn select(&mut self, count: usize) -> usize;
}

/// Uniform random choice.
pub struct RandomSelector {
    rng: StdRng,
}

impl RandomSelector {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Reproducible sequence for a given seed.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomSelector {
    fn default() -> Self {
        Self::new()
    }
}

impl PromptSelector for RandomSelector {
    fn select(&mut self, count: usize) -> usize {
        self.rng.gen_range(0..count)
    }
}

/// Always the same index.
#[derive(Debug, Clone, Copy)]
pub struct FixedSelector(pub usize);

impl PromptSelector for FixedSelector {
    fn select(&mut self, _count: usize) -> usize {
        self.0
    }
}

/// Walks the prompts in order, wrapping around.
#[derive(Debug, Clone, Copy, Default)]
pub struct CyclingSelector {
    next: usize,
}

impl PromptSelector for CyclingSelector {
    fn select(&mut self, count: usize) -> usize {
        let index = self.next % count;
        self.next = index + 1;
        index
    }
}

/// Reflection prompt for a segment, or an empty string when the segment is
/// 200 characters or shorter.
pub fn reflection_prompt(content: &str, selector: &mut dyn PromptSelector) -> String {
    reflection_prompt_with(content, &ReflectionConfig::default(), selector)
}

pub fn reflection_prompt_with(
    content: &str,
    config: &ReflectionConfig,
    selector: &mut dyn PromptSelector,
) -> String {
    if config.prompts.is_empty() || content.chars().count() <= config.min_chars_exclusive {
        return String::new();
    }

    let count = config.prompts.len();
    let index = selector.select(count) % count;
    config.prompts[index].clone()
}
