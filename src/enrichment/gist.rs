use crate::enrichment::config::GistConfig;

const ELLIPSIS: &str = "...";

/// Short heading for a segment: its first few words followed by `...`.
pub fn gist(content: &str) -> String {
    gist_with(content, &GistConfig::default())
}

/// Takes `min(max_words, max(min_words, n / word_divisor))` words. Asking for
/// more words than exist just yields all of them.
pub fn gist_with(content: &str, config: &GistConfig) -> String {
    let words: Vec<&str> = content.split_whitespace().collect();
    let take = gist_word_count(words.len(), config);

    let mut heading = words.iter().take(take).copied().collect::<Vec<_>>().join(" ");
    heading.push_str(ELLIPSIS);
    heading
}

fn gist_word_count(total_words: usize, config: &GistConfig) -> usize {
    // No clamp() here: it panics when min_words > max_words, and max_words must win.
    total_words
        .checked_div(config.word_divisor)
        .unwrap_or(0)
        .max(config.min_words)
        .min(config.max_words)
}
