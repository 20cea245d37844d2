use regex::Regex;
use std::sync::OnceLock;

/// Bullet marker (`-`, `•` or `*`) followed by whitespace, tested against a trimmed line.
const BULLET_PATTERN: &str = r"^\s*[-•*]\s";

fn bullet_regex() -> &'static Regex {
    static BULLET_RE: OnceLock<Regex> = OnceLock::new();
    BULLET_RE.get_or_init(|| Regex::new(BULLET_PATTERN).expect("bullet pattern is a valid regex"))
}

/// How a single input line is treated by the segmenter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineKind {
    Bullet,
    Blank,
    Text,
}

impl LineKind {
    pub fn of(line: &str) -> Self {
        if is_bullet_line(line) {
            LineKind::Bullet
        } else if is_blank_line(line) {
            LineKind::Blank
        } else {
            LineKind::Text
        }
    }
}

/// A bullet line needs content after the marker, so `"-"` or `"- "` alone
/// do not count once trimmed.
pub fn is_bullet_line(line: &str) -> bool {
    bullet_regex().is_match(line.trim())
}

pub fn is_blank_line(line: &str) -> bool {
    line.trim().is_empty()
}

/// Splits on `\n` and `\r\n`. An empty input still yields one empty line.
pub fn split_lines(text: &str) -> Vec<&str> {
    text.split('\n')
        .map(|line| line.strip_suffix('\r').unwrap_or(line))
        .collect()
}
