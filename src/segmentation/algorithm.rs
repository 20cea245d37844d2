use crate::models::Segment;
use crate::segmentation::lines::{split_lines, LineKind};

/// Where the segmenter is between lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mode {
    /// Nothing pending.
    Idle,
    /// Accumulating ordinary lines.
    Paragraph,
    /// Accumulating a bullet run (plus any lines glued onto it).
    Bullets,
}

/// Accumulator for pending lines and the raw segments flushed so far.
struct Segmenter<'a> {
    mode: Mode,
    pending: Vec<&'a str>,
    raw_segments: Vec<String>,
}

impl<'a> Segmenter<'a> {
    fn new() -> Self {
        Self {
            mode: Mode::Idle,
            pending: Vec::new(),
            raw_segments: Vec::new(),
        }
    }

    fn flush(&mut self) {
        if !self.pending.is_empty() {
            self.raw_segments.push(self.pending.join("\n"));
            self.pending.clear();
        }
    }

    /// Applies the line rules in order: bullet, end of bullet run, blank, text.
    fn step(&mut self, line: &'a str, next: &str) {
        let kind = LineKind::of(line);

        if kind == LineKind::Bullet {
            if self.mode == Mode::Paragraph {
                self.flush();
            }
            self.mode = Mode::Bullets;
            self.pending.push(line);
        } else if self.mode == Mode::Bullets && LineKind::of(next) == LineKind::Text {
            self.pending.push(line);
            self.flush();
            self.mode = Mode::Idle;
        } else if kind == LineKind::Blank {
            self.flush();
            self.mode = Mode::Idle;
        } else {
            self.pending.push(line);
            if self.mode == Mode::Idle {
                self.mode = Mode::Paragraph;
            }
        }
    }

    fn finish(mut self) -> Vec<String> {
        self.flush();
        self.raw_segments
    }
}

/// Splits free-form text into reading segments.
///
/// Bullet runs stay together, a single blank line ends a paragraph, and
/// every returned segment has trimmed, non-empty content.
pub fn segment(text: &str) -> Vec<Segment> {
    let lines = split_lines(text);
    segment_lines(&lines)
}

/// Same as [`segment`] for input that is already split into lines.
pub fn segment_lines(lines: &[&str]) -> Vec<Segment> {
    let mut segmenter = Segmenter::new();

    for (i, line) in lines.iter().enumerate() {
        let next = lines.get(i + 1).copied().unwrap_or("");
        segmenter.step(*line, next);
    }

    let raw_segments = segmenter.finish();
    log::debug!("segmenter produced {} raw segments", raw_segments.len());

    raw_segments
        .iter()
        .filter_map(|raw| Segment::from_raw(raw))
        .collect()
}
