pub mod algorithm;
pub mod lines;

pub use algorithm::{segment, segment_lines};
pub use lines::{is_bullet_line, LineKind};
