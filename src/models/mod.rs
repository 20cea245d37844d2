pub mod section;
pub mod segment;

pub use section::Section;
pub use segment::{EnrichedSegment, Segment};
