pub mod state;

pub use state::{Progress, ReadingSession};
