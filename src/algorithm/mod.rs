pub mod engine;
pub mod path;

pub use engine::{ShortestPathEngine, ShortestPathRun};
