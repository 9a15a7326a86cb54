pub mod frontier;

pub use frontier::{FrontierEntry, PriorityFrontier};
