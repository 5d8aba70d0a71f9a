pub mod classifier;
pub mod intervals;

pub use classifier::classify;
pub use intervals::{compute_intervals, IntervalSummary};
