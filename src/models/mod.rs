pub mod episode;
pub mod pattern;

pub use episode::Episode;
pub use pattern::{EpisodeDetail, PatternResult, ReleasePattern};
