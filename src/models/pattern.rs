use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The temporal shape in which a season's episodes become available
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ReleasePattern {
    /// All episodes dropped at once (or within a day of each other)
    Binge,
    /// One episode roughly every seven days
    Weekly,
    /// Multi-episode premiere followed by weekly releases
    PremiereWeekly,
    /// Several episodes per week on a consistent rhythm
    MultiWeekly,
    /// Irregular cadence that fits no recognized shape
    Mixed,
    /// Not enough dated episodes to classify
    Unknown,
}

/// A dated episode as considered by the classifier, in chronological order
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct EpisodeDetail {
    pub number: u32,
    pub air_date: NaiveDate,
    pub title: String,
}

/// Classification output: pattern, confidence, and diagnostic context
///
/// Created fresh on every classification call and never mutated. The
/// `intervals` and `episode_details` fields echo the filtered, sorted data the
/// classifier actually looked at, not the raw input.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatternResult {
    pub pattern: ReleasePattern,
    /// Heuristic score in [0, 1] for how strongly the matched rule fit
    pub confidence: f64,
    /// Day gaps between consecutive dated episodes, chronological order
    pub intervals: Vec<i64>,
    /// Arithmetic mean of `intervals`; 0 with fewer than 2 dated episodes
    pub average_interval: f64,
    /// Population standard deviation of `intervals`; 0 with fewer than 2 dated episodes
    pub std_dev_interval: f64,
    /// One-line explanation of which rule fired
    pub reasoning: String,
    pub episode_details: Vec<EpisodeDetail>,
}
