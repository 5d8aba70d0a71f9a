use crate::models::{Episode, EpisodeDetail};

/// Chronological interval sequence plus summary statistics for one season
#[derive(Debug, Clone, PartialEq)]
pub struct IntervalSummary {
    /// Dated episodes in ascending air-date order (ties broken by number)
    pub episodes: Vec<EpisodeDetail>,
    /// Day gaps between consecutive dated episodes; 0 for same-day drops
    pub intervals: Vec<i64>,
    /// Arithmetic mean of `intervals`
    pub average: f64,
    /// Population standard deviation of `intervals`
    pub std_dev: f64,
}

/// Turns a raw, possibly-unordered, possibly-sparse episode list into a clean
/// chronological interval sequence plus summary stats
///
/// Episodes without an air date are discarded; episodes sharing a date are
/// kept as separate entries since same-day premieres are meaningful signal.
/// Fewer than 2 dated episodes is a valid "insufficient data" state, not an
/// error: intervals come back empty with zeroed statistics.
pub fn compute_intervals(episodes: &[Episode]) -> IntervalSummary {
    let mut dated: Vec<EpisodeDetail> = episodes
        .iter()
        .filter_map(|episode| {
            episode.air_date.map(|air_date| EpisodeDetail {
                number: episode.number,
                air_date,
                title: episode.title.clone(),
            })
        })
        .collect();

    dated.sort_by(|a, b| {
        a.air_date
            .cmp(&b.air_date)
            .then_with(|| a.number.cmp(&b.number))
    });

    if dated.len() < 2 {
        return IntervalSummary {
            episodes: dated,
            intervals: Vec::new(),
            average: 0.0,
            std_dev: 0.0,
        };
    }

    let intervals: Vec<i64> = dated
        .windows(2)
        .map(|pair| {
            pair[1]
                .air_date
                .signed_duration_since(pair[0].air_date)
                .num_days()
        })
        .collect();

    let average = intervals.iter().sum::<i64>() as f64 / intervals.len() as f64;
    let variance = intervals
        .iter()
        .map(|&gap| {
            let delta = gap as f64 - average;
            delta * delta
        })
        .sum::<f64>()
        / intervals.len() as f64;

    IntervalSummary {
        episodes: dated,
        intervals,
        average,
        std_dev: variance.sqrt(),
    }
}
