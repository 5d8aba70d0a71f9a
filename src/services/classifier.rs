use crate::models::{Episode, PatternResult, ReleasePattern};
use crate::services::intervals::{compute_intervals, IntervalSummary};

/// Tolerance around 7 days for the premiere-then-weekly tail check
const PREMIERE_WEEKLY_TOLERANCE: i64 = 2;
/// Tolerance around 7 days for the near-weekly ratio
const NEAR_WEEKLY_TOLERANCE: i64 = 1;
/// Gaps at or under this many days count as short
const SHORT_GAP_DAYS: i64 = 3;

/// Classifies a season's release cadence from its episode air dates
///
/// Applies a fixed decision ladder to the interval sequence; rules are
/// evaluated top to bottom and the first match wins, which keeps the outcome
/// unambiguous when a short season could plausibly fit several shapes.
///
/// The ladder:
/// 1. Fewer than 2 dated episodes -> unknown
/// 2. Every gap within a day -> binge
/// 3. Day-one multi-episode premiere with a weekly tail -> premiere_weekly
/// 4. Mid-season same-day drop with a mostly-weekly cadence -> premiere_weekly
/// 5. Average 6-8 days, low variance -> weekly
/// 6. Near-weekly rhythm with frequent short gaps -> multi_weekly
/// 7. Anything else -> mixed
///
/// Total over all inputs: the episode list may be empty, unordered, or
/// sparsely dated, and the result is always a fully populated `PatternResult`.
pub fn classify(episodes: &[Episode]) -> PatternResult {
    let summary = compute_intervals(episodes);

    // 1. Insufficient data: nothing to measure a cadence from
    if summary.episodes.len() < 2 {
        return build_result(
            ReleasePattern::Unknown,
            0.5,
            "Insufficient data",
            summary,
        );
    }

    let intervals = &summary.intervals;

    // 2. Binge: the whole season landed within a day of itself
    if intervals.iter().all(|&gap| gap <= 1) {
        return build_result(
            ReleasePattern::Binge,
            0.95,
            "All episodes within ≤1 day",
            summary,
        );
    }

    // 3. Premiere-weekly, primary form: at least two episodes dropped on day
    // one, and the gaps after the premiere are overwhelmingly weekly
    if intervals[0] == 0 {
        let tail = &intervals[1..];
        let weekly_ratio = ratio(tail, |gap| (gap - 7).abs() <= PREMIERE_WEEKLY_TOLERANCE);
        if weekly_ratio >= 0.7 {
            return build_result(
                ReleasePattern::PremiereWeekly,
                0.85 + 0.1 * weekly_ratio,
                "Multiple episodes premiered same day, then weekly releases",
                summary,
            );
        }
    }

    // 4. Premiere-weekly, alternate form: a same-day drop somewhere in the
    // season (not necessarily the premiere) with a mostly-weekly cadence
    // overall. Needs a near-weekly majority, and a strong one to actually
    // call it.
    let near_weekly_ratio = ratio(intervals, |gap| (gap - 7).abs() <= NEAR_WEEKLY_TOLERANCE);
    if intervals.contains(&0) && near_weekly_ratio >= 0.6 {
        if near_weekly_ratio >= 0.7 {
            return build_result(
                ReleasePattern::PremiereWeekly,
                0.8,
                "Premiere episodes same day, then weekly cadence",
                summary,
            );
        }
    }

    // 5. Weekly: average lands in the 6-8 day band with low variance
    if summary.average >= 6.0 && summary.average <= 8.0 && summary.std_dev < 2.0 {
        return build_result(
            ReleasePattern::Weekly,
            0.9,
            "Average 6–8 days with low variance",
            summary,
        );
    }

    // 6. Multi-weekly: a near-weekly rhythm interleaved with short gaps,
    // i.e. several episodes per week on a consistent schedule
    let short_gaps_ratio = ratio(intervals, |gap| gap <= SHORT_GAP_DAYS);
    if near_weekly_ratio >= 0.5 && short_gaps_ratio >= 0.5 {
        return build_result(
            ReleasePattern::MultiWeekly,
            0.75,
            "Multiple episodes within a week consistently",
            summary,
        );
    }

    // 7. Mixed: irregular but not a total unknown
    build_result(
        ReleasePattern::Mixed,
        0.6,
        "Premieres/gaps cause irregular cadence",
        summary,
    )
}

/// Fraction of gaps satisfying the predicate; 0 for an empty sequence
fn ratio(intervals: &[i64], predicate: impl Fn(i64) -> bool) -> f64 {
    if intervals.is_empty() {
        return 0.0;
    }
    let matching = intervals.iter().filter(|&&gap| predicate(gap)).count();
    matching as f64 / intervals.len() as f64
}

fn build_result(
    pattern: ReleasePattern,
    confidence: f64,
    reasoning: &str,
    summary: IntervalSummary,
) -> PatternResult {
    tracing::debug!(
        pattern = ?pattern,
        confidence,
        episode_count = summary.episodes.len(),
        interval_count = summary.intervals.len(),
        "Release cadence classified"
    );

    PatternResult {
        pattern,
        confidence,
        intervals: summary.intervals,
        average_interval: summary.average,
        std_dev_interval: summary.std_dev,
        reasoning: reasoning.to_string(),
        episode_details: summary.episodes,
    }
}
