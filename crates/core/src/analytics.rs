//! Chart data derivation.
//!
//! Every function here is a pure computation over rows the query layer
//! already loaded; there is no server-side aggregation beyond that. Empty
//! input degrades to `None` (or an empty series) so the api layer can show
//! an explicit no-data message instead of an empty chart.

use serde::Serialize;

use crate::types::Timestamp;

/* --------------------------------------------------------------------------
Empty-state messages
-------------------------------------------------------------------------- */

pub const NO_RATINGS_MESSAGE: &str = "No ratings yet";
pub const NO_TAGS_MESSAGE: &str = "No tags yet";
pub const NO_USAGE_MESSAGE: &str = "No usage data available";
pub const NO_METRICS_MESSAGE: &str = "No model metrics available";

/* --------------------------------------------------------------------------
Rating histogram
-------------------------------------------------------------------------- */

/// Fixed five-bucket rating distribution; `buckets[0]` counts 1-star rows.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RatingHistogram {
    pub buckets: [u64; 5],
    pub total: u64,
}

/// Count rated rows into the five rating buckets.
///
/// Returns `None` when no row carries a rating. Out-of-range values
/// (which the store's check constraint should prevent anyway) are skipped.
pub fn rating_histogram<I>(ratings: I) -> Option<RatingHistogram>
where
    I: IntoIterator<Item = Option<i16>>,
{
    let mut buckets = [0u64; 5];
    let mut total = 0u64;

    for rating in ratings.into_iter().flatten() {
        if (1..=5).contains(&rating) {
            buckets[(rating - 1) as usize] += 1;
            total += 1;
        }
    }

    if total == 0 {
        None
    } else {
        Some(RatingHistogram { buckets, total })
    }
}

/* --------------------------------------------------------------------------
Tag frequency
-------------------------------------------------------------------------- */

/// One bar of the tag-frequency chart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TagCount {
    pub tag: String,
    pub count: u64,
}

/// Flatten tag sets across rows and count occurrences.
///
/// Sorted by count descending, then tag ascending for a stable order.
/// An empty result means "no tags yet".
pub fn tag_frequency<'a, I>(tag_sets: I) -> Vec<TagCount>
where
    I: IntoIterator<Item = &'a [String]>,
{
    let mut counts = std::collections::HashMap::<&str, u64>::new();
    for tags in tag_sets {
        for tag in tags {
            *counts.entry(tag.as_str()).or_default() += 1;
        }
    }

    let mut out: Vec<TagCount> = counts
        .into_iter()
        .map(|(tag, count)| TagCount {
            tag: tag.to_string(),
            count,
        })
        .collect();
    out.sort_by(|a, b| b.count.cmp(&a.count).then_with(|| a.tag.cmp(&b.tag)));
    out
}

/* --------------------------------------------------------------------------
Usage timeline
-------------------------------------------------------------------------- */

/// Input row for the usage timeline: one aggregated pipeline group.
#[derive(Debug, Clone)]
pub struct UsageSample {
    pub name: String,
    pub hash: String,
    pub count: i64,
    pub timestamp: Option<Timestamp>,
}

/// Which x-axis the timeline ended up with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TimelineAxis {
    /// Points are plotted against their timestamps.
    Time,
    /// No row had a timestamp; points fall back to their row index.
    Index,
}

/// One point of the usage chart. Point size tracks the completion count.
#[derive(Debug, Clone, Serialize)]
pub struct UsagePoint {
    pub name: String,
    pub hash: String,
    pub count: i64,
    pub index: usize,
    pub timestamp: Option<Timestamp>,
}

#[derive(Debug, Clone, Serialize)]
pub struct UsageTimeline {
    pub axis: TimelineAxis,
    pub points: Vec<UsagePoint>,
}

/// Build the per-pipeline usage series.
///
/// Falls back to the row index as x-axis when no sample carries a
/// timestamp. Returns `None` on empty input.
pub fn usage_timeline(samples: &[UsageSample]) -> Option<UsageTimeline> {
    if samples.is_empty() {
        return None;
    }

    let axis = if samples.iter().any(|s| s.timestamp.is_some()) {
        TimelineAxis::Time
    } else {
        TimelineAxis::Index
    };

    let points = samples
        .iter()
        .enumerate()
        .map(|(index, s)| UsagePoint {
            name: s.name.clone(),
            hash: s.hash.clone(),
            count: s.count,
            index,
            timestamp: s.timestamp,
        })
        .collect();

    Some(UsageTimeline { axis, points })
}

/* --------------------------------------------------------------------------
Cross-model scatter
-------------------------------------------------------------------------- */

/// Input row for the model comparison chart.
#[derive(Debug, Clone)]
pub struct ModelMetricsSample {
    pub name: String,
    pub accuracy: Option<f64>,
    pub avg_response_time_ms: Option<f64>,
    pub cost_per_token: Option<f64>,
}

/// One point of the response-time vs accuracy scatter.
/// Point size is the model's cost per token.
#[derive(Debug, Clone, Serialize)]
pub struct ModelPoint {
    pub name: String,
    pub response_time_ms: f64,
    pub accuracy: f64,
    pub cost_per_token: f64,
}

/// Build the cross-model scatter, skipping models that are missing either
/// axis metric. Missing cost defaults to zero (a minimal point).
pub fn model_scatter(samples: &[ModelMetricsSample]) -> Vec<ModelPoint> {
    samples
        .iter()
        .filter_map(|s| {
            let accuracy = s.accuracy?;
            let response_time_ms = s.avg_response_time_ms?;
            Some(ModelPoint {
                name: s.name.clone(),
                response_time_ms,
                accuracy,
                cost_per_token: s.cost_per_token.unwrap_or(0.0),
            })
        })
        .collect()
}

/* --------------------------------------------------------------------------
Tests
-------------------------------------------------------------------------- */
