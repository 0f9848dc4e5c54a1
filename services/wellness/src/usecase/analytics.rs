use std::collections::BTreeMap;

use chrono::Timelike;
use serde::Serialize;

use crate::domain::metrics::{round1, round3};
use crate::domain::repository::{AssessmentRepository, SessionRepository};
use crate::domain::types::{Assessment, Gender};
use crate::error::WellnessServiceError;

// ── Bucketing tables ─────────────────────────────────────────────────────────
//
// Each distribution is driven by one table; adding a band means adding a row.

const AGE_BANDS: &[(&str, i16, i16)] = &[
    ("18-25", 18, 25),
    ("26-35", 26, 35),
    ("36-45", 36, 45),
    ("46-55", 46, 55),
    ("56-65", 56, 65),
    ("65+", 66, i16::MAX),
];

const WELLNESS_BANDS: &[(&str, i16, i16)] = &[
    ("0-20", 0, 20),
    ("21-40", 21, 40),
    ("41-60", 41, 60),
    ("61-80", 61, 80),
    ("81-100", 81, 100),
];

// Highest threshold first; a score lands in the first band it reaches.
const QUALITY_BANDS: &[(&str, f64)] = &[
    ("Excellent (0.8-1.0)", 0.8),
    ("Good (0.6-0.79)", 0.6),
    ("Fair (0.4-0.59)", 0.4),
    ("Poor (0.0-0.39)", 0.0),
];

// Half-open hour ranges over the submission timestamp.
const TIME_OF_DAY_BANDS: &[(&str, u32, u32)] = &[
    ("Morning (6-12)", 6, 12),
    ("Afternoon (12-18)", 12, 18),
    ("Evening (18-24)", 18, 24),
    ("Night (0-6)", 0, 6),
];

const TOP_GOALS_LIMIT: usize = 10;

fn quality_band(score: f64) -> &'static str {
    QUALITY_BANDS
        .iter()
        .find(|(_, min)| score >= *min)
        .map(|(label, _)| *label)
        .unwrap_or(QUALITY_BANDS[QUALITY_BANDS.len() - 1].0)
}

fn time_of_day_band(hour: u32) -> &'static str {
    TIME_OF_DAY_BANDS
        .iter()
        .find(|(_, start, end)| (*start..*end).contains(&hour))
        .map(|(label, _, _)| *label)
        .unwrap_or("Night (0-6)")
}

fn percentage_of(count: u64, total: u64) -> f64 {
    if total == 0 {
        0.0
    } else {
        round1(count as f64 / total as f64 * 100.0)
    }
}

fn banded_counts(
    bands: &'static [(&'static str, i16, i16)],
    values: impl Iterator<Item = i16>,
) -> Vec<BucketCount> {
    let mut counts = vec![0u64; bands.len()];
    for value in values {
        if let Some(i) = bands
            .iter()
            .position(|(_, min, max)| (*min..=*max).contains(&value))
        {
            counts[i] += 1;
        }
    }
    let total: u64 = counts.iter().sum();
    bands
        .iter()
        .zip(counts)
        .map(|((label, _, _), count)| BucketCount {
            label,
            count,
            percentage: percentage_of(count, total),
        })
        .collect()
}

fn labeled_counts(
    labels: impl Iterator<Item = &'static str>,
    mut count_of: impl FnMut(&'static str) -> u64,
) -> Vec<BucketCount> {
    let counts: Vec<(&'static str, u64)> = labels.map(|label| (label, count_of(label))).collect();
    let total: u64 = counts.iter().map(|(_, c)| c).sum();
    counts
        .into_iter()
        .map(|(label, count)| BucketCount {
            label,
            count,
            percentage: percentage_of(count, total),
        })
        .collect()
}

// ── Report types ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BucketCount {
    pub label: &'static str,
    pub count: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalCount {
    pub goal: String,
    pub count: u64,
    pub percentage: f64,
}

/// Per-indicator mean plus its own five-bucket histogram.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndicatorBreakdown {
    pub indicator: &'static str,
    pub average: f64,
    pub distribution: Vec<BucketCount>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeviceCount {
    pub device: String,
    pub count: u64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QualityBandDuration {
    pub band: &'static str,
    pub count: u64,
    pub avg_duration_minutes: f64,
}

/// Aggregate view over the whole assessment collection. Staff only.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AnalyticsReport {
    pub total_assessments: u64,
    pub average_wellness_score: f64,
    pub average_quality_score: f64,
    pub average_completion_time: f64,
    pub age_distribution: Vec<BucketCount>,
    pub gender_distribution: Vec<BucketCount>,
    pub wellness_score_distribution: Vec<BucketCount>,
    pub quality_distribution: Vec<BucketCount>,
    pub time_of_day_distribution: Vec<BucketCount>,
    pub indicator_averages: Vec<IndicatorBreakdown>,
    pub top_goals: Vec<GoalCount>,
    pub device_usage: Vec<DeviceCount>,
    pub duration_by_quality: Vec<QualityBandDuration>,
    pub total_sessions: u64,
    pub completed_sessions: u64,
    pub completion_rate: f64,
}

// ── Report construction ──────────────────────────────────────────────────────

/// Pure aggregation over in-memory rows. All denominators are guarded;
/// an empty collection yields an all-zero report.
pub fn build_report(
    assessments: &[Assessment],
    total_sessions: u64,
    completed_sessions: u64,
) -> AnalyticsReport {
    let total = assessments.len() as u64;

    let average_wellness_score = mean(
        assessments
            .iter()
            .filter_map(|a| a.avg_wellness_score)
            .map(f64::from),
        round1,
    );
    let average_quality_score = mean(
        assessments.iter().filter_map(|a| a.completion_quality_score),
        round3,
    );
    let average_completion_time = mean(
        assessments
            .iter()
            .filter_map(|a| a.telemetry.duration_minutes)
            .map(f64::from),
        round1,
    );

    let age_distribution = banded_counts(AGE_BANDS, assessments.iter().map(|a| a.age));
    let gender_distribution = labeled_counts(Gender::ALL.iter().map(|g| g.as_str()), |label| {
        assessments
            .iter()
            .filter(|a| a.gender.as_str() == label)
            .count() as u64
    });
    let wellness_score_distribution = banded_counts(
        WELLNESS_BANDS,
        assessments.iter().filter_map(|a| a.avg_wellness_score),
    );

    let quality_distribution =
        labeled_counts(QUALITY_BANDS.iter().map(|(label, _)| *label), |label| {
            assessments
                .iter()
                .filter_map(|a| a.completion_quality_score)
                .filter(|&q| quality_band(q) == label)
                .count() as u64
        });

    let time_of_day_distribution = labeled_counts(
        TIME_OF_DAY_BANDS.iter().map(|(label, _, _)| *label),
        |label| {
            assessments
                .iter()
                .filter(|a| time_of_day_band(a.submitted_at.hour()) == label)
                .count() as u64
        },
    );

    let indicator_averages = indicator_breakdowns(assessments);
    let top_goals = top_goals(assessments);
    let device_usage = device_usage(assessments);
    let duration_by_quality = duration_by_quality(assessments);

    let completion_rate = if total_sessions == 0 {
        0.0
    } else {
        round1(completed_sessions as f64 / total_sessions as f64 * 100.0)
    };

    AnalyticsReport {
        total_assessments: total,
        average_wellness_score,
        average_quality_score,
        average_completion_time,
        age_distribution,
        gender_distribution,
        wellness_score_distribution,
        quality_distribution,
        time_of_day_distribution,
        indicator_averages,
        top_goals,
        device_usage,
        duration_by_quality,
        total_sessions,
        completed_sessions,
        completion_rate,
    }
}

fn mean(values: impl Iterator<Item = f64>, round: fn(f64) -> f64) -> f64 {
    let (sum, count) = values.fold((0.0, 0u64), |(s, c), v| (s + v, c + 1));
    if count == 0 { 0.0 } else { round(sum / count as f64) }
}

/// Mean and five-bucket histogram for each of the ten wellness indicators.
fn indicator_breakdowns(assessments: &[Assessment]) -> Vec<IndicatorBreakdown> {
    indicator_labels()
        .into_iter()
        .enumerate()
        .map(|(i, indicator)| {
            let values: Vec<i16> = assessments
                .iter()
                .map(|a| a.baseline.labeled()[i].1)
                .collect();
            IndicatorBreakdown {
                indicator,
                average: mean(values.iter().map(|&v| f64::from(v)), round1),
                distribution: banded_counts(WELLNESS_BANDS, values.into_iter()),
            }
        })
        .collect()
}

fn indicator_labels() -> [&'static str; 10] {
    crate::domain::types::WellnessScores::default()
        .labeled()
        .map(|(label, _)| label)
}

fn top_goals(assessments: &[Assessment]) -> Vec<GoalCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for assessment in assessments {
        for goal in assessment.goals() {
            *counts.entry(goal).or_insert(0) += 1;
        }
    }
    let total_goals: u64 = counts.values().sum();
    if total_goals == 0 {
        return vec![];
    }

    let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked
        .into_iter()
        .take(TOP_GOALS_LIMIT)
        .map(|(goal, count)| GoalCount {
            goal: goal.to_owned(),
            count,
            percentage: round1(count as f64 / total_goals as f64 * 100.0),
        })
        .collect()
}

fn device_usage(assessments: &[Assessment]) -> Vec<DeviceCount> {
    let mut counts: BTreeMap<&str, u64> = BTreeMap::new();
    for device in assessments
        .iter()
        .filter_map(|a| a.telemetry.device_type.as_deref())
    {
        *counts.entry(device).or_insert(0) += 1;
    }
    let mut ranked: Vec<(&str, u64)> = counts.into_iter().collect();
    ranked.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
    ranked
        .into_iter()
        .map(|(device, count)| DeviceCount {
            device: device.to_owned(),
            count,
        })
        .collect()
}

fn duration_by_quality(assessments: &[Assessment]) -> Vec<QualityBandDuration> {
    QUALITY_BANDS
        .iter()
        .map(|(band, _)| {
            let durations: Vec<f64> = assessments
                .iter()
                .filter(|a| {
                    a.completion_quality_score
                        .is_some_and(|q| quality_band(q) == *band)
                })
                .filter_map(|a| a.telemetry.duration_minutes)
                .map(f64::from)
                .collect();
            QualityBandDuration {
                band,
                count: durations.len() as u64,
                avg_duration_minutes: mean(durations.into_iter(), round1),
            }
        })
        .collect()
}

// ── GetAnalytics ─────────────────────────────────────────────────────────────

pub struct GetAnalyticsUseCase<A: AssessmentRepository, S: SessionRepository> {
    pub assessments: A,
    pub sessions: S,
}

impl<A: AssessmentRepository, S: SessionRepository> GetAnalyticsUseCase<A, S> {
    pub async fn execute(&self, is_staff: bool) -> Result<AnalyticsReport, WellnessServiceError> {
        if !is_staff {
            return Err(WellnessServiceError::Forbidden);
        }

        let assessments = self.assessments.list_all().await?;
        let total_sessions = self.sessions.count().await?;
        let completed_sessions = self.sessions.count_completed().await?;
        Ok(build_report(&assessments, total_sessions, completed_sessions))
    }
}
