//! Pure derived-metric computation over an assessment's raw fields.
//!
//! Every function here is side-effect free. The assessment usecases decide
//! when results are stored; nothing in this module touches persistence.

use std::collections::BTreeSet;

use serde::Serialize;

use crate::domain::types::{CompletionTelemetry, WellnessScores};

const CM_PER_INCH: f64 = 2.54;
const KG_PER_POUND: f64 = 0.453592;
const METERS_PER_INCH: f64 = 0.0254;

/// Round to one decimal place.
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Round to three decimal places.
pub fn round3(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}

pub fn height_total_inches(feet: i16, inches: i16) -> i32 {
    i32::from(feet) * 12 + i32::from(inches)
}

pub fn height_cm(feet: i16, inches: i16) -> f64 {
    round1(f64::from(height_total_inches(feet, inches)) * CM_PER_INCH)
}

pub fn weight_kg(weight_lbs: i32) -> f64 {
    round1(f64::from(weight_lbs) * KG_PER_POUND)
}

/// BMI from imperial inputs. Intermediate kg/m values are unrounded;
/// only the final result rounds to one decimal.
pub fn bmi(feet: i16, inches: i16, weight_lbs: i32) -> f64 {
    let height_m = f64::from(height_total_inches(feet, inches)) * METERS_PER_INCH;
    let kg = f64::from(weight_lbs) * KG_PER_POUND;
    round1(kg / (height_m * height_m))
}

/// WHO bands, half-open except the unbounded top range.
pub fn bmi_category(bmi: f64) -> &'static str {
    if bmi < 18.5 {
        "Underweight"
    } else if bmi < 25.0 {
        "Normal weight"
    } else if bmi < 30.0 {
        "Overweight"
    } else {
        "Obese"
    }
}

/// Grouped view over the ten baseline indicators, all one-decimal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct WellnessSummary {
    pub psychological: f64,
    pub physical: f64,
    pub mental_health: f64,
    pub existential: f64,
    pub behavioral_readiness: f64,
    pub overall_average: f64,
}

pub fn wellness_summary(scores: &WellnessScores) -> WellnessSummary {
    let mean = |values: &[i16]| {
        round1(values.iter().map(|&v| f64::from(v)).sum::<f64>() / values.len() as f64)
    };
    WellnessSummary {
        psychological: mean(&[scores.fulfillment, scores.happiness]),
        physical: mean(&[scores.energy, scores.sleep, scores.activity, scores.nutrition]),
        mental_health: f64::from(scores.stress),
        existential: f64::from(scores.purpose),
        behavioral_readiness: mean(&[scores.motivation, scores.confidence]),
        overall_average: mean(&scores.values()),
    }
}

/// Integer-rounded mean of the ten baseline indicators.
pub fn avg_wellness_score(scores: &WellnessScores) -> i16 {
    let sum: i32 = scores.values().iter().map(|&v| i32::from(v)).sum();
    (f64::from(sum) / 10.0).round() as i16
}

/// Heuristic 0.0-1.0 reliability score: the unweighted mean of whichever
/// factors apply. The time factor is omitted entirely when no duration was
/// recorded — the denominator shrinks with it. The goal factor always
/// applies and contributes 0.0 when no goals were counted.
pub fn completion_quality_score(scores: &WellnessScores, telemetry: &CompletionTelemetry) -> f64 {
    let mut factors: Vec<f64> = Vec::with_capacity(4);

    if let Some(minutes) = telemetry.duration_minutes {
        let time_factor = if (10..=30).contains(&minutes) {
            1.0
        } else if minutes < 5 {
            0.3
        } else if minutes > 60 {
            0.6
        } else {
            0.8
        };
        factors.push(time_factor);
    }

    factors.push(f64::from(telemetry.sections_completed) / 3.0);

    let distinct = scores.values().iter().copied().collect::<BTreeSet<_>>().len();
    let variance_factor = match distinct {
        1 => 0.2,
        2..=3 => 0.5,
        _ => 1.0,
    };
    factors.push(variance_factor);

    factors.push((f64::from(telemetry.goals_selected) / 3.0).min(1.0));

    factors.iter().sum::<f64>() / factors.len() as f64
}
