//! Weighted-exercise scaling.
//!
//! Loaded lifts express intensity through %1RM: sets, reps and rest are
//! scaled by the intensity coefficients, and the target weight is derived
//! from a known one-rep max.

use crate::tables::{default_tables, ScalingTables};
use crate::{Equipment, Intensity, RpeTarget};
use serde::{Deserialize, Serialize};

/// Unscaled loaded prescription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeightedBase {
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
}

/// Loaded prescription after intensity scaling
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedPrescription {
    pub sets: u32,
    pub reps: u32,
    pub rest_seconds: u32,
    /// Absolute target load; present only when a 1RM was supplied
    pub weight: Option<f64>,
    /// Whole percent, e.g. 88 for 87.5%
    pub percent_of_one_rep_max: u32,
    pub rpe_target: RpeTarget,
}

/// Scale a loaded prescription using the default tables
pub fn apply_intensity_to_weighted(
    base: WeightedBase,
    intensity: Intensity,
    one_rep_max: Option<f64>,
) -> WeightedPrescription {
    apply_intensity_to_weighted_with(default_tables(), base, intensity, one_rep_max)
}

/// Scale a loaded prescription
///
/// Sets and reps never drop below 1, rest never below the table's floor
/// (15s by default). The target weight is `one_rep_max * avg%`, snapped to
/// the weight increment.
pub fn apply_intensity_to_weighted_with(
    tables: &ScalingTables,
    base: WeightedBase,
    intensity: Intensity,
    one_rep_max: Option<f64>,
) -> WeightedPrescription {
    let coefficients = tables.weighted(intensity);
    let avg = coefficients.avg_one_rep_max();

    let sets = scale_count(base.sets, coefficients.sets_multiplier, 1);
    let reps = scale_count(base.reps, coefficients.reps_multiplier, 1);
    let rest_seconds = scale_count(
        base.rest_seconds,
        coefficients.rest_multiplier,
        tables.min_rest_seconds,
    );
    let weight = one_rep_max.map(|orm| round_to_increment(orm * avg, tables.weight_increment));

    tracing::debug!(
        "Weighted {:?}: {}x{} rest {}s -> {}x{} rest {}s @ {:.1}%",
        intensity,
        base.sets,
        base.reps,
        base.rest_seconds,
        sets,
        reps,
        rest_seconds,
        avg * 100.0
    );

    WeightedPrescription {
        sets,
        reps,
        rest_seconds,
        weight,
        percent_of_one_rep_max: (avg * 100.0).round() as u32,
        rpe_target: coefficients.rpe,
    }
}

/// Estimate a one-rep max from a set of `reps` at `weight` (Epley)
///
/// A single rep is the 1RM itself. Zero reps or a non-positive weight
/// estimate nothing and return 0.
pub fn calculate_one_rep_max(weight: f64, reps: u32) -> f64 {
    if reps == 0 || weight <= 0.0 {
        return 0.0;
    }
    if reps == 1 {
        return weight;
    }
    weight * (1.0 + f64::from(reps) / 30.0)
}

/// Target load for a fraction of 1RM, snapped to the nearest 2.5
pub fn calculate_target_weight(one_rep_max: f64, fraction: f64) -> f64 {
    round_to_increment(one_rep_max * fraction, default_tables().weight_increment)
}

/// Whether an exercise has no external load to prescribe as %1RM
pub fn is_bodyweight_exercise(equipment: &[Equipment]) -> bool {
    !equipment.iter().any(Equipment::is_external_load)
}

/// Midpoint of the %1RM band for `intensity`, as a fraction (0.875 for High)
pub fn get_avg_one_rep_max_percent(intensity: Intensity) -> f64 {
    default_tables().weighted(intensity).avg_one_rep_max()
}

pub fn get_rpe_target(intensity: Intensity) -> RpeTarget {
    default_tables().weighted(intensity).rpe
}

pub(crate) fn round_to_increment(value: f64, increment: f64) -> f64 {
    if value <= 0.0 {
        return 0.0;
    }
    (value / increment).round() * increment
}

pub(crate) fn scale_count(value: u32, multiplier: f64, floor: u32) -> u32 {
    let scaled = (f64::from(value) * multiplier).round();
    (scaled as u32).max(floor)
}
