//! Bodyweight-exercise scaling.
//!
//! Without an external load, intensity moves volume (reps or hold time) and,
//! at the extremes, swaps the exercise for its easier or harder progression.

use crate::progression::Direction;
use crate::reps::RepsSpec;
use crate::tables::{default_tables, ScalingTables};
use crate::weighted::scale_count;
use crate::{Intensity, Progressions, RpeTarget};
use serde::{Deserialize, Serialize};

/// Unscaled bodyweight prescription
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BodyweightBase {
    pub reps: String,
    pub rest_seconds: u32,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct BodyweightPrescription {
    /// Slug actually prescribed; differs from the base slug after substitution
    pub exercise_slug: String,
    pub is_substituted: bool,
    pub reps: String,
    pub rest_seconds: u32,
    pub rpe_target: RpeTarget,
}

pub fn apply_intensity_to_bodyweight(
    base: &BodyweightBase,
    intensity: Intensity,
    base_slug: &str,
    progressions: Option<&Progressions>,
) -> BodyweightPrescription {
    apply_intensity_to_bodyweight_with(default_tables(), base, intensity, base_slug, progressions)
}

/// Scale a bodyweight prescription
///
/// Rep counts use the bodyweight reps table, holds and timed work the
/// duration table. AMRAP and unrecognized reps pass through unchanged. Rest
/// follows the weighted rest multiplier with the same floor.
pub fn apply_intensity_to_bodyweight_with(
    tables: &ScalingTables,
    base: &BodyweightBase,
    intensity: Intensity,
    base_slug: &str,
    progressions: Option<&Progressions>,
) -> BodyweightPrescription {
    let coefficients = tables.weighted(intensity);

    let reps = match RepsSpec::parse(&base.reps) {
        Some(spec) => spec
            .scaled(
                tables.bodyweight_reps_multiplier(intensity),
                tables.bodyweight_duration_multiplier(intensity),
            )
            .to_string(),
        None => base.reps.clone(),
    };
    let rest_seconds = scale_count(
        base.rest_seconds,
        coefficients.rest_multiplier,
        tables.min_rest_seconds,
    );

    let exercise_slug = substitute(base_slug, intensity, progressions);
    let is_substituted = exercise_slug != base_slug;
    if is_substituted {
        tracing::debug!(
            "Substituted {} -> {} at {:?} intensity",
            base_slug,
            exercise_slug,
            intensity
        );
    }

    BodyweightPrescription {
        exercise_slug,
        is_substituted,
        reps,
        rest_seconds,
        rpe_target: coefficients.rpe,
    }
}

fn substitute(
    base_slug: &str,
    intensity: Intensity,
    progressions: Option<&Progressions>,
) -> String {
    let target = Direction::for_intensity(intensity).and_then(|direction| {
        let progressions = progressions?;
        match direction {
            Direction::Easier => progressions.easier.as_deref(),
            Direction::Harder => progressions.harder.as_deref(),
        }
    });
    target.unwrap_or(base_slug).to_string()
}
