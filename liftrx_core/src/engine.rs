//! Prescription resolution.
//!
//! Chains the individual scalers into one resolved prescription:
//!
//! 1. **Age/phase modifiers**: cap intensity and sets, add youth rep volume,
//!    narrow the %1RM band
//! 2. **Scaler**: bodyweight (volume + progression substitution) or weighted
//!    (sets/reps/rest + target load), chosen from the exercise's equipment
//! 3. **Age set cap** again, since high intensity multiplies sets
//!
//! Warm-up prescriptions pass through unscaled; their volume comes from the
//! phase defaults.

use crate::age::{apply_age_modifiers, get_max_sets_for_age, AgeModifierInput};
use crate::bodyweight::{apply_intensity_to_bodyweight_with, BodyweightBase};
use crate::reps::{format_scaled_value, RepsSpec, RepsUnit};
use crate::tables::ScalingTables;
use crate::weighted::{
    apply_intensity_to_weighted_with, is_bodyweight_exercise, round_to_increment, WeightedBase,
};
use crate::{
    AgeGroup, Catalog, Error, Intensity, OneRepMaxRange, Phase, Prescription, Result, RpeTarget,
    Section, WarmupPhase,
};
use serde::{Deserialize, Serialize};

/// Who the prescription is being resolved for
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AthleteProfile {
    pub intensity: Intensity,
    #[serde(default)]
    pub age_group: AgeGroup,
    pub phase: Phase,
    /// Known one-rep max for the lift, if any
    #[serde(default)]
    pub one_rep_max: Option<f64>,
}

impl Default for AthleteProfile {
    fn default() -> Self {
        Self {
            intensity: Intensity::Moderate,
            age_group: AgeGroup::Adult,
            phase: Phase::Gpp,
            one_rep_max: None,
        }
    }
}

/// A prescription with every athlete-dependent value filled in
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ResolvedPrescription {
    pub exercise_slug: String,
    pub base_slug: String,
    pub is_substituted: bool,
    pub sets: u32,
    pub reps: String,
    pub rest_seconds: u32,
    /// Intensity after the age cap
    pub intensity: Intensity,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent_of_one_rep_max: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rpe_target: Option<RpeTarget>,
    pub one_rep_max_range: OneRepMaxRange,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub superset: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub warmup_phase: Option<WarmupPhase>,
    pub order_index: u32,
}

impl ResolvedPrescription {
    fn carry(prescription: &Prescription, intensity: Intensity, range: OneRepMaxRange) -> Self {
        Self {
            exercise_slug: prescription.exercise_slug.clone(),
            base_slug: prescription.exercise_slug.clone(),
            is_substituted: false,
            sets: prescription.sets,
            reps: prescription.reps.clone(),
            rest_seconds: prescription.rest_seconds,
            intensity,
            weight: None,
            percent_of_one_rep_max: None,
            rpe_target: None,
            one_rep_max_range: range,
            tempo: prescription.tempo.clone(),
            section: prescription.section,
            superset: prescription.superset.clone(),
            notes: prescription.notes.clone(),
            warmup_phase: prescription.warmup_phase,
            order_index: prescription.order_index,
        }
    }
}

/// Resolve one template prescription for an athlete
///
/// Fails only when the exercise is not in the catalog.
pub fn resolve_prescription(
    catalog: &Catalog,
    tables: &ScalingTables,
    prescription: &Prescription,
    profile: &AthleteProfile,
) -> Result<ResolvedPrescription> {
    let exercise = catalog.get(&prescription.exercise_slug).ok_or_else(|| {
        Error::Prescription(format!(
            "Unknown exercise '{}'",
            prescription.exercise_slug
        ))
    })?;

    let adjusted = apply_age_modifiers(
        AgeModifierInput {
            sets: prescription.sets,
            reps: prescription.reps.clone(),
            intensity: Some(profile.intensity),
        },
        profile.age_group,
        profile.phase,
    );

    let mut resolved =
        ResolvedPrescription::carry(prescription, adjusted.intensity, adjusted.one_rep_max_range);

    if prescription.section == Some(Section::Warmup) {
        return Ok(resolved);
    }

    if is_bodyweight_exercise(&exercise.equipment) {
        let scaled = apply_intensity_to_bodyweight_with(
            tables,
            &BodyweightBase {
                reps: adjusted.reps,
                rest_seconds: prescription.rest_seconds,
            },
            adjusted.intensity,
            &exercise.slug,
            Some(&exercise.progressions),
        );
        resolved.exercise_slug = scaled.exercise_slug;
        resolved.is_substituted = scaled.is_substituted;
        resolved.sets = adjusted.sets;
        resolved.reps = scaled.reps;
        resolved.rest_seconds = scaled.rest_seconds;
        resolved.rpe_target = Some(scaled.rpe_target);
    } else {
        let spec = RepsSpec::parse(&adjusted.reps);
        let base_reps = match spec {
            Some(RepsSpec::Reps { count, .. }) => count.round() as u32,
            _ => 1,
        };
        let scaled = apply_intensity_to_weighted_with(
            tables,
            WeightedBase {
                sets: adjusted.sets,
                reps: base_reps,
                rest_seconds: prescription.rest_seconds,
            },
            adjusted.intensity,
            None,
        );

        // Rep ranges and timed sets keep their written form unless reps actually change
        let reps_multiplier = tables.weighted(adjusted.intensity).reps_multiplier;
        resolved.reps = match spec {
            Some(RepsSpec::Reps { suffix, .. }) if reps_multiplier != 1.0 => {
                format_scaled_value(f64::from(scaled.reps), RepsUnit::Reps, suffix)
            }
            _ => adjusted.reps,
        };

        let fraction = prescription
            .intensity_percent
            .map(|percent| f64::from(percent) / 100.0)
            .unwrap_or_else(|| tables.weighted(adjusted.intensity).avg_one_rep_max());
        let fraction = adjusted.one_rep_max_range.clamp(fraction);

        resolved.sets = scaled.sets;
        resolved.rest_seconds = scaled.rest_seconds;
        resolved.percent_of_one_rep_max = Some((fraction * 100.0).round() as u32);
        resolved.weight = profile
            .one_rep_max
            .map(|orm| round_to_increment(orm * fraction, tables.weight_increment));
        resolved.rpe_target = Some(scaled.rpe_target);
    }

    resolved.sets = resolved.sets.min(get_max_sets_for_age(profile.age_group));

    tracing::debug!(
        "Resolved {} -> {} {}x{} rest {}s",
        resolved.base_slug,
        resolved.exercise_slug,
        resolved.sets,
        resolved.reps,
        resolved.rest_seconds
    );
    Ok(resolved)
}

/// Resolve a whole day's prescriptions, sorted by order index
pub fn resolve_prescriptions(
    catalog: &Catalog,
    tables: &ScalingTables,
    prescriptions: &[Prescription],
    profile: &AthleteProfile,
) -> Result<Vec<ResolvedPrescription>> {
    let mut resolved = prescriptions
        .iter()
        .map(|p| resolve_prescription(catalog, tables, p, profile))
        .collect::<Result<Vec<_>>>()?;
    resolved.sort_by_key(|r| r.order_index);
    tracing::info!("Resolved {} prescriptions", resolved.len());
    Ok(resolved)
}
