//! Age-group and training-phase modifiers.
//!
//! Age groups cap intensity and set count and may add rep volume; training
//! phases narrow the %1RM band. Both layers only ever restrict: nothing here
//! raises intensity or sets.

use crate::reps::scale_reps_or_duration;
use crate::{AgeGroup, Intensity, OneRepMaxRange, Phase};
use serde::{Deserialize, Serialize};

/// Limits applied to one age group
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
pub struct AgeRules {
    pub max_intensity: Intensity,
    /// Highest %1RM allowed, as a fraction
    pub one_rep_max_ceiling: f64,
    pub max_sets: u32,
    pub reps_multiplier: f64,
}

impl AgeRules {
    pub fn for_group(age_group: AgeGroup) -> Self {
        match age_group {
            AgeGroup::Youth => AgeRules {
                max_intensity: Intensity::Moderate,
                one_rep_max_ceiling: 0.65,
                max_sets: 3,
                reps_multiplier: 1.2,
            },
            AgeGroup::Teen => AgeRules {
                max_intensity: Intensity::High,
                one_rep_max_ceiling: 0.85,
                max_sets: 5,
                reps_multiplier: 1.0,
            },
            AgeGroup::Adult => AgeRules {
                max_intensity: Intensity::High,
                one_rep_max_ceiling: 0.90,
                max_sets: 6,
                reps_multiplier: 1.0,
            },
            AgeGroup::Masters => AgeRules {
                max_intensity: Intensity::High,
                one_rep_max_ceiling: 0.85,
                max_sets: 5,
                reps_multiplier: 1.0,
            },
        }
    }
}

pub fn get_max_intensity_for_age(age_group: AgeGroup) -> Intensity {
    AgeRules::for_group(age_group).max_intensity
}

/// Lower `intensity` to the age group's maximum; never raises it
pub fn cap_intensity_for_age(intensity: Intensity, age_group: AgeGroup) -> Intensity {
    intensity.min(get_max_intensity_for_age(age_group))
}

pub fn get_max_sets_for_age(age_group: AgeGroup) -> u32 {
    AgeRules::for_group(age_group).max_sets
}

/// %1RM band for a training phase
pub fn get_one_rep_max_range(phase: Phase) -> OneRepMaxRange {
    match phase {
        Phase::Gpp => OneRepMaxRange {
            min: 0.60,
            max: 0.75,
        },
        Phase::Spp => OneRepMaxRange {
            min: 0.75,
            max: 0.85,
        },
        Phase::Ssp => OneRepMaxRange {
            min: 0.85,
            max: 0.90,
        },
    }
}

/// The lower of the age ceiling and the phase maximum
pub fn get_effective_one_rep_max_ceiling(age_group: AgeGroup, phase: Phase) -> f64 {
    AgeRules::for_group(age_group)
        .one_rep_max_ceiling
        .min(get_one_rep_max_range(phase).max)
}

/// %1RM band after the age ceiling is applied to the phase band
///
/// When the ceiling sits below the phase minimum (a youth athlete in SSP)
/// the band collapses to the ceiling.
pub fn get_effective_one_rep_max_range(age_group: AgeGroup, phase: Phase) -> OneRepMaxRange {
    let ceiling = get_effective_one_rep_max_ceiling(age_group, phase);
    OneRepMaxRange {
        min: get_one_rep_max_range(phase).min.min(ceiling),
        max: ceiling,
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeModifierInput {
    pub sets: u32,
    pub reps: String,
    /// Defaults to moderate when absent
    pub intensity: Option<Intensity>,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct AgeAdjusted {
    pub sets: u32,
    pub reps: String,
    pub intensity: Intensity,
    pub one_rep_max_range: OneRepMaxRange,
}

/// Restrict a prescription to what the age group and phase allow
pub fn apply_age_modifiers(
    input: AgeModifierInput,
    age_group: AgeGroup,
    phase: Phase,
) -> AgeAdjusted {
    let rules = AgeRules::for_group(age_group);
    let requested = input.intensity.unwrap_or(Intensity::Moderate);
    let intensity = cap_intensity_for_age(requested, age_group);
    let sets = input.sets.min(rules.max_sets);

    let reps = if rules.reps_multiplier != 1.0 {
        scale_reps_or_duration(&input.reps, rules.reps_multiplier)
    } else {
        input.reps
    };

    if intensity != requested || sets != input.sets {
        tracing::debug!(
            "Age group {} capped {:?} x{} to {:?} x{}",
            age_group,
            requested,
            input.sets,
            intensity,
            sets
        );
    }

    AgeAdjusted {
        sets,
        reps,
        intensity,
        one_rep_max_range: get_effective_one_rep_max_range(age_group, phase),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;
    use strum::IntoEnumIterator;

    fn input(sets: u32, reps: &str, intensity: Option<Intensity>) -> AgeModifierInput {
        AgeModifierInput {
            sets,
            reps: reps.to_string(),
            intensity,
        }
    }

    #[test]
    fn test_cap_intensity() {
        let youth = AgeGroup::normalize(Some("10-13"));
        let adult = AgeGroup::normalize(Some("18-35"));
        assert_eq!(cap_intensity_for_age(Intensity::High, youth), Intensity::Moderate);
        assert_eq!(cap_intensity_for_age(Intensity::Low, adult), Intensity::Low);
        assert_eq!(cap_intensity_for_age(Intensity::High, adult), Intensity::High);
        assert_eq!(cap_intensity_for_age(Intensity::Low, youth), Intensity::Low);
    }

    #[rstest]
    #[case(AgeGroup::Youth, 3)]
    #[case(AgeGroup::Teen, 5)]
    #[case(AgeGroup::Adult, 6)]
    #[case(AgeGroup::Masters, 5)]
    fn test_max_sets(#[case] age_group: AgeGroup, #[case] expected: u32) {
        assert_eq!(get_max_sets_for_age(age_group), expected);
    }

    #[rstest]
    #[case(AgeGroup::Adult, Phase::Ssp, 0.90)]
    #[case(AgeGroup::Adult, Phase::Gpp, 0.75)]
    #[case(AgeGroup::Teen, Phase::Ssp, 0.85)]
    #[case(AgeGroup::Youth, Phase::Spp, 0.65)]
    fn test_effective_ceiling(
        #[case] age_group: AgeGroup,
        #[case] phase: Phase,
        #[case] expected: f64,
    ) {
        assert!((get_effective_one_rep_max_ceiling(age_group, phase) - expected).abs() < 1e-9);
    }

    #[test]
    fn test_legacy_adult_label_matches_current() {
        let legacy = AgeGroup::normalize(Some("18+"));
        assert_eq!(AgeRules::for_group(legacy), AgeRules::for_group(AgeGroup::Adult));
        assert_eq!(AgeGroup::normalize(None), AgeGroup::Adult);
        assert_eq!(AgeGroup::normalize(Some("")), AgeGroup::Adult);
    }

    #[test]
    fn test_youth_modifiers() {
        let result = apply_age_modifiers(
            input(5, "10", Some(Intensity::High)),
            AgeGroup::Youth,
            Phase::Ssp,
        );
        assert_eq!(result.sets, 3);
        assert_eq!(result.reps, "12");
        assert_eq!(result.intensity, Intensity::Moderate);
        assert_eq!(result.one_rep_max_range, OneRepMaxRange { min: 0.65, max: 0.65 });
    }

    #[test]
    fn test_youth_scales_durations_and_keeps_amrap() {
        let timed = apply_age_modifiers(input(2, "25s", None), AgeGroup::Youth, Phase::Gpp);
        assert_eq!(timed.reps, "30s");
        let amrap = apply_age_modifiers(input(2, "AMRAP", None), AgeGroup::Youth, Phase::Gpp);
        assert_eq!(amrap.reps, "AMRAP");
    }

    #[test]
    fn test_adult_leaves_reps_untouched() {
        let result = apply_age_modifiers(input(4, "8-10", None), AgeGroup::Adult, Phase::Spp);
        assert_eq!(result.reps, "8-10");
        assert_eq!(result.sets, 4);
        assert_eq!(result.intensity, Intensity::Moderate);
        assert_eq!(result.one_rep_max_range, OneRepMaxRange { min: 0.75, max: 0.85 });
    }

    proptest! {
        #[test]
        fn prop_modifiers_never_raise(sets in 1u32..10, choice in 0usize..3) {
            let intensity = Intensity::iter().nth(choice).unwrap();
            for age_group in [AgeGroup::Youth, AgeGroup::Teen, AgeGroup::Adult, AgeGroup::Masters] {
                for phase in [Phase::Gpp, Phase::Spp, Phase::Ssp] {
                    let request = input(sets, "8", Some(intensity));
                    let result = apply_age_modifiers(request, age_group, phase);
                    prop_assert!(result.intensity <= intensity);
                    prop_assert!(result.sets <= sets);
                    prop_assert!(result.one_rep_max_range.min <= result.one_rep_max_range.max);
                }
            }
        }
    }
}
