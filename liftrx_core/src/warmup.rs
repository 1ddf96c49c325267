//! Warm-up phase sequencer.
//!
//! A warm-up is assembled phase by phase in canonical order, drawing a fixed
//! number of exercises from the day type's pool for each phase. Selection is
//! deterministic: pools are walked in declared order and a slug already used
//! earlier in the same warm-up is skipped.

use crate::{DayType, Error, Prescription, Result, Section, WarmupPhase};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap, HashSet};
use std::path::Path;
use strum::IntoEnumIterator;

/// Defaults every exercise in a phase is prescribed with
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PhaseDefaults {
    pub sets: u32,
    pub reps: &'static str,
    pub rest_seconds: u32,
}

impl WarmupPhase {
    pub fn label(&self) -> &'static str {
        match self {
            WarmupPhase::FoamRolling => "Foam Rolling",
            WarmupPhase::Mobility => "Mobility",
            WarmupPhase::CoreIsometric => "Core Isometric",
            WarmupPhase::CoreDynamic => "Core Dynamic",
            WarmupPhase::WalkingDrills => "Walking Drills",
            WarmupPhase::MovementPrep => "Movement Prep",
            WarmupPhase::PowerPrimer => "Power Primer",
        }
    }

    /// Only foam rolling may be dropped
    pub fn is_optional(&self) -> bool {
        matches!(self, WarmupPhase::FoamRolling)
    }

    pub fn exercise_count(&self) -> usize {
        match self {
            WarmupPhase::FoamRolling => 2,
            WarmupPhase::Mobility => 3,
            WarmupPhase::CoreIsometric => 1,
            WarmupPhase::CoreDynamic => 1,
            WarmupPhase::WalkingDrills => 2,
            WarmupPhase::MovementPrep => 2,
            WarmupPhase::PowerPrimer => 1,
        }
    }

    pub fn defaults(&self) -> PhaseDefaults {
        let (sets, reps, rest_seconds) = match self {
            WarmupPhase::FoamRolling => (1, "30s", 0),
            WarmupPhase::Mobility => (1, "5 each side", 0),
            WarmupPhase::CoreIsometric => (1, "20s", 0),
            WarmupPhase::CoreDynamic => (1, "6 each side", 0),
            WarmupPhase::WalkingDrills => (1, "10 each leg", 0),
            WarmupPhase::MovementPrep => (1, "8", 0),
            WarmupPhase::PowerPrimer => (2, "3", 30),
        };
        PhaseDefaults {
            sets,
            reps,
            rest_seconds,
        }
    }

    /// Approximate minutes the phase takes
    pub fn duration_minutes(&self) -> u32 {
        match self {
            WarmupPhase::FoamRolling => 2,
            WarmupPhase::Mobility => 3,
            WarmupPhase::CoreIsometric => 1,
            WarmupPhase::CoreDynamic => 1,
            WarmupPhase::WalkingDrills => 2,
            WarmupPhase::MovementPrep => 2,
            WarmupPhase::PowerPrimer => 1,
        }
    }
}

/// Phases a day type uses, in canonical order
pub fn get_active_phases_for_day_type(day_type: DayType) -> Vec<WarmupPhase> {
    match day_type {
        DayType::Recovery => vec![WarmupPhase::FoamRolling, WarmupPhase::Mobility],
        _ => WarmupPhase::iter().collect(),
    }
}

/// Total warm-up minutes for a day type, optional phases included
pub fn get_warmup_duration(day_type: DayType) -> u32 {
    get_active_phases_for_day_type(day_type)
        .iter()
        .map(WarmupPhase::duration_minutes)
        .sum()
}

// ============================================================================
// Pools
// ============================================================================

/// Day type -> phase -> candidate slugs, in selection order
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct WarmupPools {
    pub pools: HashMap<DayType, BTreeMap<WarmupPhase, Vec<String>>>,
}

static DEFAULT_POOLS: Lazy<WarmupPools> = Lazy::new(build_default_pools);

/// Get a reference to the cached default warm-up pools
pub fn get_default_pools() -> &'static WarmupPools {
    &DEFAULT_POOLS
}

impl WarmupPools {
    pub fn pool(&self, day_type: DayType, phase: WarmupPhase) -> &[String] {
        self.pools
            .get(&day_type)
            .and_then(|phases| phases.get(&phase))
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Load pools from JSON: `{"pools": {"lower_a": {"mobility": ["hip_cars", ...]}}}`
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let pools: WarmupPools = serde_json::from_str(&contents)
            .map_err(|e| Error::Config(format!("invalid warm-up pools in {:?}: {}", path, e)))?;
        tracing::info!("Loaded warm-up pools for {} day types", pools.pools.len());
        Ok(pools)
    }
}

type PoolTable = &'static [(WarmupPhase, &'static [&'static str])];

#[rustfmt::skip]
fn default_pool_table(day_type: DayType) -> PoolTable {
    use WarmupPhase::*;

    match day_type {
        DayType::LowerA => &[
            (FoamRolling, &["foam_roll_quads", "foam_roll_glutes", "foam_roll_adductors"]),
            (Mobility, &["worlds_greatest_stretch", "ninety_ninety_hip_switch",
                         "half_kneeling_ankle_rock", "hip_cars"]),
            (CoreIsometric, &["plank", "side_plank"]),
            (CoreDynamic, &["dead_bug", "bird_dog"]),
            (WalkingDrills, &["walking_knee_hug", "walking_quad_stretch", "lateral_shuffle"]),
            (MovementPrep, &["bodyweight_squat", "lateral_lunge", "mini_band_lateral_walk"]),
            (PowerPrimer, &["squat_jump", "box_jump"]),
        ],
        DayType::LowerB => &[
            (FoamRolling, &["foam_roll_hamstrings", "foam_roll_glutes", "foam_roll_calves"]),
            (Mobility, &["adductor_rock_back", "ninety_ninety_hip_switch", "hip_cars",
                         "worlds_greatest_stretch"]),
            (CoreIsometric, &["side_plank", "pallof_hold"]),
            (CoreDynamic, &["bird_dog", "dead_bug"]),
            (WalkingDrills, &["walking_rdl", "high_knee_march", "carioca"]),
            (MovementPrep, &["glute_bridge", "reverse_lunge", "mini_band_lateral_walk"]),
            (PowerPrimer, &["broad_jump", "med_ball_scoop_toss"]),
        ],
        DayType::UpperA => &[
            (FoamRolling, &["foam_roll_thoracic_spine", "lacrosse_ball_pec", "foam_roll_lats"]),
            (Mobility, &["thoracic_open_book", "shoulder_cars", "wall_slide", "cat_cow"]),
            (CoreIsometric, &["plank", "hollow_hold"]),
            (CoreDynamic, &["dead_bug", "plank_shoulder_tap"]),
            (WalkingDrills, &["inchworm", "walking_knee_hug", "carioca"]),
            (MovementPrep, &["scap_push_up", "band_pull_apart", "prone_ytw"]),
            (PowerPrimer, &["med_ball_chest_pass", "plyo_push_up"]),
        ],
        DayType::UpperB => &[
            (FoamRolling, &["foam_roll_lats", "foam_roll_thoracic_spine", "lacrosse_ball_pec"]),
            (Mobility, &["shoulder_cars", "thoracic_open_book", "cat_cow", "wall_slide"]),
            (CoreIsometric, &["hollow_hold", "side_plank"]),
            (CoreDynamic, &["bird_dog", "dead_bug"]),
            (WalkingDrills, &["inchworm", "high_knee_march", "lateral_shuffle"]),
            (MovementPrep, &["band_pull_apart", "prone_ytw", "scap_pull_up"]),
            (PowerPrimer, &["med_ball_slam", "med_ball_rotational_throw"]),
        ],
        DayType::Power => &[
            (FoamRolling, &["foam_roll_calves", "foam_roll_quads", "foam_roll_glutes"]),
            (Mobility, &["worlds_greatest_stretch", "half_kneeling_ankle_rock", "hip_cars",
                         "thoracic_open_book"]),
            (CoreIsometric, &["plank", "pallof_hold"]),
            (CoreDynamic, &["dead_bug", "bird_dog"]),
            (WalkingDrills, &["high_knee_march", "butt_kick", "carioca", "lateral_shuffle"]),
            (MovementPrep, &["bodyweight_squat", "lateral_lunge", "mini_band_lateral_walk"]),
            (PowerPrimer, &["pogo_hop", "broad_jump", "skater_hop"]),
        ],
        DayType::FullBody => &[
            (FoamRolling, &["foam_roll_quads", "foam_roll_thoracic_spine", "foam_roll_glutes",
                            "foam_roll_lats"]),
            (Mobility, &["worlds_greatest_stretch", "cat_cow", "shoulder_cars", "hip_cars"]),
            (CoreIsometric, &["plank", "side_plank"]),
            (CoreDynamic, &["bird_dog", "dead_bug"]),
            (WalkingDrills, &["inchworm", "walking_knee_hug", "lateral_shuffle"]),
            (MovementPrep, &["bodyweight_squat", "scap_push_up", "band_pull_apart"]),
            (PowerPrimer, &["med_ball_slam", "squat_jump"]),
        ],
        DayType::Recovery => &[
            (FoamRolling, &["foam_roll_quads", "foam_roll_hamstrings", "foam_roll_thoracic_spine",
                            "foam_roll_calves"]),
            (Mobility, &["cat_cow", "childs_pose", "ninety_ninety_hip_switch",
                         "thoracic_open_book", "couch_stretch"]),
        ],
    }
}

fn build_default_pools() -> WarmupPools {
    let pools = DayType::iter()
        .map(|day_type| {
            let phases = default_pool_table(day_type)
                .iter()
                .map(|(phase, slugs)| (*phase, slugs.iter().map(|s| s.to_string()).collect()))
                .collect();
            (day_type, phases)
        })
        .collect();
    WarmupPools { pools }
}

// ============================================================================
// Generation
// ============================================================================

/// Build the warm-up for `day_type` from the default pools
pub fn generate_warmup_prescriptions(
    day_type: DayType,
    include_optional: bool,
    starting_order_index: u32,
) -> Vec<Prescription> {
    generate_warmup_prescriptions_with(
        get_default_pools(),
        day_type,
        include_optional,
        starting_order_index,
    )
}

/// Build the warm-up for `day_type` from `pools`
///
/// A phase whose pool runs short yields fewer exercises; this is logged, not
/// an error. Catalog validation reports such pools ahead of time.
pub fn generate_warmup_prescriptions_with(
    pools: &WarmupPools,
    day_type: DayType,
    include_optional: bool,
    starting_order_index: u32,
) -> Vec<Prescription> {
    let mut used: HashSet<&str> = HashSet::new();
    let mut prescriptions = Vec::new();
    let mut order_index = starting_order_index;

    for phase in get_active_phases_for_day_type(day_type) {
        if phase.is_optional() && !include_optional {
            continue;
        }

        let wanted = phase.exercise_count();
        let selected: Vec<&str> = pools
            .pool(day_type, phase)
            .iter()
            .map(String::as_str)
            .filter(|slug| used.insert(*slug))
            .take(wanted)
            .collect();

        if selected.len() < wanted {
            tracing::warn!(
                "Warm-up pool for {} / {} has {} of {} exercises",
                day_type,
                phase,
                selected.len(),
                wanted
            );
        }

        let defaults = phase.defaults();
        for slug in selected {
            let mut prescription =
                Prescription::new(slug, defaults.sets, defaults.reps, defaults.rest_seconds);
            prescription.section = Some(Section::Warmup);
            prescription.warmup_phase = Some(phase);
            prescription.order_index = order_index;
            prescriptions.push(prescription);
            order_index += 1;
        }
    }

    tracing::debug!(
        "Generated {} warm-up exercises for {}",
        prescriptions.len(),
        day_type
    );
    prescriptions
}

/// Group warm-up prescriptions by phase, in canonical phase order
///
/// Prescriptions without a warm-up phase are ignored.
pub fn get_warmup_phase_groups(
    prescriptions: &[Prescription],
) -> Vec<(WarmupPhase, Vec<&Prescription>)> {
    let mut groups: BTreeMap<WarmupPhase, Vec<&Prescription>> = BTreeMap::new();
    for prescription in prescriptions {
        if let Some(phase) = prescription.warmup_phase {
            groups.entry(phase).or_default().push(prescription);
        }
    }
    for group in groups.values_mut() {
        group.sort_by_key(|p| p.order_index);
    }
    groups.into_iter().collect()
}
