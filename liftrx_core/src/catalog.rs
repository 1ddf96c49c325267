//! Exercise catalog.
//!
//! The built-in catalog is typed seed data. Custom catalogs are loaded from
//! JSON, where tags, equipment and difficulty arrive as strings and are
//! checked against the closed vocabularies once, at load time.

use crate::progression::{Direction, ProgressionGraph, ProgressionIssue};
use crate::types::*;
use crate::warmup::{
    generate_warmup_prescriptions_with, get_active_phases_for_day_type, WarmupPools,
};
use crate::{Error, Result};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};
use std::path::Path;

/// Cached default catalog - built once and reused across all operations
static DEFAULT_CATALOG: Lazy<Catalog> = Lazy::new(build_default_catalog);

/// Get a reference to the cached default catalog
pub fn get_default_catalog() -> &'static Catalog {
    &DEFAULT_CATALOG
}

/// Declared primary progression pairs `(easier, harder)`.
///
/// These are expected to be mirrored: `easier.harder == harder` and
/// `harder.easier == easier`.
pub const PRIMARY_CHAINS: &[(&str, &str)] = &[
    // core
    ("knee_plank", "plank"),
    ("plank", "long_lever_plank"),
    ("side_plank_knee", "side_plank"),
    ("side_plank", "copenhagen_plank"),
    ("dead_bug", "hollow_hold"),
    ("glute_bridge", "single_leg_glute_bridge"),
    ("single_leg_glute_bridge", "barbell_hip_thrust"),
    // push
    ("incline_push_up", "push_up"),
    ("push_up", "decline_push_up"),
    ("db_bench_press", "bench_press"),
    ("half_kneeling_press", "db_shoulder_press"),
    ("db_shoulder_press", "barbell_overhead_press"),
    // pull
    ("band_assisted_pull_up", "pull_up"),
    ("pull_up", "weighted_pull_up"),
    // squat
    ("bodyweight_squat", "goblet_squat"),
    ("goblet_squat", "back_squat"),
    ("back_squat", "front_squat"),
    // hinge
    ("kettlebell_deadlift", "trap_bar_deadlift"),
    ("trap_bar_deadlift", "conventional_deadlift"),
    ("romanian_deadlift", "single_leg_rdl"),
    // lunge
    ("split_squat", "reverse_lunge"),
    ("reverse_lunge", "rear_foot_elevated_split_squat"),
    // jump
    ("squat_jump", "broad_jump"),
    ("broad_jump", "continuous_broad_jump"),
    ("box_jump", "depth_jump"),
    // carry
    ("farmer_carry", "suitcase_carry"),
    ("suitcase_carry", "overhead_carry"),
];

/// Catalog entry as stored on disk, before vocabulary validation
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct RawExercise {
    pub slug: String,
    pub name: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub equipment: Vec<String>,
    pub difficulty: String,
    #[serde(default)]
    pub easier: Option<String>,
    #[serde(default)]
    pub harder: Option<String>,
}

impl TryFrom<RawExercise> for Exercise {
    type Error = Error;

    fn try_from(raw: RawExercise) -> Result<Self> {
        let tags = raw
            .tags
            .iter()
            .map(|t| t.parse::<Tag>().map_err(|_| Error::unknown("tag", t.as_str())))
            .collect::<Result<Vec<_>>>()?;
        let equipment = raw
            .equipment
            .iter()
            .map(|e| {
                e.parse::<Equipment>()
                    .map_err(|_| Error::unknown("equipment", e.as_str()))
            })
            .collect::<Result<Vec<_>>>()?;
        let difficulty = raw
            .difficulty
            .parse::<Difficulty>()
            .map_err(|_| Error::unknown("difficulty", raw.difficulty.as_str()))?;

        Ok(Exercise {
            slug: raw.slug,
            name: raw.name,
            tags,
            equipment,
            difficulty,
            progressions: Progressions {
                easier: raw.easier,
                harder: raw.harder,
            },
        })
    }
}

impl Catalog {
    /// Build a catalog from raw entries, validating every vocabulary value
    pub fn from_raw(entries: Vec<RawExercise>) -> Result<Self> {
        let mut exercises = HashMap::with_capacity(entries.len());
        for raw in entries {
            let slug = raw.slug.clone();
            let exercise = Exercise::try_from(raw).map_err(|e| {
                Error::CatalogValidation(format!("exercise '{}': {}", slug, e))
            })?;
            if exercises.insert(slug.clone(), exercise).is_some() {
                return Err(Error::CatalogValidation(format!(
                    "duplicate exercise slug '{}'",
                    slug
                )));
            }
        }
        Ok(Catalog { exercises })
    }

    /// Load a catalog from a JSON array of [`RawExercise`]
    pub fn from_json_path(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let entries: Vec<RawExercise> = serde_json::from_str(&contents)?;
        let catalog = Self::from_raw(entries)?;
        tracing::info!(
            "Loaded catalog with {} exercises from {:?}",
            catalog.len(),
            path
        );
        Ok(catalog)
    }

    pub fn get(&self, slug: &str) -> Option<&Exercise> {
        self.exercises.get(slug)
    }

    pub fn contains(&self, slug: &str) -> bool {
        self.exercises.contains_key(slug)
    }

    pub fn len(&self) -> usize {
        self.exercises.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exercises.is_empty()
    }

    pub fn progression_graph(&self) -> ProgressionGraph {
        ProgressionGraph::from_catalog(self)
    }

    /// Check entry-level consistency (keys, slugs, names)
    ///
    /// Returns a list of validation errors, or empty Vec if valid. See
    /// [`validate_catalog`] for the full check including progressions and pools.
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();

        for (slug, exercise) in &self.exercises {
            if slug.is_empty() || exercise.slug.is_empty() {
                errors.push("Exercise has empty slug".to_string());
            }
            if slug != &exercise.slug {
                errors.push(format!(
                    "Exercise key '{}' doesn't match exercise.slug '{}'",
                    slug, exercise.slug
                ));
            }
            if exercise.name.is_empty() {
                errors.push(format!("Exercise '{}' has empty name", slug));
            }
        }

        errors.sort();
        errors
    }

    /// Primary pairs from [`PRIMARY_CHAINS`] that are not mirrored in this catalog
    ///
    /// Pairs naming an exercise the catalog doesn't carry are skipped.
    pub fn unmirrored_primary_chains(&self) -> Vec<(&'static str, &'static str)> {
        let graph = self.progression_graph();
        PRIMARY_CHAINS
            .iter()
            .copied()
            .filter(|&(easier, harder)| self.contains(easier) && self.contains(harder))
            .filter(|&(easier, harder)| {
                graph.next(easier, Direction::Harder) != Some(harder)
                    || !graph.is_mirrored(easier, Direction::Harder)
            })
            .collect()
    }
}

/// A problem found by [`validate_catalog`]
#[derive(Clone, Debug, PartialEq, thiserror::Error)]
pub enum ValidationIssue {
    #[error("{0}")]
    Entry(String),

    #[error(transparent)]
    Progression(#[from] ProgressionIssue),

    #[error("primary pair '{easier}' <-> '{harder}' is not mirrored")]
    UnmirroredPrimary { easier: String, harder: String },

    #[error("{day_type} {phase} pool references unknown exercise '{slug}'")]
    UnknownPoolSlug {
        day_type: DayType,
        phase: WarmupPhase,
        slug: String,
    },

    #[error("{day_type} {phase} pool has {available} distinct exercises, needs {required}")]
    UndersizedPool {
        day_type: DayType,
        phase: WarmupPhase,
        available: usize,
        required: usize,
    },

    #[error("{day_type} {phase} only fills {selected} of {required} slots after earlier phases")]
    ShortWarmupPhase {
        day_type: DayType,
        phase: WarmupPhase,
        selected: usize,
        required: usize,
    },
}

/// Check the catalog and warm-up pools together
///
/// Covers entry consistency, the progression graph, mirroring of declared
/// primary pairs, and the pool invariants: every pooled slug exists and
/// every active phase can be filled.
pub fn validate_catalog(catalog: &Catalog, pools: &WarmupPools) -> Vec<ValidationIssue> {
    let mut issues: Vec<ValidationIssue> = catalog
        .validate()
        .into_iter()
        .map(ValidationIssue::Entry)
        .collect();

    issues.extend(
        catalog
            .progression_graph()
            .validate()
            .into_iter()
            .map(ValidationIssue::from),
    );

    issues.extend(
        catalog
            .unmirrored_primary_chains()
            .into_iter()
            .map(|(easier, harder)| ValidationIssue::UnmirroredPrimary {
                easier: easier.to_string(),
                harder: harder.to_string(),
            }),
    );

    let mut day_types: Vec<DayType> = pools.pools.keys().copied().collect();
    day_types.sort_by_key(|d| <&'static str>::from(*d));

    for day_type in day_types {
        for phase in get_active_phases_for_day_type(day_type) {
            let pool = pools.pool(day_type, phase);
            for slug in pool {
                if !catalog.contains(slug) {
                    issues.push(ValidationIssue::UnknownPoolSlug {
                        day_type,
                        phase,
                        slug: slug.clone(),
                    });
                }
            }

            let available = pool.iter().collect::<HashSet<_>>().len();
            if available < phase.exercise_count() {
                issues.push(ValidationIssue::UndersizedPool {
                    day_type,
                    phase,
                    available,
                    required: phase.exercise_count(),
                });
            }
        }

        let warmup = generate_warmup_prescriptions_with(pools, day_type, true, 0);
        for phase in get_active_phases_for_day_type(day_type) {
            let selected = warmup
                .iter()
                .filter(|p| p.warmup_phase == Some(phase))
                .count();
            let required = phase.exercise_count();
            let available = pools.pool(day_type, phase).iter().collect::<HashSet<_>>().len();
            if selected < required && available >= required {
                issues.push(ValidationIssue::ShortWarmupPhase {
                    day_type,
                    phase,
                    selected,
                    required,
                });
            }
        }
    }

    if !issues.is_empty() {
        tracing::warn!("Catalog validation found {} issue(s)", issues.len());
    }
    issues
}

/// Builds the default catalog
///
/// **Note**: For production use, prefer `get_default_catalog()` which returns a
/// cached reference.
pub fn build_default_catalog() -> Catalog {
    let exercises = seed_exercises()
        .into_iter()
        .map(|e| (e.slug.clone(), e))
        .collect();
    Catalog { exercises }
}

fn ex(
    slug: &str,
    name: &str,
    tags: &[Tag],
    equipment: &[Equipment],
    difficulty: Difficulty,
    easier: Option<&str>,
    harder: Option<&str>,
) -> Exercise {
    Exercise {
        slug: slug.to_string(),
        name: name.to_string(),
        tags: tags.to_vec(),
        equipment: equipment.to_vec(),
        difficulty,
        progressions: Progressions {
            easier: easier.map(str::to_string),
            harder: harder.map(str::to_string),
        },
    }
}

#[rustfmt::skip]
fn seed_exercises() -> Vec<Exercise> {
    use Difficulty::*;
    use Equipment::*;
    use Tag::*;

    vec![
        // ====================================================================
        // Core
        // ====================================================================
        ex("knee_plank", "Knee Plank",
            &[AntiExtension, Core, Bilateral, Stability, Sagittal, Isometric],
            &[Mat], Beginner, None, Some("plank")),
        ex("plank", "Plank",
            &[AntiExtension, Core, Bilateral, Stability, Sagittal, Isometric],
            &[Mat], Beginner, Some("knee_plank"), Some("long_lever_plank")),
        ex("long_lever_plank", "Long-Lever Plank",
            &[AntiExtension, Core, Bilateral, Stability, Sagittal, Isometric],
            &[Mat], Intermediate, Some("plank"), None),
        ex("side_plank_knee", "Kneeling Side Plank",
            &[AntiLateralFlexion, Core, Unilateral, Stability, Frontal, Isometric],
            &[Mat], Beginner, None, Some("side_plank")),
        ex("side_plank", "Side Plank",
            &[AntiLateralFlexion, Core, Unilateral, Stability, Frontal, Isometric],
            &[Mat], Intermediate, Some("side_plank_knee"), Some("copenhagen_plank")),
        ex("copenhagen_plank", "Copenhagen Plank",
            &[AntiLateralFlexion, Core, Adductors, Unilateral, Stability, Frontal, Isometric],
            &[Bench], Advanced, Some("side_plank"), None),
        ex("dead_bug", "Dead Bug",
            &[AntiExtension, Core, Alternating, Stability, Activation, Sagittal, Controlled],
            &[Mat], Beginner, None, Some("hollow_hold")),
        ex("hollow_hold", "Hollow Body Hold",
            &[AntiExtension, Core, Bilateral, Stability, Sagittal, Isometric],
            &[Mat], Intermediate, Some("dead_bug"), None),
        ex("pallof_hold", "Pallof Press Hold",
            &[AntiRotation, Core, Unilateral, Stability, Transverse, Isometric],
            &[Band], Beginner, None, None),
        ex("bird_dog", "Bird Dog",
            &[AntiRotation, Core, Back, Alternating, Stability, Activation, MultiPlanar,
              Controlled],
            &[Mat], Beginner, None, None),
        ex("plank_shoulder_tap", "Plank Shoulder Tap",
            &[AntiRotation, Core, Shoulders, Alternating, Stability, Transverse, Dynamic],
            &[], Intermediate, Some("plank"), None),
        ex("glute_bridge", "Glute Bridge",
            &[Hinge, Glutes, Hamstrings, Bilateral, Activation, Sagittal, Controlled],
            &[Mat], Beginner, None, Some("single_leg_glute_bridge")),
        ex("single_leg_glute_bridge", "Single-Leg Glute Bridge",
            &[Hinge, Glutes, Unilateral, Activation, Stability, Sagittal, Controlled],
            &[Mat], Intermediate, Some("glute_bridge"), Some("barbell_hip_thrust")),
        ex("barbell_hip_thrust", "Barbell Hip Thrust",
            &[Hinge, Glutes, Bilateral, Strength, Hypertrophy, Sagittal],
            &[Barbell, Bench], Intermediate, Some("single_leg_glute_bridge"), None),
        // ====================================================================
        // Push
        // ====================================================================
        ex("incline_push_up", "Incline Push-up",
            &[HorizontalPush, Chest, Shoulders, UpperBody, Bilateral, Strength, Sagittal],
            &[Bench], Beginner, None, Some("push_up")),
        ex("push_up", "Push-up",
            &[HorizontalPush, Chest, Shoulders, UpperBody, Bilateral, Strength, Sagittal],
            &[], Beginner, Some("incline_push_up"), Some("decline_push_up")),
        ex("decline_push_up", "Decline Push-up",
            &[HorizontalPush, Chest, Shoulders, UpperBody, Bilateral, Strength, Sagittal],
            &[Bench], Intermediate, Some("push_up"), None),
        ex("plyo_push_up", "Plyometric Push-up",
            &[HorizontalPush, Chest, UpperBody, Bilateral, Power, Sagittal, Explosive],
            &[], Advanced, Some("push_up"), None),
        ex("scap_push_up", "Scap Push-up",
            &[HorizontalPush, Shoulders, Bilateral, Activation, Sagittal, Controlled],
            &[], Beginner, None, None),
        ex("db_bench_press", "Dumbbell Bench Press",
            &[HorizontalPush, Chest, UpperBody, Bilateral, Strength, Hypertrophy, Sagittal],
            &[Dumbbell, Bench], Beginner, None, Some("bench_press")),
        ex("bench_press", "Barbell Bench Press",
            &[HorizontalPush, Chest, UpperBody, Bilateral, Strength, Sagittal],
            &[Barbell, Bench], Intermediate, Some("db_bench_press"), None),
        ex("pike_push_up", "Pike Push-up",
            &[VerticalPush, Shoulders, UpperBody, Bilateral, Strength, Sagittal],
            &[], Intermediate, None, Some("db_shoulder_press")),
        ex("half_kneeling_press", "Half-Kneeling Dumbbell Press",
            &[VerticalPush, Shoulders, Core, Unilateral, Strength, Stability, Sagittal],
            &[Dumbbell], Beginner, None, Some("db_shoulder_press")),
        ex("db_shoulder_press", "Dumbbell Shoulder Press",
            &[VerticalPush, Shoulders, UpperBody, Bilateral, Strength, Sagittal],
            &[Dumbbell], Intermediate, Some("half_kneeling_press"), Some("barbell_overhead_press")),
        ex("barbell_overhead_press", "Barbell Overhead Press",
            &[VerticalPush, Shoulders, UpperBody, Bilateral, Strength, Sagittal],
            &[Barbell], Advanced, Some("db_shoulder_press"), None),
        // ====================================================================
        // Pull
        // ====================================================================
        ex("inverted_row", "Inverted Row",
            &[HorizontalPull, Back, Lats, Bilateral, Strength, Sagittal],
            &[], Beginner, None, Some("band_assisted_pull_up")),
        ex("band_assisted_pull_up", "Band-Assisted Pull-up",
            &[VerticalPull, Lats, Back, UpperBody, Bilateral, Strength, Sagittal],
            &[PullUpBar, Band], Beginner, None, Some("pull_up")),
        ex("pull_up", "Pull-up",
            &[VerticalPull, Lats, Back, UpperBody, Bilateral, Strength, Sagittal],
            &[PullUpBar], Intermediate, Some("band_assisted_pull_up"), Some("weighted_pull_up")),
        ex("weighted_pull_up", "Weighted Pull-up",
            &[VerticalPull, Lats, Back, UpperBody, Bilateral, Strength, Sagittal],
            &[PullUpBar, Plate], Advanced, Some("pull_up"), None),
        ex("scap_pull_up", "Scap Pull-up",
            &[VerticalPull, Lats, Shoulders, Bilateral, Activation, Frontal, Controlled],
            &[PullUpBar], Beginner, None, None),
        ex("db_row", "Single-Arm Dumbbell Row",
            &[HorizontalPull, Back, Lats, Unilateral, Strength, Hypertrophy, Sagittal],
            &[Dumbbell, Bench], Beginner, None, None),
        ex("band_pull_apart", "Band Pull-Apart",
            &[HorizontalPull, Shoulders, Back, Bilateral, Activation, Transverse, Controlled],
            &[Band], Beginner, None, None),
        ex("prone_ytw", "Prone Y-T-W",
            &[HorizontalPull, Shoulders, Back, Bilateral, Activation, MultiPlanar, Controlled],
            &[Mat], Beginner, None, None),
        // ====================================================================
        // Squat
        // ====================================================================
        ex("box_squat", "Box Squat",
            &[Squat, LowerBody, Quads, Glutes, Bilateral, Strength, Sagittal, Controlled],
            &[Box], Beginner, None, Some("goblet_squat")),
        ex("bodyweight_squat", "Bodyweight Squat",
            &[Squat, LowerBody, Quads, Glutes, Bilateral, Activation, Sagittal, Dynamic],
            &[], Beginner, None, Some("goblet_squat")),
        ex("goblet_squat", "Goblet Squat",
            &[Squat, LowerBody, Quads, Glutes, Bilateral, Strength, Sagittal],
            &[Kettlebell], Beginner, Some("bodyweight_squat"), Some("back_squat")),
        ex("back_squat", "Barbell Back Squat",
            &[Squat, LowerBody, Quads, Glutes, Bilateral, Strength, Sagittal],
            &[Barbell], Intermediate, Some("goblet_squat"), Some("front_squat")),
        ex("front_squat", "Barbell Front Squat",
            &[Squat, LowerBody, Quads, Core, Bilateral, Strength, Sagittal],
            &[Barbell], Advanced, Some("back_squat"), None),
        // ====================================================================
        // Hinge
        // ====================================================================
        ex("kettlebell_deadlift", "Kettlebell Deadlift",
            &[Hinge, LowerBody, Hamstrings, Glutes, Bilateral, Strength, Sagittal],
            &[Kettlebell], Beginner, None, Some("trap_bar_deadlift")),
        ex("trap_bar_deadlift", "Trap Bar Deadlift",
            &[Hinge, LowerBody, Hamstrings, Glutes, Bilateral, Strength, Sagittal],
            &[TrapBar], Intermediate, Some("kettlebell_deadlift"), Some("conventional_deadlift")),
        ex("conventional_deadlift", "Conventional Deadlift",
            &[Hinge, FullBody, Hamstrings, Glutes, Back, Bilateral, Strength, Sagittal],
            &[Barbell], Advanced, Some("trap_bar_deadlift"), None),
        ex("romanian_deadlift", "Romanian Deadlift",
            &[Hinge, Hamstrings, Glutes, Bilateral, Strength, Hypertrophy, Sagittal, Controlled],
            &[Barbell], Intermediate, Some("kettlebell_deadlift"), Some("single_leg_rdl")),
        ex("single_leg_rdl", "Single-Leg Romanian Deadlift",
            &[Hinge, Hamstrings, Glutes, Unilateral, Strength, Stability, Sagittal, Controlled],
            &[Dumbbell], Advanced, Some("romanian_deadlift"), None),
        // ====================================================================
        // Lunge
        // ====================================================================
        ex("split_squat", "Split Squat",
            &[Lunge, LowerBody, Quads, Glutes, Unilateral, Strength, Sagittal],
            &[], Beginner, None, Some("reverse_lunge")),
        ex("reverse_lunge", "Reverse Lunge",
            &[Lunge, LowerBody, Quads, Glutes, Alternating, Strength, Sagittal, Dynamic],
            &[], Beginner, Some("split_squat"), Some("rear_foot_elevated_split_squat")),
        ex("rear_foot_elevated_split_squat", "Rear-Foot-Elevated Split Squat",
            &[Lunge, LowerBody, Quads, Glutes, Unilateral, Strength, Stability, Sagittal],
            &[Bench], Intermediate, Some("reverse_lunge"), None),
        ex("lateral_lunge", "Lateral Lunge",
            &[Lunge, LowerBody, Adductors, Alternating, Mobility, Frontal, Controlled],
            &[], Beginner, None, None),
        // ====================================================================
        // Jump
        // ====================================================================
        ex("pogo_hop", "Pogo Hop",
            &[Jump, LowerBody, Calves, Ankles, Bilateral, Power, Sagittal, Elastic, Reactive],
            &[], Beginner, None, None),
        ex("squat_jump", "Squat Jump",
            &[Jump, LowerBody, Quads, Glutes, Bilateral, Power, Sagittal, Explosive],
            &[], Beginner, None, Some("broad_jump")),
        ex("broad_jump", "Broad Jump",
            &[Jump, LowerBody, Glutes, Hamstrings, Bilateral, Power, Sagittal, Explosive],
            &[], Intermediate, Some("squat_jump"), Some("continuous_broad_jump")),
        ex("continuous_broad_jump", "Continuous Broad Jump",
            &[Jump, LowerBody, Glutes, Bilateral, Power, Sagittal, Explosive, Reactive],
            &[], Advanced, Some("broad_jump"), None),
        ex("box_jump", "Box Jump",
            &[Jump, LowerBody, Quads, Glutes, Bilateral, Power, Sagittal, Explosive],
            &[Box], Intermediate, Some("squat_jump"), Some("depth_jump")),
        ex("depth_jump", "Depth Jump",
            &[Jump, LowerBody, Calves, Bilateral, Power, Sagittal, Reactive, Elastic],
            &[Box], Advanced, Some("box_jump"), None),
        ex("skater_hop", "Skater Hop",
            &[Jump, LowerBody, Glutes, Adductors, Alternating, Power, Frontal, Elastic],
            &[], Intermediate, None, None),
        // ====================================================================
        // Carry
        // ====================================================================
        ex("farmer_carry", "Farmer Carry",
            &[Carry, FullBody, Grip, Bilateral, Strength, Conditioning, Sagittal],
            &[Kettlebell], Beginner, None, Some("suitcase_carry")),
        ex("suitcase_carry", "Suitcase Carry",
            &[Carry, Core, Grip, Unilateral, Stability, Strength, Frontal],
            &[Kettlebell], Intermediate, Some("farmer_carry"), Some("overhead_carry")),
        ex("overhead_carry", "Single-Arm Overhead Carry",
            &[Carry, Shoulders, Core, Unilateral, Stability, Strength, Sagittal],
            &[Kettlebell], Advanced, Some("suitcase_carry"), None),
        // ====================================================================
        // Medicine ball
        // ====================================================================
        ex("med_ball_chest_pass", "Medicine Ball Chest Pass",
            &[Throw, Chest, UpperBody, Bilateral, Power, Sagittal, Explosive],
            &[MedicineBall, Wall], Beginner, None, None),
        ex("med_ball_slam", "Medicine Ball Slam",
            &[Throw, FullBody, Core, Bilateral, Power, Sagittal, Explosive],
            &[MedicineBall], Beginner, None, None),
        ex("med_ball_rotational_throw", "Medicine Ball Rotational Throw",
            &[Throw, Rotation, Core, Unilateral, Power, Transverse, Explosive],
            &[MedicineBall, Wall], Intermediate, None, None),
        ex("med_ball_scoop_toss", "Medicine Ball Scoop Toss",
            &[Throw, Hinge, FullBody, Bilateral, Power, Sagittal, Explosive],
            &[MedicineBall], Intermediate, None, None),
        // ====================================================================
        // Soft tissue
        // ====================================================================
        ex("foam_roll_quads", "Foam Roll: Quads",
            &[SoftTissue, Quads, Bilateral, Recovery, Sagittal],
            &[FoamRoller], Beginner, None, None),
        ex("foam_roll_hamstrings", "Foam Roll: Hamstrings",
            &[SoftTissue, Hamstrings, Bilateral, Recovery, Sagittal],
            &[FoamRoller], Beginner, None, None),
        ex("foam_roll_glutes", "Foam Roll: Glutes",
            &[SoftTissue, Glutes, Unilateral, Recovery, MultiPlanar],
            &[FoamRoller], Beginner, None, None),
        ex("foam_roll_adductors", "Foam Roll: Adductors",
            &[SoftTissue, Adductors, Unilateral, Recovery, Frontal],
            &[FoamRoller], Beginner, None, None),
        ex("foam_roll_calves", "Foam Roll: Calves",
            &[SoftTissue, Calves, Bilateral, Recovery, Sagittal],
            &[FoamRoller], Beginner, None, None),
        ex("foam_roll_thoracic_spine", "Foam Roll: Thoracic Spine",
            &[SoftTissue, ThoracicSpine, Back, Bilateral, Recovery, Sagittal],
            &[FoamRoller], Beginner, None, None),
        ex("foam_roll_lats", "Foam Roll: Lats",
            &[SoftTissue, Lats, Unilateral, Recovery, Frontal],
            &[FoamRoller], Beginner, None, None),
        ex("lacrosse_ball_pec", "Lacrosse Ball: Pec Release",
            &[SoftTissue, Chest, Unilateral, Recovery, Transverse],
            &[LacrosseBall, Wall], Beginner, None, None),
        // ====================================================================
        // Mobility
        // ====================================================================
        ex("worlds_greatest_stretch", "World's Greatest Stretch",
            &[Stretch, Hips, ThoracicSpine, FullBody, Alternating, Mobility, MultiPlanar, Dynamic],
            &[], Beginner, None, None),
        ex("ninety_ninety_hip_switch", "90/90 Hip Switch",
            &[Stretch, Rotation, Hips, Alternating, Mobility, Transverse, Controlled],
            &[Mat], Beginner, None, None),
        ex("hip_cars", "Hip Controlled Articular Rotations (CARs)",
            &[Rotation, Hips, Unilateral, Mobility, MultiPlanar, Controlled],
            &[], Beginner, None, None),
        ex("shoulder_cars", "Shoulder Controlled Articular Rotations (CARs)",
            &[Rotation, Shoulders, Unilateral, Mobility, MultiPlanar, Controlled],
            &[], Beginner, None, None),
        ex("cat_cow", "Cat-Cow",
            &[Stretch, ThoracicSpine, Back, Bilateral, Mobility, Sagittal, Controlled],
            &[Mat], Beginner, None, None),
        ex("thoracic_open_book", "Thoracic Open Book",
            &[Stretch, Rotation, ThoracicSpine, Unilateral, Mobility, Transverse, Controlled],
            &[Mat], Beginner, None, None),
        ex("half_kneeling_ankle_rock", "Half-Kneeling Ankle Rock",
            &[Stretch, Ankles, Calves, Unilateral, Mobility, Sagittal, Dynamic],
            &[], Beginner, None, None),
        ex("adductor_rock_back", "Adductor Rock-Back",
            &[Stretch, Adductors, Hips, Unilateral, Mobility, Frontal, Dynamic],
            &[Mat], Beginner, None, None),
        ex("wall_slide", "Wall Slide",
            &[Stretch, Shoulders, ThoracicSpine, Bilateral, Mobility, Activation, Frontal,
              Controlled],
            &[Wall], Beginner, None, None),
        ex("couch_stretch", "Couch Stretch",
            &[Stretch, Quads, Hips, Unilateral, Mobility, Recovery, Sagittal],
            &[Wall, Mat], Beginner, None, None),
        ex("childs_pose", "Child's Pose",
            &[Stretch, Back, Lats, Hips, Bilateral, Mobility, Recovery, Sagittal],
            &[Mat], Beginner, None, None),
        // ====================================================================
        // Walking drills and movement prep
        // ====================================================================
        ex("walking_knee_hug", "Walking Knee Hug",
            &[Gait, Hips, Glutes, Alternating, Mobility, Sagittal, Dynamic],
            &[], Beginner, None, None),
        ex("walking_quad_stretch", "Walking Quad Stretch",
            &[Gait, Quads, Alternating, Mobility, Sagittal, Dynamic],
            &[], Beginner, None, None),
        ex("walking_rdl", "Walking Single-Leg RDL",
            &[Gait, Hinge, Hamstrings, Alternating, Mobility, Stability, Sagittal, Controlled],
            &[], Beginner, None, None),
        ex("high_knee_march", "High-Knee March",
            &[Gait, Hips, LowerBody, Alternating, Activation, Sagittal, Dynamic],
            &[], Beginner, None, None),
        ex("butt_kick", "Butt Kick",
            &[Gait, Quads, Hamstrings, Alternating, Activation, Sagittal, Dynamic],
            &[], Beginner, None, None),
        ex("carioca", "Carioca",
            &[Gait, Hips, LowerBody, Alternating, Activation, MultiPlanar, Dynamic],
            &[], Beginner, None, None),
        ex("lateral_shuffle", "Lateral Shuffle",
            &[Gait, LowerBody, Adductors, Bilateral, Activation, Frontal, Dynamic],
            &[], Beginner, None, None),
        ex("inchworm", "Inchworm",
            &[Gait, Hamstrings, Shoulders, FullBody, Bilateral, Mobility, Sagittal, Controlled],
            &[], Beginner, None, None),
        ex("mini_band_lateral_walk", "Mini-Band Lateral Walk",
            &[Gait, Glutes, Hips, Bilateral, Activation, Frontal, Controlled],
            &[MiniBand], Beginner, None, None),
    ]
}
