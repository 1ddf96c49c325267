//! Core domain types for the prescription engine.
//!
//! This module defines the fundamental types used throughout the system:
//! - Intensity, age group and training phase inputs
//! - Closed vocabularies for exercise tags and equipment
//! - Exercises, their progressions and the catalog
//! - Template-level prescriptions

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::convert::Infallible;
use std::fmt;
use std::str::FromStr;
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

// ============================================================================
// Scaling Inputs
// ============================================================================

/// Training intensity, totally ordered `Low < Moderate < High`
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Intensity {
    Low,
    Moderate,
    High,
}

/// Athlete age bucket.
///
/// Legacy inputs (`10-13`, `18+`) and unknown values are folded in by
/// [`AgeGroup::normalize`]; parsing never fails.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AgeGroup {
    /// Legacy `10-13` bucket, kept for athletes onboarded before the regrouping
    Youth,
    /// `14-17`
    Teen,
    /// `18-35`, also the default for legacy `18+` and unknown input
    #[default]
    Adult,
    /// `36+`
    Masters,
}

impl AgeGroup {
    /// Normalize a raw age-group string; unknown, empty or missing input maps to `18-35`
    pub fn normalize(input: Option<&str>) -> Self {
        match input.map(str::trim) {
            Some("10-13") => AgeGroup::Youth,
            Some("14-17") => AgeGroup::Teen,
            Some("18-35") | Some("18+") => AgeGroup::Adult,
            Some("36+") => AgeGroup::Masters,
            _ => AgeGroup::Adult,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            AgeGroup::Youth => "10-13",
            AgeGroup::Teen => "14-17",
            AgeGroup::Adult => "18-35",
            AgeGroup::Masters => "36+",
        }
    }
}

impl fmt::Display for AgeGroup {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AgeGroup {
    type Err = Infallible;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Ok(AgeGroup::normalize(Some(s)))
    }
}

impl From<String> for AgeGroup {
    fn from(value: String) -> Self {
        AgeGroup::normalize(Some(&value))
    }
}

impl From<AgeGroup> for String {
    fn from(value: AgeGroup) -> Self {
        value.as_str().to_string()
    }
}

/// Training phase: General, Specific, Sport-Specific Preparation
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, EnumIter,
)]
#[serde(rename_all = "UPPERCASE")]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
pub enum Phase {
    Gpp,
    Spp,
    Ssp,
}

/// Target RPE band (1-10 scale)
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RpeTarget {
    pub min: u8,
    pub max: u8,
}

impl fmt::Display for RpeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.min, self.max)
    }
}

/// Permitted fraction-of-1RM band, e.g. `0.60..=0.75`
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct OneRepMaxRange {
    pub min: f64,
    pub max: f64,
}

impl OneRepMaxRange {
    pub fn clamp(&self, fraction: f64) -> f64 {
        fraction.clamp(self.min, self.max)
    }
}

// ============================================================================
// Exercise Vocabularies
// ============================================================================

/// Which family of descriptors a [`Tag`] belongs to
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum TagCategory {
    MovementPattern,
    BodyPart,
    Laterality,
    Purpose,
    Plane,
    Quality,
}

/// Descriptive exercise tag drawn from a closed vocabulary
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Tag {
    // Movement pattern
    Squat,
    Hinge,
    Lunge,
    HorizontalPush,
    VerticalPush,
    HorizontalPull,
    VerticalPull,
    Carry,
    Rotation,
    AntiRotation,
    AntiExtension,
    AntiLateralFlexion,
    Jump,
    Throw,
    Gait,
    SoftTissue,
    Stretch,
    // Body part
    LowerBody,
    UpperBody,
    FullBody,
    Core,
    Hips,
    ThoracicSpine,
    Shoulders,
    Ankles,
    Glutes,
    Hamstrings,
    Quads,
    Calves,
    Adductors,
    Chest,
    Back,
    Lats,
    Grip,
    // Laterality
    Bilateral,
    Unilateral,
    Alternating,
    // Purpose
    Strength,
    Power,
    Stability,
    Mobility,
    Activation,
    Recovery,
    Conditioning,
    Hypertrophy,
    // Plane
    Sagittal,
    Frontal,
    Transverse,
    MultiPlanar,
    // Quality
    Explosive,
    Elastic,
    Isometric,
    Dynamic,
    Controlled,
    Reactive,
}

impl Tag {
    pub fn category(&self) -> TagCategory {
        use Tag::*;
        match self {
            Squat | Hinge | Lunge | HorizontalPush | VerticalPush | HorizontalPull
            | VerticalPull | Carry | Rotation | AntiRotation | AntiExtension
            | AntiLateralFlexion | Jump | Throw | Gait | SoftTissue | Stretch => {
                TagCategory::MovementPattern
            }
            LowerBody | UpperBody | FullBody | Core | Hips | ThoracicSpine | Shoulders
            | Ankles | Glutes | Hamstrings | Quads | Calves | Adductors | Chest | Back
            | Lats | Grip => TagCategory::BodyPart,
            Bilateral | Unilateral | Alternating => TagCategory::Laterality,
            Strength | Power | Stability | Mobility | Activation | Recovery | Conditioning
            | Hypertrophy => TagCategory::Purpose,
            Sagittal | Frontal | Transverse | MultiPlanar => TagCategory::Plane,
            Explosive | Elastic | Isometric | Dynamic | Controlled | Reactive => {
                TagCategory::Quality
            }
        }
    }
}

/// Equipment vocabulary
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Equipment {
    Barbell,
    Dumbbell,
    Kettlebell,
    TrapBar,
    Cable,
    Machine,
    Landmine,
    Sled,
    Plate,
    Band,
    MiniBand,
    PullUpBar,
    Bench,
    Box,
    FoamRoller,
    LacrosseBall,
    MedicineBall,
    Mat,
    Wall,
}

impl Equipment {
    /// Equipment that carries a load worth prescribing as a percentage of 1RM
    pub fn is_external_load(&self) -> bool {
        matches!(
            self,
            Equipment::Barbell
                | Equipment::Dumbbell
                | Equipment::Kettlebell
                | Equipment::TrapBar
                | Equipment::Cable
                | Equipment::Machine
                | Equipment::Landmine
                | Equipment::Sled
                | Equipment::Plate
        )
    }
}

#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

// ============================================================================
// Exercises and Catalog
// ============================================================================

/// Easier/harder neighbours of an exercise in the progression graph
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progressions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub easier: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub harder: Option<String>,
}

impl Progressions {
    pub fn is_empty(&self) -> bool {
        self.easier.is_none() && self.harder.is_none()
    }
}

/// A validated catalog entry
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Exercise {
    pub slug: String,
    pub name: String,
    pub tags: Vec<Tag>,
    pub equipment: Vec<Equipment>,
    pub difficulty: Difficulty,
    #[serde(default, skip_serializing_if = "Progressions::is_empty")]
    pub progressions: Progressions,
}

impl Exercise {
    pub fn tags_in(&self, category: TagCategory) -> impl Iterator<Item = Tag> + '_ {
        self.tags
            .iter()
            .copied()
            .filter(move |t| t.category() == category)
    }

    pub fn has_tag(&self, tag: Tag) -> bool {
        self.tags.contains(&tag)
    }
}

/// The complete catalog of exercises, keyed by slug
#[derive(Clone, Debug, Default)]
pub struct Catalog {
    pub exercises: HashMap<String, Exercise>,
}

// ============================================================================
// Prescriptions
// ============================================================================

/// Where an exercise sits within a training day
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum Section {
    Warmup,
    Main,
    Circuit,
    Finisher,
}

/// Workout-day category selecting warm-up phases and pools
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
    IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DayType {
    LowerA,
    LowerB,
    UpperA,
    UpperB,
    Power,
    FullBody,
    Recovery,
}

/// The seven warm-up phases, declared in canonical order
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Display,
    EnumString, IntoStaticStr, EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum WarmupPhase {
    FoamRolling,
    Mobility,
    CoreIsometric,
    CoreDynamic,
    WalkingDrills,
    MovementPrep,
    PowerPrimer,
}

/// Template-level instruction attached to an exercise within a day
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Prescription {
    pub exercise_slug: String,
    pub sets: u32,
    /// Free-form reps: `"8"`, `"10-12"`, `"30s"`, `"2 min"`, `"AMRAP"`, `"5 each side"`
    pub reps: String,
    pub rest_seconds: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tempo: Option<String>,
    /// Explicit %1RM override (whole percent)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub intensity_percent: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<Section>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub superset: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warmup_phase: Option<WarmupPhase>,
    pub order_index: u32,
}

impl Prescription {
    pub fn new(
        exercise_slug: impl Into<String>,
        sets: u32,
        reps: impl Into<String>,
        rest_seconds: u32,
    ) -> Self {
        Self {
            exercise_slug: exercise_slug.into(),
            sets,
            reps: reps.into(),
            rest_seconds,
            tempo: None,
            intensity_percent: None,
            section: None,
            superset: None,
            notes: None,
            warmup_phase: None,
            order_index: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_intensity_order() {
        assert!(Intensity::Low < Intensity::Moderate);
        assert!(Intensity::Moderate < Intensity::High);
        assert_eq!("HIGH".parse::<Intensity>().unwrap(), Intensity::High);
    }

    #[test]
    fn test_age_group_normalization() {
        assert_eq!(AgeGroup::normalize(Some("18+")), AgeGroup::Adult);
        assert_eq!(AgeGroup::normalize(Some("10-13")), AgeGroup::Youth);
        assert_eq!(AgeGroup::normalize(Some(" 14-17 ")), AgeGroup::Teen);
        assert_eq!(AgeGroup::normalize(Some("")), AgeGroup::Adult);
        assert_eq!(AgeGroup::normalize(Some("senior")), AgeGroup::Adult);
        assert_eq!(AgeGroup::normalize(None), AgeGroup::Adult);
        assert_eq!(AgeGroup::default(), AgeGroup::Adult);
    }

    #[test]
    fn test_age_group_serde_uses_labels() {
        let json = serde_json::to_string(&AgeGroup::Masters).unwrap();
        assert_eq!(json, "\"36+\"");
        let parsed: AgeGroup = serde_json::from_str("\"18+\"").unwrap();
        assert_eq!(parsed, AgeGroup::Adult);
    }

    #[test]
    fn test_phase_parsing() {
        assert_eq!("gpp".parse::<Phase>().unwrap(), Phase::Gpp);
        assert_eq!(Phase::Ssp.to_string(), "SSP");
    }

    #[test]
    fn test_day_type_names() {
        assert_eq!(DayType::LowerA.to_string(), "lower_a");
        assert_eq!("full_body".parse::<DayType>().unwrap(), DayType::FullBody);
        assert_eq!(DayType::iter().count(), 7);
    }

    #[test]
    fn test_tag_vocabulary_round_trips() {
        for tag in Tag::iter() {
            let name: &'static str = tag.into();
            assert_eq!(name.parse::<Tag>().unwrap(), tag);
        }
        assert!("not_a_tag".parse::<Tag>().is_err());
    }

    #[test]
    fn test_every_tag_category_is_populated() {
        for category in [
            TagCategory::MovementPattern,
            TagCategory::BodyPart,
            TagCategory::Laterality,
            TagCategory::Purpose,
            TagCategory::Plane,
            TagCategory::Quality,
        ] {
            assert!(Tag::iter().any(|t| t.category() == category));
        }
    }

    #[test]
    fn test_warmup_phase_canonical_order() {
        let phases: Vec<_> = WarmupPhase::iter().collect();
        let mut sorted = phases.clone();
        sorted.sort();
        assert_eq!(phases, sorted);
        assert_eq!(phases.first(), Some(&WarmupPhase::FoamRolling));
        assert_eq!(phases.last(), Some(&WarmupPhase::PowerPrimer));
    }
}
