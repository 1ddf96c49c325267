#![forbid(unsafe_code)]

//! Core domain model and business logic for liftrx, the workout prescription engine.
//!
//! This crate provides:
//! - Domain types (intensity, age groups, phases, exercises, prescriptions)
//! - Catalog management and validation
//! - Reps/duration parsing and scaling
//! - Weighted and bodyweight scalers, progression substitution
//! - Age/phase modifiers
//! - Warm-up sequencing
//! - Prescription resolution and CSV export

pub mod types;
pub mod error;
pub mod catalog;
pub mod config;
pub mod logging;
pub mod reps;
pub mod tables;
pub mod weighted;
pub mod bodyweight;
pub mod progression;
pub mod age;
pub mod warmup;
pub mod engine;
pub mod export;

// Re-export commonly used types
pub use error::{Error, Result};
pub use types::*;
pub use catalog::{build_default_catalog, get_default_catalog, validate_catalog, ValidationIssue};
pub use config::Config;
pub use reps::{format_scaled_value, parse_reps_string, scale_reps_or_duration, RepsSpec};
pub use tables::{default_tables, ScalingTables};
pub use weighted::{
    apply_intensity_to_weighted, calculate_one_rep_max, calculate_target_weight,
    get_avg_one_rep_max_percent, get_rpe_target, is_bodyweight_exercise, WeightedBase,
    WeightedPrescription,
};
pub use bodyweight::{apply_intensity_to_bodyweight, BodyweightBase, BodyweightPrescription};
pub use progression::{Direction, ProgressionGraph, ProgressionIssue};
pub use age::{
    apply_age_modifiers, cap_intensity_for_age, get_effective_one_rep_max_ceiling,
    get_max_intensity_for_age, get_max_sets_for_age, get_one_rep_max_range, AgeAdjusted,
    AgeModifierInput,
};
pub use warmup::{
    generate_warmup_prescriptions, get_active_phases_for_day_type, get_warmup_duration,
    get_warmup_phase_groups, WarmupPools,
};
pub use engine::{resolve_prescription, resolve_prescriptions, AthleteProfile, ResolvedPrescription};
