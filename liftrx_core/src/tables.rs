//! Intensity configuration tables.
//!
//! Each intensity level resolves to a set of scaling coefficients. The
//! defaults are fixed; a config file may override them (see
//! [`crate::config::Config::scaling`]). Age and phase tables live in
//! [`crate::age`] and are not configurable.

use crate::{Intensity, RpeTarget};
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Shared default tables, built once
static DEFAULT_TABLES: Lazy<ScalingTables> = Lazy::new(ScalingTables::default);

/// Get a reference to the default scaling tables
pub fn default_tables() -> &'static ScalingTables {
    &DEFAULT_TABLES
}

/// One value per intensity level
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IntensityMap<T> {
    pub low: T,
    pub moderate: T,
    pub high: T,
}

impl<T> IntensityMap<T> {
    pub fn get(&self, intensity: Intensity) -> &T {
        match intensity {
            Intensity::Low => &self.low,
            Intensity::Moderate => &self.moderate,
            Intensity::High => &self.high,
        }
    }
}

/// Coefficients for a loaded (barbell/dumbbell) prescription
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct WeightedCoefficients {
    /// Lower bound of the %1RM band, as a fraction
    pub one_rep_max_min: f64,
    /// Upper bound of the %1RM band, as a fraction
    pub one_rep_max_max: f64,
    pub sets_multiplier: f64,
    pub reps_multiplier: f64,
    pub rest_multiplier: f64,
    pub rpe: RpeTarget,
}

impl WeightedCoefficients {
    pub fn avg_one_rep_max(&self) -> f64 {
        (self.one_rep_max_min + self.one_rep_max_max) / 2.0
    }
}

/// All intensity-dependent scaling inputs
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScalingTables {
    /// Target weights snap to this increment
    #[serde(default = "default_weight_increment")]
    pub weight_increment: f64,

    #[serde(default = "default_min_rest_seconds")]
    pub min_rest_seconds: u32,

    #[serde(default = "default_weighted")]
    pub weighted: IntensityMap<WeightedCoefficients>,

    /// Rep multipliers for bodyweight work
    #[serde(default = "default_bodyweight_multipliers")]
    pub bodyweight_reps: IntensityMap<f64>,

    /// Duration multipliers for bodyweight holds and timed work; defaults equal `bodyweight_reps`
    #[serde(default = "default_bodyweight_multipliers")]
    pub bodyweight_duration: IntensityMap<f64>,
}

impl Default for ScalingTables {
    fn default() -> Self {
        Self {
            weighted: default_weighted(),
            bodyweight_reps: default_bodyweight_multipliers(),
            bodyweight_duration: default_bodyweight_multipliers(),
            weight_increment: default_weight_increment(),
            min_rest_seconds: default_min_rest_seconds(),
        }
    }
}

impl ScalingTables {
    pub fn weighted(&self, intensity: Intensity) -> &WeightedCoefficients {
        self.weighted.get(intensity)
    }

    pub fn bodyweight_reps_multiplier(&self, intensity: Intensity) -> f64 {
        *self.bodyweight_reps.get(intensity)
    }

    pub fn bodyweight_duration_multiplier(&self, intensity: Intensity) -> f64 {
        *self.bodyweight_duration.get(intensity)
    }

    /// Sanity-check overridden values
    pub fn validate(&self) -> Vec<String> {
        let mut errors = Vec::new();
        for (name, coefficients) in [
            ("low", &self.weighted.low),
            ("moderate", &self.weighted.moderate),
            ("high", &self.weighted.high),
        ] {
            let band = coefficients.one_rep_max_min..=coefficients.one_rep_max_max;
            if band.is_empty() || *band.start() <= 0.0 || *band.end() > 1.0 {
                errors.push(format!(
                    "weighted.{}: %1RM band {:.2}-{:.2} must satisfy 0 < min <= max <= 1",
                    name, coefficients.one_rep_max_min, coefficients.one_rep_max_max
                ));
            }
            if coefficients.rpe.min > coefficients.rpe.max || coefficients.rpe.max > 10 {
                errors.push(format!("weighted.{}: invalid RPE band {}", name, coefficients.rpe));
            }
            for (field, value) in [
                ("sets_multiplier", coefficients.sets_multiplier),
                ("reps_multiplier", coefficients.reps_multiplier),
                ("rest_multiplier", coefficients.rest_multiplier),
            ] {
                if value <= 0.0 {
                    errors.push(format!("weighted.{}.{} must be positive", name, field));
                }
            }
        }
        for (table, map) in [
            ("bodyweight_reps", &self.bodyweight_reps),
            ("bodyweight_duration", &self.bodyweight_duration),
        ] {
            if [map.low, map.moderate, map.high].iter().any(|m| *m <= 0.0) {
                errors.push(format!("{}: multipliers must be positive", table));
            }
        }
        if self.weight_increment <= 0.0 {
            errors.push("weight_increment must be positive".to_string());
        }
        errors
    }
}

fn default_weighted() -> IntensityMap<WeightedCoefficients> {
    IntensityMap {
        low: WeightedCoefficients {
            one_rep_max_min: 0.60,
            one_rep_max_max: 0.70,
            sets_multiplier: 0.75,
            reps_multiplier: 1.0,
            rest_multiplier: 1.25,
            rpe: RpeTarget { min: 5, max: 6 },
        },
        moderate: WeightedCoefficients {
            one_rep_max_min: 0.75,
            one_rep_max_max: 0.80,
            sets_multiplier: 1.0,
            reps_multiplier: 1.0,
            rest_multiplier: 1.0,
            rpe: RpeTarget { min: 6, max: 7 },
        },
        high: WeightedCoefficients {
            one_rep_max_min: 0.85,
            one_rep_max_max: 0.90,
            sets_multiplier: 1.25,
            reps_multiplier: 0.85,
            rest_multiplier: 0.75,
            rpe: RpeTarget { min: 8, max: 9 },
        },
    }
}

fn default_bodyweight_multipliers() -> IntensityMap<f64> {
    IntensityMap {
        low: 0.67,
        moderate: 1.0,
        high: 1.33,
    }
}

fn default_weight_increment() -> f64 {
    2.5
}

fn default_min_rest_seconds() -> u32 {
    15
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_averages() {
        let tables = default_tables();
        assert!((tables.weighted(Intensity::Low).avg_one_rep_max() - 0.65).abs() < 1e-9);
        assert!((tables.weighted(Intensity::Moderate).avg_one_rep_max() - 0.775).abs() < 1e-9);
        assert!((tables.weighted(Intensity::High).avg_one_rep_max() - 0.875).abs() < 1e-9);
    }

    #[test]
    fn test_bands_increase_with_intensity() {
        let tables = default_tables();
        let low = tables.weighted(Intensity::Low);
        let moderate = tables.weighted(Intensity::Moderate);
        let high = tables.weighted(Intensity::High);
        assert!(low.one_rep_max_max <= moderate.one_rep_max_min);
        assert!(moderate.one_rep_max_max <= high.one_rep_max_min);
        assert!(low.rpe.max <= moderate.rpe.max && moderate.rpe.max < high.rpe.min);
    }

    #[test]
    fn test_bodyweight_tables_are_independent() {
        let mut tables = ScalingTables::default();
        assert_eq!(tables.bodyweight_reps, tables.bodyweight_duration);
        tables.bodyweight_duration.high = 1.5;
        assert_eq!(tables.bodyweight_reps_multiplier(Intensity::High), 1.33);
        assert_eq!(tables.bodyweight_duration_multiplier(Intensity::High), 1.5);
    }

    #[test]
    fn test_default_tables_validate() {
        assert!(default_tables().validate().is_empty());
    }

    #[test]
    fn test_validate_flags_bad_overrides() {
        let mut tables = ScalingTables::default();
        tables.weighted.high.one_rep_max_min = 0.95;
        tables.bodyweight_reps.low = 0.0;
        tables.weight_increment = -1.0;
        let errors = tables.validate();
        assert_eq!(errors.len(), 3, "{errors:?}");
    }
}
