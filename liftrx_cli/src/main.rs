use clap::{Parser, Subcommand};
use liftrx_core::bodyweight::apply_intensity_to_bodyweight_with;
use liftrx_core::export::{write_prescriptions_csv, write_resolved_csv};
use liftrx_core::warmup::{generate_warmup_prescriptions_with, get_default_pools};
use liftrx_core::weighted::apply_intensity_to_weighted_with;
use liftrx_core::*;
use serde::Serialize;
use std::borrow::Cow;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "liftrx")]
#[command(about = "Workout prescription engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Read configuration from this file instead of the default location
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Use a custom exercise catalog (JSON array)
    #[arg(long, global = true)]
    catalog: Option<PathBuf>,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Scale a loaded (barbell/dumbbell) prescription
    Weighted {
        #[arg(long)]
        sets: u32,
        #[arg(long)]
        reps: u32,
        #[arg(long)]
        rest: u32,
        /// low, moderate or high (default from config)
        #[arg(long)]
        intensity: Option<Intensity>,
        /// Known one-rep max; enables a target weight
        #[arg(long)]
        one_rep_max: Option<f64>,
    },

    /// Scale a bodyweight prescription, substituting along progressions
    Bodyweight {
        /// Exercise slug
        exercise: String,
        /// Reps or duration, e.g. "12", "30s", "5 each side"
        #[arg(long)]
        reps: String,
        #[arg(long)]
        rest: u32,
        #[arg(long)]
        intensity: Option<Intensity>,
    },

    /// Apply age-group and phase limits
    Adjust {
        #[arg(long)]
        sets: u32,
        #[arg(long)]
        reps: String,
        #[arg(long)]
        intensity: Option<Intensity>,
        /// 10-13, 14-17, 18-35, 36+ (legacy 18+ accepted)
        #[arg(long)]
        age_group: Option<AgeGroup>,
        /// GPP, SPP or SSP
        #[arg(long)]
        phase: Option<Phase>,
    },

    /// Estimate a one-rep max from a set
    OneRepMax {
        #[arg(long)]
        weight: f64,
        #[arg(long)]
        reps: u32,
        /// Also print the target load at this percentage
        #[arg(long)]
        percent: Option<f64>,
    },

    /// Generate the warm-up for a day type
    Warmup {
        /// lower_a, lower_b, upper_a, upper_b, power, full_body or recovery
        day_type: DayType,
        /// Skip optional phases (foam rolling)
        #[arg(long, conflicts_with = "include_optional")]
        no_optional: bool,
        /// Keep optional phases even when the config turns them off
        #[arg(long)]
        include_optional: bool,
        /// Custom warm-up pools (JSON)
        #[arg(long)]
        pools: Option<PathBuf>,
        /// First order index
        #[arg(long, default_value_t = 0)]
        start: u32,
        /// Write the warm-up to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Resolve prescriptions for an athlete
    Resolve {
        /// Exercise slug for a single prescription
        #[arg(required_unless_present = "file", conflicts_with = "file")]
        exercise: Option<String>,
        /// JSON array of prescriptions
        #[arg(long)]
        file: Option<PathBuf>,
        #[arg(long, default_value_t = 3)]
        sets: u32,
        #[arg(long, default_value = "8")]
        reps: String,
        #[arg(long, default_value_t = 60)]
        rest: u32,
        /// Explicit %1RM override
        #[arg(long)]
        percent: Option<u32>,
        #[arg(long)]
        intensity: Option<Intensity>,
        #[arg(long)]
        age_group: Option<AgeGroup>,
        #[arg(long)]
        phase: Option<Phase>,
        #[arg(long)]
        one_rep_max: Option<f64>,
        /// Write the result to a CSV file
        #[arg(long)]
        csv: Option<PathBuf>,
    },

    /// Check the catalog and warm-up pools
    Validate {
        /// Custom warm-up pools (JSON)
        #[arg(long)]
        pools: Option<PathBuf>,
    },
}

fn main() -> Result<()> {
    // Initialize logging
    liftrx_core::logging::init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    let catalog = load_catalog(cli.catalog.as_deref())?;
    let tables = &config.scaling;
    let athlete = &config.athlete;

    match cli.command {
        Commands::Weighted {
            sets,
            reps,
            rest,
            intensity,
            one_rep_max,
        } => {
            let result = apply_intensity_to_weighted_with(
                tables,
                WeightedBase {
                    sets,
                    reps,
                    rest_seconds: rest,
                },
                intensity.unwrap_or(athlete.intensity),
                one_rep_max,
            );
            emit(cli.json, &result, || {
                println!("Sets: {}", result.sets);
                println!("Reps: {}", result.reps);
                println!("Rest: {}s", result.rest_seconds);
                println!("%1RM: {}%", result.percent_of_one_rep_max);
                if let Some(weight) = result.weight {
                    println!("Weight: {}", weight);
                }
                println!("RPE: {}", result.rpe_target);
            })
        }

        Commands::Bodyweight {
            exercise,
            reps,
            rest,
            intensity,
        } => {
            let progressions = catalog.get(&exercise).map(|e| &e.progressions);
            if progressions.is_none() {
                tracing::warn!("'{}' is not in the catalog; no substitution possible", exercise);
            }
            let result = apply_intensity_to_bodyweight_with(
                tables,
                &BodyweightBase {
                    reps,
                    rest_seconds: rest,
                },
                intensity.unwrap_or(athlete.intensity),
                &exercise,
                progressions,
            );
            emit(cli.json, &result, || {
                if result.is_substituted {
                    println!("Exercise: {} (substituted for {})", result.exercise_slug, exercise);
                } else {
                    println!("Exercise: {}", result.exercise_slug);
                }
                println!("Reps: {}", result.reps);
                println!("Rest: {}s", result.rest_seconds);
                println!("RPE: {}", result.rpe_target);
            })
        }

        Commands::Adjust {
            sets,
            reps,
            intensity,
            age_group,
            phase,
        } => {
            let result = apply_age_modifiers(
                AgeModifierInput {
                    sets,
                    reps,
                    intensity: intensity.or(Some(athlete.intensity)),
                },
                age_group.unwrap_or(athlete.age_group),
                phase.unwrap_or(athlete.phase),
            );
            emit(cli.json, &result, || {
                println!("Sets: {}", result.sets);
                println!("Reps: {}", result.reps);
                println!("Intensity: {}", result.intensity);
                println!(
                    "%1RM range: {:.0}-{:.0}%",
                    result.one_rep_max_range.min * 100.0,
                    result.one_rep_max_range.max * 100.0
                );
            })
        }

        Commands::OneRepMax {
            weight,
            reps,
            percent,
        } => cmd_one_rep_max(cli.json, weight, reps, percent),

        Commands::Warmup {
            day_type,
            no_optional,
            include_optional,
            pools,
            start,
            csv,
        } => {
            let include_optional =
                include_optional || (!no_optional && config.warmup.include_optional);
            let pools = load_pools(pools.as_deref())?;
            let warmup =
                generate_warmup_prescriptions_with(&pools, day_type, include_optional, start);

            if let Some(path) = csv {
                let count = write_prescriptions_csv(&path, &warmup)?;
                println!("✓ Wrote {} warm-up exercises to {}", count, path.display());
                return Ok(());
            }
            emit(cli.json, &warmup, || display_warmup(&catalog, day_type, &warmup))
        }

        Commands::Resolve {
            exercise,
            file,
            sets,
            reps,
            rest,
            percent,
            intensity,
            age_group,
            phase,
            one_rep_max,
            csv,
        } => {
            let prescriptions = match (file, exercise) {
                (Some(path), _) => {
                    let contents = std::fs::read_to_string(&path)?;
                    serde_json::from_str::<Vec<Prescription>>(&contents)?
                }
                (None, Some(slug)) => {
                    let mut prescription = Prescription::new(slug, sets, reps, rest);
                    prescription.intensity_percent = percent;
                    vec![prescription]
                }
                (None, None) => {
                    return Err(Error::Prescription("nothing to resolve".into()));
                }
            };
            let profile = AthleteProfile {
                intensity: intensity.unwrap_or(athlete.intensity),
                age_group: age_group.unwrap_or(athlete.age_group),
                phase: phase.unwrap_or(athlete.phase),
                one_rep_max,
            };
            let resolved = resolve_prescriptions(&catalog, tables, &prescriptions, &profile)?;

            if let Some(path) = csv {
                let count = write_resolved_csv(&path, &resolved)?;
                println!("✓ Wrote {} prescriptions to {}", count, path.display());
                return Ok(());
            }
            emit(cli.json, &resolved, || display_resolved(&resolved))
        }

        Commands::Validate { pools } => cmd_validate(&catalog, &*load_pools(pools.as_deref())?),
    }
}

fn load_catalog(path: Option<&Path>) -> Result<Cow<'static, Catalog>> {
    match path {
        Some(path) => Ok(Cow::Owned(Catalog::from_json_path(path)?)),
        None => Ok(Cow::Borrowed(get_default_catalog())),
    }
}

fn load_pools(path: Option<&Path>) -> Result<Cow<'static, WarmupPools>> {
    match path {
        Some(path) => Ok(Cow::Owned(WarmupPools::from_json_path(path)?)),
        None => Ok(Cow::Borrowed(get_default_pools())),
    }
}

/// Print `value` as JSON, or run the text renderer
fn emit<T: Serialize>(json: bool, value: &T, text: impl FnOnce()) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        text();
    }
    Ok(())
}

#[derive(Serialize)]
struct OneRepMaxEstimate {
    one_rep_max: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    target_weight: Option<f64>,
}

fn cmd_one_rep_max(json: bool, weight: f64, reps: u32, percent: Option<f64>) -> Result<()> {
    let one_rep_max = calculate_one_rep_max(weight, reps);
    let estimate = OneRepMaxEstimate {
        one_rep_max,
        target_weight: percent.map(|p| calculate_target_weight(one_rep_max, p / 100.0)),
    };
    emit(json, &estimate, || {
        println!("Estimated 1RM: {:.1}", estimate.one_rep_max);
        if let (Some(p), Some(target)) = (percent, estimate.target_weight) {
            println!("Target @ {}%: {}", p, target);
        }
    })
}

fn cmd_validate(catalog: &Catalog, pools: &WarmupPools) -> Result<()> {
    let issues = validate_catalog(catalog, pools);
    if !issues.is_empty() {
        eprintln!("Catalog validation errors:");
        for issue in &issues {
            eprintln!("  - {}", issue);
        }
        return Err(Error::CatalogValidation(format!(
            "{} issue(s) found",
            issues.len()
        )));
    }

    println!(
        "✓ Catalog OK: {} exercises, {} day types",
        catalog.len(),
        pools.pools.len()
    );
    Ok(())
}

fn display_warmup(catalog: &Catalog, day_type: DayType, warmup: &[Prescription]) {
    let groups = get_warmup_phase_groups(warmup);
    let minutes: u32 = groups.iter().map(|(phase, _)| phase.duration_minutes()).sum();

    println!(
        "\nWarm-up: {} ({} exercises, ~{} min)",
        day_type,
        warmup.len(),
        minutes
    );
    for (phase, prescriptions) in groups {
        println!();
        println!("  {}", phase.label());
        for p in prescriptions {
            let name = catalog
                .get(&p.exercise_slug)
                .map(|e| e.name.as_str())
                .unwrap_or(p.exercise_slug.as_str());
            print!("  {:>3}. {} - {} x {}", p.order_index, name, p.sets, p.reps);
            if p.rest_seconds > 0 {
                print!(", rest {}s", p.rest_seconds);
            }
            println!();
        }
    }
    println!();
}

fn display_resolved(resolved: &[ResolvedPrescription]) {
    for r in resolved {
        print!("{:>3}. {}", r.order_index, r.exercise_slug);
        if r.is_substituted {
            print!(" (for {})", r.base_slug);
        }
        print!(" - {} x {}, rest {}s", r.sets, r.reps, r.rest_seconds);
        if let Some(percent) = r.percent_of_one_rep_max {
            print!(" @ {}%", percent);
        }
        if let Some(weight) = r.weight {
            print!(" ({})", weight);
        }
        if let Some(rpe) = r.rpe_target {
            print!(", RPE {}", rpe);
        }
        println!();
    }
}
