//! CSV export of prescriptions.
//!
//! One row per prescription with a header row. Files are written in full
//! and synced before returning.

use crate::engine::ResolvedPrescription;
use crate::{Prescription, Result};
use std::fs::File;
use std::io::Write;
use std::path::Path;

/// A row in the prescription CSV
#[derive(Debug, serde::Serialize)]
struct PrescriptionRow<'a> {
    order_index: u32,
    exercise_slug: &'a str,
    section: Option<String>,
    warmup_phase: Option<&'static str>,
    sets: u32,
    reps: &'a str,
    rest_seconds: u32,
    tempo: Option<&'a str>,
    intensity_percent: Option<u32>,
    superset: Option<&'a str>,
    notes: Option<&'a str>,
}

impl<'a> From<&'a Prescription> for PrescriptionRow<'a> {
    fn from(p: &'a Prescription) -> Self {
        PrescriptionRow {
            order_index: p.order_index,
            exercise_slug: &p.exercise_slug,
            section: p.section.map(|s| s.to_string()),
            warmup_phase: p.warmup_phase.map(<&'static str>::from),
            sets: p.sets,
            reps: &p.reps,
            rest_seconds: p.rest_seconds,
            tempo: p.tempo.as_deref(),
            intensity_percent: p.intensity_percent,
            superset: p.superset.as_deref(),
            notes: p.notes.as_deref(),
        }
    }
}

/// A row in the resolved-prescription CSV
#[derive(Debug, serde::Serialize)]
struct ResolvedRow<'a> {
    order_index: u32,
    exercise_slug: &'a str,
    base_slug: &'a str,
    is_substituted: bool,
    sets: u32,
    reps: &'a str,
    rest_seconds: u32,
    intensity: String,
    weight: Option<f64>,
    percent_of_one_rep_max: Option<u32>,
    rpe: Option<String>,
}

impl<'a> From<&'a ResolvedPrescription> for ResolvedRow<'a> {
    fn from(r: &'a ResolvedPrescription) -> Self {
        ResolvedRow {
            order_index: r.order_index,
            exercise_slug: &r.exercise_slug,
            base_slug: &r.base_slug,
            is_substituted: r.is_substituted,
            sets: r.sets,
            reps: &r.reps,
            rest_seconds: r.rest_seconds,
            intensity: r.intensity.to_string(),
            weight: r.weight,
            percent_of_one_rep_max: r.percent_of_one_rep_max,
            rpe: r.rpe_target.map(|rpe| rpe.to_string()),
        }
    }
}

const PRESCRIPTION_HEADER: [&str; 11] = [
    "order_index",
    "exercise_slug",
    "section",
    "warmup_phase",
    "sets",
    "reps",
    "rest_seconds",
    "tempo",
    "intensity_percent",
    "superset",
    "notes",
];

const RESOLVED_HEADER: [&str; 11] = [
    "order_index",
    "exercise_slug",
    "base_slug",
    "is_substituted",
    "sets",
    "reps",
    "rest_seconds",
    "intensity",
    "weight",
    "percent_of_one_rep_max",
    "rpe",
];

/// The header is written up front so an empty export still has one
fn csv_writer<W: Write>(writer: W, header: &[&str]) -> Result<csv::Writer<W>> {
    let mut writer = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(writer);
    writer.write_record(header)?;
    Ok(writer)
}

/// Write prescriptions as CSV to any writer
pub fn write_prescriptions<W: Write>(writer: W, prescriptions: &[Prescription]) -> Result<()> {
    let mut writer = csv_writer(writer, &PRESCRIPTION_HEADER)?;
    for prescription in prescriptions {
        writer.serialize(PrescriptionRow::from(prescription))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write resolved prescriptions as CSV to any writer
pub fn write_resolved<W: Write>(writer: W, resolved: &[ResolvedPrescription]) -> Result<()> {
    let mut writer = csv_writer(writer, &RESOLVED_HEADER)?;
    for row in resolved {
        writer.serialize(ResolvedRow::from(row))?;
    }
    writer.flush()?;
    Ok(())
}

/// Write prescriptions to `path`, replacing any existing file
///
/// Returns the number of rows written.
pub fn write_prescriptions_csv(path: &Path, prescriptions: &[Prescription]) -> Result<usize> {
    let file = create(path)?;
    write_prescriptions(&file, prescriptions)?;
    file.sync_all()?;
    tracing::info!("Wrote {} prescriptions to {:?}", prescriptions.len(), path);
    Ok(prescriptions.len())
}

/// Write resolved prescriptions to `path`, replacing any existing file
pub fn write_resolved_csv(path: &Path, resolved: &[ResolvedPrescription]) -> Result<usize> {
    let file = create(path)?;
    write_resolved(&file, resolved)?;
    file.sync_all()?;
    tracing::info!("Wrote {} resolved prescriptions to {:?}", resolved.len(), path);
    Ok(resolved.len())
}

fn create(path: &Path) -> Result<File> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    Ok(File::create(path)?)
}
