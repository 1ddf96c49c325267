//! Reps/duration parsing and formatting.
//!
//! Template prescriptions carry reps as free-form strings ("10-12", "30s",
//! "2 min", "AMRAP", "5 each side"). They are parsed once into a [`RepsSpec`],
//! scaled numerically, and rendered back to a display string.
//!
//! Recognized forms, tried in order:
//! 1. `AMRAP` (any case): unscalable
//! 2. `<n | a-b> each side|leg|arm`
//! 3. `N min`, `Nmin`, `N minutes`: seconds = N * 60
//! 4. `Ns`, `N sec`, `N seconds`
//! 5. `a-b`: midpoint, rounded
//! 6. `N`

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unit of a parsed prescription value
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RepsUnit {
    Reps,
    Seconds,
}

/// Per-limb suffix on a reps prescription
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SideSuffix {
    EachSide,
    EachLeg,
    EachArm,
}

impl SideSuffix {
    fn from_word(word: &str) -> Option<Self> {
        match word {
            "side" => Some(SideSuffix::EachSide),
            "leg" => Some(SideSuffix::EachLeg),
            "arm" => Some(SideSuffix::EachArm),
            _ => None,
        }
    }
}

impl fmt::Display for SideSuffix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SideSuffix::EachSide => "each side",
            SideSuffix::EachLeg => "each leg",
            SideSuffix::EachArm => "each arm",
        })
    }
}

/// Normalized numeric form of a reps string
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ParsedReps {
    pub value: f64,
    pub unit: RepsUnit,
    pub suffix: Option<SideSuffix>,
}

/// Tagged form of a reps string
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RepsSpec {
    Reps {
        count: f64,
        suffix: Option<SideSuffix>,
    },
    Duration {
        seconds: f64,
    },
    /// As many reps as possible; never scaled
    Amrap,
}

impl RepsSpec {
    /// Parse a reps string; `None` when no recognized form matches
    pub fn parse(text: &str) -> Option<Self> {
        let normalized = text.trim().to_ascii_lowercase();
        let s = normalized.as_str();

        if s == "amrap" {
            return Some(RepsSpec::Amrap);
        }
        if let Some((count, suffix)) = parse_per_side(s) {
            return Some(RepsSpec::Reps {
                count,
                suffix: Some(suffix),
            });
        }
        if let Some(minutes) = strip_unit(s, &["minutes", "minute", "mins", "min"]) {
            return parse_decimal(minutes).map(|m| RepsSpec::Duration { seconds: m * 60.0 });
        }
        if let Some(seconds) = strip_unit(s, &["seconds", "second", "secs", "sec", "s"]) {
            return parse_decimal(seconds).map(|seconds| RepsSpec::Duration { seconds });
        }
        parse_count(s).map(|count| RepsSpec::Reps {
            count,
            suffix: None,
        })
    }

    /// Numeric view of this spec; `None` for AMRAP
    pub fn to_parsed(self) -> Option<ParsedReps> {
        match self {
            RepsSpec::Reps { count, suffix } => Some(ParsedReps {
                value: count,
                unit: RepsUnit::Reps,
                suffix,
            }),
            RepsSpec::Duration { seconds } => Some(ParsedReps {
                value: seconds,
                unit: RepsUnit::Seconds,
                suffix: None,
            }),
            RepsSpec::Amrap => None,
        }
    }

    /// Scale rep counts by `reps_multiplier` and durations by `duration_multiplier`
    pub fn scaled(self, reps_multiplier: f64, duration_multiplier: f64) -> Self {
        match self {
            RepsSpec::Reps { count, suffix } => RepsSpec::Reps {
                count: count * reps_multiplier,
                suffix,
            },
            RepsSpec::Duration { seconds } => RepsSpec::Duration {
                seconds: seconds * duration_multiplier,
            },
            RepsSpec::Amrap => RepsSpec::Amrap,
        }
    }
}

impl fmt::Display for RepsSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            RepsSpec::Reps { count, suffix } => {
                f.write_str(&format_scaled_value(count, RepsUnit::Reps, suffix))
            }
            RepsSpec::Duration { seconds } => {
                f.write_str(&format_scaled_value(seconds, RepsUnit::Seconds, None))
            }
            RepsSpec::Amrap => f.write_str("AMRAP"),
        }
    }
}

/// Parse a reps string into value + unit (+ per-side suffix)
///
/// Returns `None` for AMRAP and for anything unrecognized.
pub fn parse_reps_string(text: &str) -> Option<ParsedReps> {
    RepsSpec::parse(text).and_then(RepsSpec::to_parsed)
}

/// Render a scaled value back to a display string
///
/// Seconds snap to the nearest 5 (minimum 5) and read as `"N min"` when they
/// land on a whole minute; reps round to the nearest integer (minimum 1).
pub fn format_scaled_value(value: f64, unit: RepsUnit, suffix: Option<SideSuffix>) -> String {
    let base = match unit {
        RepsUnit::Seconds => {
            let seconds = ((value / 5.0).round() * 5.0).max(5.0) as u64;
            if seconds >= 60 && seconds % 60 == 0 {
                format!("{} min", seconds / 60)
            } else {
                format!("{seconds}s")
            }
        }
        RepsUnit::Reps => format!("{}", value.round().max(1.0) as u64),
    };

    match suffix {
        Some(suffix) => format!("{base} {suffix}"),
        None => base,
    }
}

/// Scale a reps string by `multiplier`, returning the input unchanged when it
/// cannot be scaled (AMRAP, unrecognized text)
pub fn scale_reps_or_duration(text: &str, multiplier: f64) -> String {
    match parse_reps_string(text) {
        Some(parsed) => format_scaled_value(parsed.value * multiplier, parsed.unit, parsed.suffix),
        None => {
            tracing::debug!("Reps '{}' is not scalable, keeping as-is", text);
            text.to_string()
        }
    }
}

/// `<count|range> each <side|leg|arm>`
fn parse_per_side(s: &str) -> Option<(f64, SideSuffix)> {
    let tokens: Vec<&str> = s.split_whitespace().collect();
    match tokens.as_slice() {
        [count, "each", word] => {
            let suffix = SideSuffix::from_word(word)?;
            parse_count(count).map(|count| (count, suffix))
        }
        _ => None,
    }
}

/// Bare integer, or `a-b` range reduced to its rounded midpoint
fn parse_count(s: &str) -> Option<f64> {
    if let Some((low, high)) = s.split_once('-') {
        let low = parse_integer(low.trim())?;
        let high = parse_integer(high.trim())?;
        return Some(((low + high) / 2.0).round());
    }
    parse_integer(s)
}

fn strip_unit<'a>(s: &'a str, units: &[&str]) -> Option<&'a str> {
    units
        .iter()
        .find_map(|unit| s.strip_suffix(unit))
        .map(str::trim_end)
}

fn parse_integer(s: &str) -> Option<f64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse::<u32>().ok().map(f64::from)
}

fn parse_decimal(s: &str) -> Option<f64> {
    let well_formed = !s.is_empty()
        && s.bytes().all(|b| b.is_ascii_digit() || b == b'.')
        && s.bytes().filter(|&b| b == b'.').count() <= 1
        && s.bytes().any(|b| b.is_ascii_digit());
    if !well_formed {
        return None;
    }
    s.parse::<f64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case("10", 10.0, RepsUnit::Reps, None)]
    #[case(" 8 ", 8.0, RepsUnit::Reps, None)]
    #[case("10-12", 11.0, RepsUnit::Reps, None)]
    #[case("8-11", 10.0, RepsUnit::Reps, None)]
    #[case("30s", 30.0, RepsUnit::Seconds, None)]
    #[case("45 sec", 45.0, RepsUnit::Seconds, None)]
    #[case("20 seconds", 20.0, RepsUnit::Seconds, None)]
    #[case("2 min", 120.0, RepsUnit::Seconds, None)]
    #[case("1min", 60.0, RepsUnit::Seconds, None)]
    #[case("3 minutes", 180.0, RepsUnit::Seconds, None)]
    #[case("1.5 min", 90.0, RepsUnit::Seconds, None)]
    #[case("5 each side", 5.0, RepsUnit::Reps, Some(SideSuffix::EachSide))]
    #[case("8-10 each leg", 9.0, RepsUnit::Reps, Some(SideSuffix::EachLeg))]
    #[case("6 Each Arm", 6.0, RepsUnit::Reps, Some(SideSuffix::EachArm))]
    fn test_parse(
        #[case] text: &str,
        #[case] value: f64,
        #[case] unit: RepsUnit,
        #[case] suffix: Option<SideSuffix>,
    ) {
        assert_eq!(
            parse_reps_string(text),
            Some(ParsedReps {
                value,
                unit,
                suffix
            })
        );
    }

    #[rstest]
    #[case("AMRAP")]
    #[case("amrap")]
    #[case("")]
    #[case("to failure")]
    #[case("10-")]
    #[case("-5")]
    #[case("5 each")]
    #[case("5 each foot")]
    #[case("inf")]
    #[case("1e3")]
    #[case("s")]
    fn test_parse_rejects(#[case] text: &str) {
        assert_eq!(parse_reps_string(text), None);
    }

    #[test]
    fn test_amrap_is_a_distinct_variant() {
        assert_eq!(RepsSpec::parse("Amrap"), Some(RepsSpec::Amrap));
        assert_eq!(RepsSpec::parse("sets of five"), None);
    }

    #[rstest]
    #[case(20.1, RepsUnit::Seconds, None, "20s")]
    #[case(1.0, RepsUnit::Seconds, None, "5s")]
    #[case(62.0, RepsUnit::Seconds, None, "1 min")]
    #[case(90.0, RepsUnit::Seconds, None, "90s")]
    #[case(120.0, RepsUnit::Seconds, None, "2 min")]
    #[case(6.7, RepsUnit::Reps, None, "7")]
    #[case(0.2, RepsUnit::Reps, None, "1")]
    #[case(6.65, RepsUnit::Reps, Some(SideSuffix::EachSide), "7 each side")]
    fn test_format(
        #[case] value: f64,
        #[case] unit: RepsUnit,
        #[case] suffix: Option<SideSuffix>,
        #[case] expected: &str,
    ) {
        assert_eq!(format_scaled_value(value, unit, suffix), expected);
    }

    #[rstest]
    #[case("10", 1.33, "13")]
    #[case("30s", 0.67, "20s")]
    #[case("45s", 1.33, "1 min")]
    #[case("40s", 1.33, "55s")]
    #[case("1 min", 1.0, "1 min")]
    #[case("10-12", 0.67, "7")]
    #[case("5 each side", 1.2, "6 each side")]
    #[case("AMRAP", 1.33, "AMRAP")]
    #[case("max effort", 0.5, "max effort")]
    #[case("4000000000", 2.0, "8000000000")]
    #[case("4000000000s", 2.0, "8000000000s")]
    fn test_scale(#[case] text: &str, #[case] multiplier: f64, #[case] expected: &str) {
        assert_eq!(scale_reps_or_duration(text, multiplier), expected);
    }

    #[test]
    fn test_spec_scaled_uses_unit_specific_multiplier() {
        let reps = RepsSpec::parse("10").unwrap().scaled(2.0, 0.5);
        assert_eq!(reps.to_string(), "20");
        let duration = RepsSpec::parse("40s").unwrap().scaled(2.0, 0.5);
        assert_eq!(duration.to_string(), "20s");
        assert_eq!(RepsSpec::Amrap.scaled(2.0, 2.0).to_string(), "AMRAP");
    }

    fn arb_reps_text() -> impl Strategy<Value = String> {
        prop_oneof![
            (1u32..100).prop_map(|n| n.to_string()),
            (1u32..30, 0u32..10).prop_map(|(a, d)| format!("{}-{}", a, a + d)),
            (1u32..60).prop_map(|n| format!("{}s", n * 5)),
            (1u32..10).prop_map(|n| format!("{} min", n)),
            (1u32..15, prop_oneof![Just("side"), Just("leg"), Just("arm")])
                .prop_map(|(n, w)| format!("{} each {}", n, w)),
        ]
    }

    proptest! {
        #[test]
        fn prop_amrap_never_scales(multiplier in 0.0f64..10.0) {
            prop_assert_eq!(scale_reps_or_duration("AMRAP", multiplier), "AMRAP");
        }

        #[test]
        fn prop_unit_multiplier_preserves_value(text in arb_reps_text()) {
            let before = parse_reps_string(&text).unwrap();
            let after = parse_reps_string(&scale_reps_or_duration(&text, 1.0)).unwrap();
            prop_assert_eq!(before.value, after.value);
            prop_assert_eq!(before.unit, after.unit);
            prop_assert_eq!(before.suffix, after.suffix);
        }

        #[test]
        fn prop_formatted_values_respect_floors(value in -50.0f64..500.0) {
            let reps = format_scaled_value(value, RepsUnit::Reps, None);
            let reps = parse_reps_string(&reps).unwrap();
            prop_assert!(reps.value >= 1.0);
            let secs = format_scaled_value(value, RepsUnit::Seconds, None);
            let secs = parse_reps_string(&secs).unwrap();
            prop_assert!(secs.value >= 5.0);
            prop_assert_eq!(secs.value % 5.0, 0.0);
        }
    }
}
