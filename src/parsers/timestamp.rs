//! Timestamp normalization for heterogeneous export formats.
//!
//! Exports carry creation times as epoch numbers (seconds or milliseconds, possibly
//! fractional), numeric strings, ISO-8601 strings, or a handful of date-only and
//! date-time patterns. [`normalize`] turns any of them into a naive UTC
//! [`NaiveDateTime`], or `None` when nothing matches. Failures never escape as errors.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime};
use tracing::debug;

use crate::models::RawTimestamp;

// Representable calendar years; epoch values outside this range are retried
// as milliseconds.
const MIN_YEAR: i32 = 1;
const MAX_YEAR: i32 = 9999;

const MICROS_PER_SECOND: f64 = 1_000_000.0;

const ISO_OFFSET_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f%:z", "%Y-%m-%d %H:%M:%S%.f%:z", "%Y-%m-%dT%H:%M%:z"];

const ISO_NAIVE_FORMATS: &[&str] =
    &["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M", "%Y-%m-%d %H:%M"];

/// Fallback patterns, tried in order after ISO-8601 fails.
const FALLBACK_FORMATS: &[Pattern] = &[
    Pattern::Date("%Y-%m-%d"),
    Pattern::DateTime("%Y-%m-%d %H:%M:%S"),
    Pattern::Date("%Y/%m/%d"),
    Pattern::DateTime("%Y/%m/%d %H:%M:%S"),
];

enum Pattern {
    Date(&'static str),
    DateTime(&'static str),
}

impl Pattern {
    fn parse(&self, s: &str) -> Option<NaiveDateTime> {
        match self {
            Self::Date(fmt) => {
                NaiveDate::parse_from_str(s, fmt).ok().map(|d| d.and_time(NaiveTime::MIN))
            }
            Self::DateTime(fmt) => NaiveDateTime::parse_from_str(s, fmt).ok(),
        }
    }
}

/// Normalize a raw timestamp into a naive point in time.
///
/// Returns `None` for absent input and for values no supported format accepts.
/// Callers skip the record's contribution in that case.
///
/// # Examples
///
/// ```
/// use chat_history_stats::models::RawTimestamp;
/// use chat_history_stats::parsers::normalize;
///
/// let dt = normalize(Some(&RawTimestamp::from("2024-01-15T10:30:00Z"))).unwrap();
/// assert_eq!(dt.to_string(), "2024-01-15 10:30:00");
/// assert!(normalize(None).is_none());
/// assert!(normalize(Some(&RawTimestamp::from("not-a-date"))).is_none());
/// ```
pub fn normalize(raw: Option<&RawTimestamp>) -> Option<NaiveDateTime> {
    let Some(raw) = raw else {
        debug!("Timestamp is absent");
        return None;
    };

    let parsed = match raw {
        RawTimestamp::Canonical(dt) => Some(*dt),
        RawTimestamp::Number(n) => n.as_f64().and_then(from_epoch),
        RawTimestamp::Text(s) => normalize_text(s),
    };

    if parsed.is_none() {
        debug!("No supported format matched timestamp: {}", raw);
    }
    parsed
}

fn normalize_text(s: &str) -> Option<NaiveDateTime> {
    if is_numeric_text(s)
        && let Some(dt) = s.parse::<f64>().ok().and_then(from_epoch)
    {
        return Some(dt);
    }

    parse_iso8601(s).or_else(|| FALLBACK_FORMATS.iter().find_map(|pattern| pattern.parse(s)))
}

/// Digits with at most one decimal point.
fn is_numeric_text(s: &str) -> bool {
    let mut dots = 0;
    let mut digits = 0;
    for c in s.chars() {
        match c {
            '.' => dots += 1,
            c if c.is_ascii_digit() => digits += 1,
            _ => return false,
        }
    }
    digits > 0 && dots <= 1
}

/// Interpret as seconds since epoch, retrying as milliseconds when the value
/// lands outside the representable range.
fn from_epoch(value: f64) -> Option<NaiveDateTime> {
    if let Some(dt) = from_epoch_seconds(value) {
        debug!("Parsed timestamp {} as seconds: {}", value, dt);
        return Some(dt);
    }

    debug!("Timestamp {} out of range as seconds, retrying as milliseconds", value);
    let dt = from_epoch_seconds(value / 1000.0)?;
    debug!("Parsed timestamp {} as milliseconds: {}", value, dt);
    Some(dt)
}

fn from_epoch_seconds(seconds: f64) -> Option<NaiveDateTime> {
    let micros = (seconds * MICROS_PER_SECOND).round();
    if !micros.is_finite() || micros < i64::MIN as f64 || micros >= i64::MAX as f64 {
        return None;
    }

    let micros = micros as i64;
    let secs = micros.div_euclid(1_000_000);
    let nanos = (micros.rem_euclid(1_000_000) * 1_000) as u32;
    let dt = DateTime::from_timestamp(secs, nanos)?.naive_utc();

    (MIN_YEAR..=MAX_YEAR).contains(&dt.year()).then_some(dt)
}

/// ISO-8601 with a trailing `Z` read as `+00:00`. Offsets are dropped after
/// parsing, keeping the wall-clock time the string states.
fn parse_iso8601(s: &str) -> Option<NaiveDateTime> {
    let s = match s.strip_suffix('Z') {
        Some(rest) => format!("{}+00:00", rest),
        None => s.to_string(),
    };

    if let Ok(dt) = DateTime::parse_from_rfc3339(&s) {
        return Some(dt.naive_local());
    }
    if let Some(dt) =
        ISO_OFFSET_FORMATS.iter().find_map(|fmt| DateTime::parse_from_str(&s, fmt).ok())
    {
        return Some(dt.naive_local());
    }
    if let Some(dt) =
        ISO_NAIVE_FORMATS.iter().find_map(|fmt| NaiveDateTime::parse_from_str(&s, fmt).ok())
    {
        return Some(dt);
    }

    // Date-only ISO strings mean midnight.
    NaiveDate::parse_from_str(&s, "%Y-%m-%d").ok().map(|d| d.and_time(NaiveTime::MIN))
}
