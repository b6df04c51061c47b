use chrono::{DateTime, NaiveDateTime, SecondsFormat, SubsecRound, TimeZone, Utc};

/// Offset-carrying layouts that are neither strict RFC 2822 nor RFC 3339
const OFFSET_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f%z",
    "%Y-%m-%d %H:%M:%S%.f%z",
    "%a, %d %b %Y %H:%M:%S %z",
    "%d %b %Y %H:%M:%S %z",
];

/// Zone-less layouts; values are taken as UTC
const NAIVE_FORMATS: &[&str] = &[
    "%a, %d %b %Y %H:%M:%S",
    "%d %b %Y %H:%M:%S",
    "%a, %d %b %Y %H:%M",
    "%d %b %Y %H:%M",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

/// Parse a feed date string into UTC. Returns `None` for anything unrecognised.
pub fn parse_date(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }

    let without_weekday = strip_weekday(raw);

    // Feeds regularly carry a weekday that does not match the date; RFC 2822 parsing rejects those
    for candidate in [raw, without_weekday] {
        if let Ok(dt) = DateTime::parse_from_rfc2822(candidate) {
            return Some(dt.with_timezone(&Utc));
        }
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    for candidate in [raw, without_weekday] {
        for format in OFFSET_FORMATS {
            if let Ok(dt) = DateTime::parse_from_str(candidate, format) {
                return Some(dt.with_timezone(&Utc));
            }
        }
        for format in NAIVE_FORMATS {
            if let Ok(naive) = NaiveDateTime::parse_from_str(candidate, format) {
                return Some(Utc.from_utc_datetime(&naive));
            }
        }
    }

    None
}

/// First candidate that parses, in the order given
pub fn parse_first<'a, I>(candidates: I) -> Option<DateTime<Utc>>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    candidates.into_iter().flatten().find_map(parse_date)
}

/// Resolve an entry's timestamp from its candidate strings, falling back to now.
/// Never fails.
pub fn normalize_date<'a, I>(candidates: I) -> DateTime<Utc>
where
    I: IntoIterator<Item = Option<&'a str>>,
{
    parse_first(candidates).unwrap_or_else(Utc::now)
}

/// ISO 8601 with an explicit `+00:00` offset; sub-second digits only when present
pub fn to_iso_utc(dt: &DateTime<Utc>) -> String {
    let dt = dt.trunc_subsecs(6);
    let format = if dt.timestamp_subsec_micros() == 0 {
        SecondsFormat::Secs
    } else {
        SecondsFormat::Micros
    };
    dt.to_rfc3339_opts(format, false)
}

/// Unix timestamp in seconds, with microsecond fraction
pub fn sort_key(dt: &DateTime<Utc>) -> f64 {
    dt.timestamp() as f64 + f64::from(dt.timestamp_subsec_micros()) / 1_000_000.0
}

fn strip_weekday(raw: &str) -> &str {
    match raw.split_once(',') {
        Some((prefix, rest)) if is_weekday_name(prefix.trim()) => rest.trim_start(),
        _ => raw,
    }
}

fn is_weekday_name(value: &str) -> bool {
    (3..=9).contains(&value.len()) && value.chars().all(|c| c.is_ascii_alphabetic())
}
