//! ISO 8601 duration parsing for the metadata API's duration strings.

use std::sync::OnceLock;

use regex::Regex;

use crate::error::Error;

static DURATION_RE: OnceLock<Regex> = OnceLock::new();

fn duration_re() -> &'static Regex {
    DURATION_RE.get_or_init(|| {
        Regex::new(r"PT(?:(\d+)H)?(?:(\d+)M)?(?:(\d+)S)?").expect("duration pattern compiles")
    })
}

/// Parse an ISO 8601 duration (`PT1H2M3S` style) into total seconds.
///
/// Hours, minutes and seconds are each optional; absent components count
/// as zero. A bare `PT` is syntactically valid and yields 0 seconds, which
/// almost certainly indicates bad upstream data but is not an error here.
/// Input that does not match the pattern at all fails with
/// [`Error::InvalidDuration`]; callers must not substitute a zero duration.
pub fn parse_iso8601_seconds(text: &str) -> Result<i64, Error> {
    let caps = duration_re()
        .captures(text)
        .ok_or_else(|| Error::InvalidDuration(text.to_string()))?;

    let mut total: i64 = 0;
    for (idx, scale) in [(1usize, 3600i64), (2, 60), (3, 1)] {
        if let Some(m) = caps.get(idx) {
            let value: i64 = m
                .as_str()
                .parse()
                .map_err(|_| Error::InvalidDuration(text.to_string()))?;
            total += value * scale;
        }
    }

    Ok(total)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_duration() {
        assert_eq!(parse_iso8601_seconds("PT1H2M3S").unwrap(), 3723);
    }

    #[test]
    fn test_hours_only() {
        assert_eq!(parse_iso8601_seconds("PT2H").unwrap(), 7200);
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(parse_iso8601_seconds("PT4M").unwrap(), 240);
    }

    #[test]
    fn test_seconds_only() {
        assert_eq!(parse_iso8601_seconds("PT45S").unwrap(), 45);
    }

    #[test]
    fn test_hours_and_seconds_without_minutes() {
        assert_eq!(parse_iso8601_seconds("PT1H30S").unwrap(), 3630);
    }

    #[test]
    fn test_bare_pt_is_zero() {
        // Syntactically valid, semantically suspicious. Zero is the
        // documented result; rejecting it is the caller's business.
        assert_eq!(parse_iso8601_seconds("PT").unwrap(), 0);
    }

    #[test]
    fn test_garbage_is_an_error() {
        let err = parse_iso8601_seconds("three minutes").unwrap_err();
        assert!(matches!(err, Error::InvalidDuration(_)));
    }

    #[test]
    fn test_empty_string_is_an_error() {
        assert!(parse_iso8601_seconds("").is_err());
    }

    #[test]
    fn test_large_component_values() {
        // Components are not range-limited: 90 minutes is fine.
        assert_eq!(parse_iso8601_seconds("PT90M").unwrap(), 5400);
    }
}
