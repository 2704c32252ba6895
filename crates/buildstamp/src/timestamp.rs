//! Multi-layout build timestamp validation.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::MalformedMetadata;

/// Unix `date` output, e.g. `Wed Sep 15 06:55:44 PDT 2021`. `%Z` skips the
/// zone name during parsing, so the wall-clock time is taken as UTC, the
/// same offset-0 reading `date` strings get elsewhere.
const UNIX_DATE: &str = "%a %b %e %H:%M:%S %Z %Y";

/// ISO 8601 seconds precision without a colon in the offset, the shape
/// sometimes produced by `date --iso-8601=seconds`.
const ISO_8601_NO_COLON: &str = "%Y-%m-%dT%H:%M:%S%z";

/// Validate an optional timestamp slot, normalizing to UTC.
///
/// Accepted layouts, tried in order; the first successful parse wins:
///
/// 1. RFC 1123 with a numeric zone: `Fri, 23 Aug 2019 11:00:00 -0700`
/// 2. RFC 3339, with or without fractional seconds: `2019-08-23T18:00:00Z`
/// 3. Unix `date` output: `Wed Sep 15 06:55:44 PDT 2021`
/// 4. ISO 8601 seconds without a colon in the offset: `2019-08-23T11:00:00-0700`
///
/// The list and its order are a fixed contract so that independently built
/// binaries agree on how an ambiguous string reads.
pub(crate) fn date_field(
    field: &'static str,
    raw: &str,
) -> Result<Option<DateTime<Utc>>, MalformedMetadata> {
    if raw.is_empty() {
        return Ok(None);
    }

    if let Ok(t) = DateTime::parse_from_rfc2822(raw) {
        return Ok(Some(t.with_timezone(&Utc)));
    }
    if let Ok(t) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(t.with_timezone(&Utc)));
    }
    if let Ok(t) = NaiveDateTime::parse_from_str(raw, UNIX_DATE) {
        return Ok(Some(t.and_utc()));
    }
    if let Ok(t) = DateTime::parse_from_str(raw, ISO_8601_NO_COLON) {
        return Ok(Some(t.with_timezone(&Utc)));
    }

    Err(MalformedMetadata::new(
        field,
        "does not match any accepted timestamp layout",
    ))
}
