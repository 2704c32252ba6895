//! Scalar validators: URLs (strict) and flags (lenient).

use url::Url;

use crate::error::MalformedMetadata;

/// Validate an optional URL slot.
///
/// Empty input is absent. A non-empty value must parse as an absolute URL,
/// use exactly the `http` or `https` scheme, and carry a non-empty host.
/// Anything else is fatal.
pub(crate) fn url_field(field: &'static str, raw: &str) -> Result<Option<Url>, MalformedMetadata> {
    if raw.is_empty() {
        return Ok(None);
    }

    let parsed = Url::parse(raw).map_err(|err| MalformedMetadata::new(field, err.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => {}
        other => {
            return Err(MalformedMetadata::new(
                field,
                format!("unsupported URL scheme {other:?}"),
            ));
        }
    }

    if parsed.host_str().is_none_or(str::is_empty) {
        return Err(MalformedMetadata::new(field, "URL has no host"));
    }

    Ok(Some(parsed))
}

/// Lenient boolean parsing for flag slots.
///
/// Recognizes `1`, `t`, and `true` in any case as true; everything else
/// (including empty input) is false. Flag slots degrade silently instead of
/// failing resolution.
pub(crate) fn flag_field(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "t" | "true"
    )
}
