//! Fatal metadata format errors.

/// A build-injected value failed its format check.
///
/// Raised only for the strictly-structured fields (timestamp, URL, git SHA)
/// when a non-empty value does not conform. A malformed value means the
/// binary was built incorrectly; the expected host response is to unwrap the
/// construction result at startup rather than run with misleading metadata.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed build metadata value for {field}: {detail}")]
pub struct MalformedMetadata {
    /// Variable name of the offending field (e.g. `BUILDSTAMP_SHA`).
    pub field: &'static str,
    /// What was wrong with the value.
    pub detail: String,
}

impl MalformedMetadata {
    pub(crate) fn new(field: &'static str, detail: impl Into<String>) -> Self {
        Self {
            field,
            detail: detail.into(),
        }
    }
}
