//! Git commit SHA validation.

use std::fmt;

use serde::Serialize;

use crate::error::MalformedMetadata;

/// A validated full git commit SHA: exactly 40 lowercase hex characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GitSha(String);

impl GitSha {
    /// Validate an optional SHA slot.
    ///
    /// Empty input is absent. Anything else must be exactly 40 characters of
    /// `[0-9a-f]`; a short SHA, an uppercase SHA, or any stray character is
    /// fatal.
    pub(crate) fn parse(
        field: &'static str,
        raw: &str,
    ) -> Result<Option<Self>, MalformedMetadata> {
        if raw.is_empty() {
            return Ok(None);
        }

        // Full git SHAs are 40 characters long.
        const GIT_SHA_LENGTH: usize = 40;
        if raw.len() != GIT_SHA_LENGTH {
            return Err(MalformedMetadata::new(
                field,
                format!("expected {GIT_SHA_LENGTH} characters, got {}", raw.len()),
            ));
        }

        // Full git SHAs are made of only lowercase hex characters.
        if !raw
            .bytes()
            .all(|b| b.is_ascii_digit() || matches!(b, b'a'..=b'f'))
        {
            return Err(MalformedMetadata::new(
                field,
                "expected only lowercase hex characters",
            ));
        }

        Ok(Some(Self(raw.to_owned())))
    }

    /// The full 40-character SHA.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The 7-character "short" form, sliced from the already-validated SHA.
    pub fn short(&self) -> &str {
        &self.0[..7]
    }
}

impl fmt::Display for GitSha {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    const FIELD: &str = "BUILDSTAMP_SHA";
    const FULL: &str = "bb2fecbb4a287ea4c1f9887ca86dd0eb7ff28ec6";

    #[test]
    fn test_empty_is_absent() {
        assert_eq!(GitSha::parse(FIELD, "").unwrap(), None);
    }

    #[test]
    fn test_full_sha_is_echoed_verbatim() {
        let sha = GitSha::parse(FIELD, FULL).unwrap().unwrap();
        assert_eq!(sha.as_str(), FULL);
        assert_eq!(sha.to_string(), FULL);
    }

    #[test]
    fn test_short_form_is_the_first_seven_characters() {
        let sha = GitSha::parse(FIELD, FULL).unwrap().unwrap();
        assert_eq!(sha.short(), "bb2fecb");
    }

    #[test]
    fn test_wrong_lengths_are_rejected() {
        // 7, 39, and 41 characters.
        for input in [
            "0000000",
            "000000000000000000000000000000000000000",
            "00000000000000000000000000000000000000000",
        ] {
            let err = GitSha::parse(FIELD, input).unwrap_err();
            assert_eq!(err.field, FIELD, "{input}");
        }
    }

    #[test]
    fn test_non_hex_characters_are_rejected() {
        // 40 characters, but one isn't lowercase hex.
        for input in [
            "000000000000000000_000000000000000000000",
            "BB2FECBB4A287EA4C1F9887CA86DD0EB7FF28EC6",
        ] {
            assert!(GitSha::parse(FIELD, input).is_err(), "{input}");
        }
    }
}
