//! Best-effort semantic version decomposition.

use serde::Serialize;

/// The decomposed components of a semver version slug.
///
/// Only produced when the slug (minus an optional leading `v`) matches the
/// canonical semver grammar. Version slugs are free-form: `latest` or
/// `development` are perfectly legal slugs, they just have no components.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VersionParts {
    /// Major version number.
    pub major: u64,
    /// Minor version number.
    pub minor: u64,
    /// Patch version number.
    pub patch: u64,
    /// Dot-separated pre-release identifiers, e.g. `rc.456`.
    pub pre_release: Option<String>,
    /// Dot-separated build metadata identifiers, e.g. `build.789`.
    pub build_metadata: Option<String>,
}

impl VersionParts {
    /// Decompose a version slug.
    ///
    /// Strips a leading `v` before matching. Returns `None` for anything
    /// that is not canonical semver; this never errors, the decomposition is
    /// strictly opportunistic.
    pub fn parse(raw: &str) -> Option<Self> {
        let slug = raw.strip_prefix('v').unwrap_or(raw);
        let version = semver::Version::parse(slug).ok()?;

        Some(Self {
            major: version.major,
            minor: version.minor,
            patch: version.patch,
            pre_release: (!version.pre.is_empty()).then(|| version.pre.as_str().to_owned()),
            build_metadata: (!version.build.is_empty()).then(|| version.build.as_str().to_owned()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_full_semver_decomposes() {
        let parts = VersionParts::parse("v1.2.3-rc.456+build.789").unwrap();
        assert_eq!(
            parts,
            VersionParts {
                major: 1,
                minor: 2,
                patch: 3,
                pre_release: Some("rc.456".to_owned()),
                build_metadata: Some("build.789".to_owned()),
            }
        );
    }

    #[test]
    fn test_plain_semver_has_no_pre_release_or_build() {
        let parts = VersionParts::parse("v1.2.3").unwrap();
        assert_eq!(parts.major, 1);
        assert_eq!(parts.minor, 2);
        assert_eq!(parts.patch, 3);
        assert_eq!(parts.pre_release, None);
        assert_eq!(parts.build_metadata, None);
    }

    #[test]
    fn test_the_v_prefix_is_optional() {
        assert_eq!(VersionParts::parse("1.2.3"), VersionParts::parse("v1.2.3"));
    }

    #[test]
    fn test_non_semver_slugs_have_no_components() {
        for input in ["", "latest", "development", "1.2", "v1", "one.two.three"] {
            assert_eq!(VersionParts::parse(input), None, "{input:?}");
        }
    }

    #[test]
    fn test_leading_zeroes_are_not_canonical() {
        assert_eq!(VersionParts::parse("01.2.3"), None);
        assert_eq!(VersionParts::parse("1.2.3-01"), None);
    }
}
