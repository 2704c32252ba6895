//! Resolved metadata and the public accessor surface.

use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::author::Author;
use crate::error::MalformedMetadata;
use crate::raw::{RawMetadata, vars};
use crate::sha::GitSha;
use crate::version::VersionParts;
use crate::{timestamp, validate};

/// Toolchain version captured by the build script.
const RUSTC_VERSION: &str = env!("BUILDSTAMP_RUSTC_VERSION");

/// Build profile (`debug` or `release`) captured by the build script.
const BUILD_PROFILE: &str = env!("BUILDSTAMP_BUILD_PROFILE");

static GLOBAL: OnceLock<Metadata> = OnceLock::new();

/// Validated build metadata.
///
/// Constructed exactly once from a [`RawMetadata`] by [`resolve`] or
/// [`init`]; every accessor afterwards is a pure read of precomputed state,
/// safe to call from any thread, any number of times.
///
/// [`resolve`]: Self::resolve
/// [`init`]: Self::init
#[derive(Debug, Clone, Serialize)]
pub struct Metadata {
    author: Author,
    author_url: Option<Url>,
    copyright: String,
    date: Option<DateTime<Utc>>,
    description: String,
    development: bool,
    docs: Option<Url>,
    license: String,
    license_url: Option<Url>,
    name: String,
    note: String,
    sha: Option<GitSha>,
    source: Option<Url>,
    title: String,
    url: Option<Url>,
    version: String,
    version_parts: Option<VersionParts>,
}

impl Metadata {
    /// Validate a set of raw slots into resolved metadata.
    ///
    /// Every validator runs exactly once, here. A non-empty timestamp, URL,
    /// or SHA slot that fails its format check is fatal: a malformed
    /// build-injected value means the binary was built incorrectly, and the
    /// host is expected to unwrap this result at startup rather than run
    /// with misleading metadata. Empty slots always resolve as absent.
    pub fn resolve(raw: RawMetadata) -> Result<Self, MalformedMetadata> {
        let version_parts = VersionParts::parse(&raw.version);

        let resolved = Self {
            author: Author::parse(&raw.author),
            author_url: validate::url_field(vars::AUTHOR_URL, &raw.author_url)?,
            copyright: raw.copyright,
            date: timestamp::date_field(vars::DATE, &raw.date)?,
            description: raw.desc,
            development: validate::flag_field(&raw.dev),
            docs: validate::url_field(vars::DOCS, &raw.docs)?,
            license: raw.license,
            license_url: validate::url_field(vars::LICENSE_URL, &raw.license_url)?,
            name: raw.name,
            note: raw.note,
            sha: GitSha::parse(vars::SHA, &raw.sha)?,
            source: validate::url_field(vars::SRC, &raw.src)?,
            title: raw.title,
            url: validate::url_field(vars::URL, &raw.url)?,
            version: raw.version,
            version_parts,
        };

        tracing::debug!(
            name = %resolved.name,
            version = %resolved.version,
            "resolved build metadata"
        );

        Ok(resolved)
    }

    /// Resolve `raw` and memoize the result process-wide.
    ///
    /// The first successful call wins: later calls still validate their own
    /// input (a malformed set is never silently accepted), but the stored
    /// instance is not replaced. Returns the memoized instance.
    pub fn init(raw: RawMetadata) -> Result<&'static Self, MalformedMetadata> {
        let resolved = Self::resolve(raw)?;
        Ok(GLOBAL.get_or_init(|| resolved))
    }

    /// The process-wide metadata memoized by [`init`](Self::init), if any.
    pub fn global() -> Option<&'static Self> {
        GLOBAL.get()
    }

    /// Architecture the application was compiled for.
    pub fn arch(&self) -> &'static str {
        std::env::consts::ARCH
    }

    /// The application author's display name.
    pub fn author(&self) -> &str {
        &self.author.name
    }

    /// The application author's email address.
    pub fn author_email(&self) -> &str {
        &self.author.email
    }

    /// Homepage URL for the application author.
    pub fn author_url(&self) -> Option<&Url> {
        self.author_url.as_ref()
    }

    /// Copyright statement for the application.
    pub fn copyright(&self) -> &str {
        &self.copyright
    }

    /// Time at which the application was built, in UTC.
    pub fn date(&self) -> Option<DateTime<Utc>> {
        self.date
    }

    /// Description of the application.
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the application was built in development mode.
    pub fn development(&self) -> bool {
        self.development
    }

    /// Documentation URL for the application.
    pub fn docs(&self) -> Option<&Url> {
        self.docs.as_ref()
    }

    /// SPDX license identifier for the application.
    pub fn license(&self) -> &str {
        &self.license
    }

    /// URL for the verbatim license body.
    pub fn license_url(&self) -> Option<&Url> {
        self.license_url.as_ref()
    }

    /// Name of the application.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Free-form release note for this build.
    pub fn note(&self) -> &str {
        &self.note
    }

    /// Operating system the application was compiled for.
    pub fn os(&self) -> &'static str {
        std::env::consts::OS
    }

    /// Build profile the application's metadata library was compiled with
    /// (`debug` or `release`).
    pub fn profile(&self) -> &'static str {
        BUILD_PROFILE
    }

    /// Version of the Rust toolchain the application was compiled with.
    pub fn rustc(&self) -> &'static str {
        RUSTC_VERSION
    }

    /// Git SHA the application was built from.
    pub fn sha(&self) -> Option<&GitSha> {
        self.sha.as_ref()
    }

    /// Short (7-character) form of the git SHA.
    pub fn short_sha(&self) -> Option<&str> {
        self.sha.as_ref().map(GitSha::short)
    }

    /// URL for the application's source archive.
    pub fn source(&self) -> Option<&Url> {
        self.source.as_ref()
    }

    /// Title of the application, the non-abbreviated form of the name.
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Homepage URL for the application.
    pub fn url(&self) -> Option<&Url> {
        self.url.as_ref()
    }

    /// Version slug for the application.
    pub fn version(&self) -> &str {
        &self.version
    }

    /// Semver components of the version slug, when it is canonical semver.
    pub fn version_parts(&self) -> Option<&VersionParts> {
        self.version_parts.as_ref()
    }

    /// One-line human-readable summary for banners and logs.
    ///
    /// Example: `demo-app v1.2.3 (bb2fecb, release)`
    pub fn version_string(&self) -> String {
        match self.short_sha() {
            Some(short) => format!("{} {} ({short}, {})", self.name, self.version, self.profile()),
            None => format!("{} {} ({})", self.name, self.version, self.profile()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test_log::test]
    fn test_empty_slots_resolve_as_absent() {
        let meta = Metadata::resolve(RawMetadata::default()).unwrap();

        assert_eq!(meta.author(), "");
        assert_eq!(meta.author_email(), "");
        assert_eq!(meta.author_url(), None);
        assert_eq!(meta.copyright(), "");
        assert_eq!(meta.date(), None);
        assert_eq!(meta.description(), "");
        assert!(!meta.development());
        assert_eq!(meta.docs(), None);
        assert_eq!(meta.license(), "");
        assert_eq!(meta.license_url(), None);
        assert_eq!(meta.name(), "");
        assert_eq!(meta.note(), "");
        assert_eq!(meta.sha(), None);
        assert_eq!(meta.short_sha(), None);
        assert_eq!(meta.source(), None);
        assert_eq!(meta.title(), "");
        assert_eq!(meta.url(), None);
        assert_eq!(meta.version(), "");
        assert_eq!(meta.version_parts(), None);
    }

    #[test_log::test]
    fn test_malformed_strict_slot_is_fatal_and_names_the_field() {
        let raw = RawMetadata {
            sha: "not-a-sha".to_owned(),
            ..Default::default()
        };
        let err = Metadata::resolve(raw).unwrap_err();
        assert_eq!(err.field, vars::SHA);

        let raw = RawMetadata {
            docs: "ftp://example.com".to_owned(),
            ..Default::default()
        };
        assert_eq!(Metadata::resolve(raw).unwrap_err().field, vars::DOCS);

        let raw = RawMetadata {
            date: "tomorrow".to_owned(),
            ..Default::default()
        };
        assert_eq!(Metadata::resolve(raw).unwrap_err().field, vars::DATE);
    }

    #[test]
    fn test_lenient_slots_never_fail_resolution() {
        let raw = RawMetadata {
            author: "not <a valid@ mailbox".to_owned(),
            dev: "maybe".to_owned(),
            version: "latest".to_owned(),
            ..Default::default()
        };
        let meta = Metadata::resolve(raw).unwrap();
        assert_eq!(meta.author(), "not <a valid@ mailbox");
        assert_eq!(meta.author_email(), "");
        assert!(!meta.development());
        assert_eq!(meta.version(), "latest");
        assert_eq!(meta.version_parts(), None);
    }

    #[test]
    fn test_environment_facts_need_no_slots() {
        let meta = Metadata::resolve(RawMetadata::default()).unwrap();
        assert_eq!(meta.os(), std::env::consts::OS);
        assert_eq!(meta.arch(), std::env::consts::ARCH);
        assert!(!meta.rustc().is_empty());
        // Tests compile under the dev profile.
        assert_eq!(meta.profile(), "debug");
    }

    #[test]
    fn test_version_string_includes_the_short_sha_when_present() {
        let raw = RawMetadata {
            name: "demo-app".to_owned(),
            version: "v1.2.3".to_owned(),
            sha: "bb2fecbb4a287ea4c1f9887ca86dd0eb7ff28ec6".to_owned(),
            ..Default::default()
        };
        let meta = Metadata::resolve(raw).unwrap();
        assert_eq!(meta.version_string(), "demo-app v1.2.3 (bb2fecb, debug)");

        let raw = RawMetadata {
            name: "demo-app".to_owned(),
            version: "v1.2.3".to_owned(),
            ..Default::default()
        };
        let meta = Metadata::resolve(raw).unwrap();
        assert_eq!(meta.version_string(), "demo-app v1.2.3 (debug)");
    }
}
