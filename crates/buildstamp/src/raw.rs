//! Raw metadata slots and their variable names.
//!
//! A [`RawMetadata`] holds the unvalidated strings injected by the build
//! tooling. Slots use the empty string for "unset"; absence is never an
//! error. The struct is populated once (typically with [`from_build_env!`])
//! and handed to [`Metadata::resolve`](crate::Metadata::resolve); nothing
//! mutates it afterwards.

use serde::{Deserialize, Serialize};

/// Compile-time environment variable names recognized by [`from_build_env!`].
///
/// `BUILDSTAMP_RUSTC_VERSION` and `BUILDSTAMP_BUILD_PROFILE` are reserved by
/// the library's own build script and are not injectable slots.
pub mod vars {
    /// Application author: a name, an email address, or `Name <addr@host>`.
    pub const AUTHOR: &str = "BUILDSTAMP_AUTHOR";
    /// Homepage URL for the author.
    pub const AUTHOR_URL: &str = "BUILDSTAMP_AUTHOR_URL";
    /// Copyright statement, e.g. `2019-2021 Jane Doe`.
    pub const COPYRIGHT: &str = "BUILDSTAMP_COPYRIGHT";
    /// Build timestamp, in any of the accepted layouts.
    pub const DATE: &str = "BUILDSTAMP_DATE";
    /// Longer application description.
    pub const DESC: &str = "BUILDSTAMP_DESC";
    /// Development-mode flag.
    pub const DEV: &str = "BUILDSTAMP_DEV";
    /// Documentation URL.
    pub const DOCS: &str = "BUILDSTAMP_DOCS";
    /// SPDX license identifier, e.g. `MIT` or `Apache-2.0`.
    pub const LICENSE: &str = "BUILDSTAMP_LICENSE";
    /// URL for the verbatim license body.
    pub const LICENSE_URL: &str = "BUILDSTAMP_LICENSE_URL";
    /// Application name, typically the binary name.
    pub const NAME: &str = "BUILDSTAMP_NAME";
    /// Free-form release note.
    pub const NOTE: &str = "BUILDSTAMP_NOTE";
    /// Full 40-character git commit SHA, e.g. `$(git rev-parse HEAD)`.
    pub const SHA: &str = "BUILDSTAMP_SHA";
    /// URL for the source archive of this build.
    pub const SRC: &str = "BUILDSTAMP_SRC";
    /// Application title, the non-abbreviated form of the name.
    pub const TITLE: &str = "BUILDSTAMP_TITLE";
    /// Homepage URL for the application.
    pub const URL: &str = "BUILDSTAMP_URL";
    /// Version slug, e.g. `v1.2.3` or `$(git describe)`.
    pub const VERSION: &str = "BUILDSTAMP_VERSION";
}

/// Unvalidated metadata as injected by the build tooling.
///
/// Every slot is a plain string; empty means unset. Validation happens once,
/// in [`Metadata::resolve`](crate::Metadata::resolve).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawMetadata {
    /// Author name and/or email address.
    pub author: String,
    /// Author homepage URL.
    pub author_url: String,
    /// Copyright statement.
    pub copyright: String,
    /// Build timestamp.
    pub date: String,
    /// Application description.
    pub desc: String,
    /// Development-mode flag.
    pub dev: String,
    /// Documentation URL.
    pub docs: String,
    /// SPDX license identifier.
    pub license: String,
    /// License body URL.
    pub license_url: String,
    /// Application name.
    pub name: String,
    /// Free-form release note.
    pub note: String,
    /// Full git commit SHA.
    pub sha: String,
    /// Source archive URL.
    pub src: String,
    /// Application title.
    pub title: String,
    /// Application homepage URL.
    pub url: String,
    /// Version slug.
    pub version: String,
}

/// Capture the `BUILDSTAMP_*` compile-time environment of the calling crate
/// into a [`RawMetadata`].
///
/// Expands to [`option_env!`] reads, so values the host's build script emits
/// with `cargo:rustc-env=BUILDSTAMP_VERSION=...` (or exports into the
/// compiler's environment) are baked into the host binary. Unset variables
/// become empty slots.
#[macro_export]
macro_rules! from_build_env {
    () => {
        $crate::RawMetadata {
            author: ::core::option_env!("BUILDSTAMP_AUTHOR")
                .unwrap_or("")
                .to_owned(),
            author_url: ::core::option_env!("BUILDSTAMP_AUTHOR_URL")
                .unwrap_or("")
                .to_owned(),
            copyright: ::core::option_env!("BUILDSTAMP_COPYRIGHT")
                .unwrap_or("")
                .to_owned(),
            date: ::core::option_env!("BUILDSTAMP_DATE")
                .unwrap_or("")
                .to_owned(),
            desc: ::core::option_env!("BUILDSTAMP_DESC")
                .unwrap_or("")
                .to_owned(),
            dev: ::core::option_env!("BUILDSTAMP_DEV").unwrap_or("").to_owned(),
            docs: ::core::option_env!("BUILDSTAMP_DOCS")
                .unwrap_or("")
                .to_owned(),
            license: ::core::option_env!("BUILDSTAMP_LICENSE")
                .unwrap_or("")
                .to_owned(),
            license_url: ::core::option_env!("BUILDSTAMP_LICENSE_URL")
                .unwrap_or("")
                .to_owned(),
            name: ::core::option_env!("BUILDSTAMP_NAME")
                .unwrap_or("")
                .to_owned(),
            note: ::core::option_env!("BUILDSTAMP_NOTE")
                .unwrap_or("")
                .to_owned(),
            sha: ::core::option_env!("BUILDSTAMP_SHA").unwrap_or("").to_owned(),
            src: ::core::option_env!("BUILDSTAMP_SRC").unwrap_or("").to_owned(),
            title: ::core::option_env!("BUILDSTAMP_TITLE")
                .unwrap_or("")
                .to_owned(),
            url: ::core::option_env!("BUILDSTAMP_URL").unwrap_or("").to_owned(),
            version: ::core::option_env!("BUILDSTAMP_VERSION")
                .unwrap_or("")
                .to_owned(),
        }
    };
}
