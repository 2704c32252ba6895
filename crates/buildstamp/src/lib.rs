#![deny(unsafe_code)]

//! Typed, validated build-time application metadata.
//!
//! Raw string values are injected into the host binary at build time as
//! `BUILDSTAMP_*` compile-time environment variables (the Cargo counterpart
//! of linker-injected build stamps), captured with [`from_build_env!`], and
//! validated exactly once into a [`Metadata`] value. Accessors are pure
//! reads of the resolved state, safe to call from any thread, any number of
//! times.
//!
//! Recognized variable names:
//!
//! - `BUILDSTAMP_AUTHOR`
//! - `BUILDSTAMP_AUTHOR_URL`
//! - `BUILDSTAMP_COPYRIGHT`
//! - `BUILDSTAMP_DATE`
//! - `BUILDSTAMP_DESC`
//! - `BUILDSTAMP_DEV`
//! - `BUILDSTAMP_DOCS`
//! - `BUILDSTAMP_LICENSE`
//! - `BUILDSTAMP_LICENSE_URL`
//! - `BUILDSTAMP_NAME`
//! - `BUILDSTAMP_NOTE`
//! - `BUILDSTAMP_SHA`
//! - `BUILDSTAMP_SRC`
//! - `BUILDSTAMP_TITLE`
//! - `BUILDSTAMP_URL`
//! - `BUILDSTAMP_VERSION`
//!
//! A host program emits the variables from its build script
//! (`cargo:rustc-env=BUILDSTAMP_VERSION=v1.2.3`) and resolves them once at
//! startup:
//!
//! ```
//! let meta = buildstamp::Metadata::init(buildstamp::from_build_env!())
//!     .expect("build metadata is malformed");
//! eprintln!("{}", meta.version_string());
//! ```
//!
//! A malformed strictly-structured value (timestamp, URL, git SHA) fails
//! resolution: an incorrectly built binary should stop at startup instead
//! of running with misleading metadata. Free-form fields (author, version)
//! and flags degrade to absent or default values instead of failing.

/// Author mailbox parsing.
pub mod author;
/// Fatal metadata format errors.
pub mod error;
/// Resolved metadata and the accessor surface.
pub mod metadata;
/// Raw metadata slots and variable names.
pub mod raw;
/// Git commit SHA validation.
pub mod sha;
/// Best-effort semantic version decomposition.
pub mod version;

mod timestamp;
mod validate;

pub use author::Author;
pub use error::MalformedMetadata;
pub use metadata::Metadata;
pub use raw::{RawMetadata, vars};
pub use sha::GitSha;
pub use version::VersionParts;
