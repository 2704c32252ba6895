//! Author mailbox parsing.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

/// An addr-spec built from dot-atoms: `local@domain` with a non-empty
/// dotted-label domain. This is the subset of RFC 5322 addresses that build
/// tooling realistically injects.
static ADDR_SPEC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]*[A-Za-z0-9])?)*$",
    )
    .expect("addr-spec pattern is valid")
});

/// The application author's display name and email address.
///
/// Either component may be empty; an author slot holding only a bare address
/// has no display name, and a slot that fails mailbox parsing keeps the
/// whole raw string as the name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Author {
    /// Display name, possibly empty.
    pub name: String,
    /// Email address, possibly empty.
    pub email: String,
}

impl Author {
    /// Parse an author slot.
    ///
    /// Accepts the mailbox shapes `Display Name <addr@host>`, `<addr@host>`,
    /// and a bare `addr@host`. Anything else is kept verbatim as the display
    /// name with an empty email; author strings are free-form and never
    /// rejected.
    pub fn parse(raw: &str) -> Self {
        if raw.is_empty() {
            return Self::default();
        }

        if let Some(mailbox) = Self::split_mailbox(raw) {
            return mailbox;
        }

        if ADDR_SPEC.is_match(raw) {
            return Self {
                name: String::new(),
                email: raw.to_owned(),
            };
        }

        Self {
            name: raw.to_owned(),
            email: String::new(),
        }
    }

    /// Split a `Name <addr@host>` mailbox. `None` unless the angle-bracket
    /// framing and the enclosed addr-spec are both valid.
    fn split_mailbox(raw: &str) -> Option<Self> {
        let open = raw.find('<')?;
        let rest = &raw[open + 1..];
        let close = rest.find('>')?;

        // Nothing may follow the closing bracket.
        if !rest[close + 1..].trim().is_empty() {
            return None;
        }

        let addr = &rest[..close];
        if !ADDR_SPEC.is_match(addr) {
            return None;
        }

        let name = raw[..open].trim();
        // Quoted display names carry their content without the quotes.
        let name = name
            .strip_prefix('"')
            .and_then(|n| n.strip_suffix('"'))
            .unwrap_or(name);

        Some(Self {
            name: name.to_owned(),
            email: addr.to_owned(),
        })
    }
}
