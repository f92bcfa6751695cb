//! Cookie lookup by (name, domain, path).
//!
//! Used for two things:
//! - Replacement: a new cookie with the same name, domain and path as a
//!   stored one replaces it (RFC 6265 section 5.3 step 11). Matching is exact.
//! - Eviction: the user names cookies to delete, where any of the three
//!   fields may be the wildcard `*`.

use crate::cookies::canonical_cookie::{CanonicalCookie, JarRecord};

/// Pattern field value that matches anything in wildcard mode.
pub const WILDCARD: &str = "*";

/// How pattern fields are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchMode {
    /// Every field must be byte-for-byte equal. `*` is literal.
    Exact,
    /// A field equal to `*` matches any value.
    Wildcard,
}

/// A (name, domain, path) key to look cookies up by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CookiePattern<'p> {
    pub name: &'p str,
    pub domain: &'p str,
    pub path: &'p str,
}

impl<'p> CookiePattern<'p> {
    pub fn new(name: &'p str, domain: &'p str, path: &'p str) -> Self {
        Self { name, domain, path }
    }

    /// The identity key of an existing cookie.
    pub fn key_of(cookie: &CanonicalCookie<'p>) -> Self {
        Self::new(cookie.name, cookie.domain, cookie.path)
    }

    pub fn matches(&self, cookie: &CanonicalCookie<'_>, mode: MatchMode) -> bool {
        let field_matches = |pattern: &str, value: &str| {
            (mode == MatchMode::Wildcard && pattern == WILDCARD) || pattern == value
        };

        field_matches(self.name, cookie.name)
            && field_matches(self.domain, cookie.domain)
            && field_matches(self.path, cookie.path)
    }
}

/// Index of the first active cookie at or after `from` matching `pattern`.
///
/// Comments and evicted records never match.
pub fn find(
    records: &[JarRecord<'_>],
    from: usize,
    mode: MatchMode,
    pattern: &CookiePattern<'_>,
) -> Option<usize> {
    records
        .iter()
        .enumerate()
        .skip(from)
        .find(|(_, record)| {
            record
                .active_cookie()
                .is_some_and(|cookie| pattern.matches(cookie, mode))
        })
        .map(|(idx, _)| idx)
}
