/// Represents a cookie as stored in a Netscape cookie file.
///
/// Fields borrow from the buffer the cookie was parsed out of (the cookie
/// file contents or the `Set-Cookie` header).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CanonicalCookie<'a> {
    pub domain: &'a str,
    /// Second jar column. Set when the cookie applies to subdomains,
    /// i.e. the domain was given with a leading `.`.
    pub include_subdomains: bool,
    pub path: &'a str,
    pub secure: bool,
    /// Seconds since the epoch. `0` when a non-positive Max-Age was supplied.
    pub expires: i64,
    pub name: &'a str,
    pub value: &'a str,
    pub http_only: bool,
}

impl<'a> CanonicalCookie<'a> {
    /// Cookie with default flags. `include_subdomains` follows the
    /// leading-dot convention of `domain`.
    pub fn new(name: &'a str, value: &'a str, domain: &'a str, path: &'a str) -> Self {
        Self {
            domain,
            include_subdomains: domain.starts_with('.'),
            path,
            secure: false,
            expires: 0,
            name,
            value,
            http_only: false,
        }
    }

    /// True when only the exact host may receive the cookie.
    pub fn host_only(&self) -> bool {
        !self.include_subdomains
    }
}

/// One line of a cookie file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum JarLine<'a> {
    /// A `#` comment or blank line, kept verbatim without its terminator.
    /// Not necessarily UTF-8.
    Comment(&'a [u8]),
    Cookie(CanonicalCookie<'a>),
}

/// A slot in the jar. Evicted slots are skipped by matching and dropped
/// when the jar is written out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct JarRecord<'a> {
    pub line: JarLine<'a>,
    pub evicted: bool,
}

impl<'a> JarRecord<'a> {
    pub fn comment(text: &'a [u8]) -> Self {
        Self {
            line: JarLine::Comment(text),
            evicted: false,
        }
    }

    pub fn cookie(cookie: CanonicalCookie<'a>) -> Self {
        Self {
            line: JarLine::Cookie(cookie),
            evicted: false,
        }
    }

    pub fn is_comment(&self) -> bool {
        matches!(self.line, JarLine::Comment(_))
    }

    /// The cookie in this slot, unless it is a comment or evicted.
    pub fn active_cookie(&self) -> Option<&CanonicalCookie<'a>> {
        match &self.line {
            JarLine::Cookie(cookie) if !self.evicted => Some(cookie),
            _ => None,
        }
    }
}
