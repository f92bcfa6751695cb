//! `Set-Cookie` header parsing.
//!
//! Accepts the strict subset of RFC 6265 section 4.1 needed to store a
//! cookie in a Netscape cookie file:
//!
//! ```text
//! Set-Cookie: <name>=<value>[; <cookie-av>]*
//! ```
//!
//! `Max-Age`, `Domain` and `Path` are mandatory. `Expires` is recognized but
//! never converted into a date; a header carrying only `Expires` is rejected
//! with [`SetCookieError::PreferMaxAge`].

use crate::base::jarerror::SetCookieError;
use crate::cookies::canonical_cookie::CanonicalCookie;
use time::OffsetDateTime;

/// Literal, case-sensitive header prefix. Exactly one space must follow it.
pub const SET_COOKIE_PREFIX: &str = "Set-Cookie:";

/// Maximum number of cookie-av directives, extensions included.
pub const MAX_DIRECTIVES: usize = 8;

/// A parsed `Set-Cookie` header.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SetCookie<'a> {
    pub cookie: CanonicalCookie<'a>,
    /// `Expires` was present but `Max-Age` took precedence.
    pub expires_overridden: bool,
    /// Unrecognized directives, verbatim.
    pub extensions: Vec<&'a str>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Directive<'a> {
    Expires,
    MaxAge(&'a str),
    Domain(&'a str),
    Path(&'a str),
    Secure,
    HttpOnly,
    Extension(&'a str),
}

impl<'a> Directive<'a> {
    /// Directives are matched by case-insensitive prefix, so `Securely`
    /// still counts as `Secure`.
    fn parse(av: &'a str) -> Self {
        if strip_prefix_ignore_case(av, "Expires=").is_some() {
            Directive::Expires
        } else if let Some(v) = strip_prefix_ignore_case(av, "Max-Age=") {
            Directive::MaxAge(v)
        } else if let Some(v) = strip_prefix_ignore_case(av, "Domain=") {
            Directive::Domain(v)
        } else if let Some(v) = strip_prefix_ignore_case(av, "Path=") {
            Directive::Path(v)
        } else if strip_prefix_ignore_case(av, "Secure").is_some() {
            Directive::Secure
        } else if strip_prefix_ignore_case(av, "HttpOnly").is_some() {
            Directive::HttpOnly
        } else {
            Directive::Extension(av)
        }
    }
}

fn strip_prefix_ignore_case<'a>(s: &'a str, prefix: &str) -> Option<&'a str> {
    let head = s.get(..prefix.len())?;
    if head.eq_ignore_ascii_case(prefix) {
        Some(&s[prefix.len()..])
    } else {
        None
    }
}

/// RFC 2616 section 2.2 `token`: US-ASCII without controls or separators.
pub fn is_rfc2616_token(s: &str) -> bool {
    const SEPARATORS: &[u8] = b"()<>@,;:\\\"/[]?={} \t";
    s.bytes()
        .all(|b| b.is_ascii() && !b.is_ascii_control() && !SEPARATORS.contains(&b))
}

/// RFC 6265 section 4.1.1 `cookie-octet`.
pub fn is_rfc6265_cookie_octets(s: &str) -> bool {
    s.bytes().all(|b| {
        matches!(b,
            0x21 | 0x23..=0x2b | 0x2d..=0x3a | 0x3c..=0x5b | 0x5d..=0x7e)
    })
}

/// Lenient integer parse shared by `Max-Age` and the jar's expires column.
///
/// Skips leading ASCII whitespace, accepts one sign, then reads digits up to
/// the first non-digit. No digits yields 0; overflow saturates.
pub(crate) fn parse_seconds(s: &str) -> i64 {
    let s = s.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0i64, |n, d| n.saturating_mul(10).saturating_add(i64::from(d - b'0')));

    if negative {
        -magnitude
    } else {
        magnitude
    }
}

fn invalid(reason: &str, header: &str) -> SetCookieError {
    tracing::debug!(header = %header, reason, "rejecting Set-Cookie header");
    SetCookieError::InvalidSyntax
}

/// Parse a full `Set-Cookie` header line, stamping Max-Age against the
/// current time.
pub fn parse_set_cookie(header: &str) -> Result<SetCookie<'_>, SetCookieError> {
    parse_set_cookie_at(header, OffsetDateTime::now_utc().unix_timestamp())
}

/// Parse a full `Set-Cookie` header line with an explicit clock
/// (`now` in seconds since the epoch).
pub fn parse_set_cookie_at(header: &str, now: i64) -> Result<SetCookie<'_>, SetCookieError> {
    let cookie_string = header
        .strip_prefix(SET_COOKIE_PREFIX)
        .and_then(|s| s.strip_prefix(' '))
        .ok_or_else(|| invalid("expected `Set-Cookie: ` prefix", header))?;

    let (name, rest) = cookie_string
        .split_once('=')
        .ok_or_else(|| invalid("missing `=` after cookie name", header))?;

    let mut pieces = rest.split(';');
    let raw_value = pieces.next().unwrap_or_default();

    let mut directives = Vec::with_capacity(MAX_DIRECTIVES);
    for piece in pieces {
        let av = piece
            .strip_prefix(' ')
            .ok_or_else(|| invalid("directives must be separated by `; `", header))?;
        if directives.len() == MAX_DIRECTIVES {
            return Err(SetCookieError::TooManyDirectives);
        }
        directives.push(Directive::parse(av));
    }

    if name.is_empty() || !is_rfc2616_token(name) {
        return Err(invalid("cookie name is not a token", header));
    }

    let value = match raw_value.strip_prefix('"') {
        Some(quoted) => quoted
            .strip_suffix('"')
            .ok_or_else(|| invalid("unterminated quoted cookie value", header))?,
        None => raw_value,
    };
    if value.is_empty() || !is_rfc6265_cookie_octets(value) {
        return Err(invalid("cookie value has invalid characters", header));
    }

    let mut has_expires = false;
    let mut max_age = None;
    let mut domain = None;
    let mut path = None;
    let mut cookie = CanonicalCookie::new(name, value, "", "");
    let mut extensions = Vec::new();

    // First occurrence wins for valued directives.
    for directive in directives {
        match directive {
            Directive::Expires => has_expires = true,
            Directive::MaxAge(v) => max_age = max_age.or(Some(v)),
            Directive::Domain(v) => domain = domain.or(Some(v)),
            Directive::Path(v) => path = path.or(Some(v)),
            Directive::Secure => cookie.secure = true,
            Directive::HttpOnly => cookie.http_only = true,
            Directive::Extension(v) => extensions.push(v),
        }
    }

    // A tab or newline here would split the jar line.
    if [domain, path]
        .into_iter()
        .flatten()
        .any(|v| v.bytes().any(|b| b.is_ascii_control()))
    {
        return Err(invalid("control character in Domain or Path", header));
    }
    // The jar would read the line back as a comment.
    if domain.is_some_and(|d| d.starts_with('#')) {
        return Err(invalid("Domain starts with `#`", header));
    }

    // Max-Age takes precedence over Expires (RFC 6265 section 5.3 step 3).
    let max_age = match max_age {
        Some(v) => v,
        None if has_expires => return Err(SetCookieError::PreferMaxAge),
        None => return Err(SetCookieError::MissingMaxAge),
    };
    let delta = parse_seconds(max_age);
    cookie.expires = if delta > 0 {
        now.saturating_add(delta)
    } else {
        0
    };

    cookie.domain = domain
        .filter(|d| !d.is_empty())
        .ok_or(SetCookieError::MissingDomain)?;
    cookie.include_subdomains = cookie.domain.starts_with('.');

    cookie.path = path
        .filter(|p| !p.is_empty())
        .ok_or(SetCookieError::MissingPath)?;

    Ok(SetCookie {
        cookie,
        expires_overridden: has_expires,
        extensions,
    })
}
