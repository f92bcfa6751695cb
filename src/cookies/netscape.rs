//! Netscape cookie file format.
//!
//! The format used by curl and wget. Each cookie is one line of seven
//! tab-separated fields:
//! `domain\tinclude_subdomains\tpath\tsecure\texpiry\tname\tvalue`
//!
//! Lines starting with `#` and blank lines are comments and survive a
//! load/store cycle byte for byte. HttpOnly cookies are written with a
//! `#HttpOnly_` prefix glued to the domain, so tools that predate the
//! convention skip them as comments.

use crate::base::config::{JarConfig, OverflowPolicy};
use crate::base::jarerror::{Field, JarError, LineError};
use crate::cookies::canonical_cookie::{CanonicalCookie, JarLine, JarRecord};
use crate::cookies::setcookie::parse_seconds;

/// Prefix marking an HttpOnly cookie line.
pub const HTTPONLY_PREFIX: &str = "#HttpOnly_";

const FIELD_COUNT: usize = 7;

/// Parse the full contents of a cookie file.
///
/// An empty buffer is an empty jar. Any malformed cookie line fails the whole
/// parse. Comment lines may hold arbitrary bytes; cookie lines must be UTF-8.
/// A final line without a trailing newline is accepted, although curl's
/// reader treats one as a truncated file.
pub fn parse_jar<'a>(buf: &'a [u8], config: &JarConfig) -> Result<Vec<JarRecord<'a>>, JarError> {
    let mut records = Vec::new();
    for (idx, line) in buf.split_inclusive(|&b| b == b'\n').enumerate() {
        if records.len() == config.max_records {
            match config.overflow {
                OverflowPolicy::Reject => {
                    return Err(JarError::CapacityExceeded {
                        max: config.max_records,
                    })
                }
                OverflowPolicy::Truncate => {
                    tracing::warn!(
                        max = config.max_records,
                        line = idx + 1,
                        "cookie file truncated at record limit"
                    );
                    break;
                }
            }
        }

        let line = line.strip_suffix(b"\n").unwrap_or(line);
        let line = parse_line(line).map_err(|kind| JarError::InvalidLine { line: idx + 1, kind })?;
        records.push(JarRecord {
            line,
            evicted: false,
        });
    }

    Ok(records)
}

/// Parse one line, without its `\n` terminator.
pub fn parse_line(line: &[u8]) -> Result<JarLine<'_>, LineError> {
    let (line, http_only) = match line.strip_prefix(HTTPONLY_PREFIX.as_bytes()) {
        Some(rest) => (rest, true),
        None if line.is_empty() || line.starts_with(b"#") => return Ok(JarLine::Comment(line)),
        None => (line, false),
    };
    let line = std::str::from_utf8(line).map_err(|_| LineError::InvalidUtf8)?;
    parse_cookie(line, http_only).map(JarLine::Cookie)
}

fn parse_cookie(line: &str, http_only: bool) -> Result<CanonicalCookie<'_>, LineError> {
    // The value runs to the end of the line, tabs included.
    let mut fields = line.splitn(FIELD_COUNT, '\t');
    let mut next = |field| match fields.next() {
        None => Err(LineError::MissingField(field)),
        Some("") => Err(LineError::EmptyField(field)),
        Some(s) => Ok(s),
    };

    let domain = next(Field::Domain)?;
    let include_subdomains =
        parse_bool(next(Field::IncludeSubdomains)?, Field::IncludeSubdomains)?;
    let path = next(Field::Path)?;
    let secure = parse_bool(next(Field::Secure)?, Field::Secure)?;
    let expires = parse_seconds(next(Field::Expires)?);
    let name = next(Field::Name)?;
    let value = next(Field::Value)?;

    Ok(CanonicalCookie {
        domain,
        include_subdomains,
        path,
        secure,
        expires,
        name,
        value,
        http_only,
    })
}

fn parse_bool(s: &str, field: Field) -> Result<bool, LineError> {
    match s {
        "TRUE" => Ok(true),
        "FALSE" => Ok(false),
        _ => Err(LineError::InvalidBool(field)),
    }
}

fn bool_str(b: bool) -> &'static str {
    if b {
        "TRUE"
    } else {
        "FALSE"
    }
}

/// Serialize records back to the Netscape format, one line each.
/// Evicted records are omitted.
pub fn write_jar(records: &[JarRecord<'_>]) -> Vec<u8> {
    let mut out = Vec::new();

    for record in records.iter().filter(|r| !r.evicted) {
        match &record.line {
            JarLine::Comment(text) => out.extend_from_slice(text),
            JarLine::Cookie(cookie) => {
                if cookie.http_only {
                    out.extend_from_slice(HTTPONLY_PREFIX.as_bytes());
                }
                let expires = cookie.expires.to_string();
                let fields = [
                    cookie.domain,
                    bool_str(cookie.include_subdomains),
                    cookie.path,
                    bool_str(cookie.secure),
                    expires.as_str(),
                    cookie.name,
                    cookie.value,
                ];
                out.extend_from_slice(fields.join("\t").as_bytes());
            }
        }
        out.push(b'\n');
    }

    out
}
