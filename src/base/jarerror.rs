use std::fmt;
use thiserror::Error;

/// Outcome of rejecting a `Set-Cookie` header.
///
/// Variants are listed in precedence order: when a header has several
/// problems, the earliest variant here is the one reported.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum SetCookieError {
    #[error("invalid syntax - see https://developer.mozilla.org/en-US/docs/Web/HTTP/Headers/Set-Cookie")]
    InvalidSyntax,
    #[error("too many directives")]
    TooManyDirectives,
    /// `Expires` was given without `Max-Age`. Dates are never computed
    /// from `Expires`.
    #[error("use Max-Age instead")]
    PreferMaxAge,
    #[error("missing Max-Age directive")]
    MissingMaxAge,
    #[error("missing Domain directive")]
    MissingDomain,
    #[error("missing Path directive")]
    MissingPath,
}

/// A column of a Netscape cookie file line.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Field {
    Domain,
    IncludeSubdomains,
    Path,
    Secure,
    Expires,
    Name,
    Value,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Field::Domain => "domain",
            Field::IncludeSubdomains => "include-subdomains",
            Field::Path => "path",
            Field::Secure => "secure",
            Field::Expires => "expires",
            Field::Name => "name",
            Field::Value => "value",
        };
        f.write_str(name)
    }
}

/// Why a single cookie line was rejected.
#[derive(Debug, Error, PartialEq, Eq, Clone, Copy)]
pub enum LineError {
    #[error("missing {0} field")]
    MissingField(Field),
    #[error("empty {0} field")]
    EmptyField(Field),
    #[error("{0} field must be TRUE or FALSE")]
    InvalidBool(Field),
    #[error("cookie line is not valid UTF-8")]
    InvalidUtf8,
}

/// Errors raised while loading, mutating or storing a cookie jar.
#[derive(Debug, Error)]
pub enum JarError {
    #[error("invalid cookie file: line {line}: {kind}")]
    InvalidLine { line: usize, kind: LineError },
    #[error("cookie file is full ({max} records)")]
    CapacityExceeded { max: usize },
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
}

impl JarError {
    /// True when the jar contents, rather than the environment, are at fault.
    pub fn is_invalid_file(&self) -> bool {
        matches!(self, JarError::InvalidLine { .. })
    }
}
