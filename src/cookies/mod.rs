//! Cookie file management.
//!
//! This module provides the cookie jar and everything needed to maintain it:
//!
//! - **Record**: a cookie or comment line ([`CanonicalCookie`](canonical_cookie::CanonicalCookie), [`JarRecord`](canonical_cookie::JarRecord))
//! - **Header parsing**: strict `Set-Cookie` validation ([`setcookie`])
//! - **File format**: Netscape cookie file parse/serialize ([`netscape`])
//! - **Matching**: lookup by name, domain and path with `*` wildcards ([`matcher`])
//! - **Storage**: insert-or-replace and eviction ([`CookieJar`](jar::CookieJar))
//! - **Persistence**: atomic file replacement and JSON export ([`persistence`])
//!
//! # Set a cookie from a header
//!
//! ```rust,no_run
//! use cookiejar::base::config::JarConfig;
//! use cookiejar::cookies::jar::CookieJar;
//! use cookiejar::cookies::{persistence, setcookie};
//! use std::path::Path;
//!
//! let path = Path::new("cookies.txt");
//! let header = "Set-Cookie: id=abc123; Domain=example.com; Path=/; Max-Age=3600";
//! let parsed = setcookie::parse_set_cookie(header)?;
//!
//! let buf = persistence::load(path)?;
//! let mut jar = CookieJar::parse(&buf, JarConfig::default())?;
//! jar.upsert(parsed.cookie)?;
//! persistence::commit(path, &jar.to_netscape())?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Evict cookies
//!
//! ```rust
//! use cookiejar::base::config::JarConfig;
//! use cookiejar::cookies::jar::CookieJar;
//! use cookiejar::cookies::matcher::CookiePattern;
//!
//! let file = b"example.com\tFALSE\t/\tFALSE\t0\tid\tabc123\n";
//! let mut jar = CookieJar::parse(file, JarConfig::default())?;
//! let evicted = jar.evict_all(&CookiePattern::new("*", "example.com", "*"));
//! assert_eq!(evicted, 1);
//! assert!(jar.to_netscape().is_empty());
//! # Ok::<(), cookiejar::base::jarerror::JarError>(())
//! ```
//!
//! # File format
//!
//! | Column | Content |
//! |--------|---------|
//! | 1 | Domain, prefixed `#HttpOnly_` for HttpOnly cookies |
//! | 2 | `TRUE` if subdomains match (domain has a leading `.`) |
//! | 3 | Path |
//! | 4 | `TRUE` for Secure cookies |
//! | 5 | Expiry, seconds since the epoch |
//! | 6 | Name |
//! | 7 | Value |

pub mod canonical_cookie;
pub mod jar;
pub mod matcher;
pub mod netscape;
pub mod persistence;
pub mod setcookie;
