//! # cookiejar
//!
//! Maintain a Netscape HTTP cookie file (the curl/wget `cookies.txt` format).
//!
//! `cookiejar` loads a cookie file, applies one change and writes it back:
//!
//! - **Set**: store the cookie from a raw `Set-Cookie` response header,
//!   replacing any cookie with the same name, domain and path
//! - **Evict**: delete every cookie matching a name/domain/path pattern,
//!   where each part may be the wildcard `*`
//! - **Export**: print the cookies as a JSON array
//!
//! Comments, blank lines and the `#HttpOnly_` convention round-trip
//! unchanged, and the file is replaced atomically.
//!
//! ## Modules
//!
//! - [`base`] - Error types and configuration
//! - [`cookies`] - Cookie records, header parsing, file format and storage

pub mod base;
pub mod cookies;
