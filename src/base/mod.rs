//! Base types and error handling.
//!
//! Provides foundational types shared by the cookie modules:
//! - [`jarerror`]: Header, file and capacity error types
//! - [`config`]: Jar limits and overflow policy

pub mod config;
pub mod jarerror;
