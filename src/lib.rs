//! # docsync
//!
//! Keeps fenced example blocks in documentation in sync with example data
//! files.
//!
//! The library is organized around three pieces: format renderers behind a
//! registry ([`docsync::rendering`]), an explicit fence-region scanner
//! ([`docsync::scanning`]), and the synchronization pipeline that composes
//! them ([`docsync::pipeline`]). Paths and fence tags come from
//! configuration ([`docsync::config`]), never from literals, so every
//! piece can be exercised in isolation.

pub mod docsync;
