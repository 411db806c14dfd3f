//! Integration tests for BUSY document parsing, writing and import resolution
//!
//! These tests work on real files in temporary directories and exercise the
//! public API end to end.

pub mod documents;
pub mod helpers;
pub mod imports;
pub mod round_trip;
