//! Common utilities for tagcheck.
//!
//! This crate provides shared infrastructure used by the checker and the CLI:
//! - **Network** - single-shot HTTP GET used to load remote documents
//! - **Warning System** - colored terminal output for suspicious input

pub mod net;
pub mod warning;
