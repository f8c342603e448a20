//! # Tessera Common
//!
//! Shared functionality for the tessera workspace: structured logging
//! initialisation and, behind the `testing` feature, helpers used by the
//! test suites of the other crates.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use logging::*;
