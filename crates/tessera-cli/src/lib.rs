//! # Tessera CLI
//!
//! Command-line front-end over the translation and tag libraries: inspect
//! locale negotiation, render messages and convert tags.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod app;
pub mod cli;
pub mod error;

pub use app::*;
pub use cli::*;
pub use error::*;
