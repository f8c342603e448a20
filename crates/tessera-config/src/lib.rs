//! # Tessera Config
//!
//! Settings for locating translations, choosing the fallback locale and
//! configuring logging. Settings are read from YAML and can be overridden
//! through `TESSERA_*` environment variables.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod defaults;
pub mod loader;
pub mod schema;

pub use loader::*;
pub use schema::*;
