//! # Tessera Tags
//!
//! File tags are `key` or `key:value` tokens. Only the first `:` separates
//! key from value, so values may contain colons themselves.
//!
//! ```
//! use tessera_tags::{concat, split, Tag};
//!
//! let tag = split("test:hello:world");
//! assert_eq!(tag, Tag::full("test", "hello:world"));
//! assert_eq!(concat(&tag), "test:hello:world");
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod codec;
pub mod error;
pub mod filter;
pub mod tag;

pub use codec::{concat, split, AnyTag};
pub use error::TagParseError;
pub use filter::{equals, exclude_system_tags, not, user_tags, TagFields};
pub use tag::{Tag, SYSTEM_TAGS};
