//! Immutable, delimiter-separated path values.
//!
//! A [`PathValue`] splits a string such as `/pages/id/1` into ordered
//! segments and offers indexed and keyed access, slicing, regex extraction,
//! relative-path computation and `cd`-style navigation. Every operation
//! builds a new value; nothing is modified in place.
//!
//! ```
//! use pathnav_core::PathValue;
//! let p = PathValue::new("/files/client1/files/woot", '/');
//! assert_eq!(p.cd("..").to_string(), "files/client1/files");
//! assert_eq!(p.between("files", "woot")?.slice(-1, None).to_string(), "files");
//! # Ok::<(), pathnav_core::PathError>(())
//! ```

mod config;
mod error;
mod extract;
mod input;
mod iter;
mod lookup;
mod mapping;
mod navigate;
mod path;

pub use crate::config::{DEFAULT_ALTERNATE_SEPARATORS, NavConfig};
pub use crate::error::{PathError, Result};
pub use crate::input::{MapKey, PathInput};
pub use crate::iter::Iter;
pub use crate::lookup::{Lookup, SegmentKey};
pub use crate::navigate::PARENT;
pub use crate::path::PathValue;
