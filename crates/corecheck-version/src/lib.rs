//! Generic version model and Maven-style version ranges.
//!
//! Versions parse from any string and order by the generic scheme (numeric
//! segments, well-known qualifiers, padding). Ranges are interval predicates
//! with the usual bracket syntax.
//!
//! # Example
//! ```
//! use corecheck_version::{Version, VersionRange};
//!
//! let range = VersionRange::parse("[3.0,)").unwrap();
//! assert!(range.contains(&Version::parse("3.5")));
//! assert!(!range.contains(&Version::parse("2.0")));
//! assert_eq!(range.to_string(), "[3.0,)");
//! ```

pub mod range;
pub mod version;

pub use range::VersionRange;
pub use version::Version;
