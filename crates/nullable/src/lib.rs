//! nullable - Null-coalescing and boxing helpers for optional values
//!
//! Resolves an [`Option`] to a plain value by falling back to either the
//! domain's zero value or a caller-supplied default, wraps plain values as
//! present optionals, and converts whole sequences in both directions.
//!
//! The operations are written once, generically over the [`Zero`] trait, and
//! exposed per value domain for ergonomics (`int`, `int32`, `int64`,
//! `float32`, `float64`, `string`, `boolean`, `time`, `duration`).
//!
//! # Example
//!
//! ```
//! struct Book {
//!     title: String,
//!     year: Option<isize>,
//! }
//!
//! let book = Book {
//!     title: "Harry Potter".to_string(),
//!     year: None,
//! };
//!
//! let line = format!(
//!     "{} was released in {}.",
//!     book.title,
//!     nullable::int_with_default(book.year, 1997)
//! );
//! assert_eq!(line, "Harry Potter was released in 1997.");
//! ```

pub mod domains;
pub mod error;
pub mod ext;
pub mod resolve;
pub mod zero;

// Re-exports for convenience
pub use domains::*;
pub use error::{Error, Result};
pub use ext::{OptionExt, OptionSliceExt, PlainSliceExt};
pub use resolve::{present, require, require_all, resolve, resolve_with_default, to_optional, to_plain};
pub use zero::Zero;
