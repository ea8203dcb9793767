//! Generic conversions between optional and plain values.
//!
//! Every function here is pure. The per-domain entry points in
//! [`crate::domains`] are thin monomorphic wrappers around these.

use crate::error::{Error, Result};
use crate::zero::Zero;

/// Returns the contained value, or the zero value of `T` if `v` is absent.
///
/// # Examples
///
/// ```
/// use nullable::resolve;
///
/// assert_eq!(resolve::<i64>(None), 0);
/// assert_eq!(resolve(Some(7i64)), 7);
/// assert_eq!(resolve::<String>(None), "");
/// ```
#[inline]
pub fn resolve<T: Zero>(v: Option<T>) -> T {
    resolve_with_default(v, T::zero())
}

/// Returns the contained value, or `d` if `v` is absent.
///
/// # Examples
///
/// ```
/// use nullable::resolve_with_default;
///
/// assert_eq!(resolve_with_default(None, 5), 5);
/// assert_eq!(resolve_with_default(Some(1), 5), 1);
/// ```
#[inline]
pub fn resolve_with_default<T>(v: Option<T>, d: T) -> T {
    match v {
        Some(v) => v,
        None => d,
    }
}

/// Wraps `v` as a present optional value.
///
/// The value is moved into the option, so the result never aliases the
/// caller's binding.
#[inline]
pub fn present<T>(v: T) -> Option<T> {
    Some(v)
}

/// Converts a sequence of optional values into plain values.
///
/// The output has the same length as `src`; absent entries become the zero
/// value of `T` at the same index.
///
/// # Examples
///
/// ```
/// use nullable::to_plain;
///
/// assert_eq!(to_plain(&[Some(1), None, Some(3)]), vec![1, 0, 3]);
/// assert!(to_plain::<i32>(&[]).is_empty());
/// ```
pub fn to_plain<T: Zero + Clone>(src: &[Option<T>]) -> Vec<T> {
    src.iter().map(|v| resolve(v.clone())).collect()
}

/// Converts a sequence of plain values into optional values, every one of
/// them present.
///
/// Each element is cloned, so the output does not borrow from `src`.
pub fn to_optional<T: Clone>(src: &[T]) -> Vec<Option<T>> {
    src.iter().cloned().map(present).collect()
}

/// Returns the contained value, or [`Error::Missing`] if `v` is absent.
///
/// # Examples
///
/// ```
/// use nullable::{require, Error};
///
/// assert_eq!(require(Some(1.5f64)), Ok(1.5));
/// assert_eq!(require::<f64>(None), Err(Error::Missing));
/// ```
pub fn require<T>(v: Option<T>) -> Result<T> {
    v.ok_or(Error::Missing)
}

/// Converts a sequence of optional values into plain values, failing on the
/// first absent entry instead of substituting zero.
///
/// # Errors
///
/// Returns [`Error::Absent`] carrying the index of the first absent entry.
///
/// # Examples
///
/// ```
/// use nullable::{require_all, Error};
///
/// assert_eq!(require_all(&[Some(1), Some(2)]), Ok(vec![1, 2]));
/// assert_eq!(require_all(&[Some(1), None, None]), Err(Error::Absent { index: 1 }));
/// ```
pub fn require_all<T: Clone>(src: &[Option<T>]) -> Result<Vec<T>> {
    src.iter()
        .enumerate()
        .map(|(index, v)| v.clone().ok_or(Error::Absent { index }))
        .collect()
}
