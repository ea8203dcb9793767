//! Method-call forms of the conversions.

use crate::resolve::{resolve, to_optional, to_plain};
use crate::zero::Zero;

/// Extension methods on [`Option`].
///
/// # Examples
///
/// ```
/// use nullable::OptionExt;
///
/// let year: Option<i64> = None;
/// assert_eq!(year.or_zero(), 0);
/// assert_eq!(Some(1997i64).or_zero(), 1997);
/// ```
pub trait OptionExt<T> {
    /// Returns the contained value, or the zero value of `T`.
    fn or_zero(self) -> T;
}

impl<T: Zero> OptionExt<T> for Option<T> {
    #[inline]
    fn or_zero(self) -> T {
        resolve(self)
    }
}

/// Extension methods on slices of optional values.
pub trait OptionSliceExt<T> {
    /// See [`to_plain`](crate::to_plain).
    fn to_plain_vec(&self) -> Vec<T>;

    /// Number of present entries.
    fn present_count(&self) -> usize;
}

impl<T: Zero + Clone> OptionSliceExt<T> for [Option<T>] {
    fn to_plain_vec(&self) -> Vec<T> {
        to_plain(self)
    }

    fn present_count(&self) -> usize {
        self.iter().filter(|v| v.is_some()).count()
    }
}

/// Extension methods on slices of plain values.
pub trait PlainSliceExt<T> {
    /// See [`to_optional`](crate::to_optional).
    fn to_optional_vec(&self) -> Vec<Option<T>>;
}

impl<T: Clone> PlainSliceExt<T> for [T] {
    fn to_optional_vec(&self) -> Vec<Option<T>> {
        to_optional(self)
    }
}
