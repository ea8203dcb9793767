use std::time::Duration;

/// A value domain with a distinguished zero value.
///
/// The zero value is what an absent optional resolves to when the caller does
/// not supply a default: `0` for numbers, `""` for strings, `false` for
/// booleans, the Unix epoch for instants and a zero-length duration.
///
/// # Examples
///
/// ```
/// use nullable::Zero;
///
/// assert_eq!(i64::zero(), 0);
/// assert_eq!(String::zero(), "");
/// assert!(!bool::zero());
/// assert!(0.0f64.is_zero());
/// ```
pub trait Zero: Sized {
    /// Returns the zero value of the domain.
    fn zero() -> Self;

    /// Returns `true` if `self` equals the zero value of the domain.
    fn is_zero(&self) -> bool;
}

macro_rules! impl_zero_for_numeric {
    ($($ty:ty => $zero:expr),* $(,)?) => {
        $(
            impl Zero for $ty {
                #[inline]
                fn zero() -> Self {
                    $zero
                }

                #[inline]
                fn is_zero(&self) -> bool {
                    // -0.0 == 0.0 for floats, so both count as zero.
                    *self == $zero
                }
            }
        )*
    };
}

impl_zero_for_numeric!(
    isize => 0,
    i32 => 0,
    i64 => 0,
    f32 => 0.0,
    f64 => 0.0,
);

impl Zero for bool {
    #[inline]
    fn zero() -> Self {
        false
    }

    #[inline]
    fn is_zero(&self) -> bool {
        !*self
    }
}

impl Zero for String {
    #[inline]
    fn zero() -> Self {
        String::new()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.is_empty()
    }
}

impl Zero for Duration {
    #[inline]
    fn zero() -> Self {
        Duration::ZERO
    }

    #[inline]
    fn is_zero(&self) -> bool {
        Duration::is_zero(self)
    }
}

#[cfg(feature = "chrono")]
impl Zero for chrono::DateTime<chrono::Utc> {
    /// The Unix epoch, `1970-01-01T00:00:00Z`.
    #[inline]
    fn zero() -> Self {
        chrono::DateTime::<chrono::Utc>::default()
    }

    #[inline]
    fn is_zero(&self) -> bool {
        self.timestamp() == 0 && self.timestamp_subsec_nanos() == 0
    }
}
