//! Per-domain entry points.
//!
//! Each supported value domain gets the same five functions, generated by
//! `nullable_domain!` so that they cannot drift apart:
//!
//! | function              | meaning                                      |
//! |-----------------------|----------------------------------------------|
//! | `N(v)`                | contained value, or the domain zero          |
//! | `N_with_default(v, d)`| contained value, or `d`                      |
//! | `N_some(v)`           | `v` wrapped as a present optional            |
//! | `N_slice(src)`        | optional sequence to plain sequence          |
//! | `N_some_slice(src)`   | plain sequence to optional sequence          |

use std::time::Duration;

use crate::resolve::{present, resolve, resolve_with_default, to_optional, to_plain};

macro_rules! nullable_domain {
    (
        $(#[$meta:meta])*
        $ty:ty, $zero_doc:literal:
        $name:ident, $with_default:ident, $some:ident, $slice:ident, $some_slice:ident
    ) => {
        #[doc = concat!("Returns the contained `", stringify!($ty), "`, or ", $zero_doc, " if `v` is absent.")]
        $(#[$meta])*
        #[inline]
        pub fn $name(v: Option<$ty>) -> $ty {
            resolve(v)
        }

        #[doc = concat!("Returns the contained `", stringify!($ty), "`, or `d` if `v` is absent.")]
        $(#[$meta])*
        #[inline]
        pub fn $with_default(v: Option<$ty>, d: $ty) -> $ty {
            resolve_with_default(v, d)
        }

        #[doc = concat!("Wraps a `", stringify!($ty), "` as a present optional value.")]
        $(#[$meta])*
        #[inline]
        pub fn $some(v: $ty) -> Option<$ty> {
            present(v)
        }

        #[doc = concat!("Converts optional `", stringify!($ty), "` values to plain values. Absent entries become ", $zero_doc, ".")]
        $(#[$meta])*
        pub fn $slice(src: &[Option<$ty>]) -> Vec<$ty> {
            to_plain(src)
        }

        #[doc = concat!("Converts plain `", stringify!($ty), "` values to present optional values.")]
        $(#[$meta])*
        pub fn $some_slice(src: &[$ty]) -> Vec<Option<$ty>> {
            to_optional(src)
        }
    };
}

nullable_domain!(isize, "`0`": int, int_with_default, int_some, int_slice, int_some_slice);
nullable_domain!(i32, "`0`": int32, int32_with_default, int32_some, int32_slice, int32_some_slice);
nullable_domain!(i64, "`0`": int64, int64_with_default, int64_some, int64_slice, int64_some_slice);
nullable_domain!(f32, "`0.0`": float32, float32_with_default, float32_some, float32_slice, float32_some_slice);
nullable_domain!(f64, "`0.0`": float64, float64_with_default, float64_some, float64_slice, float64_some_slice);
nullable_domain!(String, "the empty string": string, string_with_default, string_some, string_slice, string_some_slice);
nullable_domain!(bool, "`false`": boolean, boolean_with_default, boolean_some, boolean_slice, boolean_some_slice);
nullable_domain!(Duration, "a zero-length duration": duration, duration_with_default, duration_some, duration_slice, duration_some_slice);
nullable_domain!(
    #[cfg(feature = "chrono")]
    chrono::DateTime<chrono::Utc>, "the Unix epoch":
    time, time_with_default, time_some, time_slice, time_some_slice
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int() {
        let cases: [(Option<isize>, isize); 3] = [(None, 0), (Some(1), 1), (Some(2), 2)];
        for (i, (input, output)) in cases.into_iter().enumerate() {
            assert_eq!(int(input), output, "case #{i}: int({input:?})");
        }
    }

    #[test]
    fn test_int_with_default() {
        assert_eq!(int_with_default(None, 5), 5);
        assert_eq!(int_with_default(Some(1), 5), 1);
        assert_eq!(int_with_default(Some(0), 5), 0);
    }

    #[test]
    fn test_int_slices() {
        assert_eq!(int_slice(&[int_some(1), int_some(2)]), vec![1, 2]);
        assert_eq!(int_slice(&[Some(1), None, Some(2)]), vec![1, 0, 2]);

        let boxed = int_some_slice(&[1, 2]);
        assert_eq!(boxed.len(), 2);
        assert_eq!(boxed, vec![Some(1), Some(2)]);
    }

    #[test]
    fn test_int32_and_int64() {
        assert_eq!(int32(None), 0);
        assert_eq!(int32_with_default(None, 1), 1);
        assert_eq!(int32_slice(&[None, Some(i32::MAX)]), vec![0, i32::MAX]);
        assert_eq!(int64(int64_some(i64::MIN)), i64::MIN);
        assert_eq!(int64_with_default(Some(2), 0), 2);
        assert_eq!(int64_some_slice(&[7]), vec![Some(7)]);
    }

    #[test]
    fn test_floats() {
        assert_eq!(float32(None), 0.0);
        assert_eq!(float32_with_default(Some(1.5), 2.0), 1.5);
        assert_eq!(float32_slice(&[Some(1.5), Some(2.7)]), vec![1.5, 2.7]);
        assert_eq!(float64(None), 0.0);
        assert_eq!(float64_with_default(None, 1.0), 1.0);
        assert_eq!(float64_some_slice(&[1.5, 2.7]), vec![Some(1.5), Some(2.7)]);
    }

    #[test]
    fn test_string() {
        assert_eq!(string(None), "");
        assert_eq!(string_with_default(None, "x".to_string()), "x");
        assert_eq!(
            string_with_default(string_some("one".to_string()), "two".to_string()),
            "one"
        );
        let plain = string_slice(&[Some("one".to_string()), None]);
        assert_eq!(plain, vec!["one", ""]);
        let boxed = string_some_slice(&plain);
        assert_eq!(boxed, vec![Some("one".to_string()), Some(String::new())]);
    }

    #[test]
    fn test_boolean() {
        let cases: [(Option<bool>, bool, bool); 4] = [
            (None, false, false),
            (None, true, true),
            (Some(true), false, true),
            (Some(false), true, false),
        ];
        for (i, (input, default, output)) in cases.into_iter().enumerate() {
            assert_eq!(
                boolean_with_default(input, default),
                output,
                "case #{i}: boolean_with_default({input:?}, {default})"
            );
        }
        assert!(!boolean(None));
        assert_eq!(boolean_slice(&[Some(true), None]), vec![true, false]);
        assert_eq!(boolean_some_slice(&[false]), vec![Some(false)]);
        assert_eq!(boolean_some(false), Some(false));
    }

    #[test]
    fn test_duration() {
        let one = Duration::from_secs(63);
        let two = Duration::from_secs(3 * 60);
        assert_eq!(duration(None), Duration::ZERO);
        assert_eq!(duration(Some(one)), one);
        assert_eq!(duration_with_default(None, one), one);
        assert_eq!(duration_with_default(Some(two), one), two);
        assert_eq!(duration_slice(&[None, Some(two)]), vec![Duration::ZERO, two]);
        assert_eq!(duration_some_slice(&[one]), vec![duration_some(one)]);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_time() {
        use chrono::{DateTime, TimeZone, Utc};

        let zero = DateTime::<Utc>::default();
        let one = Utc.with_ymd_and_hms(2017, 1, 2, 12, 14, 59).unwrap();
        let two = Utc.with_ymd_and_hms(1982, 11, 23, 23, 11, 9).unwrap();

        assert_eq!(time(None), zero);
        assert_eq!(time(Some(one)), one);
        assert_eq!(time_with_default(None, one), one);
        assert_eq!(time_with_default(Some(two), one), two);
        assert_eq!(time_with_default(Some(one), zero), one);
        assert_eq!(time_slice(&[Some(one), None, Some(two)]), vec![one, zero, two]);
        assert_eq!(time_some_slice(&[two]), vec![time_some(two)]);
    }
}
