//! Structural equality strategies.
//!
//! An [`Equality`] decides whether two values hold the same content. The
//! collection uses it to locate the element to remove, so values can be
//! matched by what they contain rather than by where they live.

use crate::error::Result;
use serde::Serialize;
use serde_json::Value;

/// Compares two values for structural equality.
pub trait Equality<T: ?Sized> {
    /// Returns true if `a` and `b` are considered equal.
    fn equals(&self, a: &T, b: &T) -> bool;
}

/// Deep structural equality through `PartialEq`.
///
/// This is the default strategy: derived `PartialEq` already compares plain
/// data field by field.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ValueEquality;

impl<T: PartialEq + ?Sized> Equality<T> for ValueEquality {
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// Equality by canonical JSON form.
///
/// Both sides are converted to a `serde_json::Value` and the results are
/// compared. Object keys live in a sorted map, so field order never affects
/// the outcome. A value that cannot be canonicalized is never equal to
/// anything.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct JsonEquality;

impl<T: Serialize + ?Sized> Equality<T> for JsonEquality {
    fn equals(&self, a: &T, b: &T) -> bool {
        match (canonical_form(a), canonical_form(b)) {
            (Ok(a), Ok(b)) => a == b,
            (Err(err), _) | (_, Err(err)) => {
                tracing::warn!(error = %err, "value excluded from structural comparison");
                false
            }
        }
    }
}

impl<T: ?Sized, F> Equality<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    #[inline]
    fn equals(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Returns the canonical JSON form of `value`.
pub fn canonical_form<T: Serialize + ?Sized>(value: &T) -> Result<Value> {
    Ok(serde_json::to_value(value)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec;
    use alloc::vec::Vec;
    use serde::Serialize;

    #[derive(Clone, Debug, PartialEq, Serialize)]
    struct Item {
        name: String,
        tags: Vec<String>,
    }

    fn item(name: &str) -> Item {
        Item {
            name: name.into(),
            tags: vec!["a".into(), "b".into()],
        }
    }

    #[test]
    fn test_value_equality() {
        assert!(ValueEquality.equals(&item("test"), &item("test")));
        assert!(!ValueEquality.equals(&item("test"), &item("other")));
        assert!(ValueEquality.equals(&1, &1));
    }

    #[test]
    fn test_value_equality_nan() {
        assert!(!ValueEquality.equals(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn test_json_equality() {
        assert!(JsonEquality.equals(&item("test"), &item("test")));
        assert!(!JsonEquality.equals(&item("test"), &item("other")));
    }

    #[test]
    fn test_json_equality_non_finite_floats() {
        // Non-finite floats canonicalize to null.
        assert!(JsonEquality.equals(&f64::NAN, &f64::NAN));
    }

    #[test]
    fn test_json_equality_unserializable() {
        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        assert!(!JsonEquality.equals(&map, &map));
    }

    #[test]
    fn test_closure_equality() {
        let by_name = |a: &Item, b: &Item| a.name == b.name;
        let mut other = item("test");
        other.tags.clear();
        assert!(by_name.equals(&item("test"), &other));
        assert!(!ValueEquality.equals(&item("test"), &other));
    }

    #[test]
    fn test_canonical_form() {
        let value = canonical_form(&item("x")).unwrap();
        assert_eq!(value["name"], Value::String("x".into()));

        let mut map = BTreeMap::new();
        map.insert((1u8, 2u8), 3u8);
        assert!(matches!(canonical_form(&map), Err(Error::Canonicalize { .. })));
    }
}
