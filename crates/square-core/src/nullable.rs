//! Three-state presence for optional fields that accept an explicit `null`.
//!
//! Square distinguishes "field not sent" from "field sent as null" on many
//! request bodies: an absent field leaves the stored value untouched, a null
//! clears it. `Option<T>` cannot express both, so nullable fields use
//! [`Nullable<T>`] together with
//! `#[serde(default, skip_serializing_if = "Nullable::is_absent")]`.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Presence of an optional-nullable field.
///
/// Transitions:
///
/// ```text
/// Absent ──set/set_null──▶ Value(T) | Null ──unset──▶ Absent
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Nullable<T> {
    /// Never set: omitted from the wire form.
    Absent,
    /// Explicitly null: emitted as `null`.
    Null,
    /// Explicitly valued.
    Value(T),
}

impl<T> Default for Nullable<T> {
    fn default() -> Self {
        Self::Absent
    }
}

impl<T> Nullable<T> {
    /// True if the field was never set (or was unset).
    #[must_use]
    pub const fn is_absent(&self) -> bool {
        matches!(self, Self::Absent)
    }

    /// True if the field was explicitly set to null.
    #[must_use]
    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// True if the field holds a value.
    #[must_use]
    pub const fn is_value(&self) -> bool {
        matches!(self, Self::Value(_))
    }

    /// True if the field will appear on the wire (as a value or as `null`).
    #[must_use]
    pub const fn is_present(&self) -> bool {
        !self.is_absent()
    }

    /// The current value; `None` for both `Absent` and `Null`.
    #[must_use]
    pub const fn value(&self) -> Option<&T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Mutable access to the current value.
    pub const fn value_mut(&mut self) -> Option<&mut T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Store a value.
    pub fn set(&mut self, value: T) {
        *self = Self::Value(value);
    }

    /// Mark the field as explicitly null.
    pub fn set_null(&mut self) {
        *self = Self::Null;
    }

    /// Revert to the never-set state.
    pub fn unset(&mut self) {
        *self = Self::Absent;
    }

    /// Take the current state, leaving `Absent` behind.
    pub fn take(&mut self) -> Self {
        std::mem::take(self)
    }

    /// Borrowing view of the presence state.
    #[must_use]
    pub const fn as_ref(&self) -> Nullable<&T> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(v),
        }
    }

    /// Map the contained value, keeping `Absent` and `Null` as they are.
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Nullable<U> {
        match self {
            Self::Absent => Nullable::Absent,
            Self::Null => Nullable::Null,
            Self::Value(v) => Nullable::Value(f(v)),
        }
    }

    /// Collapse to an `Option`, losing the absent/null distinction.
    pub fn into_option(self) -> Option<T> {
        match self {
            Self::Value(v) => Some(v),
            Self::Absent | Self::Null => None,
        }
    }

    /// Nested-option form used by partial-update structs:
    /// `None` = absent, `Some(None)` = null, `Some(Some(v))` = value.
    pub fn into_patch(self) -> Option<Option<T>> {
        match self {
            Self::Absent => None,
            Self::Null => Some(None),
            Self::Value(v) => Some(Some(v)),
        }
    }
}

impl<T: Clone> Nullable<&T> {
    /// Clone the referenced value.
    #[must_use]
    pub fn cloned(self) -> Nullable<T> {
        self.map(Clone::clone)
    }
}

impl<T> Nullable<T>
where
    T: std::ops::Deref,
{
    /// Dereferenced view, e.g. `Nullable<String>` as `Nullable<&str>`.
    #[must_use]
    pub fn as_deref(&self) -> Nullable<&T::Target> {
        self.as_ref().map(|v| &**v)
    }
}

/// Setting from an `Option` counts as touching the field:
/// `None` becomes `Null`, not `Absent`.
impl<T> From<Option<T>> for Nullable<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::Null, Self::Value)
    }
}

impl<T> From<Option<Option<T>>> for Nullable<T> {
    fn from(patch: Option<Option<T>>) -> Self {
        match patch {
            None => Self::Absent,
            Some(None) => Self::Null,
            Some(Some(v)) => Self::Value(v),
        }
    }
}

impl<T: Serialize> Serialize for Nullable<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Value(v) => serializer.serialize_some(v),
            // Absent fields are normally skipped by the container; if one is
            // serialized anyway it still has to produce something.
            Self::Absent | Self::Null => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Nullable<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        // Only called when the key is present; missing keys go through
        // `#[serde(default)]` and stay `Absent`.
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Default, PartialEq, Serialize, Deserialize)]
    struct Probe {
        #[serde(default, skip_serializing_if = "Nullable::is_absent")]
        note: Nullable<String>,
    }

    #[test]
    fn test_default_is_absent() {
        let n: Nullable<u8> = Nullable::default();
        assert!(n.is_absent());
        assert!(!n.is_present());
        assert_eq!(n.value(), None);
    }

    #[test]
    fn test_state_transitions() {
        let mut n = Nullable::Absent;
        n.set_null();
        assert!(n.is_null());
        n.set(7);
        assert_eq!(n.value(), Some(&7));
        n.unset();
        assert!(n.is_absent());
    }

    #[test]
    fn test_from_option_touches_field() {
        assert_eq!(Nullable::from(None::<u8>), Nullable::Null);
        assert_eq!(Nullable::from(Some(3)), Nullable::Value(3));
    }

    #[test]
    fn test_patch_conversions() {
        assert_eq!(Nullable::<u8>::from(None::<Option<u8>>), Nullable::Absent);
        assert_eq!(Nullable::<u8>::from(Some(None)), Nullable::Null);
        assert_eq!(Nullable::Value(1).into_patch(), Some(Some(1)));
        assert_eq!(Nullable::<u8>::Null.into_patch(), Some(None));
        assert_eq!(Nullable::<u8>::Absent.into_patch(), None);
    }

    #[test]
    fn test_take_leaves_absent() {
        let mut n = Nullable::Value("x".to_string());
        let taken = n.take();
        assert_eq!(taken, Nullable::Value("x".to_string()));
        assert!(n.is_absent());
    }

    #[test]
    fn test_as_deref() {
        let n = Nullable::Value("abc".to_string());
        assert_eq!(n.as_deref(), Nullable::Value("abc"));
        assert_eq!(Nullable::<String>::Null.as_deref(), Nullable::Null);
    }

    #[test]
    fn test_serialize_states() {
        assert_eq!(serde_json::to_value(Probe::default()).unwrap(), json!({}));

        let null = Probe {
            note: Nullable::Null,
        };
        assert_eq!(serde_json::to_value(&null).unwrap(), json!({"note": null}));

        let valued = Probe {
            note: Nullable::Value("hi".to_string()),
        };
        assert_eq!(serde_json::to_value(&valued).unwrap(), json!({"note": "hi"}));
    }

    #[test]
    fn test_deserialize_states() {
        let absent: Probe = serde_json::from_value(json!({})).unwrap();
        assert!(absent.note.is_absent());

        let null: Probe = serde_json::from_value(json!({"note": null})).unwrap();
        assert!(null.note.is_null());

        let valued: Probe = serde_json::from_value(json!({"note": "hi"})).unwrap();
        assert_eq!(valued.note.value().map(String::as_str), Some("hi"));
    }
}
