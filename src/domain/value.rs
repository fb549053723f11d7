//! Tri-state optional values
//!
//! Declarative configuration distinguishes three states for an optional
//! attribute: the user did not set it, it is set to something that is not
//! known yet (for example a reference to a resource created in the same
//! apply), or it holds a concrete value. Filtering treats the first two
//! identically; collapsing `Unknown` into a sentinel value would make an
//! in-flight reference fail exact matches before it resolves.

use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// An optional scalar attribute with distinguishable unset/unknown states.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum OptionalValue<T> {
    /// No user-supplied value
    #[default]
    Unset,

    /// Value exists but is not known until apply time
    Unknown,

    /// Concrete value
    Known(T),
}

/// Optional string attribute
pub type OptionalString = OptionalValue<String>;

/// Optional boolean attribute
pub type OptionalBool = OptionalValue<bool>;

/// Optional 64-bit integer attribute
pub type OptionalInt64 = OptionalValue<i64>;

impl<T> OptionalValue<T> {
    /// Create a known value
    pub fn known(value: impl Into<T>) -> Self {
        Self::Known(value.into())
    }

    /// True when no value was supplied
    pub fn is_unset(&self) -> bool {
        matches!(self, Self::Unset)
    }

    /// True when the value is not yet resolved
    pub fn is_unknown(&self) -> bool {
        matches!(self, Self::Unknown)
    }

    /// True when the value carries no usable constraint
    pub fn is_null_or_unknown(&self) -> bool {
        !matches!(self, Self::Known(_))
    }

    /// Borrow the concrete value, if any
    pub fn as_known(&self) -> Option<&T> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }

    /// Convert into the concrete value, if any
    pub fn into_known(self) -> Option<T> {
        match self {
            Self::Known(value) => Some(value),
            _ => None,
        }
    }

    /// Map the concrete value, preserving unset/unknown
    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> OptionalValue<U> {
        match self {
            Self::Unset => OptionalValue::Unset,
            Self::Unknown => OptionalValue::Unknown,
            Self::Known(value) => OptionalValue::Known(f(value)),
        }
    }
}

impl OptionalValue<String> {
    /// Borrow the concrete string, if any
    pub fn as_deref(&self) -> Option<&str> {
        self.as_known().map(String::as_str)
    }
}

impl<T> From<Option<T>> for OptionalValue<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Self::Known(value),
            None => Self::Unset,
        }
    }
}

impl From<&str> for OptionalValue<String> {
    fn from(value: &str) -> Self {
        Self::Known(value.to_string())
    }
}

impl From<String> for OptionalValue<String> {
    fn from(value: String) -> Self {
        Self::Known(value)
    }
}

impl From<bool> for OptionalValue<bool> {
    fn from(value: bool) -> Self {
        Self::Known(value)
    }
}

impl From<i64> for OptionalValue<i64> {
    fn from(value: i64) -> Self {
        Self::Known(value)
    }
}

impl<T: Serialize> Serialize for OptionalValue<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Known(value) => value.serialize(serializer),
            _ => serializer.serialize_none(),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for OptionalValue<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Option::<T>::deserialize(deserializer).map(Self::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_unset() {
        let value: OptionalString = OptionalValue::default();
        assert!(value.is_unset());
        assert!(value.is_null_or_unknown());
        assert_eq!(value.as_known(), None);
    }

    #[test]
    fn unknown_carries_no_constraint() {
        let value: OptionalBool = OptionalValue::Unknown;
        assert!(value.is_unknown());
        assert!(!value.is_unset());
        assert!(value.is_null_or_unknown());
    }

    #[test]
    fn known_values() {
        let value: OptionalInt64 = OptionalValue::Known(42);
        assert_eq!(value.as_known(), Some(&42));
        assert!(!value.is_null_or_unknown());

        let value: OptionalString = "https".into();
        assert_eq!(value.as_deref(), Some("https"));
        assert_eq!(value.map(|s| s.len()), OptionalValue::Known(5));
    }

    #[test]
    fn serde_null_and_missing_are_unset() {
        #[derive(Deserialize)]
        struct Probe {
            #[serde(default)]
            a: OptionalString,
            #[serde(default)]
            b: OptionalString,
            #[serde(default)]
            c: OptionalBool,
        }

        let probe: Probe = serde_json::from_str(r#"{"a": null, "c": false}"#).unwrap();
        assert!(probe.a.is_unset());
        assert!(probe.b.is_unset());
        assert_eq!(probe.c, OptionalValue::Known(false));
    }

    #[test]
    fn serde_unknown_serializes_as_null() {
        let unknown: OptionalString = OptionalValue::Unknown;
        assert_eq!(serde_json::to_string(&unknown).unwrap(), "null");
        let known: OptionalString = "x".into();
        assert_eq!(serde_json::to_string(&known).unwrap(), "\"x\"");
    }
}
