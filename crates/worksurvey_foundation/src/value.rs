//! Scalar cell type for all survey tables.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// A single table cell.
///
/// Survey data is either numeric, a categorical string, or missing.
/// Values are immutable and cheaply cloneable.
#[derive(Clone)]
pub enum Value {
    /// The missing value.
    Nil,
    /// 64-bit signed integer.
    Int(i64),
    /// 64-bit floating point.
    Float(f64),
    /// Categorical or free-text string.
    String(Arc<str>),
}

/// A shared missing value, handed out by absent-column lookups.
pub static NIL: Value = Value::Nil;

impl Value {
    /// Returns true if this value should be treated as missing.
    ///
    /// Loaders commonly encode gaps as `NaN`, so a NaN float is missing too.
    #[must_use]
    pub fn is_missing(&self) -> bool {
        match self {
            Self::Nil => true,
            Self::Float(n) => n.is_nan(),
            _ => false,
        }
    }

    /// Attempts to extract a number as f64 (converts int to float).
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Int(n) => Some(*n as f64),
            Self::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Coerces this value to a finite-or-infinite number, never NaN.
    ///
    /// Numeric strings (surrounding whitespace ignored) are parsed. Anything
    /// else, including NaN, yields `None`.
    #[must_use]
    pub fn to_numeric(&self) -> Option<f64> {
        let n = match self {
            Self::String(s) => s.trim().parse::<f64>().ok()?,
            other => other.as_number()?,
        };
        (!n.is_nan()).then_some(n)
    }

    /// Returns the categorical string form of this value.
    ///
    /// Strings are returned as-is and numbers in their display form.
    /// Missing values have no key.
    #[must_use]
    pub fn to_key(&self) -> Option<Arc<str>> {
        match self {
            _ if self.is_missing() => None,
            Self::String(s) => Some(Arc::clone(s)),
            other => Some(other.to_string().into()),
        }
    }

    /// Returns true if this value's categorical form equals `key`.
    #[must_use]
    pub fn matches_key(&self, key: &str) -> bool {
        match self {
            Self::String(s) => s.as_ref() == key,
            Self::Nil => false,
            other => other.to_key().is_some_and(|k| k.as_ref() == key),
        }
    }

    /// Total ordering used to sort group keys.
    ///
    /// Missing values sort first, then numbers (compared numerically across
    /// `Int` and `Float`), then strings.
    #[must_use]
    pub fn total_cmp(&self, other: &Self) -> Ordering {
        match (self.as_number(), other.as_number()) {
            (Some(a), Some(b)) if !a.is_nan() && !b.is_nan() => return a.total_cmp(&b),
            _ => {}
        }
        match (self, other) {
            (a, b) if a.is_missing() && b.is_missing() => Ordering::Equal,
            (a, _) if a.is_missing() => Ordering::Less,
            (_, b) if b.is_missing() => Ordering::Greater,
            (Self::String(a), Self::String(b)) => a.as_ref().cmp(b.as_ref()),
            (Self::String(_), _) => Ordering::Greater,
            (_, Self::String(_)) => Ordering::Less,
            _ => Ordering::Equal,
        }
    }
}

// Implement PartialEq manually to handle float comparison
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Nil, Self::Nil) => true,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
            (Self::String(a), Self::String(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Self::Nil => {}
            Self::Int(n) => n.hash(state),
            Self::Float(n) => n.to_bits().hash(state),
            Self::String(s) => s.hash(state),
        }
    }
}

impl PartialOrd for Value {
    #[allow(clippy::cast_precision_loss)]
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        match (self, other) {
            (Self::Nil, Self::Nil) => Some(Ordering::Equal),
            (Self::Int(a), Self::Int(b)) => a.partial_cmp(b),
            (Self::Float(a), Self::Float(b)) => a.partial_cmp(b),
            (Self::Int(a), Self::Float(b)) => (*a as f64).partial_cmp(b),
            (Self::Float(a), Self::Int(b)) => a.partial_cmp(&(*b as f64)),
            (Self::String(a), Self::String(b)) => a.partial_cmp(b),
            _ => None,
        }
    }
}

impl fmt::Debug for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => write!(f, "nil"),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s:?}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Nil => Ok(()),
            Self::Int(n) => write!(f, "{n}"),
            Self::Float(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "{s}"),
        }
    }
}

// Convenience From implementations

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Self::Int(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Self::Int(i64::from(n))
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Self::Float(n)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Self::String(s.into())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Self::String(s.into())
    }
}

impl From<Arc<str>> for Value {
    fn from(s: Arc<str>) -> Self {
        Self::String(s)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Self::Nil, Into::into)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt;

    use serde::de::{self, Deserialize, Deserializer, Visitor};
    use serde::ser::{Serialize, Serializer};

    use super::Value;

    impl Serialize for Value {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            match self {
                Value::Nil => serializer.serialize_none(),
                Value::Int(n) => serializer.serialize_i64(*n),
                Value::Float(n) if n.is_nan() => serializer.serialize_none(),
                Value::Float(n) => serializer.serialize_f64(*n),
                Value::String(s) => serializer.serialize_str(s),
            }
        }
    }

    struct ValueVisitor;

    impl Visitor<'_> for ValueVisitor {
        type Value = Value;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("null, a number, or a string")
        }

        fn visit_unit<E: de::Error>(self) -> Result<Value, E> {
            Ok(Value::Nil)
        }

        fn visit_none<E: de::Error>(self) -> Result<Value, E> {
            Ok(Value::Nil)
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<Value, E> {
            Ok(Value::Int(v))
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<Value, E> {
            i64::try_from(v)
                .map(Value::Int)
                .map_err(|_| E::custom(format!("integer {v} out of range")))
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<Value, E> {
            Ok(Value::Float(v))
        }

        fn visit_str<E: de::Error>(self, v: &str) -> Result<Value, E> {
            Ok(Value::from(v))
        }
    }

    impl<'de> Deserialize<'de> for Value {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_any(ValueVisitor)
        }
    }
}
