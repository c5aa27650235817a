//! Headline numbers shown above each view's charts.

use std::fmt;
use std::sync::Arc;

/// A KPI value together with how it is displayed.
#[derive(Clone, Debug, PartialEq)]
pub enum KpiValue {
    /// A row count, shown with thousands separators.
    Count(usize),
    /// A plain number with a fixed number of decimals.
    Number {
        /// The value.
        value: f64,
        /// Digits after the decimal point.
        decimals: usize,
    },
    /// A percentage with a fixed number of decimals and a `%` suffix.
    Percent {
        /// The value, already scaled to 0..100.
        value: f64,
        /// Digits after the decimal point.
        decimals: usize,
    },
    /// A categorical value; `None` is shown as `N/A`.
    Text(Option<Arc<str>>),
}

impl KpiValue {
    /// Returns the numeric value, if this KPI has one.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Self::Count(n) => Some(*n as f64),
            Self::Number { value, .. } | Self::Percent { value, .. } => Some(*value),
            Self::Text(_) => None,
        }
    }
}

impl fmt::Display for KpiValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Count(n) => f.write_str(&thousands(*n)),
            Self::Number { value, decimals } => write!(f, "{value:.decimals$}"),
            Self::Percent { value, decimals } => write!(f, "{value:.decimals$}%"),
            Self::Text(Some(text)) => f.write_str(text),
            Self::Text(None) => f.write_str("N/A"),
        }
    }
}

fn thousands(n: usize) -> String {
    let digits = n.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, digit) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(digit);
    }
    out
}

/// A labelled KPI.
#[derive(Clone, Debug, PartialEq)]
pub struct Kpi {
    /// Card label.
    pub label: &'static str,
    /// Card value.
    pub value: KpiValue,
}

impl Kpi {
    /// A row-count KPI.
    #[must_use]
    pub fn count(label: &'static str, n: usize) -> Self {
        Self {
            label,
            value: KpiValue::Count(n),
        }
    }

    /// A plain-number KPI.
    #[must_use]
    pub fn number(label: &'static str, value: f64, decimals: usize) -> Self {
        Self {
            label,
            value: KpiValue::Number { value, decimals },
        }
    }

    /// A percentage KPI.
    #[must_use]
    pub fn percent(label: &'static str, value: f64, decimals: usize) -> Self {
        Self {
            label,
            value: KpiValue::Percent { value, decimals },
        }
    }

    /// A categorical KPI.
    #[must_use]
    pub fn text(label: &'static str, value: Option<Arc<str>>) -> Self {
        Self {
            label,
            value: KpiValue::Text(value),
        }
    }
}

impl fmt::Display for Kpi {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.label, self.value)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::{Serialize, SerializeStruct, Serializer};

    use super::{Kpi, KpiValue};

    impl Serialize for KpiValue {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.collect_str(self)
        }
    }

    impl Serialize for Kpi {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Kpi", 2)?;
            state.serialize_field("label", self.label)?;
            state.serialize_field("value", &self.value)?;
            state.end()
        }
    }
}
