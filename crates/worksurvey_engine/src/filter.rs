//! Filter engine.
//!
//! Categorical filtering runs against the base table: within one field the
//! selected values are alternatives (OR), and separate fields must all match
//! (AND). Long tables are never filtered categorically; they are restricted
//! to the response ids that survived the base-table filter.

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;
use worksurvey_foundation::{Error, Result, SharedSet, Value};
use worksurvey_storage::columns;
use worksurvey_storage::{ColumnIndex, Table};

/// A categorical attribute a respondent can be filtered on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum FieldKey {
    /// Respondent gender.
    Gender,
    /// Derived age bucket.
    AgeGroup,
    /// Broad industry.
    Industry,
    /// Organisation size band.
    OrgSize,
    /// Metro or regional location.
    Location,
}

impl FieldKey {
    /// Every field, in filter-panel order.
    pub const ALL: [Self; 5] = [
        Self::Gender,
        Self::AgeGroup,
        Self::Industry,
        Self::OrgSize,
        Self::Location,
    ];

    /// Returns the base-table column this field reads.
    #[must_use]
    pub const fn column(self) -> &'static str {
        match self {
            Self::Gender => columns::GENDER,
            Self::AgeGroup => columns::AGE_GROUP,
            Self::Industry => columns::INDUSTRY,
            Self::OrgSize => columns::ORG_SIZE,
            Self::Location => columns::LOCATION,
        }
    }

    /// Returns the key callers use to name this field.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Gender => "gender",
            Self::AgeGroup => "age_group",
            Self::Industry => "industry",
            Self::OrgSize => "org_size",
            Self::Location => "location",
        }
    }

    /// Returns the filter-panel label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Gender => "Gender",
            Self::AgeGroup => "Age Group",
            Self::Industry => "Industry",
            Self::OrgSize => "Org Size",
            Self::Location => "Location",
        }
    }
}

impl fmt::Display for FieldKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for FieldKey {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|field| field.name() == s)
            .ok_or_else(|| Error::unknown_filter_field(s))
    }
}

/// The selected values for one field.
///
/// A lone value and a one-element list mean the same thing, and an empty
/// list means the same as no selection.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(untagged))]
pub enum Selection {
    /// No restriction.
    #[default]
    All,
    /// A single selected value.
    One(String),
    /// Any of several selected values.
    Many(Vec<String>),
}

impl Selection {
    /// Returns the selected values; empty means unrestricted.
    #[must_use]
    pub fn values(&self) -> &[String] {
        match self {
            Self::All => &[],
            Self::One(value) => std::slice::from_ref(value),
            Self::Many(values) => values,
        }
    }

    /// Returns true if this selection does not restrict anything.
    #[must_use]
    pub fn is_all(&self) -> bool {
        self.values().is_empty()
    }
}

impl From<&str> for Selection {
    fn from(value: &str) -> Self {
        Self::One(value.to_string())
    }
}

impl From<String> for Selection {
    fn from(value: String) -> Self {
        Self::One(value)
    }
}

impl From<Vec<String>> for Selection {
    fn from(values: Vec<String>) -> Self {
        Self::Many(values)
    }
}

impl From<Vec<&str>> for Selection {
    fn from(values: Vec<&str>) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Selection {
    fn from(values: [&str; N]) -> Self {
        Self::Many(values.into_iter().map(str::to_string).collect())
    }
}

impl<T: Into<Selection>> From<Option<T>> for Selection {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::All, Into::into)
    }
}

/// A set of filter selections, at most one per field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct Criteria(BTreeMap<FieldKey, Selection>);

impl Criteria {
    /// Creates criteria that match everything.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder method to set the selection for one field.
    #[must_use]
    pub fn with(mut self, field: FieldKey, selection: impl Into<Selection>) -> Self {
        self.0.insert(field, selection.into());
        self
    }

    /// Parses caller-supplied `(field name, selection)` pairs.
    ///
    /// # Errors
    ///
    /// Returns an error if a name is not one of the filter fields, or if the
    /// same field appears twice.
    pub fn parse<I, K, S>(pairs: I) -> Result<Self>
    where
        I: IntoIterator<Item = (K, S)>,
        K: AsRef<str>,
        S: Into<Selection>,
    {
        let mut criteria = BTreeMap::new();
        for (name, selection) in pairs {
            let name = name.as_ref();
            let field: FieldKey = name.parse()?;
            if criteria.insert(field, selection.into()).is_some() {
                return Err(Error::duplicate_filter_field(name));
            }
        }
        Ok(Self(criteria))
    }

    /// Returns the selection for `field`; an unset field selects all.
    #[must_use]
    pub fn get(&self, field: FieldKey) -> &Selection {
        static ALL: Selection = Selection::All;
        self.0.get(&field).unwrap_or(&ALL)
    }

    /// Returns true if no field restricts anything.
    #[must_use]
    pub fn is_unrestricted(&self) -> bool {
        self.0.values().all(Selection::is_all)
    }

    /// Iterates over the fields that were set, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &Selection)> {
        self.0.iter().map(|(field, selection)| (*field, selection))
    }
}

/// Returns the rows of `table` that satisfy every restricting field.
///
/// A field whose column is absent from `table` places no restriction. Row
/// order and all columns are preserved and `table` is left untouched.
#[must_use]
pub fn apply(table: &Table, criteria: &Criteria) -> Table {
    let restrictions: Vec<(ColumnIndex, &[String])> = criteria
        .iter()
        .filter_map(|(field, selection)| {
            let values = selection.values();
            if values.is_empty() {
                return None;
            }
            table.column(field.column()).map(|column| (column, values))
        })
        .collect();
    if restrictions.is_empty() {
        return table.clone();
    }

    let filtered = table.filter_rows(|row| {
        restrictions.iter().all(|&(column, values)| {
            let cell = row.get(Some(column));
            values.iter().any(|value| cell.matches_key(value))
        })
    });
    debug!(
        fields = restrictions.len(),
        rows_in = table.len(),
        rows_out = filtered.len(),
        "applied filter criteria"
    );
    filtered
}

/// The distinct values offered for each filter field.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct FilterOptions(BTreeMap<FieldKey, Vec<Arc<str>>>);

impl FilterOptions {
    /// Returns the options for `field`, sorted as text.
    #[must_use]
    pub fn get(&self, field: FieldKey) -> &[Arc<str>] {
        self.0.get(&field).map_or(&[], Vec::as_slice)
    }

    /// Iterates over every field's options, in field order.
    pub fn iter(&self) -> impl Iterator<Item = (FieldKey, &[Arc<str>])> {
        self.0.iter().map(|(field, values)| (*field, values.as_slice()))
    }
}

/// Collects the sorted distinct non-missing values of each filter field.
///
/// A field whose column is absent gets an empty option list.
#[must_use]
pub fn filter_options(table: &Table) -> FilterOptions {
    let options = FieldKey::ALL
        .into_iter()
        .map(|field| {
            let values: BTreeSet<Arc<str>> = table
                .column_values(field.column())
                .map(|cells| cells.filter_map(Value::to_key).collect())
                .unwrap_or_default();
            (field, values.into_iter().collect())
        })
        .collect();
    FilterOptions(options)
}

/// The set of response ids present in a table.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResponseIds(SharedSet<Arc<str>>);

impl ResponseIds {
    /// Collects the ids in `table`'s `response_id` column.
    #[must_use]
    pub fn from_table(table: &Table) -> Self {
        let ids = table
            .column_values(columns::RESPONSE_ID)
            .map_or_else(SharedSet::new, |cells| {
                cells.filter_map(Value::to_key).collect()
            });
        Self(ids)
    }

    /// Returns the number of distinct ids.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no ids.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns true if `id` is in the set.
    #[must_use]
    pub fn contains(&self, id: &str) -> bool {
        self.0.contains(&Arc::from(id))
    }

    /// Returns true if every id here is also in `other`.
    #[must_use]
    pub fn is_subset(&self, other: &Self) -> bool {
        self.0.is_subset(&other.0)
    }
}

/// Keeps the rows of `table` whose `response_id` is in `ids`.
///
/// A table without a `response_id` column keeps no rows.
#[must_use]
pub fn restrict_to_ids(table: &Table, ids: &ResponseIds) -> Table {
    let Some(column) = table.column(columns::RESPONSE_ID) else {
        return table.filter_rows(|_| false);
    };
    table.filter_rows(|row| {
        row.get(Some(column))
            .to_key()
            .is_some_and(|id| ids.0.contains(&id))
    })
}
