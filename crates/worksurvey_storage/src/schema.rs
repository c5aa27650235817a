//! Column layout for tables.

use std::collections::HashMap;
use std::sync::Arc;

/// Position of a column within a [`Schema`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ColumnIndex(usize);

impl ColumnIndex {
    /// Returns the zero-based position.
    #[must_use]
    pub const fn position(self) -> usize {
        self.0
    }
}

/// Ordered, de-duplicated column names.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<Arc<str>>,
    index: HashMap<Arc<str>, usize>,
}

impl Schema {
    /// Creates a schema from column names.
    ///
    /// Repeated names keep their first position.
    #[must_use]
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        let mut schema = Self::default();
        for name in names {
            schema.push(name.into());
        }
        schema
    }

    /// Returns the number of columns.
    #[must_use]
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Returns true if the schema has no columns.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn columns(&self) -> &[Arc<str>] {
        &self.columns
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn index_of(&self, name: &str) -> Option<ColumnIndex> {
        self.index.get(name).copied().map(ColumnIndex)
    }

    /// Returns true if the schema has a column with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Returns the name of the column at `index`.
    #[must_use]
    pub fn name(&self, index: ColumnIndex) -> Option<&str> {
        self.columns.get(index.0).map(AsRef::as_ref)
    }

    /// Returns a schema with `name` appended, or unchanged if already present,
    /// along with the column's index.
    #[must_use]
    pub fn with_column(&self, name: &str) -> (Self, ColumnIndex) {
        let mut schema = self.clone();
        let idx = schema.insert(name);
        (schema, idx)
    }

    /// Appends `name` unless present and returns its index.
    pub fn insert(&mut self, name: &str) -> ColumnIndex {
        match self.index_of(name) {
            Some(idx) => idx,
            None => self.push(name.into()),
        }
    }

    fn push(&mut self, name: Arc<str>) -> ColumnIndex {
        if let Some(&idx) = self.index.get(&name) {
            return ColumnIndex(idx);
        }
        let idx = self.columns.len();
        self.index.insert(Arc::clone(&name), idx);
        self.columns.push(name);
        ColumnIndex(idx)
    }
}
