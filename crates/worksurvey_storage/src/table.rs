//! Immutable tables with structural sharing.
//!
//! A [`Table`] is a shared [`Schema`] plus a persistent vector of [`Row`]s.
//! Every operation returns a new table; inputs are never mutated, and
//! row-subset operations share row storage with their source. This makes
//! tables safe to hand to any number of concurrent readers without locking.
//!
//! Column lookups are optional throughout: asking for a column the table
//! does not have yields [`Value::Nil`] (or `None` for whole-column access)
//! instead of failing, so callers degrade gracefully when a survey export
//! lacks a column.

use std::fmt;
use std::sync::Arc;

use worksurvey_foundation::value::NIL;
use worksurvey_foundation::{SharedVec, Value};

use crate::schema::{ColumnIndex, Schema};

/// One table row, positionally aligned with its table's [`Schema`].
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Row(Arc<[Value]>);

impl Row {
    /// Creates a row from its cells.
    #[must_use]
    pub fn new(values: Vec<Value>) -> Self {
        Self(values.into())
    }

    /// Returns the number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the row has no cells.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the cell for an optional column.
    ///
    /// An absent column (`None`) or an out-of-range index reads as nil.
    #[must_use]
    pub fn get(&self, column: Option<ColumnIndex>) -> &Value {
        column
            .and_then(|c| self.0.get(c.position()))
            .unwrap_or(&NIL)
    }

    /// Returns all cells in column order.
    #[must_use]
    pub fn values(&self) -> &[Value] {
        &self.0
    }
}

impl fmt::Debug for Row {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.0.iter()).finish()
    }
}

/// An immutable table of survey data.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Table {
    schema: Arc<Schema>,
    rows: SharedVec<Row>,
}

impl Table {
    /// Creates an empty table with the given schema.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema: Arc::new(schema),
            rows: SharedVec::new(),
        }
    }

    /// Creates an empty table with the named columns.
    #[must_use]
    pub fn empty(columns: &[&str]) -> Self {
        Self::new(Schema::new(columns.iter().copied()))
    }

    /// Starts building a table with the named columns.
    #[must_use]
    pub fn builder<I, S>(columns: I) -> TableBuilder
    where
        I: IntoIterator<Item = S>,
        S: Into<Arc<str>>,
    {
        TableBuilder::new(Schema::new(columns))
    }

    /// Creates a table from map-shaped records.
    ///
    /// Columns are the union of all record keys in first-seen order. A key a
    /// record does not carry reads as nil in that row.
    #[must_use]
    pub fn from_records<R, K, V>(records: impl IntoIterator<Item = R>) -> Self
    where
        R: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Value>,
    {
        let mut schema = Schema::default();
        let mut cells: Vec<Vec<(ColumnIndex, Value)>> = Vec::new();
        for record in records {
            let mut row = Vec::new();
            for (key, value) in record {
                let idx = schema.insert(key.as_ref());
                row.push((idx, value.into()));
            }
            cells.push(row);
        }

        let mut builder = TableBuilder::new(schema);
        let width = builder.schema.len();
        for row in cells {
            let mut values = vec![Value::Nil; width];
            for (idx, value) in row {
                values[idx.position()] = value;
            }
            builder.push(values);
        }
        builder.build()
    }

    /// Returns the table's schema.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Returns the column names in order.
    #[must_use]
    pub fn columns(&self) -> &[Arc<str>] {
        self.schema.columns()
    }

    /// Returns the number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Returns an iterator over the rows in order.
    pub fn rows(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }

    /// Returns the row at `index`.
    #[must_use]
    pub fn row(&self, index: usize) -> Option<&Row> {
        self.rows.get(index)
    }

    /// Looks up a column by name.
    #[must_use]
    pub fn column(&self, name: &str) -> Option<ColumnIndex> {
        self.schema.index_of(name)
    }

    /// Returns true if the table has a column with this name.
    #[must_use]
    pub fn has_column(&self, name: &str) -> bool {
        self.schema.contains(name)
    }

    /// Returns the cell at `row` in the named column, or nil if either is absent.
    #[must_use]
    pub fn value(&self, row: usize, name: &str) -> &Value {
        self.row(row).map_or(&NIL, |r| r.get(self.column(name)))
    }

    /// Returns the named column's cells in row order, or `None` if the table
    /// has no such column.
    #[must_use]
    pub fn column_values(&self, name: &str) -> Option<impl Iterator<Item = &Value>> {
        let idx = self.column(name)?;
        Some(self.rows.iter().map(move |row| row.get(Some(idx))))
    }

    /// Returns the rows that satisfy `keep`, preserving order and all columns.
    ///
    /// The result shares its schema and row storage with `self`.
    #[must_use]
    pub fn filter_rows(&self, keep: impl FnMut(&Row) -> bool) -> Self {
        Self {
            schema: Arc::clone(&self.schema),
            rows: self.rows.retain(keep),
        }
    }

    /// Returns a table with the named column set to `compute(row)` for every
    /// row. An existing column of that name is replaced in place; otherwise
    /// the column is appended.
    #[must_use]
    pub fn with_column(&self, name: &str, mut compute: impl FnMut(&Row) -> Value) -> Self {
        let (schema, idx) = self.schema.with_column(name);
        let width = schema.len();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                let mut values = row.values().to_vec();
                values.resize(width, Value::Nil);
                values[idx.position()] = compute(row);
                Row::new(values)
            })
            .collect();
        Self {
            schema: Arc::new(schema),
            rows,
        }
    }

    /// Returns the first row whose `key_column` cell matches `key`.
    #[must_use]
    pub fn find(&self, key_column: &str, key: &str) -> Option<&Row> {
        let idx = self.column(key_column)?;
        self.rows
            .iter()
            .find(|row| row.get(Some(idx)).matches_key(key))
    }
}

/// Incrementally builds a [`Table`].
#[derive(Debug)]
pub struct TableBuilder {
    schema: Schema,
    rows: Vec<Row>,
}

impl TableBuilder {
    /// Creates a builder for the given schema.
    #[must_use]
    pub fn new(schema: Schema) -> Self {
        Self {
            schema,
            rows: Vec::new(),
        }
    }

    /// Returns the schema rows are being built against.
    #[must_use]
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// Appends a row, padding with nil or truncating to the schema width.
    pub fn push(&mut self, mut values: Vec<Value>) {
        values.resize(self.schema.len(), Value::Nil);
        self.rows.push(Row::new(values));
    }

    /// Returns the number of rows pushed so far.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Returns true if no rows have been pushed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Finishes the table.
    #[must_use]
    pub fn build(self) -> Table {
        Table {
            schema: Arc::new(self.schema),
            rows: self.rows.into_iter().collect(),
        }
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use serde::ser::{Serialize, SerializeSeq, SerializeStruct, Serializer};

    use super::{Row, Table};

    impl Serialize for Row {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for value in self.values() {
                seq.serialize_element(value)?;
            }
            seq.end()
        }
    }

    struct Rows<'a>(&'a Table);

    impl Serialize for Rows<'_> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.0.len()))?;
            for row in self.0.rows() {
                seq.serialize_element(row)?;
            }
            seq.end()
        }
    }

    impl Serialize for Table {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut state = serializer.serialize_struct("Table", 2)?;
            state.serialize_field("columns", self.columns())?;
            state.serialize_field("rows", &Rows(self))?;
            state.end()
        }
    }
}
