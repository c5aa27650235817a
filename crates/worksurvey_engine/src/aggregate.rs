//! Aggregation queries.
//!
//! Every query takes a table and column names and returns either a small
//! summary table or a scalar. Nothing here fails: an absent column or an
//! empty input produces the empty result (an empty table with the expected
//! columns, `0.0`, or `None`).
//!
//! Rows whose group key is missing are left out of every group. Groups are
//! ordered by key using [`Value::total_cmp`].

use std::cmp::Ordering;
use std::collections::HashMap;
use std::sync::Arc;

use worksurvey_foundation::Value;
use worksurvey_storage::columns::{COUNT, PERCENT};
use worksurvey_storage::{ColumnIndex, Row, Table};

/// Counts rows per distinct combination of the `by` columns.
///
/// Output columns are the `by` columns followed by `count`.
#[must_use]
pub fn grouped_count(table: &Table, by: &[&str]) -> Table {
    let groups = group_rows(table, by, |n: &mut usize, _| *n += 1).unwrap_or_default();
    let mut builder = Table::builder(by.iter().copied().chain([COUNT]));
    for (key, n) in groups {
        let mut cells = key;
        cells.push(Value::Int(i64::try_from(n).unwrap_or(i64::MAX)));
        builder.push(cells);
    }
    builder.build()
}

/// Appends a `percent` column holding each group's share of the total count.
///
/// When the total is zero every percentage is `0.0`.
#[must_use]
pub fn with_percent(counts: &Table) -> Table {
    let total: f64 = counts
        .column_values(COUNT)
        .map_or(0.0, |values| values.filter_map(Value::as_number).sum());
    let count = counts.column(COUNT);
    counts.with_column(PERCENT, |row| {
        let n = row.get(count).as_number().unwrap_or(0.0);
        Value::Float(if total > 0.0 { n / total * 100.0 } else { 0.0 })
    })
}

/// [`grouped_count`] followed by [`with_percent`].
#[must_use]
pub fn count_with_percent(table: &Table, by: &[&str]) -> Table {
    with_percent(&grouped_count(table, by))
}

/// Averages the numeric `value` column per group.
///
/// Non-numeric and missing values are skipped; a group with no numeric value
/// is omitted. Output columns are the `by` columns followed by `value`.
#[must_use]
pub fn grouped_mean(table: &Table, by: &[&str], value: &str) -> Table {
    grouped_reduce(table, by, value, mean_of)
}

/// Takes the median of the numeric `value` column per group.
///
/// Same shape and skipping rules as [`grouped_mean`].
#[must_use]
pub fn grouped_median(table: &Table, by: &[&str], value: &str) -> Table {
    grouped_reduce(table, by, value, median_of)
}

/// Returns the numeric values of `column`, skipping anything non-numeric.
#[must_use]
pub fn numeric_values(table: &Table, column: &str) -> Vec<f64> {
    table
        .column_values(column)
        .map(|values| values.filter_map(Value::to_numeric).collect())
        .unwrap_or_default()
}

/// Mean of the numeric values in `column`, or `0.0` if there are none.
#[must_use]
pub fn mean(table: &Table, column: &str) -> f64 {
    mean_of(&mut numeric_values(table, column))
}

/// Median of the numeric values in `column`, or `0.0` if there are none.
#[must_use]
pub fn median(table: &Table, column: &str) -> f64 {
    median_of(&mut numeric_values(table, column))
}

/// Most frequent non-missing value of `column`, in its text form.
///
/// Ties go to the value seen first. Returns `None` for an empty table or an
/// absent column.
#[must_use]
pub fn top_value(table: &Table, column: &str) -> Option<Arc<str>> {
    let mut index: HashMap<Arc<str>, usize> = HashMap::new();
    let mut counts: Vec<(Arc<str>, usize)> = Vec::new();
    for key in table.column_values(column)?.filter_map(Value::to_key) {
        let slot = *index.entry(Arc::clone(&key)).or_insert_with(|| {
            counts.push((key, 0));
            counts.len() - 1
        });
        counts[slot].1 += 1;
    }

    let mut best: Option<&(Arc<str>, usize)> = None;
    for entry in &counts {
        if best.is_none_or(|&(_, n)| entry.1 > n) {
            best = Some(entry);
        }
    }
    best.map(|(key, _)| Arc::clone(key))
}

#[allow(clippy::ptr_arg)]
#[allow(clippy::cast_precision_loss)]
fn mean_of(values: &mut Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

#[allow(clippy::ptr_arg)]
fn median_of(values: &mut Vec<f64>) -> f64 {
    if values.is_empty() {
        return 0.0;
    }
    values.sort_by(f64::total_cmp);
    let mid = values.len() / 2;
    if values.len() % 2 == 0 {
        (values[mid - 1] + values[mid]) / 2.0
    } else {
        values[mid]
    }
}

fn grouped_reduce(
    table: &Table,
    by: &[&str],
    value: &str,
    mut reduce: impl FnMut(&mut Vec<f64>) -> f64,
) -> Table {
    let mut builder = Table::builder(by.iter().copied().chain([value]));
    let Some(column) = table.column(value) else {
        return builder.build();
    };
    let groups = group_rows(table, by, |values: &mut Vec<f64>, row| {
        values.extend(row.get(Some(column)).to_numeric());
    })
    .unwrap_or_default();

    for (key, mut values) in groups {
        if values.is_empty() {
            continue;
        }
        let mut cells = key;
        cells.push(Value::Float(reduce(&mut values)));
        builder.push(cells);
    }
    builder.build()
}

/// Folds rows into groups keyed by the `by` columns, sorted by key.
///
/// Returns `None` if any `by` column is absent.
fn group_rows<A: Default>(
    table: &Table,
    by: &[&str],
    mut fold: impl FnMut(&mut A, &Row),
) -> Option<Vec<(Vec<Value>, A)>> {
    let columns = by
        .iter()
        .map(|name| table.column(name))
        .collect::<Option<Vec<ColumnIndex>>>()?;

    let mut index: HashMap<Vec<Value>, usize> = HashMap::new();
    let mut groups: Vec<(Vec<Value>, A)> = Vec::new();
    for row in table.rows() {
        let key: Vec<Value> = columns.iter().map(|&c| row.get(Some(c)).clone()).collect();
        if key.iter().any(Value::is_missing) {
            continue;
        }
        let slot = *index.entry(key.clone()).or_insert_with(|| {
            groups.push((key, A::default()));
            groups.len() - 1
        });
        fold(&mut groups[slot].1, row);
    }

    groups.sort_by(|(a, _), (b, _)| compare_keys(a, b));
    Some(groups)
}

fn compare_keys(a: &[Value], b: &[Value]) -> Ordering {
    a.iter()
        .zip(b)
        .map(|(x, y)| x.total_cmp(y))
        .find(|ordering| ordering.is_ne())
        .unwrap_or(Ordering::Equal)
}
