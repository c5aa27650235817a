//! Shared proptest strategies for raw survey tables.

use proptest::prelude::*;
use worksurvey_storage::columns::{self, support, time};
use worksurvey_storage::{SampleSurvey, Table};

/// Columns a generated raw table may lack.
pub const OPTIONAL_COLUMNS: [&str; 14] = [
    columns::RESPONSE_ID,
    columns::BIRTH_YEAR,
    columns::GENDER,
    columns::ORG_SIZE,
    columns::LOCATION,
    columns::REMOTE_PCT_LAST_YEAR,
    columns::REMOTE_PREF_PCT_LAST_YEAR,
    columns::REMOTE_PCT_LAST_3_MONTHS,
    columns::REMOTE_PREF_PCT_LAST_3_MONTHS,
    columns::REMOTE_PREF_PCT_FUTURE,
    support::LAST_YEAR_ENCOURAGED,
    support::FUTURE_CHOICE,
    time::ONSITE_COMMUTE,
    time::REMOTE_COMMUTE,
];

/// Rebuilds `table` without the named columns.
pub fn without_columns(table: &Table, dropped: &[&str]) -> Table {
    Table::from_records(table.rows().map(|row| {
        table
            .columns()
            .iter()
            .zip(row.values())
            .filter(|(name, _)| !dropped.contains(&name.as_ref()))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect::<Vec<_>>()
    }))
}

/// A synthetic raw table with random size, missingness, and absent columns.
pub fn raw_table() -> impl Strategy<Value = Table> {
    (
        1usize..40,
        any::<u64>(),
        0.0f64..0.6,
        prop::collection::vec(any::<bool>(), OPTIONAL_COLUMNS.len()),
    )
        .prop_map(|(respondents, seed, missing_rate, keep)| {
            let table = SampleSurvey::new(respondents)
                .with_seed(seed)
                .with_missing_rate(missing_rate)
                .generate();
            let dropped: Vec<&str> = OPTIONAL_COLUMNS
                .iter()
                .zip(keep)
                .filter(|(_, keep)| !keep)
                .map(|(column, _)| *column)
                .collect();
            without_columns(&table, &dropped)
        })
}
