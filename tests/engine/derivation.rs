//! Integration tests for the derivation engine
//!
//! Tests response ids, age banding, long-table shapes, gap complete-case
//! filtering, and unavailability of tables whose sources are absent.

use proptest::prelude::*;
use worksurvey_engine::aggregate::grouped_count;
use worksurvey_engine::labels::{GAP_SOURCE_COLUMNS, PERIOD_COLUMNS};
use worksurvey_engine::{DerivedTables, ResponseIds, SurveyConfig, derive};
use worksurvey_foundation::Value;
use worksurvey_storage::columns::{
    AGE, AGE_GROUP, BIRTH_YEAR, COUNT, GAP, GENDER, PERIOD_GAP, REMOTE_PCT_LAST_3_MONTHS,
    REMOTE_PCT_LAST_YEAR, REMOTE_PREF_PCT_FUTURE, REMOTE_PREF_PCT_LAST_3_MONTHS,
    REMOTE_PREF_PCT_LAST_YEAR, RESPONSE_ID,
};
use worksurvey_storage::{SampleSurvey, Table};

use crate::strategies::{raw_table, without_columns};

fn derive_default(raw: &Table) -> DerivedTables {
    derive(raw, &SurveyConfig::default())
}

fn texts(table: &Table, column: &str) -> Vec<String> {
    table
        .column_values(column)
        .map(|values| values.map(ToString::to_string).collect())
        .unwrap_or_default()
}

// =============================================================================
// Base Table
// =============================================================================

#[test]
fn ages_and_groups_at_survey_year() {
    let raw = Table::from_records(vec![
        vec![(BIRTH_YEAR, Value::Int(1990))],
        vec![(BIRTH_YEAR, Value::Int(1985))],
        vec![(BIRTH_YEAR, Value::Nil)],
    ]);
    let base = derive_default(&raw).base;

    assert_eq!(base.value(0, AGE), &Value::Float(30.0));
    assert_eq!(base.value(1, AGE), &Value::Float(35.0));
    assert_eq!(base.value(2, AGE), &Value::Nil);
    assert_eq!(texts(&base, AGE_GROUP), vec!["25-34", "35-44", ""]);
}

#[test]
fn age_group_count_skips_unbucketed() {
    let raw = Table::from_records(vec![
        vec![(BIRTH_YEAR, Value::Int(1990))],
        vec![(BIRTH_YEAR, Value::Int(1986))],
        vec![(BIRTH_YEAR, Value::Nil)],
    ]);
    let base = derive_default(&raw).base;
    let counts = grouped_count(&base, &[AGE_GROUP]);

    assert_eq!(counts.len(), 1);
    assert_eq!(counts.value(0, AGE_GROUP), &Value::from("25-34"));
    assert_eq!(counts.value(0, COUNT), &Value::Int(2));
}

#[test]
fn configured_survey_year() {
    let raw = Table::from_records(vec![vec![(BIRTH_YEAR, Value::Int(2000))]]);
    let config = SurveyConfig::default().with_survey_year(2025);
    let base = derive(&raw, &config).base;
    assert_eq!(base.value(0, AGE), &Value::Float(25.0));
    assert_eq!(base.value(0, AGE_GROUP), &Value::from("25-34"));
}

#[test]
fn response_ids_are_unique_for_the_sample() {
    let base = derive_default(&SampleSurvey::new(300).with_response_ids(false).generate()).base;
    let ids = ResponseIds::from_table(&base);
    assert_eq!(ids.len(), base.len());
    assert!(ids.contains("0"));
    assert!(ids.contains("299"));
}

// =============================================================================
// Gap Table
// =============================================================================

fn gap_row(
    actual_ly: i64,
    pref_ly: i64,
    actual_3m: i64,
    pref_3m: i64,
    pref_future: i64,
) -> Vec<(&'static str, Value)> {
    vec![
        (REMOTE_PCT_LAST_YEAR, Value::Int(actual_ly)),
        (REMOTE_PREF_PCT_LAST_YEAR, Value::Int(pref_ly)),
        (REMOTE_PCT_LAST_3_MONTHS, Value::Int(actual_3m)),
        (REMOTE_PREF_PCT_LAST_3_MONTHS, Value::Int(pref_3m)),
        (REMOTE_PREF_PCT_FUTURE, Value::Int(pref_future)),
    ]
}

#[test]
fn gap_scenario() {
    let raw = Table::from_records(vec![gap_row(10, 30, 20, 50, 60), gap_row(5, 5, 5, 5, 5)]);
    let gap = derive_default(&raw).gap.expect("all gap sources present");

    let period_gap = gap.column(PERIOD_GAP);
    let precovid = gap.filter_rows(|row| row.get(period_gap).matches_key("gap_precovid"));
    assert_eq!(texts(&precovid, GAP), vec!["20", "0"]);

    let medians = worksurvey_engine::aggregate::grouped_median(&gap, &[PERIOD_GAP], GAP);
    let median = medians
        .find(PERIOD_GAP, "gap_precovid")
        .map(|row| row.get(medians.column(GAP)).clone());
    assert_eq!(median, Some(Value::Float(10.0)));
}

#[test]
fn future_gap_is_measured_against_recent_actual() {
    let raw = Table::from_records(vec![gap_row(10, 30, 20, 50, 60)]);
    let gap = derive_default(&raw).gap.expect("all gap sources present");
    let future = gap
        .find(PERIOD_GAP, "gap_future_vs_recent")
        .map(|row| row.get(gap.column(GAP)).clone());
    assert_eq!(future, Some(Value::Float(40.0)));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn long_tables_reference_base_ids(raw in raw_table()) {
        let derived = derive_default(&raw);
        let base_ids = ResponseIds::from_table(&derived.base);
        for (name, table) in derived.long_tables() {
            if let Some(table) = table {
                prop_assert!(
                    ResponseIds::from_table(table).is_subset(&base_ids),
                    "{} has ids outside base", name
                );
            }
        }
    }

    #[test]
    fn gap_unavailable_without_any_source(
        raw in raw_table(),
        dropped in 0..GAP_SOURCE_COLUMNS.len(),
    ) {
        let raw = without_columns(&raw, &[GAP_SOURCE_COLUMNS[dropped]]);
        prop_assert!(derive_default(&raw).gap.is_none());
    }

    #[test]
    fn remote_long_available_iff_a_period_column_exists(raw in raw_table()) {
        let any_period = PERIOD_COLUMNS.iter().any(|p| raw.has_column(p.column));
        prop_assert_eq!(derive_default(&raw).remote_long.is_some(), any_period);
    }

    #[test]
    fn remote_long_has_no_missing_percentages(raw in raw_table()) {
        if let Some(remote) = derive_default(&raw).remote_long {
            let values = remote
                .column_values("remote_pct")
                .map(|v| v.cloned().collect::<Vec<_>>())
                .unwrap_or_default();
            prop_assert!(values.iter().all(|v| v.to_numeric().is_some()));
        }
    }

    #[test]
    fn derivation_is_deterministic(raw in raw_table()) {
        prop_assert_eq!(derive_default(&raw), derive_default(&raw));
    }

    #[test]
    fn base_keeps_every_row(raw in raw_table()) {
        let base = derive_default(&raw).base;
        prop_assert_eq!(base.len(), raw.len());
        prop_assert!(base.has_column(RESPONSE_ID));
        prop_assert_eq!(base.has_column(AGE_GROUP), raw.has_column(BIRTH_YEAR));
        prop_assert_eq!(base.has_column(GENDER), raw.has_column(GENDER));
    }
}
