//! Integration tests for SampleSurvey
//!
//! The generator stands in for the dataset loader in tests and benchmarks.

use worksurvey_storage::SampleSurvey;
use worksurvey_storage::columns::{self, support, time};

#[test]
fn sample_has_every_mapped_column() {
    let table = SampleSurvey::new(20).generate();
    for column in [
        columns::RESPONSE_ID,
        columns::BIRTH_YEAR,
        columns::GENDER,
        columns::INDUSTRY,
        columns::INDUSTRY_DETAILED,
        columns::ORG_SIZE,
        columns::LOCATION,
        columns::REMOTE_PCT_LAST_YEAR,
        columns::REMOTE_PREF_PCT_FUTURE,
        support::FUTURE_CHOICE,
        time::REMOTE_CARING,
    ] {
        assert!(table.has_column(column), "missing {column}");
    }
}

#[test]
fn sample_is_reproducible() {
    let survey = SampleSurvey::new(100).with_seed(99).with_missing_rate(0.2);
    assert_eq!(survey.generate(), survey.generate());
}

#[test]
fn missing_rate_leaves_gaps() {
    let table = SampleSurvey::new(400).with_missing_rate(0.5).generate();
    let blanks = table
        .column_values(columns::REMOTE_PCT_LAST_YEAR)
        .map_or(0, |values| values.filter(|v| v.is_missing()).count());
    assert!(blanks > 0);
    assert!(blanks < 400);
}
