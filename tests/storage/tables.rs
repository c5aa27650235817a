//! Integration tests for Table
//!
//! Tests record loading, optional column access, immutability, and
//! structural sharing of filtered views.

use worksurvey_foundation::Value;
use worksurvey_storage::columns::{BIRTH_YEAR, GENDER, RESPONSE_ID};
use worksurvey_storage::{Schema, Table};

fn respondents() -> Table {
    Table::from_records(vec![
        vec![
            (RESPONSE_ID, Value::from("a")),
            (GENDER, Value::from("Woman")),
            (BIRTH_YEAR, Value::Int(1990)),
        ],
        vec![(RESPONSE_ID, Value::from("b")), (GENDER, Value::from("Man"))],
        vec![(RESPONSE_ID, Value::from("c")), (BIRTH_YEAR, Value::from("n/a"))],
    ])
}

// =============================================================================
// Construction
// =============================================================================

#[test]
fn records_with_different_keys() {
    let table = respondents();
    assert_eq!(table.len(), 3);
    assert_eq!(table.columns().len(), 3);
    assert_eq!(table.value(1, BIRTH_YEAR), &Value::Nil);
    assert_eq!(table.value(2, GENDER), &Value::Nil);
}

#[test]
fn empty_table_keeps_columns() {
    let table = Table::empty(&[RESPONSE_ID, GENDER]);
    assert!(table.is_empty());
    assert!(table.has_column(GENDER));
    assert_eq!(table.column_values(GENDER).map(Iterator::count), Some(0));
}

#[test]
fn new_table_from_schema() {
    let table = Table::new(Schema::new([RESPONSE_ID]));
    assert_eq!(table.schema().len(), 1);
    assert!(table.is_empty());
}

// =============================================================================
// Optional Column Access
// =============================================================================

#[test]
fn absent_columns_read_as_nil() {
    let table = respondents();
    let absent = table.column("location");
    assert!(absent.is_none());
    for row in table.rows() {
        assert_eq!(row.get(absent), &Value::Nil);
    }
}

// =============================================================================
// Derivation Helpers
// =============================================================================

#[test]
fn filter_rows_never_mutates_input() {
    let table = respondents();
    let before = table.clone();
    let gender = table.column(GENDER);
    let women = table.filter_rows(|row| row.get(gender).matches_key("Woman"));

    assert_eq!(women.len(), 1);
    assert_eq!(table, before);
}

#[test]
fn with_column_computes_per_row() {
    let table = respondents();
    let birth = table.column(BIRTH_YEAR);
    let decade = table.with_column("decade", |row| {
        row.get(birth)
            .to_numeric()
            .map_or(Value::Nil, |year| Value::Float((year / 10.0).floor() * 10.0))
    });
    assert_eq!(decade.value(0, "decade"), &Value::Float(1990.0));
    assert_eq!(decade.value(2, "decade"), &Value::Nil);
    assert!(!table.has_column("decade"));
}

#[test]
fn find_first_matching_row() {
    let table = respondents();
    let row = table.find(RESPONSE_ID, "b");
    assert_eq!(row.map(|r| r.get(table.column(GENDER))), Some(&Value::from("Man")));
}
