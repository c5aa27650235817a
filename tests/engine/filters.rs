//! Integration tests for the filter engine
//!
//! Tests selection shapes, AND/OR semantics, id restriction of long tables,
//! and the filter-panel options.

use proptest::prelude::*;
use worksurvey_engine::filter::{apply, filter_options, restrict_to_ids};
use worksurvey_engine::{Criteria, FieldKey, ResponseIds, Selection, SurveyConfig, derive};
use worksurvey_foundation::{ErrorKind, Value};
use worksurvey_storage::Table;
use worksurvey_storage::columns::{
    GENDER, LOCATION, ORG_SIZE, REMOTE_PCT, REMOTE_PCT_LAST_YEAR, RESPONSE_ID,
};

use crate::strategies::raw_table;

fn five_people() -> Table {
    let person = |gender: &str, org_size: &str| {
        vec![(GENDER, Value::from(gender)), (ORG_SIZE, Value::from(org_size))]
    };
    Table::from_records(vec![
        person("Woman", "1-10"),
        person("Man", "1-10"),
        person("Woman", "11-50"),
        person("Man", "51-200"),
        person("Non-binary", "1-10"),
    ])
}

// =============================================================================
// Selection Shapes
// =============================================================================

#[test]
fn scalar_selection_scenario() {
    let table = five_people();
    let scalar = apply(&table, &Criteria::new().with(FieldKey::Gender, "Woman"));
    let list = apply(&table, &Criteria::new().with(FieldKey::Gender, vec!["Woman"]));
    assert_eq!(scalar.len(), 2);
    assert_eq!(scalar, list);
}

#[test]
fn selection_shapes_are_equivalent() {
    assert_eq!(Selection::from("Man").values(), Selection::from(vec!["Man"]).values());
    assert!(Selection::from(Vec::<String>::new()).is_all());
    assert!(Selection::from(None::<String>).is_all());
    assert!(Selection::All.values().is_empty());
}

#[test]
fn parse_from_caller_pairs() {
    let criteria = Criteria::parse(vec![
        ("gender", Selection::from("Woman")),
        ("location", Selection::All),
    ])
    .unwrap();
    assert_eq!(apply(&five_people(), &criteria).len(), 2);

    let err = Criteria::parse(vec![("tenure", Selection::All)]).unwrap_err();
    assert_eq!(err.kind, ErrorKind::UnknownFilterField("tenure".to_string()));
}

// =============================================================================
// Semantics
// =============================================================================

#[test]
fn multi_value_and_multi_field() {
    let table = five_people();
    let criteria = Criteria::new()
        .with(FieldKey::Gender, ["Woman", "Man"])
        .with(FieldKey::OrgSize, ["1-10", "51-200"]);
    assert_eq!(apply(&table, &criteria).len(), 3);
}

#[test]
fn absent_column_never_empties_result() {
    let table = five_people();
    assert!(!table.has_column(LOCATION));
    let filtered = apply(&table, &Criteria::new().with(FieldKey::Location, "Metro"));
    assert_eq!(filtered, table);
}

#[test]
fn options_per_field() {
    let options = filter_options(&five_people());
    let sizes: Vec<&str> = options.get(FieldKey::OrgSize).iter().map(AsRef::as_ref).collect();
    assert_eq!(sizes, vec!["1-10", "11-50", "51-200"]);
    assert!(options.get(FieldKey::AgeGroup).is_empty());
    assert_eq!(options.iter().count(), FieldKey::ALL.len());
}

#[test]
fn blank_ids_never_pull_in_other_respondents() {
    let raw = Table::from_records(vec![
        vec![
            (RESPONSE_ID, Value::Int(1)),
            (GENDER, Value::from("Woman")),
            (REMOTE_PCT_LAST_YEAR, Value::Int(10)),
        ],
        vec![
            (RESPONSE_ID, Value::Nil),
            (GENDER, Value::from("Man")),
            (REMOTE_PCT_LAST_YEAR, Value::Int(90)),
        ],
    ]);
    let derived = derive(&raw, &SurveyConfig::default());
    let women = apply(&derived.base, &Criteria::new().with(FieldKey::Gender, "Woman"));
    let remote = derived.remote_long.expect("period column present");
    let restricted = restrict_to_ids(&remote, &ResponseIds::from_table(&women));

    assert_eq!(ResponseIds::from_table(&derived.base).len(), 2);
    assert_eq!(restricted.len(), 1);
    assert_eq!(restricted.value(0, REMOTE_PCT), &Value::Float(10.0));
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn empty_criteria_is_identity(raw in raw_table()) {
        prop_assert_eq!(apply(&raw, &Criteria::new()), raw);
    }

    #[test]
    fn field_filters_commute(
        raw in raw_table(),
        gender in prop::sample::select(vec!["Woman", "Man", "Non-binary"]),
        size in prop::sample::select(vec!["1-10", "11-50", "1000+"]),
    ) {
        let by_gender = Criteria::new().with(FieldKey::Gender, vec![gender]);
        let by_size = Criteria::new().with(FieldKey::OrgSize, vec![size]);
        let both = Criteria::new()
            .with(FieldKey::Gender, vec![gender])
            .with(FieldKey::OrgSize, vec![size]);
        prop_assert_eq!(apply(&apply(&raw, &by_gender), &by_size), apply(&raw, &both));
    }

    #[test]
    fn restricted_long_rows_belong_to_filtered_respondents(
        raw in raw_table(),
        gender in prop::sample::select(vec!["Woman", "Man"]),
    ) {
        let derived = derive(&raw, &SurveyConfig::default());
        let filtered = apply(&derived.base, &Criteria::new().with(FieldKey::Gender, gender));
        let ids = ResponseIds::from_table(&filtered);
        if let Some(support) = derived.support_long.as_ref() {
            let restricted = restrict_to_ids(support, &ids);
            let id_column = restricted.column(RESPONSE_ID);
            let all_members = restricted
                .rows()
                .all(|row| row.get(id_column).to_key().is_some_and(|id| ids.contains(&id)));
            prop_assert!(all_members, "restricted rows outside the filtered respondents");
        }
    }
}
