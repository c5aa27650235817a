//! KPI and chart values on small handcrafted surveys.

use worksurvey_dashboard::{ChartData, ChartKind, Dashboard, View, ViewOutput};
use worksurvey_engine::{Criteria, FieldKey, SurveyConfig};
use worksurvey_foundation::Value;
use worksurvey_storage::Table;
use worksurvey_storage::columns::{
    self, BIRTH_YEAR, GENDER, INDUSTRY, ORG_SIZE, REMOTE_PCT_LAST_3_MONTHS, REMOTE_PCT_LAST_YEAR,
    REMOTE_PREF_PCT_FUTURE, REMOTE_PREF_PCT_LAST_3_MONTHS, REMOTE_PREF_PCT_LAST_YEAR,
};

fn survey() -> Table {
    let respondent = |gender: &str, birth_year: i64, industry: &str, pcts: [i64; 5]| {
        vec![
            (GENDER, Value::from(gender)),
            (ORG_SIZE, Value::from("11-50")),
            (BIRTH_YEAR, Value::Int(birth_year)),
            (INDUSTRY, Value::from(industry)),
            (REMOTE_PCT_LAST_YEAR, Value::Int(pcts[0])),
            (REMOTE_PREF_PCT_LAST_YEAR, Value::Int(pcts[1])),
            (REMOTE_PCT_LAST_3_MONTHS, Value::Int(pcts[2])),
            (REMOTE_PREF_PCT_LAST_3_MONTHS, Value::Int(pcts[3])),
            (REMOTE_PREF_PCT_FUTURE, Value::Int(pcts[4])),
        ]
    };
    let mut woman = respondent("Woman", 1990, "Education", [20, 40, 50, 50, 70]);
    woman.extend([
        (columns::support::LAST_YEAR_ENCOURAGED, Value::Int(4)),
        (columns::support::LAST_YEAR_PREPARED, Value::Int(2)),
        (columns::time::ONSITE_COMMUTE, Value::Float(2.0)),
        (columns::time::REMOTE_COMMUTE, Value::Float(0.5)),
    ]);
    let mut man = respondent("Man", 1970, "Education", [40, 40, 30, 50, 20]);
    man.extend([
        (columns::support::LAST_YEAR_ENCOURAGED, Value::Int(2)),
        (columns::support::LAST_YEAR_PREPARED, Value::Nil),
        (columns::time::ONSITE_COMMUTE, Value::Float(1.0)),
        (columns::time::REMOTE_COMMUTE, Value::Float(0.5)),
    ]);
    Table::from_records(vec![woman, man])
}

fn render(view: View, criteria: &Criteria) -> ViewOutput {
    Dashboard::new(&survey(), &SurveyConfig::default()).render(view, criteria)
}

fn kpi(output: &ViewOutput, label: &str) -> String {
    output
        .kpi(label)
        .map(|kpi| kpi.value.to_string())
        .unwrap_or_else(|| panic!("missing KPI {label}"))
}

#[test]
fn overview_kpis() {
    let output = render(View::Overview, &Criteria::new());
    assert_eq!(output.title, "Overview");
    assert_eq!(kpi(&output, "Respondents"), "2");
    assert_eq!(kpi(&output, "Avg remote % last year"), "30.0%");
    assert_eq!(kpi(&output, "Avg remote % last 3 months"), "40.0%");
    assert_eq!(kpi(&output, "Avg preferred remote % future"), "45.0%");
}

#[test]
fn demographics_kpis() {
    let output = render(View::Demographics, &Criteria::new());
    // Ages 30 and 50.
    assert_eq!(kpi(&output, "Median age"), "40");
    assert_eq!(kpi(&output, "Top industry"), "Education");
}

#[test]
fn remote_work_gap_medians() {
    let output = render(View::RemoteWork, &Criteria::new());
    assert_eq!(kpi(&output, "Median gap pre-COVID"), "10.0%");
    assert_eq!(kpi(&output, "Median gap last 3 months"), "10.0%");
    assert_eq!(kpi(&output, "Median gap future vs recent"), "5.0%");
    assert_eq!(output.charts.len(), 3);
    assert!(output.charts.iter().all(|chart| match chart {
        ChartData::Ready { spec, .. } => spec.kind == ChartKind::Box,
        ChartData::Empty { .. } => false,
    }));
}

#[test]
fn remote_work_follows_the_filter() {
    let criteria = Criteria::new().with(FieldKey::Gender, "Woman");
    let output = render(View::RemoteWork, &criteria);
    assert_eq!(kpi(&output, "Median gap pre-COVID"), "20.0%");
    assert_eq!(kpi(&output, "Median gap future vs recent"), "20.0%");
}

#[test]
fn org_support_kpis() {
    let output = render(View::OrgSupport, &Criteria::new());
    // Encouraged averages 3, prepared 2.
    assert_eq!(kpi(&output, "Avg support last year"), "2.50");
    assert_eq!(kpi(&output, "Avg support last 3 months"), "0.00");
    assert_eq!(kpi(&output, "Commute hours saved"), "1.00");
    assert!(output.charts.iter().all(|chart| !chart.is_empty()));
}

#[test]
fn org_support_follows_the_filter() {
    let criteria = Criteria::new().with(FieldKey::Gender, "Man");
    let output = render(View::OrgSupport, &criteria);
    assert_eq!(kpi(&output, "Avg support last year"), "2.00");
    assert_eq!(kpi(&output, "Commute hours saved"), "0.50");
}

#[test]
fn chart_tables_keep_their_column_contract() {
    let dashboard = Dashboard::new(&survey(), &SurveyConfig::default());
    for output in dashboard.render_all(&Criteria::new()) {
        for chart in &output.charts {
            if let ChartData::Ready { spec, table } = chart {
                assert!(table.has_column(spec.x), "{} lacks {}", spec.title, spec.x);
                assert!(table.has_column(spec.y), "{} lacks {}", spec.title, spec.y);
                if let Some(color) = spec.color {
                    assert!(table.has_column(color), "{} lacks {color}", spec.title);
                }
            }
        }
    }
}
