use worksurvey_engine::aggregate::{count_with_percent, grouped_count, median, top_value};
use worksurvey_storage::Table;
use worksurvey_storage::columns::{
    AGE, AGE_GROUP, COUNT, GENDER, INDUSTRY, INDUSTRY_DETAILED, LOCATION, ORG_SIZE, PERCENT,
};

use super::Scope;
use crate::chart::{ChartData, ChartKind, ChartSpec};
use crate::kpi::Kpi;

const AGE_BY_GENDER: ChartSpec = ChartSpec {
    title: "Age Distribution by Gender",
    empty_title: "Age by Gender",
    kind: ChartKind::StackedBar,
    x: AGE_GROUP,
    y: COUNT,
    color: Some(GENDER),
    category_order: None,
    labels: &[(AGE_GROUP, "Age Group"), (COUNT, "Respondents"), (GENDER, "Gender")],
};

const INDUSTRY_TREE: ChartSpec = ChartSpec {
    title: "Industry Distribution",
    empty_title: "Industry Breakdown",
    kind: ChartKind::Treemap,
    x: INDUSTRY,
    y: COUNT,
    color: Some(INDUSTRY_DETAILED),
    category_order: None,
    labels: &[(COUNT, "Respondents"), (PERCENT, "Share of sample")],
};

const ORG_SIZE_BY_LOCATION: ChartSpec = ChartSpec {
    title: "Company Size by Location",
    empty_title: "Org Size by Location",
    kind: ChartKind::StackedBar,
    x: ORG_SIZE,
    y: COUNT,
    color: Some(LOCATION),
    category_order: None,
    labels: &[(ORG_SIZE, "Company Size"), (COUNT, "Respondents"), (LOCATION, "Location")],
};

pub(super) fn render(scope: &Scope<'_>) -> (Vec<Kpi>, Vec<ChartData>) {
    let base = scope.base();
    let kpis = vec![
        Kpi::count("Respondents", base.len()),
        Kpi::number("Median age", median(base, AGE), 0),
        Kpi::text("Top industry", top_value(base, INDUSTRY)),
    ];
    (kpis, charts(base))
}

/// Respondent-mix charts, shared with the overview.
pub(super) fn charts(base: &Table) -> Vec<ChartData> {
    vec![
        ChartData::new(AGE_BY_GENDER, Some(grouped_count(base, &[AGE_GROUP, GENDER]))),
        ChartData::new(
            INDUSTRY_TREE,
            Some(count_with_percent(base, &[INDUSTRY, INDUSTRY_DETAILED])),
        ),
        ChartData::new(ORG_SIZE_BY_LOCATION, Some(grouped_count(base, &[ORG_SIZE, LOCATION]))),
    ]
}
