use worksurvey_engine::aggregate::grouped_median;
use worksurvey_engine::labels::GapKind;
use worksurvey_storage::Table;
use worksurvey_storage::columns::{GAP, GENDER, ORG_SIZE, PERIOD, PERIOD_GAP, REMOTE_PCT};

use super::Scope;
use crate::chart::{ChartData, ChartKind, ChartSpec};
use crate::kpi::Kpi;

const GAP_ORDER: [&str; 3] = [
    GapKind::PreCovid.label(),
    GapKind::Covid.label(),
    GapKind::FutureVsRecent.label(),
];

const REMOTE_BY_GENDER: ChartSpec = ChartSpec {
    title: "Remote Work % by Gender",
    empty_title: "Remote Work %",
    kind: ChartKind::Box,
    x: GENDER,
    y: REMOTE_PCT,
    color: Some(PERIOD),
    category_order: None,
    labels: &[(GENDER, "Gender"), (REMOTE_PCT, "Remote Work %")],
};

const REMOTE_BY_ORG_SIZE: ChartSpec = ChartSpec {
    title: "Remote Work % by Org Size",
    empty_title: "Remote Work %",
    kind: ChartKind::Box,
    x: ORG_SIZE,
    y: REMOTE_PCT,
    color: Some(PERIOD),
    category_order: None,
    labels: &[(ORG_SIZE, "Org Size"), (REMOTE_PCT, "Remote Work %")],
};

const GAPS: ChartSpec = ChartSpec {
    title: "Remote Work Preference Gaps",
    empty_title: "Preference Gaps",
    kind: ChartKind::Box,
    x: PERIOD_GAP,
    y: GAP,
    color: None,
    category_order: Some(&GAP_ORDER),
    labels: &[(PERIOD_GAP, "Gap Type"), (GAP, "Preferred - Actual (%)")],
};

pub(super) fn render(scope: &Scope<'_>) -> (Vec<Kpi>, Vec<ChartData>) {
    let remote = scope.restrict(scope.tables().remote_long.as_ref());
    let gaps = scope.restrict(scope.tables().gap.as_ref());
    let medians = gaps.as_ref().map(|gaps| grouped_median(gaps, &[PERIOD_GAP], GAP));
    let median = |kind| median_gap(medians.as_ref(), kind);

    let kpis = vec![
        Kpi::percent("Median gap pre-COVID", median(GapKind::PreCovid), 1),
        Kpi::percent("Median gap last 3 months", median(GapKind::Covid), 1),
        Kpi::percent("Median gap future vs recent", median(GapKind::FutureVsRecent), 1),
    ];
    let charts = vec![
        ChartData::new(REMOTE_BY_GENDER, remote.clone()),
        ChartData::new(REMOTE_BY_ORG_SIZE, remote),
        ChartData::new(GAPS, gaps),
    ];
    (kpis, charts)
}

fn median_gap(medians: Option<&Table>, kind: GapKind) -> f64 {
    medians
        .and_then(|medians| {
            let row = medians.find(PERIOD_GAP, kind.label())?;
            row.get(medians.column(GAP)).to_numeric()
        })
        .unwrap_or(0.0)
}
