use worksurvey_engine::aggregate::{grouped_mean, mean};
use worksurvey_engine::labels::{Activity, SupportPeriod, WorkType};
use worksurvey_storage::Table;
use worksurvey_storage::columns::{ACTIVITY, HOURS, PERIOD, QUESTION, SCORE, WORK_TYPE};

use super::Scope;
use crate::chart::{ChartData, ChartKind, ChartSpec};
use crate::kpi::Kpi;

const PERIOD_ORDER: [&str; 3] = [
    SupportPeriod::LastYear.label(),
    SupportPeriod::LastThreeMonths.label(),
    SupportPeriod::Future.label(),
];

const SUPPORT_TREND: ChartSpec = ChartSpec {
    title: "Organization Support Over Time",
    empty_title: "Org Support Over Time",
    kind: ChartKind::Line,
    x: PERIOD,
    y: SCORE,
    color: Some(QUESTION),
    category_order: Some(&PERIOD_ORDER),
    labels: &[(SCORE, "Average score (1-5)")],
};

const TIME_ALLOCATION: ChartSpec = ChartSpec {
    title: "Average Hours per Activity",
    empty_title: "Time Allocation",
    kind: ChartKind::GroupedBar,
    x: ACTIVITY,
    y: HOURS,
    color: Some(WORK_TYPE),
    category_order: None,
    labels: &[(ACTIVITY, "Activity"), (HOURS, "Hours")],
};

pub(super) fn render(scope: &Scope<'_>) -> (Vec<Kpi>, Vec<ChartData>) {
    let support = scope
        .restrict(scope.tables().support_long.as_ref())
        .map(|support| grouped_mean(&support, &[PERIOD, QUESTION], SCORE));
    let time = scope
        .restrict(scope.tables().time_long.as_ref())
        .map(|time| grouped_mean(&time, &[WORK_TYPE, ACTIVITY], HOURS));

    let kpis = vec![
        Kpi::number(
            "Avg support last year",
            period_support(support.as_ref(), SupportPeriod::LastYear),
            2,
        ),
        Kpi::number(
            "Avg support last 3 months",
            period_support(support.as_ref(), SupportPeriod::LastThreeMonths),
            2,
        ),
        Kpi::number("Commute hours saved", commute_hours_saved(time.as_ref()), 2),
    ];
    let charts = vec![
        ChartData::new(SUPPORT_TREND, support),
        ChartData::new(TIME_ALLOCATION, time),
    ];
    (kpis, charts)
}

/// Mean of the per-question mean scores for one period.
fn period_support(summary: Option<&Table>, period: SupportPeriod) -> f64 {
    summary.map_or(0.0, |summary| {
        let column = summary.column(PERIOD);
        let rows = summary.filter_rows(|row| row.get(column).matches_key(period.label()));
        mean(&rows, SCORE)
    })
}

/// Mean onsite commute hours minus mean remote commute hours.
///
/// Zero unless both sides have a value.
fn commute_hours_saved(summary: Option<&Table>) -> f64 {
    let Some(summary) = summary else {
        return 0.0;
    };
    let work_type = summary.column(WORK_TYPE);
    let activity = summary.column(ACTIVITY);
    let hours = summary.column(HOURS);
    let commute = |kind: WorkType| {
        summary
            .rows()
            .find(|row| {
                row.get(work_type).matches_key(kind.label())
                    && row.get(activity).matches_key(Activity::Commute.label())
            })
            .and_then(|row| row.get(hours).to_numeric())
    };
    match (commute(WorkType::Onsite), commute(WorkType::Remote)) {
        (Some(onsite), Some(remote)) => onsite - remote,
        _ => 0.0,
    }
}
