use worksurvey_engine::aggregate::mean;
use worksurvey_storage::columns::{
    REMOTE_PCT_LAST_3_MONTHS, REMOTE_PCT_LAST_YEAR, REMOTE_PREF_PCT_FUTURE,
};

use super::{Scope, demographics};
use crate::chart::ChartData;
use crate::kpi::Kpi;

pub(super) fn render(scope: &Scope<'_>) -> (Vec<Kpi>, Vec<ChartData>) {
    let base = scope.base();
    let kpis = vec![
        Kpi::count("Respondents", base.len()),
        Kpi::percent("Avg remote % last year", mean(base, REMOTE_PCT_LAST_YEAR), 1),
        Kpi::percent("Avg remote % last 3 months", mean(base, REMOTE_PCT_LAST_3_MONTHS), 1),
        Kpi::percent("Avg preferred remote % future", mean(base, REMOTE_PREF_PCT_FUTURE), 1),
    ];
    (kpis, demographics::charts(base))
}
