//! Per-view query cycles.
//!
//! Each view module turns a [`Scope`] into KPI cards and charts. A scope is
//! built once per render: it holds the filtered base table and the response
//! ids that survived, which is all any view needs to narrow a long table.

mod demographics;
mod org_support;
mod overview;
mod remote_work;

use worksurvey_engine::filter::{self, ResponseIds, restrict_to_ids};
use worksurvey_engine::{Criteria, DerivedTables};
use worksurvey_storage::Table;

use crate::chart::ChartData;
use crate::kpi::Kpi;
use crate::view::{View, ViewOutput};

/// The filtered slice of the derived tables seen by one render.
pub(crate) struct Scope<'a> {
    tables: &'a DerivedTables,
    base: Table,
    /// `None` when nothing was filtered out, so long tables pass through.
    ids: Option<ResponseIds>,
}

impl<'a> Scope<'a> {
    pub(crate) fn new(tables: &'a DerivedTables, criteria: &Criteria) -> Self {
        if criteria.is_unrestricted() {
            return Self {
                tables,
                base: tables.base.clone(),
                ids: None,
            };
        }
        let base = filter::apply(&tables.base, criteria);
        let ids = ResponseIds::from_table(&base);
        Self {
            tables,
            base,
            ids: Some(ids),
        }
    }

    /// The filtered base table.
    pub(crate) fn base(&self) -> &Table {
        &self.base
    }

    /// The derived tables before filtering.
    pub(crate) fn tables(&self) -> &DerivedTables {
        self.tables
    }

    /// Narrows a long table to the respondents in scope.
    pub(crate) fn restrict(&self, table: Option<&Table>) -> Option<Table> {
        let table = table?;
        Some(match &self.ids {
            Some(ids) => restrict_to_ids(table, ids),
            None => table.clone(),
        })
    }
}

pub(crate) fn render(view: View, scope: &Scope<'_>) -> ViewOutput {
    let (kpis, charts): (Vec<Kpi>, Vec<ChartData>) = match view {
        View::Overview => overview::render(scope),
        View::Demographics => demographics::render(scope),
        View::RemoteWork => remote_work::render(scope),
        View::OrgSupport => org_support::render(scope),
    };
    ViewOutput {
        view,
        title: view.title(),
        kpis,
        charts,
    }
}
