//! The dashboard handle.
//!
//! A [`Dashboard`] is built once from the raw survey table. Building it runs
//! the derivation engine and collects the filter options; after that it is
//! immutable, cheap to clone, and safe to render from many threads at once.

use std::sync::Arc;

use tracing::debug;
use worksurvey_engine::filter::filter_options;
use worksurvey_engine::{Criteria, DerivedTables, FilterOptions, SurveyConfig, derive};
use worksurvey_foundation::Result;
use worksurvey_storage::Table;

use crate::view::{View, ViewOutput};
use crate::views::{self, Scope};

/// Derived survey tables plus everything needed to answer view queries.
#[derive(Clone, Debug)]
pub struct Dashboard {
    tables: Arc<DerivedTables>,
    options: Arc<FilterOptions>,
}

impl Dashboard {
    /// Derives all tables from `raw` and prepares the filter options.
    #[must_use]
    pub fn new(raw: &Table, config: &SurveyConfig) -> Self {
        Self::from_derived(derive(raw, config))
    }

    /// Wraps tables that were already derived.
    #[must_use]
    pub fn from_derived(tables: DerivedTables) -> Self {
        let options = filter_options(&tables.base);
        Self {
            tables: Arc::new(tables),
            options: Arc::new(options),
        }
    }

    /// Returns the derived tables.
    #[must_use]
    pub fn tables(&self) -> &DerivedTables {
        &self.tables
    }

    /// Returns the values offered for each filter field.
    #[must_use]
    pub fn filter_options(&self) -> &FilterOptions {
        &self.options
    }

    /// Runs one filter and aggregate cycle for `view`.
    #[must_use]
    pub fn render(&self, view: View, criteria: &Criteria) -> ViewOutput {
        let scope = Scope::new(&self.tables, criteria);
        debug!(
            view = view.name(),
            respondents = scope.base().len(),
            restricted = !criteria.is_unrestricted(),
            "rendering view"
        );
        views::render(view, &scope)
    }

    /// Renders a view selected by name.
    ///
    /// # Errors
    ///
    /// Returns an error if `view` does not name a dashboard view.
    pub fn render_named(&self, view: &str, criteria: &Criteria) -> Result<ViewOutput> {
        Ok(self.render(view.parse()?, criteria))
    }

    /// Renders every view for the same criteria, filtering the base table once.
    #[must_use]
    pub fn render_all(&self, criteria: &Criteria) -> Vec<ViewOutput> {
        let scope = Scope::new(&self.tables, criteria);
        View::ALL
            .into_iter()
            .map(|view| views::render(view, &scope))
            .collect()
    }
}
