//! Dashboard views and their rendered output.

use std::fmt;
use std::str::FromStr;

use worksurvey_foundation::{Error, Result};

use crate::chart::ChartData;
use crate::kpi::Kpi;

/// One dashboard tab.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum View {
    /// Sample size, average remote percentages, and demographic mix.
    Overview,
    /// Age, industry, and organisation profile.
    Demographics,
    /// Remote percentages by period and preference gaps.
    RemoteWork,
    /// Organisation support over time and time allocation.
    OrgSupport,
}

impl View {
    /// Every view, in tab order.
    pub const ALL: [Self; 4] = [
        Self::Overview,
        Self::Demographics,
        Self::RemoteWork,
        Self::OrgSupport,
    ];

    /// Returns the identifier used to select this view.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Overview => "overview",
            Self::Demographics => "demographics",
            Self::RemoteWork => "remote_work",
            Self::OrgSupport => "org_support",
        }
    }

    /// Returns the tab label.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Overview => "Overview",
            Self::Demographics => "Demographics",
            Self::RemoteWork => "Remote Work",
            Self::OrgSupport => "Org Support",
        }
    }
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for View {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|view| view.name() == s)
            .ok_or_else(|| Error::unknown_view(s))
    }
}

/// Everything one view shows for one set of filter criteria.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ViewOutput {
    /// The rendered view.
    pub view: View,
    /// Tab label of the view.
    pub title: &'static str,
    /// KPI cards, in display order.
    pub kpis: Vec<Kpi>,
    /// Charts, in display order.
    pub charts: Vec<ChartData>,
}

impl ViewOutput {
    /// Returns the KPI with the given label.
    #[must_use]
    pub fn kpi(&self, label: &str) -> Option<&Kpi> {
        self.kpis.iter().find(|kpi| kpi.label == label)
    }
}
