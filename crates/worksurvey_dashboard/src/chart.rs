//! Chart payloads handed to the presentation layer.
//!
//! A chart is an aggregate table plus a [`ChartSpec`] naming which of its
//! columns feed which visual channel. The table is already grouped and
//! aggregated; the presentation layer only draws it.

use tracing::debug;
use worksurvey_storage::Table;

/// How a chart is drawn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum ChartKind {
    /// Bars with the color series stacked.
    StackedBar,
    /// Bars with the color series side by side.
    GroupedBar,
    /// Nested rectangles; `x` is the outer level and `color` the inner one.
    Treemap,
    /// Box plot of raw values.
    Box,
    /// Line with markers, one line per color series.
    Line,
}

/// The column contract of one chart.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct ChartSpec {
    /// Title when data is present.
    pub title: &'static str,
    /// Title of the empty-state placeholder.
    pub empty_title: &'static str,
    /// Chart type.
    pub kind: ChartKind,
    /// Category column on the x axis.
    pub x: &'static str,
    /// Value column.
    pub y: &'static str,
    /// Series column, if any.
    pub color: Option<&'static str>,
    /// Fixed order of x categories, if any.
    pub category_order: Option<&'static [&'static str]>,
    /// Axis labels as `(column, label)` pairs.
    pub labels: &'static [(&'static str, &'static str)],
}

impl ChartSpec {
    /// The columns the chart reads: `x`, `y`, then `color` when set.
    pub fn columns(&self) -> impl Iterator<Item = &'static str> {
        [Some(self.x), Some(self.y), self.color].into_iter().flatten()
    }

    /// Returns the first contract column absent from `table`.
    #[must_use]
    pub fn missing_column(&self, table: &Table) -> Option<&'static str> {
        self.columns().find(|column| !table.has_column(column))
    }
}

/// A chart ready to draw, or the explicit empty state.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(tag = "state", rename_all = "snake_case"))]
pub enum ChartData {
    /// Nothing to draw: the source was unavailable or matched no rows.
    Empty {
        /// Placeholder title.
        title: &'static str,
    },
    /// An aggregate table and its column contract.
    Ready {
        /// Column contract.
        spec: ChartSpec,
        /// Aggregate rows.
        table: Table,
    },
}

impl ChartData {
    /// Builds a chart, falling back to the empty state for an unavailable or
    /// empty table, or one lacking a column the spec names.
    #[must_use]
    pub fn new(spec: ChartSpec, table: Option<Table>) -> Self {
        let table = table.filter(|table| !table.is_empty());
        match table {
            Some(table) => match spec.missing_column(&table) {
                None => Self::Ready { spec, table },
                Some(column) => {
                    debug!(chart = spec.title, column, "chart column absent");
                    Self::Empty {
                        title: spec.empty_title,
                    }
                }
            },
            None => Self::Empty {
                title: spec.empty_title,
            },
        }
    }

    /// Returns true for the empty state.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty { .. })
    }

    /// Returns the title that would be shown.
    #[must_use]
    pub fn title(&self) -> &'static str {
        match self {
            Self::Empty { title } => title,
            Self::Ready { spec, .. } => spec.title,
        }
    }

    /// Returns the aggregate table, if any.
    #[must_use]
    pub fn table(&self) -> Option<&Table> {
        match self {
            Self::Empty { .. } => None,
            Self::Ready { table, .. } => Some(table),
        }
    }
}
