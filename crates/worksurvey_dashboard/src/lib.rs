//! Per-view query cycles, KPIs, and chart payloads for worksurvey.
//!
//! This crate provides:
//! - [`Dashboard`] - Derived tables shared by every render
//! - [`View`] / [`ViewOutput`] - The four dashboard views and what they show
//! - [`Kpi`] - Headline numbers with their display format
//! - [`ChartData`] - Aggregate tables with their column contract, or an
//!   explicit empty state

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod chart;
pub mod dashboard;
pub mod kpi;
pub mod view;
mod views;

pub use chart::{ChartData, ChartKind, ChartSpec};
pub use dashboard::Dashboard;
pub use kpi::{Kpi, KpiValue};
pub use view::{View, ViewOutput};
