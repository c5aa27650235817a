//! Derivation, filtering, and aggregation engines for worksurvey.
//!
//! This crate provides:
//! - [`SurveyConfig`] - Survey year and age banding
//! - [`labels`] - Static column-to-label mapping tables
//! - [`derive()`] - Reshapes the raw wide table into [`DerivedTables`]
//! - [`filter`] - Categorical filtering and response-id restriction
//! - [`aggregate`] - Grouped counts, means, medians, and scalar reductions

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod aggregate;
pub mod age;
pub mod config;
pub mod derive;
pub mod filter;
pub mod labels;

pub use config::{AgeBand, SurveyConfig};
pub use derive::{DerivedTables, derive};
pub use filter::{Criteria, FieldKey, FilterOptions, ResponseIds, Selection};
