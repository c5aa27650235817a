//! Immutable shared tables and survey column names for worksurvey.
//!
//! This crate provides:
//! - [`Schema`] - Ordered column names with constant-time lookup
//! - [`Row`] / [`Table`] - Immutable rows and tables with structural sharing
//! - [`columns`] - Names of every raw and derived survey column
//! - [`SampleSurvey`] - Deterministic synthetic survey responses

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod columns;
pub mod sample;
pub mod schema;
pub mod table;

pub use sample::SampleSurvey;
pub use schema::{ColumnIndex, Schema};
pub use table::{Row, Table, TableBuilder};
