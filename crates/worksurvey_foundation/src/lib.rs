//! Core value type, errors, and persistent collections for worksurvey.
//!
//! This crate provides:
//! - [`Value`] - The scalar cell type of every survey table
//! - [`Error`] - Contract-violation errors raised by the query layers
//! - Persistent collections ([`SharedVec`], [`SharedSet`])

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod collections;
pub mod error;
pub mod value;

pub use collections::{SharedSet, SharedVec};
pub use error::{Error, ErrorKind};
pub use value::Value;

/// Result type alias using the worksurvey [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
