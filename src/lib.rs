//! Worksurvey - Remote-work survey reshaping and query engine
//!
//! This crate re-exports all layers of the worksurvey system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 3: worksurvey_dashboard    - Per-view query cycles, KPIs, chart payloads
//! Layer 2: worksurvey_engine       - Derivation, filter, and aggregation engines
//! Layer 1: worksurvey_storage      - Immutable shared tables, survey column names
//! Layer 0: worksurvey_foundation   - Core types (Value, Error, collections)
//! ```

pub use worksurvey_dashboard as dashboard;
pub use worksurvey_engine as engine;
pub use worksurvey_foundation as foundation;
pub use worksurvey_storage as storage;
