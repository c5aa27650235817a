//! Integration tests for Layer 2: Engine
//!
//! Tests for derivation, filtering, and aggregation over survey tables.

mod derivation;
mod filters;
mod strategies;
