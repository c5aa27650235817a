//! Integration tests for Layer 3: Dashboard
//!
//! Tests for per-view KPIs and charts, empty states, and concurrent rendering.

mod views;
