//! Cross-layer integration tests for TONTO
//!
//! Tests that run source text through the whole pipeline.

mod properties;
mod reports;
mod scenarios;
mod snapshots;
