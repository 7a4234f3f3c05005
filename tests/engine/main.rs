//! Integration tests for Layer 2: Engine
//!
//! Tests for pattern validation, suggestions, and reference resolution.

mod patterns;
mod resolution;
mod suggestions;
