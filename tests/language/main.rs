//! Integration tests for Layer 1: Language
//!
//! Tests for the lexer, parser, and source printer working together.

mod lexer;
mod printer;
