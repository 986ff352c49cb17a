//! Integration tests for Layer 2: Engine
//!
//! Tests for slot enumeration, the rule store, form generation, and evolution.

mod enumeration;
mod generation;
mod rules;
