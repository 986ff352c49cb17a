//! Integration tests for Layer 1: Storage
//!
//! Tests for the axis model, stored forms, suppression, and the lexicon and
//! word-class collaborators.

mod instances;
mod suppression;
