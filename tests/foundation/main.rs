//! Integration tests for Layer 0: Foundation
//!
//! Tests for typed identifiers, slot identifiers, and errors.

mod errors;
mod slots;
