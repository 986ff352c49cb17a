//! End-to-end tests through the session facade.
//!
//! A small noun paradigm is built up, edited, declined, and persisted.

mod fixture;
mod persistence;
mod schema_edits;
