//! Paradigm - Inflection engine for constructed languages
//!
//! This crate re-exports all layers of the Paradigm system for convenient access.
//! For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: paradigm_runtime    - Session facade, persisted documents, CLI
//! Layer 3: paradigm_debug      - Trace formatting, consistency reports
//! Layer 2: paradigm_engine     - Slot enumeration, rule store, form generation
//! Layer 1: paradigm_storage    - Axes, stored forms, suppression, lexicon
//! Layer 0: paradigm_foundation - Identifiers, slot identifiers, errors
//! ```

pub use paradigm_debug as debug;
pub use paradigm_engine as engine;
pub use paradigm_foundation as foundation;
pub use paradigm_runtime as runtime;
pub use paradigm_storage as storage;
