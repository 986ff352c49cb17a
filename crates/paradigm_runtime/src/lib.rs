//! Session facade, persisted documents, and CLI for Paradigm.
//!
//! This crate provides:
//! - [`Session`] - Owns every store of a document and coordinates cross-store edits
//! - [`Document`] - The persisted shape, with `MessagePack` serialization
//! - [`SessionConfig`] - Edit-time validation, generation, and trace settings
//! - The `paradigm` command-line tool

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod config;
pub mod document;
pub mod serialize;
pub mod session;

pub use config::{EditValidation, SessionConfig};
pub use document::{
    AxisRecord, ClassRecord, ClassRequirement, ClassValueRecord, Document, FORMAT_VERSION,
    PosAxes, RuleRecord, TransformRecord, WordForms, WordRecord,
};
pub use serialize::{from_bytes, load_from_file, save_to_file, to_bytes};
pub use session::Session;
