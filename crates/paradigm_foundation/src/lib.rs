//! Identifiers, slot identifiers, and error types for Paradigm.
//!
//! This crate provides:
//! - Typed identifiers ([`PosId`], [`AxisId`], [`ValueId`], [`WordId`], [`ClassId`],
//!   [`ClassValueId`], [`RuleId`]) and the [`IdAllocator`] that hands them out
//! - [`SlotId`] - Canonical identifiers for cells of an inflection grid
//! - [`Error`] - Rich error types with context

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod error;
pub mod ids;
pub mod slot;

pub use error::{Error, ErrorContext, ErrorKind, Result};
pub use ids::{AxisId, ClassId, ClassValueId, IdAllocator, PosId, RuleId, ValueId, WordId};
pub use slot::{DELIMITER, DEPRECATION_TAG, SlotId};
