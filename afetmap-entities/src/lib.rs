#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # afetmap-entities
//!
//! Reusable, agnostic domain entities for afetmap.
//!
//! The entities only contain generic functionality that does not reveal any
//! presentation-specific logic.

pub mod geo;
pub mod location;
pub mod need;

#[cfg(any(test, feature = "builders"))]
pub mod builders;
