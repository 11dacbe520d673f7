#![deny(missing_debug_implementations)]
#![deny(rustdoc::broken_intra_doc_links)]
#![cfg_attr(test, deny(warnings))]

//! # alas-entities
//!
//! Reusable, agnostic domain entities for Alas-Tools-Cli.
//!
//! The entities only contain generic functionality that does not reveal any application-specific business logic.

pub mod coordinate;
pub mod geo;
pub mod pallet;
