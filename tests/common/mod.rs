//! Shared test utilities for bplogrestore integration harnesses.
//!
//! Import everything you need via `mod common; use common::*;` at the top of
//! each harness file. Not every harness uses every helper.
#![allow(dead_code)]

pub mod assertions;
pub mod builders;

pub use assertions::*;
pub use builders::*;
pub use fixtures::*;
