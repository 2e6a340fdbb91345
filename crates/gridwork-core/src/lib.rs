//! Gridwork Core
//!
//! This crate contains the shared building blocks for the Gridwork data grid:
//! math re-exports, rectangle geometry, fast hash collections, logging setup
//! and profiling hooks.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
#[cfg(feature = "profiling")]
pub mod profiling;
