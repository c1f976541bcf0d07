//! Testing infrastructure for humanizer integration tests.
//!
//! This crate provides utilities for writing robust integration tests:
//! - `TestWorld`: Fluent interface for isolated CLI runs
//! - `assertions`: Checks over CLI JSON output and transformation invariants
//! - `fixtures`: Sample texts of known length
//! - `services`: Scripted transformation services for driving the workflow

pub mod assertions;
pub mod fixtures;
pub mod services;
pub mod world;

pub use services::{FailingService, FixedService};
pub use world::TestWorld;
