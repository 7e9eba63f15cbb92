//! Test utilities
//!
//! Manual mock implementations and test fixtures for unit testing.
//!
//! The Trello port is small enough that a hand-written mock which records
//! its calls reads better in assertions than a generated one.

pub mod fixtures;
pub mod mocks;

pub use fixtures::*;
pub use mocks::*;
