//! Common utilities module
//!
//! Shared error types used across the digit pipeline.

pub mod error;

pub use error::{PipelineError, Result};
