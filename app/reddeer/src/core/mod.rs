//! Core infrastructure for RedDeer.
//!
//! This module provides foundational types used throughout the crate:
//!
//! - [`error`] - Unified error types
//! - [`constants`] - Application constants
//! - [`prelude`] - Common re-exports for convenience

pub mod constants;
pub mod error;
pub mod prelude;

pub use error::{AnchorKind, Error, Result};
