//! Core error types.
//!
//! This module provides:
//! - `error`: Structured error types for pricing and interpolation operations
//!
//! # Re-exports
//!
//! For convenience, [`PricingError`] and [`InterpolationError`] are re-exported
//! at this module level.

pub mod error;

pub use error::{InterpolationError, PricingError};
