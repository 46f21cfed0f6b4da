//! # Pricer Models (L2: Business Logic)
//!
//! Derivative instruments and the pricers that value them.
//!
//! This crate provides:
//! - Instrument definitions wrapped in the `Derivative` sum type
//! - Black-76 closed-form prices, deltas and vegas
//! - The `DerivativePricer` trait with a Black-76 pricer and a
//!   flat-smile variance swap pricer
//!
//! ## Design Principles
//!
//! - **Enum-based instruments**: pricers match on variants and reject the
//!   ones they do not support with an explicit error
//! - **Validated construction**: instruments cannot hold a non-positive
//!   strike or a settlement before expiry
//! - **Pure pricing**: a pricer reads the market bundle, never mutates it

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod analytical;
pub mod instruments;
pub mod pricing;
