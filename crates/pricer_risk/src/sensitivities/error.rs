//! Sensitivity engine error types.

use pricer_core::market_data::MarketDataError;
use pricer_core::types::PricingError;
use thiserror::Error;

/// Errors raised while computing sensitivities.
///
/// Pricer failures are wrapped transparently so callers see exactly what
/// the pricer reported.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SensitivityError {
    /// An argument cannot be used to build a scenario.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A collaborator does not support the requested operation.
    #[error("{component} does not support {operation}")]
    UnsupportedOperation {
        /// Component that refused, or the representation it expected
        component: String,
        /// Operation that was requested
        operation: String,
    },

    /// The pricer failed.
    #[error(transparent)]
    Pricing(#[from] PricingError),

    /// Building a shifted market failed.
    #[error("Market data error: {0}")]
    MarketData(#[from] MarketDataError),

    /// Engine configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl SensitivityError {
    pub(crate) fn unsupported(component: impl Into<String>, operation: impl Into<String>) -> Self {
        SensitivityError::UnsupportedOperation {
            component: component.into(),
            operation: operation.into(),
        }
    }
}
