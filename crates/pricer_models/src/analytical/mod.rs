//! Analytical pricing formulas for European options.
//!
//! - Black-76 on a forward level, with analytic delta and vega
//! - Standard normal CDF/PDF
//!
//! Formulas are generic over `T: Float` and undiscounted.

pub mod black76;
pub mod distributions;
pub mod error;

pub use black76::Black76;
pub use distributions::{norm_cdf, norm_pdf};
pub use error::AnalyticalError;
