//! Curve identifier.

use std::fmt;

/// Name of a discount or forward curve.
///
/// Ordered so that multi-curve outputs have a deterministic curve order.
///
/// # Examples
///
/// ```
/// use pricer_core::market_data::curves::CurveName;
///
/// let name = CurveName::new("USD-OIS");
/// assert_eq!(name.as_str(), "USD-OIS");
/// assert!(CurveName::from("EUR-ESTR") < name);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CurveName(String);

impl CurveName {
    /// Creates a new curve name.
    #[inline]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// Returns the name as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CurveName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for CurveName {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for CurveName {
    fn from(s: String) -> Self {
        Self(s)
    }
}
