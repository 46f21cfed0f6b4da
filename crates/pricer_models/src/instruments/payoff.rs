//! Payoff type definitions.

use num_traits::Float;

/// Type of option payoff.
///
/// # Examples
/// ```
/// use pricer_models::instruments::PayoffType;
///
/// assert_eq!(PayoffType::Call.intrinsic(110.0_f64, 100.0), 10.0);
/// assert_eq!(PayoffType::Put.intrinsic(110.0_f64, 100.0), 0.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PayoffType {
    /// Call option: max(S - K, 0)
    Call,
    /// Put option: max(K - S, 0)
    Put,
}

impl PayoffType {
    /// Intrinsic value of the payoff at underlying level `spot`.
    #[inline]
    pub fn intrinsic<T: Float>(&self, spot: T, strike: T) -> T {
        match self {
            PayoffType::Call => (spot - strike).max(T::zero()),
            PayoffType::Put => (strike - spot).max(T::zero()),
        }
    }

    /// Returns true for a call.
    #[inline]
    pub fn is_call(&self) -> bool {
        matches!(self, PayoffType::Call)
    }

    /// Returns true for a put.
    #[inline]
    pub fn is_put(&self) -> bool {
        matches!(self, PayoffType::Put)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intrinsic() {
        assert_eq!(PayoffType::Call.intrinsic(90.0_f64, 100.0), 0.0);
        assert_eq!(PayoffType::Put.intrinsic(90.0_f64, 100.0), 10.0);
    }

    #[test]
    fn test_predicates() {
        assert!(PayoffType::Call.is_call());
        assert!(PayoffType::Put.is_put());
        assert!(!PayoffType::Put.is_call());
    }
}
