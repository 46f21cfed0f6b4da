//! Market data shift conventions for bump-and-reprice risk.
//!
//! ```rust
//! use pricer_core::traits::risk::ShiftType;
//!
//! let shift = ShiftType::parallel(0.001_f64);
//! assert!(shift.is_additive());
//! assert_eq!(shift.apply(0.20), 0.201);
//! assert_eq!(shift.negated().apply(0.20), 0.199);
//! ```

use super::Float;

/// Ways to perturb a market data value.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ShiftType<T: Float> {
    /// Absolute shift: `new_value = old_value + amount`
    Absolute(T),

    /// Relative shift: `new_value = old_value * (1 + percentage)`
    Relative(T),

    /// Parallel shift: the same additive amount at every tenor/strike.
    Parallel(T),
}

impl<T: Float> ShiftType<T> {
    /// Create a new absolute shift.
    pub fn absolute(amount: T) -> Self {
        ShiftType::Absolute(amount)
    }

    /// Create a new relative shift.
    pub fn relative(percentage: T) -> Self {
        ShiftType::Relative(percentage)
    }

    /// Create a new parallel shift.
    pub fn parallel(amount: T) -> Self {
        ShiftType::Parallel(amount)
    }

    /// Size of the shift, whatever its convention.
    pub fn amount(&self) -> T {
        match *self {
            ShiftType::Absolute(a) | ShiftType::Relative(a) | ShiftType::Parallel(a) => a,
        }
    }

    /// Returns true if the shift adds rather than scales.
    pub fn is_additive(&self) -> bool {
        matches!(self, ShiftType::Absolute(_) | ShiftType::Parallel(_))
    }

    /// Same convention, opposite direction.
    pub fn negated(&self) -> Self {
        match *self {
            ShiftType::Absolute(a) => ShiftType::Absolute(-a),
            ShiftType::Relative(p) => ShiftType::Relative(-p),
            ShiftType::Parallel(a) => ShiftType::Parallel(-a),
        }
    }

    /// Apply this shift to a value.
    pub fn apply(&self, value: T) -> T {
        match *self {
            ShiftType::Absolute(amount) | ShiftType::Parallel(amount) => value + amount,
            ShiftType::Relative(pct) => value * (T::one() + pct),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply() {
        assert_eq!(ShiftType::absolute(0.5_f64).apply(1.0), 1.5);
        assert_eq!(ShiftType::parallel(-0.25_f64).apply(1.0), 0.75);
        assert!((ShiftType::relative(0.1_f64).apply(2.0) - 2.2).abs() < 1e-15);
    }

    #[test]
    fn test_negated_keeps_convention() {
        let up = ShiftType::relative(0.01_f64);
        let down = up.negated();
        assert_eq!(down, ShiftType::Relative(-0.01));
        assert_eq!(down.amount(), -0.01);
        assert!(!down.is_additive());
        assert!(ShiftType::absolute(1.0_f64).negated().is_additive());
    }
}
