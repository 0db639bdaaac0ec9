//! Runtime values for the calculator

use std::fmt;

/// Largest value the stack can hold
pub const MAX_NUM: i64 = i32::MAX as i64;
/// Smallest value the stack can hold
pub const MIN_NUM: i64 = i32::MIN as i64;

/// Stack value
///
/// Integer arithmetic stays exact; a quotient is kept as `Real` and only
/// truncated toward zero when it is displayed or used by `%`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Int(i64),
    Real(f64),
}

impl Number {
    /// Clamp into the 32-bit signed range
    pub fn saturate(self) -> Self {
        match self {
            Number::Int(n) => Number::Int(n.clamp(MIN_NUM, MAX_NUM)),
            Number::Real(x) if x >= MAX_NUM as f64 => Number::Int(MAX_NUM),
            Number::Real(x) if x <= MIN_NUM as f64 => Number::Int(MIN_NUM),
            Number::Real(x) => Number::Real(x),
        }
    }

    /// Value truncated toward zero
    pub fn truncate(self) -> i64 {
        match self {
            Number::Int(n) => n,
            Number::Real(x) => x.trunc() as i64,
        }
    }

    pub fn as_f64(self) -> f64 {
        match self {
            Number::Int(n) => n as f64,
            Number::Real(x) => x,
        }
    }

    pub fn is_zero(self) -> bool {
        self.as_f64() == 0.0
    }

    pub fn is_negative(self) -> bool {
        self.as_f64() < 0.0
    }

    /// Whether the value has no fractional part
    pub fn is_integral(self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Real(x) => x.fract() == 0.0,
        }
    }

    pub fn plus(self, other: Number) -> Number {
        self.combine(other, i64::saturating_add, |a, b| a + b)
    }

    pub fn minus(self, other: Number) -> Number {
        self.combine(other, i64::saturating_sub, |a, b| a - b)
    }

    pub fn times(self, other: Number) -> Number {
        self.combine(other, i64::saturating_mul, |a, b| a * b)
    }

    /// Integer op when both sides are exact, float op otherwise
    fn combine(self, other: Number, int_op: fn(i64, i64) -> i64, real_op: fn(f64, f64) -> f64) -> Number {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => Number::Int(int_op(a, b)),
            (a, b) => Number::Real(real_op(a.as_f64(), b.as_f64())),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.truncate())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_saturate_int() {
        assert_eq!(Number::Int(99_999_999_999_999).saturate(), Number::Int(MAX_NUM));
        assert_eq!(Number::Int(-99_999_999_999_999).saturate(), Number::Int(MIN_NUM));
        assert_eq!(Number::Int(42).saturate(), Number::Int(42));
    }

    #[test]
    fn test_saturate_real() {
        assert_eq!(Number::Real(1e12).saturate(), Number::Int(MAX_NUM));
        assert_eq!(Number::Real(-1e12).saturate(), Number::Int(MIN_NUM));
        assert_eq!(Number::Real(0.5).saturate(), Number::Real(0.5));
    }

    #[test]
    fn test_truncate_toward_zero() {
        assert_eq!(Number::Real(-11.0 / 3.0).truncate(), -3);
        assert_eq!(Number::Real(0.5).truncate(), 0);
        assert_eq!(Number::Real(3.99).truncate(), 3);
    }

    #[test]
    fn test_display_truncates() {
        assert_eq!(Number::Real(-3.7).to_string(), "-3");
        assert_eq!(Number::Int(7).to_string(), "7");
    }

    #[test]
    fn test_mixed_arithmetic_is_real() {
        assert_eq!(Number::Real(0.5).times(Number::Int(2)), Number::Real(1.0));
        assert_eq!(Number::Int(2).plus(Number::Int(3)), Number::Int(5));
    }

    #[test]
    fn test_is_integral() {
        assert!(Number::Int(3).is_integral());
        assert!(Number::Real(2.0).is_integral());
        assert!(!Number::Real(0.5).is_integral());
    }

    proptest! {
        #[test]
        fn prop_saturated_sum_is_clamped(a in any::<i32>(), b in any::<i32>()) {
            let exact = a as i64 + b as i64;
            let stored = Number::Int(a as i64).plus(Number::Int(b as i64)).saturate();
            prop_assert_eq!(stored, Number::Int(exact.clamp(MIN_NUM, MAX_NUM)));
        }

        #[test]
        fn prop_saturated_product_hits_bounds(a in any::<i32>(), b in any::<i32>()) {
            let exact = a as i64 * b as i64;
            let stored = Number::Int(a as i64).times(Number::Int(b as i64)).saturate();
            if exact > MAX_NUM {
                prop_assert_eq!(stored, Number::Int(MAX_NUM));
            } else if exact < MIN_NUM {
                prop_assert_eq!(stored, Number::Int(MIN_NUM));
            } else {
                prop_assert_eq!(stored, Number::Int(exact));
            }
        }
    }
}
