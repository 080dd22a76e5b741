//! The four binary operators
//!
//! The set is closed, so evaluation is a total `match` with no fallback arm.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::CalcError;

/// Binary operator selectable on the keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    #[serde(rename = "+")]
    Add,
    /// Subtraction (-)
    #[serde(rename = "-")]
    Subtract,
    /// Multiplication (*)
    #[serde(rename = "*")]
    Multiply,
    /// Division (/)
    #[serde(rename = "/")]
    Divide,
}

impl Operator {
    /// Every operator, in keypad order
    pub const ALL: [Self; 4] = [Self::Divide, Self::Multiply, Self::Subtract, Self::Add];

    /// Returns the operator symbol for display
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Subtract => '-',
            Self::Multiply => '*',
            Self::Divide => '/',
        }
    }

    /// Applies the operator with IEEE-754 semantics
    ///
    /// Division by zero is not special-cased: `x / 0` is an infinity and
    /// `0 / 0` is NaN.
    #[must_use]
    pub fn apply(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

impl TryFrom<char> for Operator {
    type Error = CalcError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        match ch {
            '+' => Ok(Self::Add),
            '-' => Ok(Self::Subtract),
            '*' => Ok(Self::Multiply),
            '/' => Ok(Self::Divide),
            other => Err(CalcError::UnknownOperator(other.to_string())),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(ch), None) => Self::try_from(ch),
            _ => Err(CalcError::UnknownOperator(s.to_string())),
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_operator_symbols() {
        assert_eq!(Operator::Add.symbol(), '+');
        assert_eq!(Operator::Subtract.symbol(), '-');
        assert_eq!(Operator::Multiply.symbol(), '*');
        assert_eq!(Operator::Divide.symbol(), '/');
    }

    #[test]
    fn test_all_operators_distinct() {
        let symbols: std::collections::HashSet<_> = Operator::ALL.iter().map(|op| op.symbol()).collect();
        assert_eq!(symbols.len(), 4);
    }

    #[test]
    fn test_apply_basic() {
        assert_eq!(Operator::Add.apply(2.0, 3.0), 5.0);
        assert_eq!(Operator::Subtract.apply(7.0, 2.0), 5.0);
        assert_eq!(Operator::Multiply.apply(3.0, 4.0), 12.0);
        assert_eq!(Operator::Divide.apply(6.0, 2.0), 3.0);
    }

    #[test]
    fn test_divide_by_zero_is_infinite() {
        assert_eq!(Operator::Divide.apply(5.0, 0.0), f64::INFINITY);
        assert_eq!(Operator::Divide.apply(-5.0, 0.0), f64::NEG_INFINITY);
        assert!(Operator::Divide.apply(0.0, 0.0).is_nan());
    }

    #[test]
    fn test_from_str() {
        assert_eq!("+".parse::<Operator>().unwrap(), Operator::Add);
        assert_eq!("/".parse::<Operator>().unwrap(), Operator::Divide);
        assert!(matches!(
            "%".parse::<Operator>(),
            Err(CalcError::UnknownOperator(s)) if s == "%"
        ));
        assert!("++".parse::<Operator>().is_err());
        assert!("".parse::<Operator>().is_err());
    }

    #[test]
    fn test_display_matches_symbol() {
        for op in Operator::ALL {
            assert_eq!(op.to_string(), op.symbol().to_string());
        }
    }

    #[test]
    fn test_serde_uses_symbol() {
        let json = serde_json::to_string(&Operator::Multiply).unwrap();
        assert_eq!(json, "\"*\"");
        let op: Operator = serde_json::from_str("\"-\"").unwrap();
        assert_eq!(op, Operator::Subtract);
    }

    proptest! {
        #[test]
        fn prop_add_commutative(a in -1e10f64..1e10f64, b in -1e10f64..1e10f64) {
            prop_assert_eq!(Operator::Add.apply(a, b), Operator::Add.apply(b, a));
        }

        #[test]
        fn prop_multiply_identity(a in -1e10f64..1e10f64) {
            prop_assert_eq!(Operator::Multiply.apply(a, 1.0), a);
        }

        #[test]
        fn prop_divide_by_self(a in -1e10f64..1e10f64) {
            prop_assume!(a != 0.0);
            prop_assert!((Operator::Divide.apply(a, a) - 1.0).abs() < 1e-12);
        }

        #[test]
        fn prop_symbol_round_trip(idx in 0usize..4) {
            let op = Operator::ALL[idx];
            prop_assert_eq!(Operator::try_from(op.symbol()).unwrap(), op);
        }
    }
}
