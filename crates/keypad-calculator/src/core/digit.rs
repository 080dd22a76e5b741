//! Validated single decimal digit

use std::fmt;

use super::CalcError;

/// A decimal digit `0..=9`
///
/// Digit buttons carry one of these, so the engine never sees anything
/// that is not a digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Digit(u8);

impl Digit {
    /// The digit zero
    pub const ZERO: Self = Self(0);
    /// The digit one
    pub const ONE: Self = Self(1);
    /// The digit two
    pub const TWO: Self = Self(2);
    /// The digit three
    pub const THREE: Self = Self(3);
    /// The digit four
    pub const FOUR: Self = Self(4);
    /// The digit five
    pub const FIVE: Self = Self(5);
    /// The digit six
    pub const SIX: Self = Self(6);
    /// The digit seven
    pub const SEVEN: Self = Self(7);
    /// The digit eight
    pub const EIGHT: Self = Self(8);
    /// The digit nine
    pub const NINE: Self = Self(9);

    /// Creates a digit, returning `None` above nine
    #[must_use]
    pub const fn new(value: u8) -> Option<Self> {
        if value <= 9 {
            Some(Self(value))
        } else {
            None
        }
    }

    /// ASCII character for the digit
    #[must_use]
    pub const fn as_char(self) -> char {
        (b'0' + self.0) as char
    }

    /// All ten digits in ascending order
    pub fn all() -> impl Iterator<Item = Self> {
        (0..=9).map(Self)
    }
}

impl TryFrom<u8> for Digit {
    type Error = CalcError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value).ok_or_else(|| CalcError::InvalidDigit(value.to_string()))
    }
}

impl TryFrom<char> for Digit {
    type Error = CalcError;

    fn try_from(ch: char) -> Result<Self, Self::Error> {
        ch.to_digit(10)
            .and_then(|d| Self::new(d as u8))
            .ok_or_else(|| CalcError::InvalidDigit(ch.to_string()))
    }
}

impl fmt::Display for Digit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_in_range() {
        for d in 0..=9 {
            assert_eq!(Digit::new(d).map(Digit::as_char), Some(char::from(b'0' + d)));
        }
    }

    #[test]
    fn test_new_out_of_range() {
        assert!(Digit::new(10).is_none());
        assert!(Digit::new(255).is_none());
    }

    #[test]
    fn test_as_char() {
        assert_eq!(Digit::ZERO.as_char(), '0');
        assert_eq!(Digit::new(7).unwrap().as_char(), '7');
    }

    #[test]
    fn test_try_from_char() {
        assert_eq!(Digit::try_from('3').unwrap(), Digit::THREE);
        assert!(matches!(
            Digit::try_from('a'),
            Err(CalcError::InvalidDigit(s)) if s == "a"
        ));
        // Non-ASCII digits are rejected
        assert!(Digit::try_from('٣').is_err());
    }

    #[test]
    fn test_try_from_u8() {
        assert_eq!(Digit::try_from(9u8).unwrap(), Digit::NINE);
        assert!(matches!(Digit::try_from(12u8), Err(CalcError::InvalidDigit(_))));
    }

    #[test]
    fn test_all_digits() {
        let chars: String = Digit::all().map(Digit::as_char).collect();
        assert_eq!(chars, "0123456789");
    }

    #[test]
    fn test_named_constants() {
        let named = [
            Digit::ZERO,
            Digit::ONE,
            Digit::TWO,
            Digit::THREE,
            Digit::FOUR,
            Digit::FIVE,
            Digit::SIX,
            Digit::SEVEN,
            Digit::EIGHT,
            Digit::NINE,
        ];
        assert!(named.into_iter().eq(Digit::all()));
    }

    #[test]
    fn test_display() {
        assert_eq!(Digit::new(4).unwrap().to_string(), "4");
    }
}
