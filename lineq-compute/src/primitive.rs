//! Functions to construct [`Integer`]s and [`Rational`]s from various types.

use rug::{ops::Pow, Integer, Rational};

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Creates a [`Rational`] with the given value.
pub fn rational<T>(n: T) -> Rational
where
    Rational: From<T>,
{
    Rational::from(n)
}

/// Creates a [`Rational`] from a string of decimal digits. Returns [`None`] if the string is not
/// made of digits.
pub fn int_from_str(s: &str) -> Option<Rational> {
    Integer::from_str_radix(s, 10).ok().map(Rational::from)
}

/// Creates an exact [`Rational`] from a decimal string such as `4.25`, which is `17/4`. Returns
/// [`None`] if the string is not a valid decimal number.
pub fn rational_from_decimal(s: &str) -> Option<Rational> {
    let (whole, fraction) = s.split_once('.').unwrap_or((s, ""));
    if whole.is_empty() || !fraction.chars().all(|c| c.is_ascii_digit()) {
        return None;
    }

    let digits = Integer::from_str_radix(&format!("{}{}", whole, fraction), 10).ok()?;
    let scale = int(10).pow(fraction.len() as u32);
    Some(Rational::from((digits, scale)))
}

/// Returns true if the given [`Rational`] is an integer.
pub fn is_integer(n: &Rational) -> bool {
    *n.denom() == 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_is_exact() {
        assert_eq!(rational_from_decimal("4.25"), Some(rational((17, 4))));
        assert_eq!(rational_from_decimal("0.1"), Some(rational((1, 10))));
        assert_eq!(rational_from_decimal("12"), Some(rational(12)));
    }

    #[test]
    fn decimal_rejects_garbage() {
        assert_eq!(rational_from_decimal(".5"), None);
        assert_eq!(rational_from_decimal("1.x"), None);
        assert_eq!(int_from_str("x"), None);
    }

    #[test]
    fn integer_check() {
        assert!(is_integer(&rational(-6)));
        assert!(!is_integer(&rational((7, 3))));
        assert!(is_integer(&rational((6, 3))));
    }
}
