//! Fixed-point money type.
//!
//! # Motivation
//!
//! All monetary amounts in this system use an integer-cents representation
//! stored as `i64`. Using raw `i64` for money is error-prone: it allows
//! accidental arithmetic with unrelated integers (quantities, counters)
//! without any compile-time signal, and floating point cannot represent
//! retail prices like 2499.99 exactly — which matters because payment
//! verification requires the collected amount to equal the order total to
//! the cent.
//!
//! `Money` wraps the raw `i64` so the type system prevents:
//! - Implicit construction from raw `i64` (no `From<i64>` impl).
//! - Mixing `Money` with unrelated `i64` values in arithmetic.
//!
//! # Wire format
//!
//! The admin API and the local store both carry amounts as 2-decimal
//! strings (`"2499.99"`). `Money` serializes to and deserializes from that
//! form; the integer representation never leaves the process.

use std::fmt;
use std::ops::{Add, AddAssign, Sub, SubAssign};
use std::str::FromStr;

/// A fixed-point monetary amount in integer cents.
///
/// 1 currency unit = `Money::from_cents(100)`.
///
/// Use [`Money::from_cents`] for explicit construction and [`Money::cents`]
/// to extract the raw value at layer boundaries that require integers.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Money(i64);

impl Money {
    /// Zero monetary amount.
    pub const ZERO: Money = Money(0);

    /// Construct a `Money` from raw integer cents.
    #[inline]
    pub const fn from_cents(raw: i64) -> Self {
        Money(raw)
    }

    /// Extract the underlying raw cents.
    #[inline]
    pub const fn cents(self) -> i64 {
        self.0
    }

    /// True for amounts strictly greater than zero.
    #[inline]
    pub fn is_positive(self) -> bool {
        self.0 > 0
    }

    /// Checked addition. `None` on overflow; callers must handle explicitly.
    #[inline]
    pub fn checked_add(self, rhs: Money) -> Option<Money> {
        self.0.checked_add(rhs.0).map(Money)
    }

    /// Saturating addition — clamps at `i64::MAX` on overflow.
    #[inline]
    pub fn saturating_add(self, rhs: Money) -> Money {
        Money(self.0.saturating_add(rhs.0))
    }

    /// Saturating subtraction — clamps at `i64::MIN` on underflow.
    #[inline]
    pub fn saturating_sub(self, rhs: Money) -> Money {
        Money(self.0.saturating_sub(rhs.0))
    }

    /// Multiply a per-unit price by an item quantity with overflow
    /// detection. Returns `None` on overflow.
    #[inline]
    pub fn checked_mul_qty(self, qty: u32) -> Option<Money> {
        self.0.checked_mul(i64::from(qty)).map(Money)
    }
}

impl Add for Money {
    type Output = Money;
    fn add(self, rhs: Money) -> Money {
        Money(self.0 + rhs.0)
    }
}

impl Sub for Money {
    type Output = Money;
    fn sub(self, rhs: Money) -> Money {
        Money(self.0 - rhs.0)
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, rhs: Money) {
        self.0 += rhs.0;
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, rhs: Money) {
        self.0 -= rhs.0;
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        let abs = self.0.unsigned_abs();
        write!(f, "{sign}{}.{:02}", abs / 100, abs % 100)
    }
}

/// Returned when a decimal string cannot be parsed as a monetary amount.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseMoneyError {
    /// The offending input, for error reporting.
    pub input: String,
}

impl fmt::Display for ParseMoneyError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid money amount: {:?}", self.input)
    }
}

impl std::error::Error for ParseMoneyError {}

impl FromStr for Money {
    type Err = ParseMoneyError;

    /// Parse a decimal string with at most two fraction digits.
    ///
    /// Accepted: `"2500"`, `"2499.99"`, `"0.5"` (= 50 cents), `"-12.30"`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || ParseMoneyError {
            input: s.to_string(),
        };

        let trimmed = s.trim();
        let (negative, digits) = match trimmed.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, trimmed),
        };

        let (int_part, frac_part) = match digits.split_once('.') {
            Some((i, f)) => (i, f),
            None => (digits, ""),
        };

        if int_part.is_empty() || frac_part.len() > 2 {
            return Err(err());
        }
        if !int_part.bytes().all(|b| b.is_ascii_digit())
            || !frac_part.bytes().all(|b| b.is_ascii_digit())
        {
            return Err(err());
        }

        let whole: i64 = int_part.parse().map_err(|_| err())?;
        let mut frac: i64 = if frac_part.is_empty() {
            0
        } else {
            frac_part.parse().map_err(|_| err())?
        };
        if frac_part.len() == 1 {
            frac *= 10;
        }

        let cents = whole
            .checked_mul(100)
            .and_then(|c| c.checked_add(frac))
            .ok_or_else(err)?;

        Ok(Money(if negative { -cents } else { cents }))
    }
}

impl serde::Serialize for Money {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> serde::Deserialize<'de> for Money {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = <std::borrow::Cow<'de, str>>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_two_decimal_string() {
        let m: Money = "2499.99".parse().unwrap();
        assert_eq!(m.cents(), 249_999);
    }

    #[test]
    fn parses_whole_and_single_decimal() {
        assert_eq!("2500".parse::<Money>().unwrap().cents(), 250_000);
        assert_eq!("0.5".parse::<Money>().unwrap().cents(), 50);
        assert_eq!("-12.30".parse::<Money>().unwrap().cents(), -1_230);
    }

    #[test]
    fn rejects_garbage() {
        assert!("".parse::<Money>().is_err());
        assert!(".99".parse::<Money>().is_err());
        assert!("12.345".parse::<Money>().is_err());
        assert!("12,50".parse::<Money>().is_err());
        assert!("1e3".parse::<Money>().is_err());
    }

    #[test]
    fn display_round_trips() {
        for raw in [0, 5, 99, 100, 249_999, -1_230] {
            let m = Money::from_cents(raw);
            assert_eq!(m.to_string().parse::<Money>().unwrap(), m);
        }
        assert_eq!(Money::from_cents(249_999).to_string(), "2499.99");
        assert_eq!(Money::from_cents(-5).to_string(), "-0.05");
    }

    #[test]
    fn checked_mul_qty_detects_overflow() {
        assert_eq!(
            Money::from_cents(249_999).checked_mul_qty(3),
            Some(Money::from_cents(749_997))
        );
        assert_eq!(Money::from_cents(i64::MAX).checked_mul_qty(2), None);
    }

    #[test]
    fn serde_uses_decimal_strings() {
        let m = Money::from_cents(749_997);
        assert_eq!(serde_json::to_string(&m).unwrap(), "\"7499.97\"");
        let back: Money = serde_json::from_str("\"7499.97\"").unwrap();
        assert_eq!(back, m);
    }
}
