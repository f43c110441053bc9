//! Money type for representing currency amounts
//!
//! Internally stores amounts in pence (i64) to avoid floating-point precision
//! issues. Provides safe arithmetic operations and formatting.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, AddAssign, Neg, Sub, SubAssign};

/// Represents a monetary amount stored as pence (hundredths of the currency unit)
///
/// Using i64 pence avoids floating-point precision issues. Negative values are
/// representable so that derived figures (net position, differences) stay
/// well-defined even though recorded amounts are validated as non-negative
/// before they reach the data files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Money(i64);

impl Money {
    /// Create a Money amount from pence
    ///
    /// # Examples
    /// ```
    /// use nestegg::models::Money;
    /// let amount = Money::from_pence(1050); // £10.50
    /// ```
    pub const fn from_pence(pence: i64) -> Self {
        Self(pence)
    }

    /// Create a Money amount from whole pounds
    pub const fn from_pounds(pounds: i64) -> Self {
        Self(pounds * 100)
    }

    /// Create a zero Money amount
    pub const fn zero() -> Self {
        Self(0)
    }

    /// Get the amount in pence
    pub const fn pence(&self) -> i64 {
        self.0
    }

    /// Get the whole pounds portion (truncated toward zero)
    pub const fn pounds(&self) -> i64 {
        self.0 / 100
    }

    /// Get the pence portion (0-99)
    pub const fn pence_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Check if the amount is zero
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Check if the amount is positive
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Check if the amount is negative
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Get the absolute value
    pub const fn abs(&self) -> Self {
        Self(self.0.abs())
    }

    /// Clamp the amount at zero, turning any negative value into zero
    ///
    /// Outstanding balances and savings gaps never report a credit.
    pub const fn clamp_non_negative(&self) -> Self {
        if self.0 < 0 {
            Self(0)
        } else {
            *self
        }
    }

    /// Divide evenly across `divisor` parts, rounding half away from zero
    ///
    /// Returns the amount unchanged when `divisor` is zero, leaving the
    /// "divide by months remaining" callers to handle that case explicitly.
    pub fn divided_by(&self, divisor: i64) -> Self {
        if divisor == 0 {
            return *self;
        }
        let half = divisor.abs() / 2;
        let adjusted = if self.0 >= 0 {
            self.0 + half
        } else {
            self.0 - half
        };
        Self(adjusted / divisor)
    }

    /// Parse a money amount from a string
    ///
    /// Accepts formats: "10.50", "-10.50", "£10.50", "10"
    pub fn parse(s: &str) -> Result<Self, MoneyParseError> {
        let s = s.trim();

        // Handle negative sign at start
        let (negative, s) = if let Some(stripped) = s.strip_prefix('-') {
            (true, stripped)
        } else {
            (false, s)
        };

        // Remove currency symbol if present
        let s = s.strip_prefix('£').unwrap_or(s);

        // Parse based on format
        let pence = if s.contains('.') {
            // Decimal format: "10.50"
            let parts: Vec<&str> = s.split('.').collect();
            if parts.len() != 2 {
                return Err(MoneyParseError::InvalidFormat(s.to_string()));
            }

            let pounds: i64 = parts[0]
                .parse()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?;

            // Pad or truncate pence to 2 digits
            let pence_str = parts[1];
            let pence: i64 = match pence_str.len() {
                0 => 0,
                1 => {
                    pence_str
                        .parse::<i64>()
                        .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                        * 10
                }
                _ => pence_str[..2]
                    .parse()
                    .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?,
            };

            pounds * 100 + pence
        } else {
            // Integer format - whole pounds
            s.parse::<i64>()
                .map_err(|_| MoneyParseError::InvalidFormat(s.to_string()))?
                * 100
        };

        Ok(Self(if negative { -pence } else { pence }))
    }

    /// Format with a currency symbol
    pub fn format_with_symbol(&self, symbol: &str) -> String {
        if self.is_negative() {
            format!(
                "-{}{}.{:02}",
                symbol,
                self.pounds().abs(),
                self.pence_part()
            )
        } else {
            format!("{}{}.{:02}", symbol, self.pounds(), self.pence_part())
        }
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_negative() {
            write!(f, "-£{}.{:02}", self.pounds().abs(), self.pence_part())
        } else {
            write!(f, "£{}.{:02}", self.pounds(), self.pence_part())
        }
    }
}

impl Add for Money {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0.saturating_add(other.0))
    }
}

impl AddAssign for Money {
    fn add_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_add(other.0);
    }
}

impl Sub for Money {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0.saturating_sub(other.0))
    }
}

impl SubAssign for Money {
    fn sub_assign(&mut self, other: Self) {
        self.0 = self.0.saturating_sub(other.0);
    }
}

impl Neg for Money {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl std::iter::Sum for Money {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Money::zero(), |acc, m| acc + m)
    }
}

/// Error type for money parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoneyParseError {
    InvalidFormat(String),
}

impl fmt::Display for MoneyParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoneyParseError::InvalidFormat(s) => write!(f, "Invalid money format: {}", s),
        }
    }
}

impl std::error::Error for MoneyParseError {}
