//! [`Price`]-related definitions.

use std::{fmt, str::FromStr};

use derive_more::{Display, Error};
use rust_decimal::Decimal;

/// Number of rupees in one lakh (Indian numbering).
pub const RUPEES_PER_LAKH: u32 = 100_000;

/// Number of rupees in one crore (Indian numbering).
pub const RUPEES_PER_CRORE: u32 = 10_000_000;

/// Non-negative amount of money in Indian rupees.
///
/// [`Display`]s in the Indian convention: amounts of a crore and above as
/// `₹{x.xx} Cr`, amounts of a lakh and above as `₹{x.xx} L`, and anything
/// smaller as a comma-grouped whole number of rupees.
///
/// [`Display`]: fmt::Display
#[derive(Clone, Copy, Debug, Eq, Ord, PartialEq, PartialOrd)]
pub struct Price(Decimal);

impl Price {
    /// Creates a new [`Price`] of the given amount of `rupees`.
    ///
    /// [`None`] is returned if the amount is negative.
    #[must_use]
    pub fn new(rupees: Decimal) -> Option<Self> {
        (rupees >= Decimal::ZERO).then_some(Self(rupees))
    }

    /// Returns the amount of this [`Price`] in rupees.
    #[must_use]
    pub fn rupees(&self) -> Decimal {
        self.0
    }

    /// Returns the amount of this [`Price`] in crores of rupees.
    #[must_use]
    pub fn in_crores(&self) -> Decimal {
        self.0 / Decimal::from(RUPEES_PER_CRORE)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let crore = Decimal::from(RUPEES_PER_CRORE);
        let lakh = Decimal::from(RUPEES_PER_LAKH);
        if self.0 >= crore {
            write!(f, "₹{:.2} Cr", self.0 / crore)
        } else if self.0 >= lakh {
            write!(f, "₹{:.2} L", self.0 / lakh)
        } else {
            write!(f, "₹{}", group_thousands(&self.0.round().to_string()))
        }
    }
}

impl FromStr for Price {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let rupees =
            Decimal::from_str(s.trim()).map_err(ParseError::InvalidAmount)?;
        Self::new(rupees).ok_or(ParseError::Negative)
    }
}

/// Error of parsing a [`Price`] from a string.
#[derive(Clone, Debug, Display, Error)]
pub enum ParseError {
    /// Amount is not a decimal number.
    #[display("invalid amount: {_0}")]
    InvalidAmount(rust_decimal::Error),

    /// Amount is negative.
    #[display("price cannot be negative")]
    Negative,
}

/// Inserts `,` separators into the given string of decimal digits, grouping
/// them by three from the right.
fn group_thousands(digits: &str) -> String {
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(c);
    }
    grouped
}

#[cfg(feature = "serde")]
mod serde {
    //! Module providing integration with [`serde`] crate.

    use rust_decimal::prelude::ToPrimitive as _;
    use serde::{Serialize, Serializer};

    use super::Price;

    impl Serialize for Price {
        fn serialize<S: Serializer>(
            &self,
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.serialize_f64(self.0.to_f64().unwrap_or_default())
        }
    }
}

#[cfg(test)]
mod spec {
    use std::str::FromStr as _;

    use rust_decimal::Decimal;

    use super::Price;

    fn price(s: &str) -> Price {
        Price::new(s.parse().unwrap()).unwrap()
    }

    #[test]
    fn formats_crores_with_two_decimals() {
        assert_eq!(price("10000000").to_string(), "₹1.00 Cr");
        assert_eq!(price("12000000").to_string(), "₹1.20 Cr");
        assert_eq!(price("125500000").to_string(), "₹12.55 Cr");
    }

    #[test]
    fn formats_lakhs_with_two_decimals() {
        assert_eq!(price("100000").to_string(), "₹1.00 L");
        assert_eq!(price("5000000").to_string(), "₹50.00 L");
        assert_eq!(price("9999999").to_string(), "₹100.00 L");
    }

    #[test]
    fn formats_small_amounts_grouped() {
        assert_eq!(price("99999").to_string(), "₹99,999");
        assert_eq!(price("999").to_string(), "₹999");
        assert_eq!(price("1234").to_string(), "₹1,234");
        assert_eq!(price("0").to_string(), "₹0");
    }

    #[test]
    fn from_str() {
        assert_eq!(Price::from_str("12000000").unwrap(), price("12000000"));
        assert_eq!(Price::from_str(" 99999 ").unwrap(), price("99999"));
        assert!(Price::from_str("twelve").is_err());
        assert!(Price::from_str("-1").is_err());
    }

    #[test]
    fn rejects_negative_amounts() {
        assert!(Price::new(Decimal::from(-1)).is_none());
        assert!(Price::new(Decimal::ZERO).is_some());
    }

    #[test]
    fn orders_by_amount() {
        assert!(price("100000") < price("12000000"));
        assert!(price("12000000") <= price("12000000"));
    }

    #[test]
    fn converts_to_crores() {
        assert_eq!(
            price("12000000").in_crores(),
            Decimal::from_str("1.2").unwrap(),
        );
    }
}
