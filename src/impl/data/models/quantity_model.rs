use std::str::FromStr;

/// The raw text could not be coerced into a positive quantity. Callers
/// default to 1 and record a warning instead of failing the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct InvalidQuantity;

/// Lenient quantity parse: everything except ASCII digits is stripped
/// before parsing, so "3 pcs" and " 3" both coerce. Zero (and anything
/// digit-free) is rejected.
#[derive(Debug)]
pub(crate) struct QuantityModel(pub u32);

impl FromStr for QuantityModel {
    type Err = InvalidQuantity;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        let quantity = digits.parse::<u32>().map_err(|_| InvalidQuantity)?;
        if quantity == 0 {
            return Err(InvalidQuantity);
        }
        Ok(QuantityModel(quantity))
    }
}
