use num_traits::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

use crate::constants::RATE_DECIMAL_PLACES;
use crate::errors::{Error, Result};

/// Rounds to two decimals, half away from zero, and keeps exactly two
/// fractional digits so `66.5` displays as `66.50`.
pub fn round_rate(value: Decimal) -> Decimal {
    let mut rounded =
        value.round_dp_with_strategy(RATE_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(RATE_DECIMAL_PLACES);
    rounded
}

/// Rounds to a whole number of people. Negative counts are rejected.
pub fn round_count(value: Decimal) -> Result<u64> {
    let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
    if rounded.is_zero() {
        return Ok(0);
    }
    if rounded.is_sign_negative() {
        return Err(Error::InvalidValue(format!("negative count {}", rounded)));
    }
    rounded
        .to_u64()
        .ok_or_else(|| Error::InvalidValue(format!("count {} out of range", rounded)))
}

/// Converts a raw upstream number into a decimal.
pub(crate) fn to_decimal(value: f64) -> Result<Decimal> {
    Decimal::try_from(value)
        .map_err(|_| Error::InvalidValue(format!("{} is not a finite number", value)))
}
