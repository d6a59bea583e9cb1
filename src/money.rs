//! Conversions between decimal amounts and integer minor currency units.
//!
//! Schedule arithmetic runs entirely on `i64` cents; decimals only appear at
//! the edges so that truncation and remainder absorption are exact.

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use crate::error::{PlanError, Result};

/// Number of decimal places in a minor-unit-aware amount.
pub const MINOR_UNIT_SCALE: u32 = 2;

/// Converts an amount such as `1000.50` into `100050` minor units.
///
/// # Errors
///
/// Returns `InvalidRequest` if the amount has more than two decimal places or
/// does not fit in an `i64` once scaled.
pub fn to_minor_units(amount: Decimal) -> Result<i64> {
    let normalized = amount.normalize();
    if normalized.scale() > MINOR_UNIT_SCALE {
        return Err(PlanError::invalid(format!(
            "amount {} has more than {} decimal places",
            amount, MINOR_UNIT_SCALE
        )));
    }

    normalized
        .checked_mul(Decimal::ONE_HUNDRED)
        .and_then(|units| units.to_i64())
        .ok_or_else(|| PlanError::invalid(format!("amount {} is out of range", amount)))
}

/// Converts minor units back into a decimal with exactly two places.
pub fn from_minor_units(units: i64) -> Decimal {
    Decimal::new(units, MINOR_UNIT_SCALE)
}
