//! Installment schedule computation.
//!
//! Amounts are split by truncating to the minor currency unit and letting the
//! last installment absorb whatever truncation left over, so the schedule
//! always adds up to the requested total to the cent.

use rust_decimal::Decimal;
use tracing::debug;

use crate::error::{PlanError, Result};
use crate::money::{from_minor_units, to_minor_units};
use crate::plan::{InstallmentLine, PlanDuration, PlanPreview, PlanRequest};

/// Smallest number of installments a plan may have.
pub const MIN_INSTALLMENTS: u32 = 2;

/// Computes the schedule and summary for `request`.
///
/// Validation runs before anything is built; on failure no partial schedule
/// is returned.
///
/// # Errors
///
/// Returns `PlanError::InvalidRequest` if the total is not positive, fewer than
/// two installments are requested, the first payment is not strictly between
/// zero and the total, an amount has sub-cent precision, the amount is too
/// small to give every installment at least one cent, or a due date falls
/// outside the representable calendar.
pub fn compute_preview(request: &PlanRequest) -> Result<PlanPreview> {
    let amounts = allocate_amounts(request).inspect_err(|err| {
        debug!(error = %err, "rejected installment plan request");
    })?;

    let mut installments = Vec::with_capacity(amounts.len());
    for (index, units) in (0u32..).zip(amounts) {
        let due_date = request
            .frequency
            .due_date(request.start_date, index)
            .ok_or_else(|| {
                PlanError::invalid(format!(
                    "due date of installment {} is out of range",
                    index + 1
                ))
            })?;

        installments.push(InstallmentLine {
            installment_number: index + 1,
            amount: from_minor_units(units),
            due_date,
        });
    }

    let count = request.number_of_installments;
    let preview = PlanPreview {
        installments,
        total_amount: request.total_amount,
        average_installment_amount: request.total_amount / Decimal::from(count),
        duration: PlanDuration {
            weeks: request.frequency.duration_weeks(count),
            months: request.frequency.duration_months(count),
        },
    };

    debug!(
        total = %preview.total_amount,
        installments = count,
        frequency = %request.frequency,
        "computed installment plan preview"
    );

    Ok(preview)
}

/// Validates the request and returns per-installment amounts in minor units.
fn allocate_amounts(request: &PlanRequest) -> Result<Vec<i64>> {
    let count = request.number_of_installments;
    if count < MIN_INSTALLMENTS {
        return Err(PlanError::invalid(format!(
            "number of installments must be at least {}, got {}",
            MIN_INSTALLMENTS, count
        )));
    }

    // Dates only grow with the index, so checking the last one covers them all
    // before anything is allocated.
    let last_index = count - 1;
    if request
        .frequency
        .due_date(request.start_date, last_index)
        .is_none()
    {
        return Err(PlanError::invalid(format!(
            "due date of installment {} is out of range",
            count
        )));
    }

    let total = to_minor_units(request.total_amount)?;
    if total <= 0 {
        return Err(PlanError::invalid(format!(
            "total amount must be positive, got {}",
            request.total_amount
        )));
    }

    let first = match request.first_payment_amount {
        Some(amount) => {
            let units = to_minor_units(amount)?;
            if units <= 0 {
                return Err(PlanError::invalid(format!(
                    "first payment amount must be positive, got {}",
                    amount
                )));
            }
            if units >= total {
                return Err(PlanError::invalid(format!(
                    "first payment amount {} must be less than total amount {}",
                    amount, request.total_amount
                )));
            }
            Some(units)
        }
        None => None,
    };

    let n = i64::from(count);
    let base = total / n;

    let amounts = match first {
        Some(first) if first != base => split_after_first(total, first, count)?,
        _ => split_evenly(total, base, count)?,
    };

    Ok(amounts)
}

/// `count` lines of `base`, with the truncation remainder on the last one.
fn split_evenly(total: i64, base: i64, count: u32) -> Result<Vec<i64>> {
    if base < 1 {
        return Err(PlanError::invalid(format!(
            "total amount {} is too small for {} installments",
            from_minor_units(total),
            count
        )));
    }

    let remainder = total - base * i64::from(count);
    let mut amounts = vec![base; count as usize];
    if let Some(last) = amounts.last_mut() {
        *last += remainder;
    }

    Ok(amounts)
}

/// `first`, then the rest of the total spread over the remaining lines, with
/// any difference to the total settled on the last line.
fn split_after_first(total: i64, first: i64, count: u32) -> Result<Vec<i64>> {
    let remaining_amount = total - first;
    let remaining_installments = i64::from(count - 1);
    let new_base = remaining_amount / remaining_installments;

    if new_base < 1 {
        return Err(PlanError::invalid(format!(
            "remaining amount {} is too small for {} installments",
            from_minor_units(remaining_amount),
            remaining_installments
        )));
    }

    let mut amounts = Vec::with_capacity(count as usize);
    amounts.push(first);
    amounts.extend(std::iter::repeat_n(new_base, (count - 1) as usize));

    let difference = total - amounts.iter().sum::<i64>();
    if difference != 0 {
        if let Some(last) = amounts.last_mut() {
            *last += difference;
        }
    }

    Ok(amounts)
}
