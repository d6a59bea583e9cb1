//! Request and result values exchanged with the calculator.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};
use crate::frequency::Frequency;

/// Parameters of a payment plan to preview.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanRequest {
    /// Amount the schedule must add up to, in currency units.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,
    pub number_of_installments: u32,
    pub frequency: Frequency,
    /// Due date of the first installment.
    pub start_date: NaiveDate,
    /// Optional custom amount for installment 1.
    #[serde(
        default,
        skip_serializing_if = "Option::is_none",
        with = "rust_decimal::serde::arbitrary_precision_option"
    )]
    pub first_payment_amount: Option<Decimal>,
}

impl PlanRequest {
    pub fn new(
        total_amount: Decimal,
        number_of_installments: u32,
        frequency: Frequency,
        start_date: NaiveDate,
    ) -> Self {
        Self {
            total_amount,
            number_of_installments,
            frequency,
            start_date,
            first_payment_amount: None,
        }
    }

    pub fn with_first_payment(mut self, amount: Decimal) -> Self {
        self.first_payment_amount = Some(amount);
        self
    }

    /// Parses a camelCase JSON request. Numbers are read from their literal
    /// text, so `0.1` arrives as exactly `0.1`.
    pub fn from_json(input: &str) -> Result<Self> {
        Ok(serde_json::from_str(input)?)
    }
}

/// One scheduled payment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InstallmentLine {
    pub installment_number: u32,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub amount: Decimal,
    pub due_date: NaiveDate,
}

/// Approximate length of a plan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlanDuration {
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub weeks: Decimal,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub months: Decimal,
}

/// Computed schedule plus summary statistics.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlanPreview {
    pub installments: Vec<InstallmentLine>,
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub total_amount: Decimal,
    /// Exact mean of the total over the installment count, independent of
    /// the per-line truncation.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub average_installment_amount: Decimal,
    pub duration: PlanDuration,
}

impl PlanPreview {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(PlanError::Encoding)
    }

    /// Sum of all line amounts.
    pub fn scheduled_total(&self) -> Decimal {
        self.installments.iter().map(|line| line.amount).sum()
    }

    pub fn first_due_date(&self) -> Option<NaiveDate> {
        self.installments.first().map(|line| line.due_date)
    }

    pub fn last_due_date(&self) -> Option<NaiveDate> {
        self.installments.last().map(|line| line.due_date)
    }
}
