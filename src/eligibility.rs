//! Whether a student may split an invoice into installments.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PlanPolicy;

/// Payment standing of a student, as counted by the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StudentPaymentHistory {
    pub active_plans: u32,
    pub overdue_installments: u32,
    pub defaulted_plans: u32,
}

/// A rule the request failed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "code", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum IneligibilityReason {
    BelowMinimumAmount {
        #[serde(with = "rust_decimal::serde::arbitrary_precision")]
        minimum: Decimal,
    },
    TooManyActivePlans { limit: u32 },
    OverdueInstallments { count: u32 },
    PriorDefault,
}

impl std::fmt::Display for IneligibilityReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BelowMinimumAmount { minimum } => {
                write!(f, "invoice amount is below the plan minimum of {}", minimum)
            }
            Self::TooManyActivePlans { limit } => {
                write!(f, "student already has {} active plan(s)", limit)
            }
            Self::OverdueInstallments { count } => {
                write!(f, "student has {} overdue installment(s)", count)
            }
            Self::PriorDefault => write!(f, "student has defaulted on a previous plan"),
        }
    }
}

/// Outcome of an eligibility check; `eligible` iff `reasons` is empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Eligibility {
    pub eligible: bool,
    pub reasons: Vec<IneligibilityReason>,
}

/// Checks `invoice_amount` and `history` against every rule in `policy`,
/// reporting all failures rather than stopping at the first.
pub fn check_eligibility(
    invoice_amount: Decimal,
    history: &StudentPaymentHistory,
    policy: &PlanPolicy,
) -> Eligibility {
    let mut reasons = Vec::new();

    if invoice_amount < policy.min_plan_amount {
        reasons.push(IneligibilityReason::BelowMinimumAmount {
            minimum: policy.min_plan_amount,
        });
    }
    if history.active_plans >= policy.max_active_plans {
        reasons.push(IneligibilityReason::TooManyActivePlans {
            limit: policy.max_active_plans,
        });
    }
    if history.overdue_installments > policy.max_overdue_installments {
        reasons.push(IneligibilityReason::OverdueInstallments {
            count: history.overdue_installments,
        });
    }
    if history.defaulted_plans > 0 && !policy.allow_prior_default {
        reasons.push(IneligibilityReason::PriorDefault);
    }

    if !reasons.is_empty() {
        debug!(%invoice_amount, failed = reasons.len(), "installment plan not eligible");
    }

    Eligibility {
        eligible: reasons.is_empty(),
        reasons,
    }
}
