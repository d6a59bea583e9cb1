//! Plan policy thresholds, loaded from defaults, the environment or JSON.

use std::env;
use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{PlanError, Result};

/// Thresholds deciding who may open a payment plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PlanPolicy {
    /// Smallest invoice amount that can be split into installments.
    #[serde(with = "rust_decimal::serde::arbitrary_precision")]
    pub min_plan_amount: Decimal,
    /// Number of concurrently active plans a student may hold.
    pub max_active_plans: u32,
    /// Overdue installments tolerated on other plans.
    pub max_overdue_installments: u32,
    pub allow_prior_default: bool,
}

impl Default for PlanPolicy {
    fn default() -> Self {
        Self {
            min_plan_amount: dec!(500.00),
            max_active_plans: 1,
            max_overdue_installments: 0,
            allow_prior_default: false,
        }
    }
}

impl PlanPolicy {
    /// Load policy from environment variables, falling back to defaults for
    /// anything unset.
    pub fn from_env() -> Result<Self> {
        // Load .env file if present
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Ok(Self {
            min_plan_amount: env_or("PLAN_MIN_AMOUNT", defaults.min_plan_amount)?,
            max_active_plans: env_or("PLAN_MAX_ACTIVE_PLANS", defaults.max_active_plans)?,
            max_overdue_installments: env_or(
                "PLAN_MAX_OVERDUE_INSTALLMENTS",
                defaults.max_overdue_installments,
            )?,
            allow_prior_default: env_or(
                "PLAN_ALLOW_PRIOR_DEFAULT",
                defaults.allow_prior_default,
            )?,
        })
    }

    pub fn from_json(input: &str) -> Result<Self> {
        serde_json::from_str(input).map_err(|e| PlanError::configuration(e.to_string()))
    }
}

fn env_or<T: FromStr>(key: &str, default: T) -> Result<T> {
    match env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse()
            .map_err(|_| PlanError::configuration(format!("Invalid {}: '{}'", key, raw))),
        Err(_) => Ok(default),
    }
}
