//! Installment frequency and the calendar rules attached to it.

use std::fmt;
use std::str::FromStr;

use chrono::{Days, Months, NaiveDate};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::PlanError;

/// Average number of weeks in a calendar month, used for duration estimates.
const WEEKS_PER_MONTH: Decimal = dec!(4.33);

/// Recurrence interval between two installments of a plan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Frequency {
    /// Every 7 days.
    Weekly,
    /// Every 14 days.
    Biweekly,
    /// Every calendar month.
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Weekly => "weekly",
            Frequency::Biweekly => "biweekly",
            Frequency::Monthly => "monthly",
        }
    }

    /// Due date of the installment at zero-based `index` for a plan starting on `start`.
    ///
    /// Monthly dates are anchored on `start` rather than chained: the `index`-th
    /// date is `start + index months`, clamped to the last day of the target
    /// month when it is shorter. A plan starting on Jan 31 therefore falls due
    /// on Feb 28 (Feb 29 in leap years), Mar 31, Apr 30, and so on, never
    /// drifting to an earlier day-of-month or spilling into the following month.
    ///
    /// This differs from advancing the previous due date one month at a time.
    /// After a clamped date the next one is not "previous + 1 month": Feb 28 is
    /// followed by Mar 31, not Mar 28. For start days up to the 28th the two
    /// rules agree.
    ///
    /// Returns `None` if the date falls outside chrono's representable range.
    pub fn due_date(&self, start: NaiveDate, index: u32) -> Option<NaiveDate> {
        match self {
            Frequency::Weekly => start.checked_add_days(Days::new(7 * u64::from(index))),
            Frequency::Biweekly => start.checked_add_days(Days::new(14 * u64::from(index))),
            Frequency::Monthly => start.checked_add_months(Months::new(index)),
        }
    }

    /// Approximate plan length in weeks for `installments` payments.
    pub fn duration_weeks(&self, installments: u32) -> Decimal {
        let n = Decimal::from(installments);
        match self {
            Frequency::Weekly => n,
            Frequency::Biweekly => n * dec!(2),
            Frequency::Monthly => n * WEEKS_PER_MONTH,
        }
    }

    /// Approximate plan length in months for `installments` payments.
    pub fn duration_months(&self, installments: u32) -> Decimal {
        let n = Decimal::from(installments);
        match self {
            Frequency::Weekly => n * dec!(0.25),
            Frequency::Biweekly => n * dec!(0.5),
            Frequency::Monthly => n,
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = PlanError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekly" => Ok(Frequency::Weekly),
            "biweekly" => Ok(Frequency::Biweekly),
            "monthly" => Ok(Frequency::Monthly),
            other => Err(PlanError::invalid(format!("unrecognized frequency '{}'", other))),
        }
    }
}
