//! `installment_plans` computes installment payment plans for therapy-center invoices.
//!
//! A family can settle an invoice across several installments paid weekly,
//! every two weeks, or monthly. This crate provides:
//! - **Plan previews**: a due-date/amount schedule that adds up to the invoice
//!   total to the cent, plus the average installment and the plan's length.
//! - **Eligibility checks**: whether a student may open a plan for an invoice,
//!   given their payment history and a configurable [`PlanPolicy`].
//!
//! Amounts are split by truncating to whole cents; whatever the truncation
//! leaves over is added to the last installment.
//!
//! ## Usage
//!
//! ```rust
//! use chrono::NaiveDate;
//! use installment_plans::{compute_preview, Frequency, PlanRequest};
//! use rust_decimal_macros::dec;
//!
//! let request = PlanRequest::new(
//!     dec!(1000),
//!     3,
//!     Frequency::Monthly,
//!     NaiveDate::from_ymd_opt(2025, 1, 1).unwrap(),
//! );
//!
//! match compute_preview(&request) {
//!     Ok(preview) => {
//!         for line in &preview.installments {
//!             println!("#{} {} due {}", line.installment_number, line.amount, line.due_date);
//!         }
//!         assert_eq!(preview.installments[2].amount, dec!(333.34));
//!     }
//!     Err(e) => {
//!         eprintln!("Error computing plan: {}", e);
//!     }
//! }
//! ```
//!
//! The same computation is available over JSON:
//!
//! ```rust
//! use installment_plans::{compute_preview, PlanRequest};
//!
//! let request = PlanRequest::from_json(
//!     r#"{"totalAmount": 100, "numberOfInstallments": 2, "frequency": "weekly", "startDate": "2025-01-01"}"#,
//! )?;
//! let json = compute_preview(&request)?.to_json()?;
//! assert!(json.contains(r#""dueDate":"2025-01-08""#));
//! # Ok::<(), installment_plans::PlanError>(())
//! ```

pub mod calculator;
pub mod config;
pub mod eligibility;
pub mod error;
pub mod frequency;
pub mod money;
pub mod plan;

pub use calculator::{compute_preview, MIN_INSTALLMENTS};
pub use config::PlanPolicy;
pub use eligibility::{check_eligibility, Eligibility, IneligibilityReason, StudentPaymentHistory};
pub use error::{PlanError, Result};
pub use frequency::Frequency;
pub use plan::{InstallmentLine, PlanDuration, PlanPreview, PlanRequest};
