// Property-based checks of the schedule invariants, plus the JSON contract.

use chrono::{Datelike, Days, Months, NaiveDate};
use installment_plans::{compute_preview, Frequency, PlanError, PlanRequest};
use proptest::prelude::*;
use rust_decimal::Decimal;

fn frequency_strategy() -> impl Strategy<Value = Frequency> {
    prop_oneof![
        Just(Frequency::Weekly),
        Just(Frequency::Biweekly),
        Just(Frequency::Monthly),
    ]
}

fn start_date_strategy() -> impl Strategy<Value = NaiveDate> {
    (2000i32..2100, 1u32..=12, 1u32..=28)
        .prop_map(|(y, m, d)| NaiveDate::from_ymd_opt(y, m, d).unwrap())
}

proptest! {
    #[test]
    fn schedule_invariants_hold(
        total_cents in 200i64..100_000_000,
        count in 2u32..60,
        frequency in frequency_strategy(),
        start in start_date_strategy(),
    ) {
        prop_assume!(total_cents >= i64::from(count));
        let total = Decimal::new(total_cents, 2);
        let request = PlanRequest::new(total, count, frequency, start);

        let preview = compute_preview(&request).unwrap();

        // Exact sum, count and average
        prop_assert_eq!(preview.scheduled_total(), total);
        prop_assert_eq!(preview.installments.len(), count as usize);
        prop_assert_eq!(preview.average_installment_amount, total / Decimal::from(count));

        // Only the last line may differ, by less than one cent per installment
        let base = preview.installments[0].amount;
        for line in &preview.installments[..count as usize - 1] {
            prop_assert_eq!(line.amount, base);
        }
        let last = preview.installments[count as usize - 1].amount;
        prop_assert!(last >= base);
        prop_assert!(last - base < Decimal::new(i64::from(count), 2));

        // Numbering and date spacing
        prop_assert_eq!(preview.installments[0].due_date, start);
        for (i, pair) in preview.installments.windows(2).enumerate() {
            prop_assert_eq!(pair[0].installment_number, i as u32 + 1);
            prop_assert_eq!(pair[1].installment_number, i as u32 + 2);
            prop_assert!(pair[1].due_date > pair[0].due_date);

            let expected = match frequency {
                Frequency::Weekly => pair[0].due_date + Days::new(7),
                Frequency::Biweekly => pair[0].due_date + Days::new(14),
                Frequency::Monthly => pair[0].due_date + Months::new(1),
            };
            prop_assert_eq!(pair[1].due_date, expected);
        }
    }

    #[test]
    fn custom_first_payment_reconstructs_total(
        total_cents in 200i64..10_000_000,
        first_fraction in 0.01f64..0.99,
        count in 2u32..36,
        start in start_date_strategy(),
    ) {
        let first_cents = ((total_cents as f64) * first_fraction) as i64;
        prop_assume!(first_cents > 0 && first_cents < total_cents);
        let total = Decimal::new(total_cents, 2);
        let first = Decimal::new(first_cents, 2);
        let request = PlanRequest::new(total, count, Frequency::Monthly, start)
            .with_first_payment(first);

        match compute_preview(&request) {
            Ok(preview) => {
                prop_assert_eq!(preview.installments[0].amount, first);
                prop_assert_eq!(preview.scheduled_total(), total);
                prop_assert!(preview.installments.iter().all(|l| l.amount > Decimal::ZERO));
            }
            // Only possible when the remainder cannot give each line a cent
            Err(PlanError::InvalidRequest(_)) => {
                prop_assert!(total_cents - first_cents < i64::from(count - 1));
            }
            Err(other) => prop_assert!(false, "unexpected error: {}", other),
        }
    }

    #[test]
    fn output_is_deterministic(
        total_cents in 200i64..1_000_000,
        count in 2u32..24,
        frequency in frequency_strategy(),
        start in start_date_strategy(),
    ) {
        let request = PlanRequest::new(Decimal::new(total_cents, 2), count, frequency, start);

        let first = compute_preview(&request).unwrap().to_json().unwrap();
        let second = compute_preview(&request).unwrap().to_json().unwrap();

        prop_assert_eq!(first, second);
    }
}

fn last_day_of_month(date: NaiveDate) -> u32 {
    let first = NaiveDate::from_ymd_opt(date.year(), date.month(), 1).unwrap();
    (first + Months::new(1) - Days::new(1)).day()
}

proptest! {
    #[test]
    fn monthly_dates_keep_start_day_or_clamp(
        year in 2000i32..2100,
        month in 1u32..=12,
        day in 29u32..=31,
        count in 2u32..36,
    ) {
        let start = NaiveDate::from_ymd_opt(year, month, day);
        prop_assume!(start.is_some());
        let start = start.unwrap();
        let request = PlanRequest::new(Decimal::new(100_000, 2), count, Frequency::Monthly, start);

        let preview = compute_preview(&request).unwrap();

        for line in &preview.installments {
            let due = line.due_date;
            prop_assert_eq!(due.day(), day.min(last_day_of_month(due)));
        }
        for pair in preview.installments.windows(2) {
            prop_assert!(pair[1].due_date > pair[0].due_date);
            // exactly one calendar month apart, counting by month number
            let months = |d: NaiveDate| d.year() * 12 + d.month() as i32;
            prop_assert_eq!(months(pair[1].due_date) - months(pair[0].due_date), 1);
        }
    }
}

#[test]
fn test_month_end_start_keeps_day_of_month() {
    let start = NaiveDate::from_ymd_opt(2025, 8, 31).unwrap();
    let request = PlanRequest::new(Decimal::new(60_000, 2), 6, Frequency::Monthly, start);

    let preview = compute_preview(&request).unwrap();

    let days: Vec<u32> = preview.installments.iter().map(|l| l.due_date.day()).collect();
    // Aug 31, Sep 30, Oct 31, Nov 30, Dec 31, Jan 31
    assert_eq!(days, vec![31, 30, 31, 30, 31, 31]);
}

#[test]
fn test_preview_json_contract() {
    let request = PlanRequest::from_json(
        r#"{
            "totalAmount": 1000,
            "numberOfInstallments": 3,
            "frequency": "monthly",
            "startDate": "2025-01-01"
        }"#,
    )
    .unwrap();

    let json = compute_preview(&request).unwrap().to_json().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["installments"][0]["installmentNumber"], 1);
    assert_eq!(value["installments"][0]["dueDate"], "2025-01-01");
    assert_eq!(value["installments"][2]["dueDate"], "2025-03-01");
    assert!(json.contains(r#""amount":333.33"#));
    assert!(json.contains(r#""amount":333.34"#));
    assert!(json.contains(r#""totalAmount":1000"#));
    assert!(json.contains(r#""duration":{"weeks":12.99,"months":3}"#));
}

#[test]
fn test_invalid_json_requests_are_rejected() {
    let cases = [
        r#"{"totalAmount": 1200, "numberOfInstallments": 1, "frequency": "monthly", "startDate": "2025-01-01"}"#,
        r#"{"totalAmount": 0, "numberOfInstallments": 6, "frequency": "monthly", "startDate": "2025-01-01"}"#,
        r#"{"totalAmount": 1200, "numberOfInstallments": 6, "frequency": "yearly", "startDate": "2025-01-01"}"#,
        r#"{"totalAmount": 1200, "numberOfInstallments": 6, "frequency": "monthly", "startDate": "01/01/2025"}"#,
        r#"{"totalAmount": 1200, "numberOfInstallments": 6, "frequency": "monthly", "startDate": "2025-01-01", "firstPaymentAmount": -5}"#,
        r#"{"totalAmount": 1200, "numberOfInstallments": -2, "frequency": "monthly", "startDate": "2025-01-01"}"#,
        r#"{"totalAmount": 79228162514264337593543950335, "numberOfInstallments": 2, "frequency": "weekly", "startDate": "2025-01-01"}"#,
        r#"{"totalAmount": 1200, "numberOfInstallments": 200000000, "frequency": "weekly", "startDate": "2025-01-01"}"#,
    ];

    for input in cases {
        let result = PlanRequest::from_json(input).and_then(|request| compute_preview(&request));
        let err = result.expect_err(input);
        assert!(err.is_invalid_request(), "{input}: {err}");
    }
}
