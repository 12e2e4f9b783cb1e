//! Property-based tests for the codec and validators.
//!
//! Run with: `cargo test --test proptest_tests`

use chrono::{Datelike, NaiveDate};
use isikukood::*;
use proptest::prelude::*;

// ── Proptest Strategies ─────────────────────────────────────────────────────

fn arb_gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

/// Any date between 1800-01-01 and 2199-12-31.
fn arb_birthdate() -> impl Strategy<Value = Birthdate> {
    let first = NaiveDate::from_ymd_opt(YEAR_MIN, 1, 1).unwrap();
    let last = NaiveDate::from_ymd_opt(YEAR_MAX, 12, 31).unwrap();
    let span = (last - first).num_days();
    (0..=span).prop_map(move |offset| {
        Birthdate::new(first + chrono::Duration::days(offset)).unwrap()
    })
}

fn arb_order_number() -> impl Strategy<Value = u16> {
    0..=ORDER_NUMBER_MAX
}

/// A valid code built from random fields.
fn arb_code() -> impl Strategy<Value = String> {
    (arb_gender(), arb_birthdate(), arb_order_number())
        .prop_map(|(g, b, n)| encode(g, b, n).unwrap())
}

// ── Property Tests ──────────────────────────────────────────────────────────

proptest! {
    /// Zeroing the checksum and re-inserting it restores the code.
    #[test]
    fn insert_checksum_round_trip(code in arb_code()) {
        let zeroed = format!("{}0", &code[..10]);
        prop_assert_eq!(insert_checksum(&zeroed).unwrap(), code);
    }

    /// The checksum depends only on the first ten digits.
    #[test]
    fn checksum_ignores_last_digit(body in "[0-9]{10}", a in 0u8..10, b in 0u8..10) {
        let with_a = format!("{body}{a}");
        let with_b = format!("{body}{b}");
        prop_assert_eq!(
            calculate_checksum(&with_a).unwrap(),
            calculate_checksum(&with_b).unwrap()
        );
        prop_assert!(calculate_checksum(&body).unwrap() < 10);
    }

    /// insert_checksum is idempotent.
    #[test]
    fn insert_checksum_idempotent(code in "[0-9]{10,11}") {
        let once = insert_checksum(&code).unwrap();
        let twice = insert_checksum(&once).unwrap();
        prop_assert_eq!(once, twice);
    }

    /// Odd marker iff male; marker pair matches the century.
    #[test]
    fn gender_marker_consistency(year in YEAR_MIN..=YEAR_MAX, gender in arb_gender()) {
        let marker = gender_marker(year, gender).unwrap().to_digit(10).unwrap() as i32;
        prop_assert_eq!(marker % 2 == 1, gender == Gender::Male);
        prop_assert_eq!((marker - 1) / 2, year / 100 - 18);
    }

    /// Every encoded code validates and decodes to its fields.
    #[test]
    fn encode_then_parse(gender in arb_gender(), birthdate in arb_birthdate(), n in arb_order_number()) {
        let code = encode(gender, birthdate, n).unwrap();
        prop_assert!(validate_code(&code).is_ok());
        let parsed = parse_code(&code).unwrap();
        prop_assert_eq!(parsed.gender, gender);
        prop_assert_eq!(parsed.birthdate, birthdate);
        prop_assert_eq!(parsed.order_number, n);
        prop_assert_eq!(parsed.birthdate.date().year(), birthdate.year());
    }

    /// Changing the checksum digit of a valid code always invalidates it.
    #[test]
    fn wrong_checksum_rejected(code in arb_code(), delta in 1u32..10) {
        let last = code.chars().last().unwrap().to_digit(10).unwrap();
        let wrong = format!("{}{}", &code[..10], (last + delta) % 10);
        prop_assert!(validate_code(&wrong).is_err());
    }

    /// The validators never panic on arbitrary text.
    #[test]
    fn validators_do_not_panic(s in "\\PC{0,16}") {
        let _ = code_report(&s);
        let _ = validate_code(&s);
        let _ = birthdate_from_code(&s);
        let _ = ordernumber_from_code(&s);
        let _ = insert_checksum(&s);
        let _ = Isikukood::from_code(&s);
    }
}
