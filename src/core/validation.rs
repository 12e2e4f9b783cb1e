use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use super::codec;
use super::error::{Check, ValidationError};
use super::types::*;

/// Every character must be an ASCII digit. An empty string is not numeric.
pub fn validate_numeric(value: &str) -> Result<(), ValidationError> {
    if value.is_empty() || !value.chars().all(|c| c.is_ascii_digit()) {
        return Err(ValidationError::new(
            Check::Numeric,
            "code",
            format!("given argument '{value}' is not numeric"),
        ));
    }
    Ok(())
}

/// Order number must lie in 0-999.
pub fn validate_order_number(order_number: u16) -> Result<(), ValidationError> {
    if order_number > ORDER_NUMBER_MAX {
        return Err(ValidationError::new(
            Check::OrderNumberRange,
            "order_number",
            format!(
                "order number was {order_number}, expected a value between 0 and {ORDER_NUMBER_MAX} (incl.)"
            ),
        ));
    }
    Ok(())
}

/// Accepts exactly `m` or `f`.
pub fn validate_gender(tag: &str) -> Result<Gender, ValidationError> {
    match tag {
        "m" => Ok(Gender::Male),
        "f" => Ok(Gender::Female),
        other => Err(ValidationError::new(
            Check::Gender,
            "gender",
            format!("expected gender to be either m or f, got '{other}' instead"),
        )),
    }
}

/// The first character must be a gender marker digit (1-8). Returns the digit.
pub fn validate_first_digit(code: &str) -> Result<u32, ValidationError> {
    match code.chars().next().and_then(|c| c.to_digit(10)) {
        Some(marker @ 1..=8) => Ok(marker),
        _ => {
            let first = code.chars().next().map(String::from).unwrap_or_default();
            Err(ValidationError::new(
                Check::FirstDigit,
                "code",
                format!(
                    "given code '{code}' begins with '{first}', expected a value between 1 and 8 (incl.)"
                ),
            ))
        }
    }
}

/// Year must lie in 1800-2199.
pub fn validate_year(year: i32) -> Result<(), ValidationError> {
    if !(YEAR_MIN..=YEAR_MAX).contains(&year) {
        return Err(ValidationError::new(
            Check::YearRange,
            "year",
            format!(
                "expected year to be between {YEAR_MIN} and {YEAR_MAX} (incl.), got {year} instead"
            ),
        ));
    }
    Ok(())
}

/// The ISO 8601 date (`YYYY-MM-DD`) must exist: no February 29th outside leap
/// years, no April 31st and so on.
///
/// Only the exact `YYYY-MM-DD` shape is accepted: no sign, no surrounding
/// whitespace, no unpadded fields.
pub fn validate_existing_date(iso: &str) -> Result<NaiveDate, ValidationError> {
    let invalid =
        || ValidationError::new(Check::ExistingDate, "date", format!("date {iso} is invalid"));

    let bytes = iso.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    let year: i32 = iso[0..4].parse().map_err(|_| invalid())?;
    let month: u32 = iso[5..7].parse().map_err(|_| invalid())?;
    let day: u32 = iso[8..10].parse().map_err(|_| invalid())?;
    validate_ymd(year, month, day)
}

/// Same as [`validate_existing_date`] for a numeric triple.
pub fn validate_ymd(year: i32, month: u32, day: u32) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_ymd_opt(year, month, day).ok_or_else(|| {
        ValidationError::new(
            Check::ExistingDate,
            "date",
            format!("date {year:04}-{month:02}-{day:02} is invalid"),
        )
    })
}

/// The 11th digit must equal the checksum computed over the first ten.
pub fn validate_checksum(code: &str) -> Result<(), ValidationError> {
    let expected = codec::calculate_checksum(code)?;
    let actual = code.chars().nth(BODY_LEN).and_then(|c| c.to_digit(10));
    match actual {
        Some(digit) if digit == u32::from(expected) => Ok(()),
        Some(_) => Err(ValidationError::new(
            Check::Checksum,
            "code",
            format!("invalid checksum for {code}, expected {expected}"),
        )),
        None => Err(ValidationError::new(
            Check::Length,
            "code",
            format!("given code '{code}' has no checksum digit"),
        )),
    }
}

/// Run every check on a candidate code and return all failures (empty when valid).
///
/// Checks that need well-formed digits (checksum, birthdate) only run once the
/// code is numeric and 11 characters long.
pub fn code_report(code: &str) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let numeric = validate_numeric(code).map_err(|e| errors.push(e)).is_ok();

    let len = code.chars().count();
    if len != CODE_LEN {
        errors.push(ValidationError::new(
            Check::Length,
            "code",
            format!("given code '{code}' is {len} digits, expected {CODE_LEN}"),
        ));
    }

    let marker_ok = validate_first_digit(code).map_err(|e| errors.push(e)).is_ok();

    if numeric && len == CODE_LEN {
        if let Err(e) = validate_checksum(code) {
            errors.push(e);
        }
        if marker_ok {
            match codec::birthdate_from_code(code) {
                Ok(date) => {
                    if let Err(e) = validate_year(date.year()) {
                        errors.push(e);
                    }
                }
                Err(e) => errors.push(e),
            }
        }
    }

    errors
}

/// A code is valid when it is numeric, exactly 11 digits, starts with a gender
/// marker, carries a correct checksum and encodes an existing birthdate in
/// 1800-2199. Returns the first failing check.
pub fn validate_code(code: &str) -> Result<(), ValidationError> {
    match code_report(code).into_iter().next() {
        Some(err) => Err(err),
        None => Ok(()),
    }
}

pub fn is_valid(code: &str) -> bool {
    validate_code(code).is_ok()
}

/// Batch check: no duplicates, and every element is a valid code.
pub fn validate_code_batch<S: AsRef<str>>(codes: &[S]) -> Result<(), ValidationError> {
    let mut seen = HashSet::with_capacity(codes.len());
    for code in codes {
        let code = code.as_ref();
        if !seen.insert(code) {
            return Err(ValidationError::new(
                Check::Duplicate,
                "codes",
                format!("code {code} appears more than once"),
            ));
        }
        validate_code(code)?;
    }
    Ok(())
}

/// Validate enumeration constraints. Gender tags are already checked when
/// parsed into [`Gender`]. Empty lists are allowed and simply yield no codes.
pub fn validate_enum_arguments(
    _genders: &[Gender],
    days: &[u32],
    months: &[u32],
    years: &[i32],
) -> Result<(), ValidationError> {
    if let Some(day) = days.iter().find(|d| !(1..=31).contains(*d)) {
        return Err(ValidationError::new(
            Check::DayRange,
            "days",
            format!("days must only contain values between 1 and 31 (incl.), found {day}"),
        ));
    }

    if let Some(month) = months.iter().find(|m| !(1..=12).contains(*m)) {
        return Err(ValidationError::new(
            Check::MonthRange,
            "months",
            format!("months must only contain values between 1 and 12 (incl.), found {month}"),
        ));
    }

    years.iter().try_for_each(|&y| validate_year(y))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numeric() {
        assert!(validate_numeric("123").is_ok());
        assert!(validate_numeric("x").is_err());
        assert!(validate_numeric("").is_err());
        assert!(validate_numeric("12 3").is_err());
    }

    #[test]
    fn order_number_bounds() {
        assert!(validate_order_number(0).is_ok());
        assert!(validate_order_number(999).is_ok());
        let err = validate_order_number(1000).unwrap_err();
        assert_eq!(err.check, Check::OrderNumberRange);
        assert!(err.message.contains("1000"));
    }

    #[test]
    fn gender_tags_are_strict() {
        assert_eq!(validate_gender("m").unwrap(), Gender::Male);
        assert_eq!(validate_gender("f").unwrap(), Gender::Female);
        assert!(validate_gender("M").is_err());
        assert!(validate_gender("x").is_err());
    }

    #[test]
    fn first_digit() {
        assert_eq!(validate_first_digit("5xxxxxxxxxx").unwrap(), 5);
        assert!(validate_first_digit("0xxxxxxxxxx").is_err());
        assert!(validate_first_digit("9xxxxxxxxxx").is_err());
        assert!(validate_first_digit("").is_err());
    }

    #[test]
    fn year_bounds() {
        assert!(validate_year(1800).is_ok());
        assert!(validate_year(2199).is_ok());
        assert!(validate_year(1799).is_err());
        assert!(validate_year(2200).is_err());
    }

    #[test]
    fn existing_dates() {
        assert!(validate_existing_date("2000-01-01").is_ok());
        assert!(validate_existing_date("2000-02-29").is_ok());
        assert!(validate_existing_date("2001-02-29").is_err());
        assert!(validate_existing_date("2000-04-31").is_err());
        assert!(validate_existing_date("not a date").is_err());
    }

    #[test]
    fn existing_dates_require_exact_iso_shape() {
        for input in ["2000-1-1", "2000-01-1", "+2000-01-01", " 2000-01-01", "2000-01-01 ", "2000/01/01"] {
            let err = validate_existing_date(input).unwrap_err();
            assert_eq!(err.check, Check::ExistingDate, "{input}");
        }
        assert_eq!(
            validate_existing_date("1899-12-31").unwrap(),
            NaiveDate::from_ymd_opt(1899, 12, 31).unwrap()
        );
    }

    #[test]
    fn checksum() {
        assert!(validate_checksum("50001010006").is_ok());
        assert_eq!(
            validate_checksum("50001010000").unwrap_err().check,
            Check::Checksum
        );
        assert_eq!(validate_checksum("5000101000").unwrap_err().check, Check::Length);
    }

    #[test]
    fn report_collects_independent_failures() {
        let errors = code_report("9000101000");
        let checks: Vec<Check> = errors.iter().map(|e| e.check).collect();
        assert_eq!(checks, vec![Check::Length, Check::FirstDigit]);
    }

    #[test]
    fn report_is_empty_for_valid_code() {
        assert!(code_report("50001010006").is_empty());
    }

    #[test]
    fn valid_code_rejects() {
        assert!(validate_code("50001x10006").is_err());
        assert!(validate_code("90001010006").is_err());
        assert!(validate_code("500010100060").is_err());
        assert!(validate_code("50000000000").is_err());
        assert!(validate_code("50000000005").is_err());
    }

    #[test]
    fn batch() {
        assert!(
            validate_code_batch(&["50001010006", "50001010017", "50001010028", "50001010039"])
                .is_ok()
        );
        let dup = validate_code_batch(&["50001010006", "50001010017", "50001010006"]);
        assert_eq!(dup.unwrap_err().check, Check::Duplicate);
        assert!(validate_code_batch(&["50001010006", "x"]).is_err());
        assert!(validate_code_batch::<&str>(&[]).is_ok());
    }

    #[test]
    fn enum_arguments() {
        let all_days: Vec<u32> = (1..=31).collect();
        let all_months: Vec<u32> = (1..=12).collect();
        let all_years: Vec<i32> = (1800..=2199).collect();
        assert!(validate_enum_arguments(&Gender::ALL, &all_days, &all_months, &all_years).is_ok());
        assert!(validate_enum_arguments(&Gender::ALL, &[31], &[12], &[2199]).is_ok());

        let g = &Gender::ALL;
        let check = |r: Result<(), ValidationError>| r.unwrap_err().check;
        assert!(validate_enum_arguments(&[], &[1], &[1], &[2000]).is_ok());
        assert_eq!(check(validate_enum_arguments(g, &[0], &[1], &[2000])), Check::DayRange);
        assert_eq!(check(validate_enum_arguments(g, &[32], &[1], &[2000])), Check::DayRange);
        assert_eq!(check(validate_enum_arguments(g, &[1], &[0], &[2000])), Check::MonthRange);
        assert_eq!(check(validate_enum_arguments(g, &[1], &[13], &[2000])), Check::MonthRange);
        assert_eq!(check(validate_enum_arguments(g, &[1], &[1], &[1799])), Check::YearRange);
        assert_eq!(check(validate_enum_arguments(g, &[1], &[1], &[2200])), Check::YearRange);
    }
}
