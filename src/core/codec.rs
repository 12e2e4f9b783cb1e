//! Conversion between codes and their fields, and the checksum algorithm.
//!
//! Checksum: <https://et.wikipedia.org/wiki/Isikukood#Kontrollnumber>

use std::ops::Range;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::{Check, ValidationError};
use super::types::*;
use super::validation;

const FIRST_PASS_WEIGHTS: [u32; BODY_LEN] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 1];
const SECOND_PASS_WEIGHTS: [u32; BODY_LEN] = [3, 4, 5, 6, 7, 8, 9, 1, 2, 3];

/// Every field of a valid code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ParsedCode {
    pub gender: Gender,
    pub birthdate: Birthdate,
    pub order_number: u16,
    pub checksum: u8,
}

impl ParsedCode {
    /// First digit of the code.
    pub fn gender_marker(&self) -> char {
        marker_digit(self.birthdate.year(), self.gender)
    }
}

/// Order number (digits 8-10), leading zeros allowed.
///
/// ```
/// assert_eq!(isikukood::ordernumber_from_code("50001010006").unwrap(), 0);
/// assert_eq!(isikukood::ordernumber_from_code("50001010104").unwrap(), 10);
/// ```
pub fn ordernumber_from_code(code: &str) -> Result<u16, ValidationError> {
    let value = digits(code, 7..10)?;
    // three digits always fit
    Ok(value as u16)
}

/// Gender from the parity of the first digit.
pub fn gender_from_code(code: &str) -> Result<Gender, ValidationError> {
    validation::validate_first_digit(code).map(Gender::from_marker)
}

/// First digit for a birth year and gender: the century picks the pair
/// (1800s 1/2, 1900s 3/4, 2000s 5/6, 2100s 7/8), the gender picks odd (male)
/// or even (female).
///
/// ```
/// use isikukood::{Gender, gender_marker};
/// assert_eq!(gender_marker(2000, Gender::Male).unwrap(), '5');
/// assert_eq!(gender_marker(1999, Gender::Male).unwrap(), '3');
/// ```
pub fn gender_marker(year: i32, gender: Gender) -> Result<char, ValidationError> {
    validation::validate_year(year)?;
    Ok(marker_digit(year, gender))
}

/// Birthdate from the gender marker, year, month and day digits.
pub fn birthdate_from_code(code: &str) -> Result<NaiveDate, ValidationError> {
    let marker = validation::validate_first_digit(code)?;
    let century = YEAR_MIN + ((marker as i32 - 1) / 2) * 100;
    let year = century + digits(code, 1..3)? as i32;
    let month = digits(code, 3..5)?;
    let day = digits(code, 5..7)?;
    validation::validate_ymd(year, month, day)
}

/// Checksum over the first ten digits of a 10- or 11-digit code.
///
/// The first pass weighs the digits with 1 2 3 4 5 6 7 8 9 1 and takes the sum
/// modulo 11. A remainder of 10 triggers a second pass with weights
/// 3 4 5 6 7 8 9 1 2 3; if that also leaves 10, the checksum is 0.
///
/// ```
/// assert_eq!(isikukood::calculate_checksum("5000101000").unwrap(), 6);
/// ```
pub fn calculate_checksum(code: &str) -> Result<u8, ValidationError> {
    validation::validate_numeric(code)?;
    check_body_length(code)?;
    Ok(checksum_of(code))
}

/// Replace (or append) the 11th digit with a freshly computed checksum.
///
/// ```
/// assert_eq!(isikukood::insert_checksum("5000101000x").unwrap(), "50001010006");
/// ```
pub fn insert_checksum(code: &str) -> Result<String, ValidationError> {
    check_body_length(code)?;
    let body: String = code.chars().take(BODY_LEN).collect();
    validation::validate_numeric(&body)?;
    let checksum = checksum_of(&body);
    Ok(format!("{body}{checksum}"))
}

/// Validate a code and decode all of its fields.
pub fn parse_code(code: &str) -> Result<ParsedCode, ValidationError> {
    validation::validate_code(code)?;
    Ok(ParsedCode {
        gender: gender_from_code(code)?,
        birthdate: Birthdate::new(birthdate_from_code(code)?)?,
        order_number: ordernumber_from_code(code)?,
        checksum: digits(code, BODY_LEN..CODE_LEN)? as u8,
    })
}

/// Assemble a complete code from its fields.
pub fn encode(
    gender: Gender,
    birthdate: Birthdate,
    order_number: u16,
) -> Result<String, ValidationError> {
    validation::validate_order_number(order_number)?;
    Ok(encode_unchecked(gender, birthdate.date(), order_number))
}

/// Assemble a code without range checks. `date` must lie in 1800-2199 and
/// `order_number` must not exceed 999.
pub(crate) fn encode_unchecked(gender: Gender, date: NaiveDate, order_number: u16) -> String {
    let body = format!(
        "{}{:02}{:02}{:02}{:03}",
        marker_digit(date.year(), gender),
        date.year() % 100,
        date.month(),
        date.day(),
        order_number
    );
    let checksum = checksum_of(&body);
    format!("{body}{checksum}")
}

pub(crate) fn marker_digit(year: i32, gender: Gender) -> char {
    let bucket = ((year - YEAR_MIN) / 100) as u8;
    let marker = 1 + 2 * bucket + u8::from(gender == Gender::Female);
    char::from(b'0' + marker)
}

/// `code` must start with ten ASCII digits.
fn checksum_of(code: &str) -> u8 {
    let mut body = [0u32; BODY_LEN];
    for (slot, b) in body.iter_mut().zip(code.bytes()) {
        *slot = u32::from(b - b'0');
    }

    let weighted = |weights: &[u32; BODY_LEN]| -> u32 {
        body.iter().zip(weights).map(|(d, w)| d * w).sum::<u32>() % 11
    };

    match weighted(&FIRST_PASS_WEIGHTS) {
        r if r < 10 => r as u8,
        _ => match weighted(&SECOND_PASS_WEIGHTS) {
            r if r < 10 => r as u8,
            _ => 0,
        },
    }
}

fn check_body_length(code: &str) -> Result<(), ValidationError> {
    let len = code.chars().count();
    if len != BODY_LEN && len != CODE_LEN {
        return Err(ValidationError::new(
            Check::Length,
            "code",
            format!("given code '{code}' is {len} digits, expected {BODY_LEN} or {CODE_LEN}"),
        ));
    }
    Ok(())
}

/// Read the digits at `range` (0-indexed character positions) as a number.
fn digits(code: &str, range: Range<usize>) -> Result<u32, ValidationError> {
    let part: Vec<char> = code.chars().skip(range.start).take(range.len()).collect();
    if part.len() < range.len() {
        return Err(ValidationError::new(
            Check::Length,
            "code",
            format!(
                "given code '{code}' is too short to hold digits {}-{}",
                range.start + 1,
                range.end
            ),
        ));
    }
    part.iter()
        .try_fold(0u32, |acc, c| c.to_digit(10).map(|d| acc * 10 + d))
        .ok_or_else(|| {
            ValidationError::new(
                Check::Numeric,
                "code",
                format!(
                    "digits {}-{} of '{code}' are not numeric",
                    range.start + 1,
                    range.end
                ),
            )
        })
}
