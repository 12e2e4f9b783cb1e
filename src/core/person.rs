use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use tracing::error;

use super::codec;
use super::enumerate::{EnumConstraints, enumerate};
use super::error::{Check, IsikukoodError, ValidationError};
use super::types::*;
use super::validation;

/// A person's gender and birthdate, from which codes can be constructed.
///
/// ```
/// use isikukood::Isikukood;
///
/// let ik = Isikukood::from_parts("m", "2000-01-01").unwrap();
/// assert_eq!(ik.construct(111).unwrap(), "50001011112");
/// assert_eq!(
///     ik.construct_many(&[111, 222, 333]).unwrap(),
///     ["50001011112", "50001012229", "50001013335"]
/// );
/// assert_eq!(ik.construct_all().unwrap().len(), 1000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Isikukood {
    gender: Gender,
    birthdate: Birthdate,
}

impl Isikukood {
    pub fn new(gender: Gender, birthdate: Birthdate) -> Self {
        Self { gender, birthdate }
    }

    /// Build from a gender tag (`m`/`f`, case-insensitive) and an ISO 8601
    /// birthdate (`YYYY-MM-DD`) in 1800-2199.
    pub fn from_parts(gender: &str, birthdate: &str) -> Result<Self, ValidationError> {
        Ok(Self::new(gender.parse()?, birthdate.parse()?))
    }

    /// Decode gender and birthdate from an existing valid code.
    pub fn from_code(code: &str) -> Result<Self, ValidationError> {
        let parsed = codec::parse_code(code)?;
        Ok(Self::new(parsed.gender, parsed.birthdate))
    }

    pub fn gender(&self) -> Gender {
        self.gender
    }

    pub fn birthdate(&self) -> Birthdate {
        self.birthdate
    }

    /// First digit shared by every code of this person.
    pub fn gender_marker(&self) -> char {
        codec::marker_digit(self.birthdate.year(), self.gender)
    }

    /// All 1000 codes for this gender and birthdate, ordered by order number.
    pub fn construct_all(&self) -> Result<Vec<String>, IsikukoodError> {
        let constraints = EnumConstraints::new(self.birthdate.year())
            .genders([self.gender])
            .days([self.birthdate.day()])
            .months([self.birthdate.month()]);
        let codes = enumerate(&constraints)?;
        self.sanity_check(&codes)?;
        Ok(codes)
    }

    /// The code with the given order number (0-999).
    pub fn construct(&self, order_number: u16) -> Result<String, IsikukoodError> {
        let code = codec::encode(self.gender, self.birthdate, order_number)?;
        self.sanity_check(std::slice::from_ref(&code))?;
        Ok(code)
    }

    /// One code per order number, in the order given. Fails if any order
    /// number exceeds 999 or appears twice.
    pub fn construct_many(&self, order_numbers: &[u16]) -> Result<Vec<String>, IsikukoodError> {
        let mut seen = HashSet::with_capacity(order_numbers.len());
        if let Some(n) = order_numbers.iter().find(|n| !seen.insert(**n)) {
            return Err(ValidationError::new(
                Check::Duplicate,
                "order_numbers",
                format!("order number {n} appears more than once"),
            )
            .into());
        }
        let codes = order_numbers
            .iter()
            .map(|&n| codec::encode(self.gender, self.birthdate, n))
            .collect::<Result<Vec<_>, _>>()?;
        self.sanity_check(&codes)?;
        Ok(codes)
    }

    /// Generated codes must be valid and unique; anything else is a defect.
    fn sanity_check(&self, codes: &[String]) -> Result<(), IsikukoodError> {
        validation::validate_code_batch(codes).map_err(|e| {
            error!(
                gender = %self.gender,
                birthdate = %self.birthdate,
                error = %e,
                "generated code batch failed re-validation"
            );
            IsikukoodError::Invariant(e.to_string())
        })
    }
}

/// `"<gender> <birthdate>"`, e.g. `"m 2000-01-01"`.
impl fmt::Display for Isikukood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.gender, self.birthdate)
    }
}

/// Parses a complete code.
impl FromStr for Isikukood {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}
