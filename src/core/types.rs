use std::fmt;
use std::str::FromStr;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::ValidationError;
use super::validation;

/// Earliest birth year a code can encode (gender markers 1/2).
pub const YEAR_MIN: i32 = 1800;
/// Latest birth year a code can encode (gender markers 7/8).
pub const YEAR_MAX: i32 = 2199;
/// Largest order number (digits 8-10).
pub const ORDER_NUMBER_MAX: u16 = 999;
/// Length of a complete code.
pub const CODE_LEN: usize = 11;
/// Length of a code without its checksum digit.
pub const BODY_LEN: usize = 10;

/// Gender as encoded by the parity of the first digit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Gender {
    /// Odd gender markers (1, 3, 5, 7).
    #[serde(rename = "m")]
    Male,
    /// Even gender markers (2, 4, 6, 8).
    #[serde(rename = "f")]
    Female,
}

impl Gender {
    /// Both genders, male first.
    pub const ALL: [Gender; 2] = [Gender::Male, Gender::Female];

    /// Single-character tag: `'m'` or `'f'`.
    pub fn tag(self) -> char {
        match self {
            Gender::Male => 'm',
            Gender::Female => 'f',
        }
    }

    /// Gender encoded by a gender marker digit (odd = male).
    pub fn from_marker(marker: u32) -> Self {
        if marker % 2 == 0 {
            Gender::Female
        } else {
            Gender::Male
        }
    }
}

impl fmt::Display for Gender {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

/// Parses `m`/`f`, ignoring surrounding whitespace and case.
impl FromStr for Gender {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        validation::validate_gender(&s.trim().to_lowercase())
    }
}

/// A calendar date whose year can be encoded in a code (1800-2199).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "NaiveDate", into = "NaiveDate")]
pub struct Birthdate(NaiveDate);

impl Birthdate {
    /// Wrap a date, rejecting years outside 1800-2199.
    pub fn new(date: NaiveDate) -> Result<Self, ValidationError> {
        validation::validate_year(date.year())?;
        Ok(Self(date))
    }

    /// Build from a numeric triple, rejecting dates that do not exist.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> Result<Self, ValidationError> {
        validation::validate_year(year)?;
        validation::validate_ymd(year, month, day).map(Self)
    }

    /// The underlying calendar date.
    pub fn date(self) -> NaiveDate {
        self.0
    }

    /// Calendar year.
    pub fn year(self) -> i32 {
        self.0.year()
    }

    /// Month, 1-12.
    pub fn month(self) -> u32 {
        self.0.month()
    }

    /// Day of the month, 1-31.
    pub fn day(self) -> u32 {
        self.0.day()
    }
}

impl fmt::Display for Birthdate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

/// Parses an ISO 8601 date (`YYYY-MM-DD`).
impl FromStr for Birthdate {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let date = validation::validate_existing_date(s)?;
        Self::new(date)
    }
}

impl TryFrom<NaiveDate> for Birthdate {
    type Error = ValidationError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        Self::new(date)
    }
}

impl From<Birthdate> for NaiveDate {
    fn from(birthdate: Birthdate) -> Self {
        birthdate.0
    }
}
