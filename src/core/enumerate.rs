use std::collections::HashSet;
use std::hash::Hash;

use chrono::{Datelike, Local, NaiveDate};
use tracing::{debug, trace};

use super::codec;
use super::error::ValidationError;
use super::types::*;
use super::validation;

/// Constraints for [`enumerate`]. Every list is optional; unset lists fall
/// back to a default when the enumeration runs.
///
/// | List | Default |
/// |------|---------|
/// | genders | male and female |
/// | days | 1-31 |
/// | months | 1-12 |
/// | years | the reference year |
/// | order numbers | 0-999 |
///
/// ```
/// use isikukood::{EnumConstraints, Gender, enumerate};
///
/// let codes = enumerate(
///     &EnumConstraints::new(2000)
///         .genders([Gender::Male])
///         .days([1])
///         .months([1])
///         .order_numbers([0, 1, 2]),
/// )
/// .unwrap();
/// assert_eq!(codes, ["50001010006", "50001010017", "50001010028"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnumConstraints {
    reference_year: i32,
    genders: Option<Vec<Gender>>,
    days: Option<Vec<u32>>,
    months: Option<Vec<u32>>,
    years: Option<Vec<i32>>,
    order_numbers: Option<Vec<u16>>,
}

impl EnumConstraints {
    /// Unconstrained set whose default year list is `[reference_year]`.
    pub fn new(reference_year: i32) -> Self {
        Self {
            reference_year,
            genders: None,
            days: None,
            months: None,
            years: None,
            order_numbers: None,
        }
    }

    /// Unconstrained set defaulting to the current year of the local clock.
    pub fn for_current_year() -> Self {
        Self::new(Local::now().year())
    }

    /// Restrict to these genders.
    pub fn genders(mut self, genders: impl IntoIterator<Item = Gender>) -> Self {
        self.genders = Some(genders.into_iter().collect());
        self
    }

    /// Restrict to these days of the month.
    pub fn days(mut self, days: impl IntoIterator<Item = u32>) -> Self {
        self.days = Some(days.into_iter().collect());
        self
    }

    /// Restrict to these months.
    pub fn months(mut self, months: impl IntoIterator<Item = u32>) -> Self {
        self.months = Some(months.into_iter().collect());
        self
    }

    /// Restrict to these birth years.
    pub fn years(mut self, years: impl IntoIterator<Item = i32>) -> Self {
        self.years = Some(years.into_iter().collect());
        self
    }

    /// Restrict to these order numbers.
    pub fn order_numbers(mut self, order_numbers: impl IntoIterator<Item = u16>) -> Self {
        self.order_numbers = Some(order_numbers.into_iter().collect());
        self
    }

    /// Year used when no year list is given.
    pub fn reference_year(&self) -> i32 {
        self.reference_year
    }

    /// Effective gender list (defaults applied, duplicates removed).
    pub fn resolved_genders(&self) -> Vec<Gender> {
        resolve(self.genders.as_deref(), || Gender::ALL.to_vec())
    }

    /// Effective day list.
    pub fn resolved_days(&self) -> Vec<u32> {
        resolve(self.days.as_deref(), || (1..=31).collect())
    }

    /// Effective month list.
    pub fn resolved_months(&self) -> Vec<u32> {
        resolve(self.months.as_deref(), || (1..=12).collect())
    }

    /// Effective year list.
    pub fn resolved_years(&self) -> Vec<i32> {
        resolve(self.years.as_deref(), || vec![self.reference_year])
    }

    /// Effective order number list.
    pub fn resolved_order_numbers(&self) -> Vec<u16> {
        resolve(self.order_numbers.as_deref(), || (0..=ORDER_NUMBER_MAX).collect())
    }
}

impl Default for EnumConstraints {
    fn default() -> Self {
        Self::for_current_year()
    }
}

/// Take the explicit list or the default, keeping the first occurrence of
/// each value.
fn resolve<T: Copy + Eq + Hash>(explicit: Option<&[T]>, default: impl FnOnce() -> Vec<T>) -> Vec<T> {
    match explicit {
        Some(values) => {
            let mut seen = HashSet::with_capacity(values.len());
            values.iter().copied().filter(|v| seen.insert(*v)).collect()
        }
        None => default(),
    }
}

/// Generate every valid code matching the constraints.
///
/// Iterates genders, then years, months, days and order numbers in the order
/// given. Day/month pairs that do not exist in a year are skipped.
pub fn enumerate(constraints: &EnumConstraints) -> Result<Vec<String>, ValidationError> {
    let genders = constraints.resolved_genders();
    let days = constraints.resolved_days();
    let months = constraints.resolved_months();
    let years = constraints.resolved_years();
    let order_numbers = constraints.resolved_order_numbers();

    validation::validate_enum_arguments(&genders, &days, &months, &years)?;
    order_numbers
        .iter()
        .try_for_each(|&n| validation::validate_order_number(n))?;

    let mut dates = Vec::with_capacity(years.len() * months.len() * days.len());
    for &year in &years {
        for &month in &months {
            for &day in &days {
                match NaiveDate::from_ymd_opt(year, month, day) {
                    Some(date) => dates.push(date),
                    None => trace!(year, month, day, "skipping non-existent date"),
                }
            }
        }
    }

    let mut codes = Vec::with_capacity(genders.len() * dates.len() * order_numbers.len());
    for &gender in &genders {
        for &date in &dates {
            for &order_number in &order_numbers {
                codes.push(codec::encode_unchecked(gender, date, order_number));
            }
        }
    }

    debug!(
        genders = genders.len(),
        dates = dates.len(),
        order_numbers = order_numbers.len(),
        codes = codes.len(),
        "enumerated codes"
    );

    Ok(codes)
}
