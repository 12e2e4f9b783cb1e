//! # isikukood
//!
//! Estonian personal identification codes (isikukood): validation, parsing,
//! construction and enumeration.
//!
//! A code has 11 digits:
//!
//! | Digits | Meaning |
//! |--------|---------|
//! | 1 | gender marker: gender (odd = male) and century (1/2 = 1800s ... 7/8 = 2100s) |
//! | 2-3 | year within the century |
//! | 4-5 | month |
//! | 6-7 | day |
//! | 8-10 | order number (000-999) |
//! | 11 | checksum |
//!
//! ## Quick Start
//!
//! ```rust
//! use isikukood::*;
//!
//! assert!(validate_code("50001010006").is_ok());
//! assert_eq!(calculate_checksum("5000101000").unwrap(), 6);
//! assert_eq!(birthdate_from_code("50001010006").unwrap().to_string(), "2000-01-01");
//!
//! let person = Isikukood::from_code("50001010006").unwrap();
//! assert_eq!(person.gender(), Gender::Male);
//! assert!(person.construct_all().unwrap().contains(&"50001010006".to_string()));
//!
//! let codes = enumerate(
//!     &EnumConstraints::new(2000)
//!         .genders([Gender::Male])
//!         .days([1])
//!         .months([1])
//!         .order_numbers([0, 1, 2]),
//! )
//! .unwrap();
//! assert_eq!(codes, ["50001010006", "50001010017", "50001010028"]);
//! ```
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `core` (default) | Validators, codec, enumeration, `Isikukood` entity |

#[cfg(feature = "core")]
pub mod core;

// Re-export core types at crate root for convenience
#[cfg(feature = "core")]
pub use crate::core::*;
