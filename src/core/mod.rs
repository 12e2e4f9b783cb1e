//! Validation, encoding, enumeration and the `Isikukood` entity.
//!
//! Every function here is pure: no I/O, no shared state.

mod codec;
mod enumerate;
mod error;
mod person;
mod types;
mod validation;

pub use codec::*;
pub use enumerate::*;
pub use error::*;
pub use person::*;
pub use types::*;
pub use validation::*;
