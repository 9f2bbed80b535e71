//! ft-core: numeric foundation for fittrack.
//!
//! Contains:
//! - units (uom SI types + constructors, km/hour conversion constants)
//! - numeric (Real + tolerances + float helpers)
//! - error (shared error types)

pub mod error;
pub mod numeric;
pub mod units;

pub use error::{FtError, FtResult};
pub use numeric::*;
pub use units::*;
