//! Domain layer: the token model and its pure rules.
//!
//! No I/O lives here.  A [`TypeScale`] is built from source text, validated
//! on the way in, and handed to the generators as an immutable value.

pub mod error;
pub mod font;
pub mod scale;
pub mod units;

pub use error::{DomainError, ErrorCategory};
pub use scale::{FontWeight, TypeScale, TypeToken};
pub use units::{RawScalar, Scalar};
