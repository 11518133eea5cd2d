//! Foundation module - Shared domain primitives.
//!
//! Contains the error vocabulary and the timestamp value object used by
//! every other part of the behavioral risk domain.

mod errors;
mod timestamp;

pub use errors::{DomainError, ErrorCode, ValidationError};
pub use timestamp::Timestamp;
