//! # Domain Layer
//!
//! Member benefit types and the reconciliation rules applied to provider data.

pub mod entities;
pub mod errors;
pub mod services;
pub mod value_objects;

pub use errors::{DomainError, DomainResult};
