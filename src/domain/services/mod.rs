//! # Domain Services
//!
//! Stateless domain logic.
//!
//! - [`consensus`]: Mode selection and currency formatting

pub mod consensus;

pub use consensus::{consensus, mode};
