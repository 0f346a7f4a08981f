//! # Infrastructure Layer
//!
//! Integrations with external systems.

pub mod providers;
