//! # Application Layer
//!
//! Use-case orchestration over the domain and infrastructure layers.

pub mod services;
