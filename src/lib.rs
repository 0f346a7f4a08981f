//! # Benefit Consensus
//!
//! HTTP service answering one question: what are a member's out-of-pocket
//! maximum, remaining out-of-pocket maximum and copay?
//!
//! Each lookup asks every configured upstream provider in turn, retrying
//! transient failures, then reconciles the answers field by field with a
//! majority vote and formats the winners as currency. Failing providers and
//! malformed fields degrade the answer to `null` values; they never fail the
//! request.
//!
//! ## Layers
//!
//! - [`domain`]: Value objects, snapshots and the consensus rule
//! - [`infrastructure`]: HTTP provider adapters and retry policy
//! - [`application`]: The aggregation engine
//! - [`api`]: The axum REST surface
//! - [`config`]: Service and provider settings

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod telemetry;
