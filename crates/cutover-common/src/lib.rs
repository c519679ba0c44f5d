//! # cutover-common
//!
//! Shared types, error definitions, configuration models, and constants
//! used across the Cutover workspace.
//!
//! This crate is the leaf of the dependency graph. It depends on no other
//! internal crate and holds the wire contract spoken with the deployment
//! orchestrator: lifecycle phases and hook results.

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod config;
pub mod constants;
pub mod error;
pub mod types;
