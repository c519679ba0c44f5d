//! # cutover-hooks
//!
//! Lifecycle hooks for blue/green deployments.
//!
//! The orchestrator calls one hook per phase, in the order
//! before-install, after-install, before-allow-traffic, after-allow-traffic.
//! Every phase is served by the same [`LifecycleHook`](handler::LifecycleHook)
//! type, parameterized by its [`LifecyclePhase`] and a pluggable
//! [`Decision`](decision::Decision).
//!
//! # Example
//!
//! ```rust
//! use cutover_common::types::{HookStatus, LifecyclePhase};
//! use cutover_hooks::builder::HookBuilder;
//!
//! let hook = HookBuilder::new(LifecyclePhase::BeforeInstall).build();
//! let result = hook.handle(&serde_json::json!({ "serviceArn": "arn:x" }));
//! assert_eq!(result.hook_status, HookStatus::Succeeded);
//! ```

#![cfg_attr(test, allow(clippy::expect_used, clippy::unwrap_used))]

pub mod builder;
pub mod decision;
pub mod event;
pub mod handler;
pub mod hook_set;
pub mod logging;

pub use cutover_common::types::LifecyclePhase;
