//! Storage layer for keyed-defaults
//!
//! This crate implements in-memory backing stores that satisfy
//! `DefaultsStore`:
//! - MemoryDomain: DashMap + FxHash sharded map with size accounting
//! - LocalStore: local preferences with a registration (fallback) domain
//! - CloudStore: cloud-synchronized mirror with key, size and count quotas
//!
//! Each store instance is an independent domain: clearing one never touches
//! another. Nothing is written to disk.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod cloud;
pub mod domain;
pub mod local;

pub use cloud::{CloudQuota, CloudStore, QuotaViolation};
pub use domain::MemoryDomain;
pub use local::LocalStore;
