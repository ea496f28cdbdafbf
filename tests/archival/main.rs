//! Archival and raw-value layers

#[path = "../common/mod.rs"]
mod common;
