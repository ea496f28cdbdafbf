//! Backing stores behind the facade, and config loading

#[path = "../common/mod.rs"]
mod common;

mod cloud;
mod config;
