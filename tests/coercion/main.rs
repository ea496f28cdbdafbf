//! Coercion proxy over raw string keys

#[path = "../common/mod.rs"]
mod common;

mod dynamic_writes;
mod proxy_defaults;
mod proxy_operators;
