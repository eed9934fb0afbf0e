//! S4 keeps a semi-structured software specification consistent with itself
//! and in sync with the acceptance tests that implement it.

pub mod adapters;
pub mod commands;
pub mod config;
pub mod engine;
pub mod error;
pub mod exec;
pub mod loader;
pub mod models;
pub mod render;

#[cfg(test)]
pub(crate) mod testing;
