//! classcodex — class/subclass ability content resolution for TTRPG
//! character sheets.
//!
//! Core library providing name canonicalization, candidate location
//! generation, cached retrieval, and section parsing for class and
//! subclass ability documents.

pub mod config;
pub mod core;

#[cfg(test)]
mod tests;

pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
