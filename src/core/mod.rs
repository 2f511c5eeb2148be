//! Core subsystems.

pub mod codex;
