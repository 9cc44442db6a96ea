//! services/engine/src/adapters/mod.rs
//!
//! Declares the adapter modules implementing the core service ports.

pub mod analyzer;
pub mod delay;
