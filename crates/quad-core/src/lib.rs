//! # quad-core
//!
//! Core types, settings, and error definitions for quadkit.
//!
//! This crate provides the foundational building blocks shared across the
//! workspace: primitive type aliases, the error hierarchy with its
//! `ensure!` / `fail!` macros, and the process-wide `Settings`.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Public modules ───────────────────────────────────────────────────────────

/// Error types and the `ensure!` / `fail!` macros.
pub mod errors;

/// Global library settings (maximum recursion depth).
pub mod settings;

// ── Primitive type aliases ────────────────────────────────────────────────────

/// Floating-point type used throughout the library.
pub type Real = f64;

/// Alias used for counts, depths, and sizes.
pub type Size = usize;

// ── Re-exports for convenience ────────────────────────────────────────────────

pub use errors::{Error, Result};
pub use settings::{ScopedMaxRecursionDepth, Settings, DEFAULT_MAX_RECURSION_DEPTH};
