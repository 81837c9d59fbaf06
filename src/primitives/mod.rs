//! Layer 1: Primitives
//!
//! # Purpose
//!
//! This layer provides the data structures every other layer builds on:
//! - The in-memory `Dataset`
//! - The crate error type
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives ← You are here
//! ```

/// Regression dataset (rows, features, targets, weights).
pub mod dataset;

/// Error types.
pub mod errors;
