//! Layer 4: Engine
//!
//! # Purpose
//!
//! This layer coordinates a complete LMS build:
//! - Validation of configuration and input data
//! - One-shot missing-value handling
//! - The trial search with its best-candidate accumulator
//! - Weighting, refit and the final model
//!
//! # Architecture
//!
//! ```text
//! Layer 5: API
//!   ↓
//! Layer 4: Engine ← You are here
//!   ↓
//! Layer 3: Algorithms
//!   ↓
//! Layer 2: Math
//!   ↓
//! Layer 1: Primitives
//! ```

/// Phase orchestration.
pub mod executor;

/// Fitted model and summary.
pub mod output;

/// Missing-value handling.
pub mod preprocess;

/// Best-candidate accumulator.
pub mod tracker;

/// Configuration and input validation.
pub mod validator;
