//! Regform Validation Core
//!
//! Pure Rust validation primitives compatible with both std and no_std environments.
//! Used by the rule engine in `regform` and by anything rendering live feedback.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod numeric;
pub mod password;
pub mod string;

// Re-export all primitives
pub use numeric::*;
pub use password::*;
pub use string::*;
