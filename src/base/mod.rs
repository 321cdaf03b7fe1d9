//! Foundation utilities for the ifgen toolchain.
//!
//! This module provides the primitives used throughout the compiler:
//! - [`ident`] - identifier case transforms (UpperCamel, lowerCamel, …)
//! - [`keywords`] - the reserved-word set of the emitted language
//! - [`constants`] - domain constants (namespace root, header names)
//!
//! This module has NO dependencies on other ifgen modules.

pub mod constants;
pub mod ident;
pub mod keywords;

pub use ident::{lower_camel, screaming_snake_case, snake_case, upper_camel};
pub use keywords::{escape_reserved, is_reserved};
