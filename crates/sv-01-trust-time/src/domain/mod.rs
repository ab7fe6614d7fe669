//! # Domain Layer
//!
//! Pure trust-time logic with no I/O dependencies.

pub mod evidence;
pub mod resolver;
