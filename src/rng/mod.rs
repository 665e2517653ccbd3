//! Deterministic random number generation
//!
//! Uses the TinyMT32 algorithm (a 4-word reduced Mersenne Twister with a
//! 2^127 - 1 period) for reproducible random number generation.
//! CRITICAL: All randomness in fixture generation MUST go through this module.

pub mod snapshot;
mod tinymt;

pub use tinymt::TinyMt32;
