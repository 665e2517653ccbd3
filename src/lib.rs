//! Fixture RNG - Deterministic Random Generation for Conformance Tests
//!
//! Seeded, bit-for-bit reproducible pseudo-random number generation
//! (TinyMT32) for building deterministic test fixtures: randomized
//! buffers, randomized indices, shuffled inputs.
//!
//! # Architecture
//!
//! - **rng**: TinyMT32 generator and replay snapshots
//! - **fixtures**: fixture-building helpers (buffer fills, shuffle, choose)
//!
//! # Critical Invariants
//!
//! 1. Same seed → same output sequence, on every platform
//! 2. The 4-word generator state is never all zero
//! 3. Bounded draws use rejection sampling, never naive modulo
//! 4. One generator per logical random stream; instances are never shared

// Module declarations
pub mod fixtures;
pub mod rng;

// Re-exports for convenience
pub use rng::{
    snapshot::{RngSnapshot, SnapshotError},
    TinyMt32,
};
