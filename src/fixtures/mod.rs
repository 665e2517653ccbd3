//! Fixture-building helpers layered on the deterministic generator.
//!
//! Conformance tests rarely want one value at a time; they want whole
//! randomized buffers, shuffled input orders, and uniformly chosen
//! elements. These helpers produce those, threading a single `&mut`
//! generator through so every fixture remains a pure function of the
//! seed and the call sequence.
//!
//! # Example
//!
//! ```
//! use fixture_rng::{fixtures, TinyMt32};
//!
//! let mut rng = TinyMt32::new(42);
//!
//! let mut words = [0u32; 16];
//! fixtures::fill_u32(&mut rng, &mut words);
//!
//! let mut lanes: Vec<usize> = (0..8).collect();
//! fixtures::shuffle(&mut rng, &mut lanes);
//! ```

use crate::rng::TinyMt32;

/// Fill a buffer with uniform random u32 words, one draw per element.
pub fn fill_u32(rng: &mut TinyMt32, buf: &mut [u32]) {
    for slot in buf.iter_mut() {
        *slot = rng.next_u32();
    }
}

/// Fill a buffer with uniform random bytes.
///
/// Consumes one u32 draw per 4 bytes (little-endian), plus one partial
/// draw for a tail shorter than 4 bytes. Byte content for a given seed
/// does not depend on how the buffer length splits into chunks.
pub fn fill_bytes(rng: &mut TinyMt32, buf: &mut [u8]) {
    let mut chunks = buf.chunks_exact_mut(4);
    for chunk in &mut chunks {
        chunk.copy_from_slice(&rng.next_u32().to_le_bytes());
    }

    let tail = chunks.into_remainder();
    if !tail.is_empty() {
        let bytes = rng.next_u32().to_le_bytes();
        tail.copy_from_slice(&bytes[..tail.len()]);
    }
}

/// Fill a buffer with uniform random f64 values in [0.0, 1.0).
pub fn fill_unit_f64(rng: &mut TinyMt32, buf: &mut [f64]) {
    for slot in buf.iter_mut() {
        *slot = rng.next_f64();
    }
}

/// Shuffle a slice in place (Fisher-Yates).
///
/// Index selection goes through `uniform_int`, so every permutation is
/// equally likely; a modulo-biased shuffle would skew the low indices.
pub fn shuffle<T>(rng: &mut TinyMt32, items: &mut [T]) {
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(i as u64 + 1) as usize;
        items.swap(i, j);
    }
}

/// Choose a uniformly random element of a slice.
///
/// Returns `None` on an empty slice.
pub fn choose<'a, T>(rng: &mut TinyMt32, items: &'a [T]) -> Option<&'a T> {
    if items.is_empty() {
        return None;
    }
    let index = rng.uniform_int(items.len() as u64) as usize;
    items.get(index)
}
