//! Snapshot Tests - Save/Restore Generator State
//!
//! Test suite for pausing and resuming a random stream mid-sequence.
//!
//! Critical invariants tested:
//! - Determinism: restored generator continues the identical sequence
//! - Round-trip: snapshots survive JSON serialization unchanged
//! - Integrity: tampered digests and state words are rejected
//! - Non-degeneracy: an all-zero snapshot state is rejected

use fixture_rng::{RngSnapshot, SnapshotError, TinyMt32};

// ============================================================================
// Test Helpers
// ============================================================================

/// Generator advanced to an arbitrary mid-stream position.
fn mid_stream_rng(seed: u32, draws: usize) -> TinyMt32 {
    let mut rng = TinyMt32::new(seed);
    for _ in 0..draws {
        let _ = rng.next_u32();
    }
    rng
}

// ============================================================================
// Resume Determinism
// ============================================================================

#[test]
fn test_resume_matches_original_across_operations() {
    let mut rng = mid_stream_rng(42, 123);
    let snapshot = rng.snapshot();
    let mut resumed = TinyMt32::from_snapshot(&snapshot).expect("valid snapshot");

    for _ in 0..100 {
        assert_eq!(resumed.next_u32(), rng.next_u32());
        assert_eq!(resumed.next_f64().to_bits(), rng.next_f64().to_bits());
        assert_eq!(resumed.uniform_int(1000), rng.uniform_int(1000));
    }
}

#[test]
fn test_snapshot_does_not_advance_generator() {
    let mut rng1 = mid_stream_rng(42, 10);
    let mut rng2 = mid_stream_rng(42, 10);

    let _ = rng1.snapshot();
    assert_eq!(rng1.next_u32(), rng2.next_u32());
}

// ============================================================================
// JSON Round-Trip
// ============================================================================

#[test]
fn test_json_round_trip() {
    let snapshot = mid_stream_rng(7, 55).snapshot();

    let json = serde_json::to_string(&snapshot).expect("serialize");
    let decoded: RngSnapshot = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, snapshot);

    let mut original = TinyMt32::from_snapshot(&snapshot).expect("valid snapshot");
    let mut restored = TinyMt32::from_snapshot(&decoded).expect("valid snapshot");
    for _ in 0..100 {
        assert_eq!(restored.next_u32(), original.next_u32());
    }
}

// ============================================================================
// Integrity Rejection
// ============================================================================

#[test]
fn test_tampered_digest_rejected() {
    let mut snapshot = mid_stream_rng(7, 55).snapshot();
    snapshot.state_digest.replace_range(..4, "ffff");

    match TinyMt32::from_snapshot(&snapshot) {
        Err(SnapshotError::DigestMismatch { .. }) => {}
        other => panic!("expected DigestMismatch, got {:?}", other),
    }
}

#[test]
fn test_tampered_state_word_rejected() {
    let mut snapshot = mid_stream_rng(7, 55).snapshot();
    snapshot.state[2] ^= 1;

    match TinyMt32::from_snapshot(&snapshot) {
        Err(SnapshotError::DigestMismatch { .. }) => {}
        other => panic!("expected DigestMismatch, got {:?}", other),
    }
}

#[test]
fn test_zero_state_rejected_even_with_matching_digest() {
    // Forge a snapshot whose digest is honest but whose state is the
    // degenerate all-zero fixed point.
    let template = mid_stream_rng(7, 55).snapshot();
    let forged = RngSnapshot {
        state: [0, 0, 0, 0],
        // Digest of [0,0,0,0] little-endian words.
        state_digest: {
            use sha2::{Digest, Sha256};
            let mut hasher = Sha256::new();
            hasher.update([0u8; 16]);
            format!("{:x}", hasher.finalize())
        },
    };
    assert_ne!(forged.state_digest, template.state_digest);

    match TinyMt32::from_snapshot(&forged) {
        Err(SnapshotError::DegenerateState) => {}
        other => panic!("expected DegenerateState, got {:?}", other),
    }
}
