//! TinyMT32 random number generator
//!
//! A reduced-state Mersenne Twister with a 4-word (128-bit) state and a
//! period of 2^127 - 1, long enough that fixture generation never
//! observes cycling.
//!
//! # Algorithm
//!
//! The state is seeded with the TinyMT reference init mix, warmed up by
//! discarding the first 8 draws, then advanced with the TinyMT
//! recurrence. Output is extracted by a tempering step that does not
//! mutate state. The tuning constants are fixed; the init mix and
//! recurrence are replicated bit-for-bit because downstream suites pin
//! expected sequences per seed.
//!
//! # Determinism
//!
//! Same seed → same sequence of random numbers, on every platform. This
//! is CRITICAL for:
//! - Replaying flaky conformance-test failures from a logged seed
//! - Verifying fixture content in CI
//! - Comparing runs across machines bit-for-bit

/// Tuning constants for the TinyMT32 parameter set used here.
/// All seed-pinned expectations depend on these exact values.
const MAT1: u32 = 0x8f70_11ee;
const MAT2: u32 = 0xfc78_ff1f;
const TMAT: u32 = 0x3793_fdff;

const MASK: u32 = 0x7fff_ffff;
const MIN_LOOP: usize = 8;
const PRE_LOOP: usize = 8;
const SH0: u32 = 1;
const SH1: u32 = 10;
const SH8: u32 = 8;

/// Multiplier from the reference init mix (shared with MT19937 seeding).
const INIT_MULT: u32 = 1_812_433_253;

/// Divisor mapping a u32 draw onto [0.0, 1.0).
const RANDOM_DIVISOR: f64 = 4_294_967_296.0;

/// One past the largest u32 value, as u64.
const U32_RANGE: u64 = 1 << 32;

/// Deterministic random number generator using TinyMT32
///
/// Each instance is an independent random stream owned by a single
/// caller. Never share one instance across logical streams; construct
/// one per stream, each with its own seed.
///
/// # Example
/// ```
/// use fixture_rng::TinyMt32;
///
/// let mut rng = TinyMt32::new(12345);
/// let word = rng.next_u32();
/// let unit = rng.next_f64();          // [0.0, 1.0)
/// let index = rng.uniform_int(7);     // [0, 6], unbiased
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TinyMt32 {
    /// Internal state (4 x 32-bit)
    state: [u32; 4],
}

impl TinyMt32 {
    /// Create a new generator with the given seed
    ///
    /// Runs the TinyMT reference init mix over the seed and tuning
    /// constants, then discards the first 8 draws as warm-up.
    ///
    /// # Arguments
    /// * `seed` - Initial seed value (u32)
    ///
    /// # Example
    /// ```
    /// use fixture_rng::TinyMt32;
    ///
    /// let rng = TinyMt32::new(12345);
    /// ```
    pub fn new(seed: u32) -> Self {
        let mut state = [seed, MAT1, MAT2, TMAT];
        for i in 1..MIN_LOOP {
            let prev = state[(i - 1) & 3];
            state[i & 3] ^=
                (i as u32).wrapping_add(INIT_MULT.wrapping_mul(prev ^ (prev >> 30)));
        }

        // Self-check of the fixed tuning constants: an all-zero state
        // would make the recurrence degenerate. No valid u32 seed
        // reaches this with the constants above.
        assert!(
            state != [0, 0, 0, 0],
            "TinyMT32 state must not be all zero after seeding"
        );

        let mut rng = Self { state };
        for _ in 0..PRE_LOOP {
            rng.next_state();
        }
        rng
    }

    /// Rebuild a generator from raw state words.
    ///
    /// Snapshot restore only; validation happens in the snapshot module.
    pub(crate) fn from_raw_state(state: [u32; 4]) -> Self {
        Self { state }
    }

    /// Advance the internal state by one step (TinyMT recurrence)
    fn next_state(&mut self) {
        let [s0, s1, s2, s3] = self.state;

        let mut x = (s0 & MASK) ^ s1 ^ s2;
        let mut y = s3;
        x ^= x << SH0;
        y ^= (y >> SH0) ^ x;

        self.state[0] = s1;
        self.state[1] = s2;
        self.state[2] = x ^ (y << SH1);
        self.state[3] = y;

        if y & 1 == 1 {
            self.state[1] ^= MAT1;
            self.state[2] ^= MAT2;
        }
    }

    /// Extract a u32 from the current state without mutating it
    fn temper(&self) -> u32 {
        let [s0, _, s2, s3] = self.state;

        let t1 = s0.wrapping_add(s2 >> SH8);
        let mut t0 = s3 ^ t1;
        if t1 & 1 == 1 {
            t0 ^= TMAT;
        }
        t0
    }

    /// Generate the next random u32, uniform over the full range
    ///
    /// This is the primitive every other operation builds on.
    ///
    /// # Example
    /// ```
    /// use fixture_rng::TinyMt32;
    ///
    /// let mut rng = TinyMt32::new(12345);
    /// let value = rng.next_u32();
    /// ```
    pub fn next_u32(&mut self) -> u32 {
        self.next_state();
        self.temper()
    }

    /// Generate a random f64 in [0.0, 1.0)
    ///
    /// Maps `next_u32()` onto the unit interval by dividing by 2^32.
    /// Never returns exactly 1.0.
    ///
    /// # Example
    /// ```
    /// use fixture_rng::TinyMt32;
    ///
    /// let mut rng = TinyMt32::new(12345);
    /// let unit = rng.next_f64();
    /// assert!(unit >= 0.0 && unit < 1.0);
    /// ```
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / RANDOM_DIVISOR
    }

    /// Generate a uniformly distributed integer in [0, n)
    ///
    /// Uses rejection sampling rather than naive modulo reduction:
    /// draws falling past the largest multiple of `n` below 2^32 are
    /// discarded and redrawn, so small outputs are not over-represented
    /// when `n` does not evenly divide 2^32. The keep zone always
    /// covers at least half the u32 range, so fewer than one redraw is
    /// expected on average.
    ///
    /// # Arguments
    /// * `n` - Exclusive upper bound, in [1, 2^32]
    ///
    /// # Panics
    /// Panics if `n` is 0 or exceeds 2^32
    ///
    /// # Example
    /// ```
    /// use fixture_rng::TinyMt32;
    ///
    /// let mut rng = TinyMt32::new(12345);
    /// let lane = rng.uniform_int(7); // [0, 6]
    /// assert!(lane < 7);
    /// ```
    pub fn uniform_int(&mut self, n: u64) -> u32 {
        assert!(n >= 1, "n must be at least 1");
        assert!(n <= U32_RANGE, "n must not exceed 2^32");

        // Largest multiple of n that fits in the u32 range.
        let keep_zone = (U32_RANGE / n) * n;
        loop {
            let draw = u64::from(self.next_u32());
            if draw < keep_zone {
                return (draw % n) as u32;
            }
        }
    }

    /// Get the current state words (for snapshots and diagnostics)
    ///
    /// # Example
    /// ```
    /// use fixture_rng::TinyMt32;
    ///
    /// let rng = TinyMt32::new(12345);
    /// let words = rng.state();
    /// assert_ne!(words, [0, 0, 0, 0]);
    /// ```
    pub fn state(&self) -> [u32; 4] {
        self.state
    }
}
