//! Deterministic xorshift32 generator used to shuffle gradient tables.
//!
//! The transform runs on a signed 32-bit register with arithmetic right
//! shift, so streams agree bit-for-bit with the browser demos.

use crate::error::RidgelineError;
use crate::math::{positive_mod, to_int32};

/// Seedable xorshift PRNG. The state is never zero.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct XorShiftRng {
    state: i32,
}

impl XorShiftRng {
    /// Create a generator whose state equals `seed`.
    pub fn with_seed(seed: i32) -> Result<Self, RidgelineError> {
        if seed == 0 {
            return Err(RidgelineError::InvalidSeed("seed must be non-zero".into()));
        }
        Ok(Self { state: seed })
    }

    /// Create a generator from an untyped numeric seed (as received from JS or RON).
    ///
    /// The value must be an integer; it is wrapped to 32 bits the way the
    /// register would see it, and rejected if that wraps to zero.
    pub fn with_numeric_seed(seed: f64) -> Result<Self, RidgelineError> {
        if seed.fract() != 0.0 {
            return Err(RidgelineError::InvalidSeed(format!(
                "seed must be an integer, got {seed}"
            )));
        }
        let state = to_int32(seed).ok_or_else(|| {
            RidgelineError::InvalidSeed(format!("seed must be finite, got {seed}"))
        })?;
        if state == 0 {
            return Err(RidgelineError::InvalidSeed(format!(
                "seed {seed} wraps to zero"
            )));
        }
        Ok(Self { state })
    }

    /// Create a generator from a random non-zero 31-bit seed.
    pub fn with_random_seed() -> Self {
        loop {
            let seed = (rand::random::<u32>() >> 1) as i32;
            if seed != 0 {
                log::debug!("XorShiftRng: random seed {seed}");
                return Self { state: seed };
            }
        }
    }

    /// Current register value.
    pub fn state(&self) -> i32 {
        self.state
    }

    /// Advance the register and return its new value.
    pub fn next_i32(&mut self) -> i32 {
        let mut x = self.state;
        x ^= x << 13;
        x ^= x >> 17;
        x ^= x << 5;
        self.state = x;
        x
    }

    /// Fisher-Yates shuffle from the back, one draw per position down to index 1.
    pub fn shuffle_in_place<T>(&mut self, data: &mut [T]) {
        for i in (1..data.len()).rev() {
            let draw = self.next_i32();
            let index = positive_mod(draw, (i + 1) as u64) as usize;
            data.swap(index, i);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_seed_rejected() {
        assert!(matches!(
            XorShiftRng::with_seed(0),
            Err(RidgelineError::InvalidSeed(_))
        ));
    }

    #[test]
    fn test_numeric_seed_validation() {
        assert!(XorShiftRng::with_numeric_seed(1.5).is_err());
        assert!(XorShiftRng::with_numeric_seed(0.0).is_err());
        assert!(XorShiftRng::with_numeric_seed(4_294_967_296.0).is_err());
        assert!(XorShiftRng::with_numeric_seed(f64::NAN).is_err());
        assert!(XorShiftRng::with_numeric_seed(f64::INFINITY).is_err());

        let rng = XorShiftRng::with_numeric_seed(42.0).unwrap();
        assert_eq!(rng.state(), 42);
        let rng = XorShiftRng::with_numeric_seed(4_294_967_295.0).unwrap();
        assert_eq!(rng.state(), -1);
    }

    #[test]
    fn test_known_sequence_seed_42() {
        let mut rng = XorShiftRng::with_seed(42).unwrap();
        let draws: Vec<i32> = (0..5).map(|_| rng.next_i32()).collect();
        assert_eq!(
            draws,
            vec![11355432, -1459243860, -308848668, -367960463, -97301154]
        );
    }

    #[test]
    fn test_known_sequence_small_and_negative_seeds() {
        let mut rng = XorShiftRng::with_seed(1).unwrap();
        assert_eq!(rng.next_i32(), 270369);
        assert_eq!(rng.next_i32(), 67601921);
        assert_eq!(rng.next_i32(), 1815334946);

        let mut rng = XorShiftRng::with_seed(-7).unwrap();
        assert_eq!(rng.next_i32(), 1777881);
        assert_eq!(rng.next_i32(), -469341703);
        assert_eq!(rng.next_i32(), 236122565);
    }

    #[test]
    fn test_same_seed_same_stream() {
        for seed in [1, -1, 42, i32::MAX, i32::MIN, 123_456] {
            let mut a = XorShiftRng::with_seed(seed).unwrap();
            let mut b = XorShiftRng::with_seed(seed).unwrap();
            for _ in 0..100 {
                assert_eq!(a.next_i32(), b.next_i32(), "seed {seed}");
            }
        }
    }

    #[test]
    fn test_clone_is_independent() {
        let mut original = XorShiftRng::with_seed(99).unwrap();
        let mut copy = original.clone();
        let from_copy: Vec<i32> = (0..50).map(|_| copy.next_i32()).collect();
        let from_original: Vec<i32> = (0..50).map(|_| original.next_i32()).collect();
        assert_eq!(from_copy, from_original);

        // Advancing one no longer moves the other.
        copy.next_i32();
        assert_ne!(copy.state(), original.state());
    }

    #[test]
    fn test_state_never_zero() {
        let mut rng = XorShiftRng::with_seed(7).unwrap();
        for _ in 0..10_000 {
            assert_ne!(rng.next_i32(), 0);
        }
    }

    #[test]
    fn test_random_seed_non_zero() {
        for _ in 0..32 {
            let rng = XorShiftRng::with_random_seed();
            assert!(rng.state() > 0);
        }
    }

    #[test]
    fn test_shuffle_known_order() {
        let mut rng = XorShiftRng::with_seed(42).unwrap();
        let mut data: Vec<u32> = (0..10).collect();
        rng.shuffle_in_place(&mut data);
        assert_eq!(data, vec![8, 9, 1, 6, 5, 0, 7, 4, 3, 2]);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = XorShiftRng::with_seed(2024).unwrap();

        let mut empty: Vec<u8> = Vec::new();
        rng.shuffle_in_place(&mut empty);
        assert!(empty.is_empty());

        let mut single = vec![17u8];
        let before = rng.state();
        rng.shuffle_in_place(&mut single);
        assert_eq!(single, vec![17]);
        assert_eq!(rng.state(), before, "length 1 draws nothing");

        let mut many: Vec<u32> = (0..257).collect();
        rng.shuffle_in_place(&mut many);
        let mut sorted = many.clone();
        sorted.sort_unstable();
        assert_eq!(sorted, (0..257).collect::<Vec<u32>>());
    }

    #[test]
    fn test_matching_shuffles_keep_pairs() {
        let rng = XorShiftRng::with_seed(5).unwrap();
        let mut a = rng.clone();
        let mut b = rng;
        let mut xs: Vec<u32> = (0..64).collect();
        let mut ys: Vec<u32> = (0..64).map(|v| v * 10).collect();
        a.shuffle_in_place(&mut xs);
        b.shuffle_in_place(&mut ys);
        for (x, y) in xs.iter().zip(&ys) {
            assert_eq!(x * 10, *y);
        }
    }
}
