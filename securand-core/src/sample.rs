//! Unbiased bounded integers via rejection sampling, and uniform floats.

use crate::constants::MAX_SAMPLE_DRAWS;
use crate::error::RandomError;
use crate::traits::random::SecureRandom;

/// 2^-53: scale factor mapping a 53-bit integer into [0.0, 1.0).
const FLOAT_SCALE: f64 = 1.0 / (1u64 << f64::MANTISSA_DIGITS) as f64;

/// Result of the combined entry point: an integer for positive bounds,
/// a float otherwise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RandomValue {
    Integer(u64),
    Float(f64),
}

/// Uniform integer in `[0, bound)` with no modulo bias.
///
/// `bound` is encoded big-endian in as few bytes as it fits; the top
/// byte of each candidate draw is masked down to the smallest
/// all-ones-below value covering `bound`'s top byte, and candidates not
/// strictly below `bound` are rejected. Masking keeps the candidate's
/// bit-length close to `bound`'s, so acceptance probability per draw
/// exceeds 1/2 and the expected number of rejections is below one.
///
/// `bound == 0` is a caller contract violation and fails fast.
pub fn sample_below(rng: &dyn SecureRandom, bound: u64) -> Result<u64, RandomError> {
    if bound == 0 {
        return Err(RandomError::InvalidBound(bound));
    }

    let be = bound.to_be_bytes();
    let first = be.iter().position(|&b| b != 0).unwrap_or(be.len() - 1);
    let encoded = &be[first..];

    // Fill-down mask over the most significant byte.
    let mut mask = encoded[0];
    mask |= mask >> 1;
    mask |= mask >> 2;
    mask |= mask >> 4;

    let mut draw = vec![0u8; encoded.len()];
    for _ in 0..MAX_SAMPLE_DRAWS {
        rng.fill_bytes(&mut draw)?;
        draw[0] &= mask;
        let candidate = draw
            .iter()
            .fold(0u64, |acc, &b| (acc << 8) | u64::from(b));
        if candidate < bound {
            return Ok(candidate);
        }
    }

    // Rejection probability per draw is below 1/2; reaching the cap
    // means the source is feeding constant or adversarial data.
    Err(RandomError::SamplerExhausted(MAX_SAMPLE_DRAWS))
}

/// Uniform float in `[0.0, 1.0)`.
///
/// Eight random bytes are reduced to the 53 mantissa bits an `f64` can
/// hold and scaled by 2^-53, so 1.0 itself is never produced.
pub fn uniform_float(rng: &dyn SecureRandom) -> Result<f64, RandomError> {
    let mut buf = [0u8; 8];
    rng.fill_bytes(&mut buf)?;
    let bits = u64::from_be_bytes(buf) >> (64 - f64::MANTISSA_DIGITS);
    Ok(bits as f64 * FLOAT_SCALE)
}

/// Combined entry point: uniform integer in `[0, bound)` when `bound`
/// is positive, uniform float in `[0.0, 1.0)` otherwise.
pub fn secure_random(rng: &dyn SecureRandom, bound: i64) -> Result<RandomValue, RandomError> {
    if bound > 0 {
        Ok(RandomValue::Integer(sample_below(rng, bound as u64)?))
    } else {
        Ok(RandomValue::Float(uniform_float(rng)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::SystemRandom;
    use std::cell::RefCell;

    /// Replays a fixed sequence of draws, one buffer per `fill_bytes` call.
    struct ScriptedRng {
        draws: RefCell<Vec<Vec<u8>>>,
    }

    impl ScriptedRng {
        fn new(draws: &[&[u8]]) -> Self {
            Self {
                draws: RefCell::new(draws.iter().rev().map(|d| d.to_vec()).collect()),
            }
        }
    }

    impl SecureRandom for ScriptedRng {
        fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
            let draw = self.draws.borrow_mut().pop().expect("script exhausted");
            assert_eq!(draw.len(), dest.len(), "draw length mismatch");
            dest.copy_from_slice(&draw);
            Ok(())
        }
    }

    #[test]
    fn test_zero_bound_rejected() {
        assert!(matches!(
            sample_below(&SystemRandom, 0),
            Err(RandomError::InvalidBound(0))
        ));
    }

    #[test]
    fn test_bound_one_always_zero() {
        let rng = SystemRandom;
        for _ in 0..200 {
            assert_eq!(sample_below(&rng, 1).unwrap(), 0);
        }
    }

    #[test]
    fn test_in_range_for_varied_bounds() {
        let rng = SystemRandom;
        for bound in [1u64, 2, 7, 16, 255, 256, 257, 1_000_000, u64::MAX] {
            for _ in 0..50 {
                assert!(sample_below(&rng, bound).unwrap() < bound);
            }
        }
    }

    #[test]
    fn test_mask_rejects_then_accepts() {
        // Bound 16 (0x10) gives mask 0x1F. A masked candidate of 0x1F is
        // not below the bound and must be rejected; the next draw masks
        // to 0x07 and is accepted as 7.
        let rng = ScriptedRng::new(&[&[0x1F], &[0x07]]);
        assert_eq!(sample_below(&rng, 16).unwrap(), 7);
    }

    #[test]
    fn test_mask_strips_high_bits() {
        // 0xE3 & 0x1F == 0x03: bits above the mask never bias the value.
        let rng = ScriptedRng::new(&[&[0xE3]]);
        assert_eq!(sample_below(&rng, 16).unwrap(), 3);
    }

    #[test]
    fn test_two_byte_bound_draws_two_bytes() {
        // 256 encodes as [0x01, 0x00]; a masked draw equal to the bound
        // is rejected, then [0x00, 0xFF] is accepted as 255.
        let rng = ScriptedRng::new(&[&[0x01, 0x00], &[0x00, 0xFF]]);
        assert_eq!(sample_below(&rng, 256).unwrap(), 255);
    }

    #[test]
    fn test_stuck_source_trips_guard() {
        struct StuckRng;
        impl SecureRandom for StuckRng {
            fn fill_bytes(&self, dest: &mut [u8]) -> Result<(), RandomError> {
                for b in dest.iter_mut() {
                    *b = 0xFF;
                }
                Ok(())
            }
        }
        // Every draw masks to 0x1F >= 16, so the loop can never accept.
        assert!(matches!(
            sample_below(&StuckRng, 16),
            Err(RandomError::SamplerExhausted(_))
        ));
    }

    #[test]
    fn test_uniformity_chi_square() {
        const BINS: u64 = 256;
        const SAMPLES: usize = 65_536;
        let rng = SystemRandom;
        let mut counts = [0u32; BINS as usize];
        for _ in 0..SAMPLES {
            counts[sample_below(&rng, BINS).unwrap() as usize] += 1;
        }
        let expected = SAMPLES as f64 / BINS as f64;
        let chi2: f64 = counts
            .iter()
            .map(|&c| {
                let d = f64::from(c) - expected;
                d * d / expected
            })
            .sum();
        // 255 degrees of freedom: mean 255, sd ~22.6. A modulo-biased
        // sampler lands far above 430; a healthy one essentially never does.
        assert!(chi2 < 430.0, "chi-square statistic too high: {chi2}");
    }

    #[test]
    fn test_float_in_unit_interval() {
        let rng = SystemRandom;
        for _ in 0..10_000 {
            let f = uniform_float(&rng).unwrap();
            assert!((0.0..1.0).contains(&f), "out of range: {f}");
        }
    }

    #[test]
    fn test_float_extremes() {
        let all_ones = ScriptedRng::new(&[&[0xFF; 8]]);
        let f = uniform_float(&all_ones).unwrap();
        assert!(f < 1.0);
        assert_eq!(f, 1.0 - FLOAT_SCALE);

        let all_zero = ScriptedRng::new(&[&[0x00; 8]]);
        assert_eq!(uniform_float(&all_zero).unwrap(), 0.0);
    }

    #[test]
    fn test_secure_random_routing() {
        let rng = SystemRandom;
        match secure_random(&rng, 100).unwrap() {
            RandomValue::Integer(i) => assert!(i < 100),
            other => panic!("expected integer, got {other:?}"),
        }
        for bound in [0i64, -1, -1000] {
            match secure_random(&rng, bound).unwrap() {
                RandomValue::Float(f) => assert!((0.0..1.0).contains(&f)),
                other => panic!("expected float, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_secure_random_bound_one() {
        assert_eq!(
            secure_random(&SystemRandom, 1).unwrap(),
            RandomValue::Integer(0)
        );
    }
}
