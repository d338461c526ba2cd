use tracing::debug;

use securand_core::backend::SystemRandom;
use securand_core::sample::{secure_random, RandomValue};

/// Generate a uniform integer in `[0, bound)` when `bound` is positive,
/// otherwise a uniform float in `[0.0, 1.0)`.
pub fn run_random(bound: i64) -> Result<(), Box<dyn std::error::Error>> {
    match secure_random(&SystemRandom, bound)? {
        RandomValue::Integer(i) => {
            debug!(bound, value = i, "sampled bounded integer");
            println!("{i}");
        }
        RandomValue::Float(f) => {
            debug!(value = f, "sampled uniform float");
            println!("{f}");
        }
    }
    Ok(())
}
