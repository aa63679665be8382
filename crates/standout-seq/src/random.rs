//! Random integers and the random source used by shuffling.
//!
//! The default source is [`rand::thread_rng`], seeded once per thread from
//! the OS and never shared between threads. Every function here has a
//! `_with` twin taking an explicit [`Rng`] for reproducible results.

use rand::Rng;

/// Returns a random integer in `[min, max]`, using the thread-local source.
///
/// See [`random_with`] for the normalization rules.
pub fn random(min: f64, max: f64) -> i64 {
    random_with(&mut rand::thread_rng(), min, max)
}

/// Returns a random integer in `[min, max]` drawn from `rng`.
///
/// Equal bounds return 0. Otherwise NaN bounds become 0, infinite bounds
/// become the `i64` extremes, swapped bounds are reordered, and the result
/// is `floor(min + u * (max - min + 1))` for a uniform `u` in `[0, 1)`.
/// A NaN result is reported as 0.
pub fn random_with<R: Rng + ?Sized>(rng: &mut R, min: f64, max: f64) -> i64 {
    if min == max {
        return 0;
    }

    let (mut min, mut max) = (normalize(min), normalize(max));
    if min > max {
        std::mem::swap(&mut min, &mut max);
    }

    let value = (min + rng.gen::<f64>() * (max - min + 1.0)).floor();
    if value.is_nan() {
        return 0;
    }
    value as i64
}

fn normalize(bound: f64) -> f64 {
    if bound.is_nan() {
        0.0
    } else if bound == f64::NEG_INFINITY {
        i64::MIN as f64
    } else if bound == f64::INFINITY {
        i64::MAX as f64
    } else {
        bound
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn stays_within_bounds() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..500 {
            let n = random_with(&mut rng, -100.0, 0.0);
            assert!((-100..=0).contains(&n));

            let m = random_with(&mut rng, 0.0, 100.0);
            assert!((0..=100).contains(&m));
        }
    }

    #[test]
    fn swapped_bounds_are_reordered() {
        let mut rng = StdRng::seed_from_u64(11);
        for _ in 0..200 {
            let n = random_with(&mut rng, 10.0, 3.0);
            assert!((3..=10).contains(&n));
        }
    }

    #[test]
    fn equal_bounds_return_zero() {
        assert_eq!(random(0.0, 0.0), 0);
        assert_eq!(random(5.0, 5.0), 0);
        assert_eq!(random(f64::NEG_INFINITY, f64::NEG_INFINITY), 0);
    }

    #[test]
    fn nan_bound_is_treated_as_zero() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..100 {
            let n = random_with(&mut rng, f64::NAN, 4.0);
            assert!((0..=4).contains(&n));
        }
    }

    #[test]
    fn infinite_bounds_span_i64() {
        let mut rng = StdRng::seed_from_u64(5);
        let n = random_with(&mut rng, f64::NEG_INFINITY, f64::INFINITY);
        assert_ne!(n, i64::MIN);
        assert_ne!(n, 0);
    }

    #[test]
    fn hits_both_ends_of_small_range() {
        let mut rng = StdRng::seed_from_u64(42);
        let draws: Vec<i64> = (0..200).map(|_| random_with(&mut rng, 0.0, 1.0)).collect();
        assert!(draws.contains(&0));
        assert!(draws.contains(&1));
    }
}
