//! Squared Euclidean distance for dense vectors.
//!
//! Every distance in this crate is *squared* L2. Squaring is monotonic on
//! non-negative reals, so rankings and threshold comparisons agree with true
//! Euclidean distance and the square root is never needed.

/// Squared L2 distance between two vectors.
///
/// If dimensions mismatch, this returns `f32::INFINITY` (so it is never
/// selected as a nearest neighbor).
#[inline]
#[must_use]
pub fn l2_sq(a: &[f32], b: &[f32]) -> f32 {
    if a.len() != b.len() {
        return f32::INFINITY;
    }
    a.iter()
        .zip(b.iter())
        .map(|(x, y)| {
            let d = x - y;
            d * d
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_for_identical() {
        let a = [1.0_f32, 2.0, 3.0];
        assert_eq!(l2_sq(&a, &a), 0.0);
    }

    #[test]
    fn squared_not_rooted() {
        let a = [0.0_f32, 0.0];
        let b = [3.0_f32, 4.0];
        assert!((l2_sq(&a, &b) - 25.0).abs() < 1e-6);
    }

    #[test]
    fn mismatched_lengths_are_infinitely_far() {
        let a = [1.0_f32, 2.0];
        let b = [1.0_f32, 2.0, 3.0];
        assert_eq!(l2_sq(&a, &b), f32::INFINITY);
    }
}
