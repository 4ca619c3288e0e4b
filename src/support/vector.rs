//! Element-wise vector arithmetic for weighted aggregation.
//!
//! The demand model aggregates per-dwelling-type columns (counts, areas,
//! room counts) into building totals through element-wise products and dot
//! products. All operations work on `f64` slices and let NaN propagate: a
//! malformed value entering a column must surface in the totals rather
//! than be silently absorbed.
//!
//! Every vector in this crate is a column extracted from the same record
//! list, so mismatched lengths indicate a caller bug. These functions
//! assert equal lengths and panic instead of truncating to the shorter
//! input.

/// Computes the element-wise (Hadamard) product of two vectors.
///
/// ```
/// use ventilation_models::support::vector::hadamard;
///
/// assert_eq!(hadamard(&[1.0, 2.0], &[3.0, 4.0]), vec![3.0, 8.0]);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn hadamard(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "vector lengths must match");
    a.iter().zip(b).map(|(x, y)| x * y).collect()
}

/// Computes the dot product of two vectors.
///
/// ```
/// use ventilation_models::support::vector::dot;
///
/// assert_eq!(dot(&[1.0, 2.0], &[3.0, 4.0]), 11.0);
/// ```
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn dot(a: &[f64], b: &[f64]) -> f64 {
    hadamard(a, b).iter().sum()
}

/// Computes the element-wise sum of two vectors.
///
/// # Panics
///
/// Panics if the slices differ in length.
#[must_use]
pub fn elementwise_sum(a: &[f64], b: &[f64]) -> Vec<f64> {
    assert_eq!(a.len(), b.len(), "vector lengths must match");
    a.iter().zip(b).map(|(x, y)| x + y).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn empty_vectors() {
        assert!(hadamard(&[], &[]).is_empty());
        assert_eq!(dot(&[], &[]), 0.0);
        assert!(elementwise_sum(&[], &[]).is_empty());
    }

    #[test]
    fn dot_is_bilinear() {
        let a = [2.0, 0.5, 3.0];
        let b = [1.0, 4.0, -2.0];
        let c = [0.25, 7.0, 1.5];

        let b_plus_c = elementwise_sum(&b, &c);
        assert_relative_eq!(dot(&a, &b_plus_c), dot(&a, &b) + dot(&a, &c));
    }

    #[test]
    fn nan_propagates() {
        assert!(dot(&[1.0, f64::NAN], &[2.0, 0.0]).is_nan());
        assert!(hadamard(&[f64::NAN], &[3.0])[0].is_nan());
        assert!(elementwise_sum(&[f64::NAN], &[3.0])[0].is_nan());
    }

    #[test]
    #[should_panic(expected = "vector lengths must match")]
    fn rejects_mismatched_lengths() {
        hadamard(&[1.0, 2.0], &[1.0]);
    }
}
