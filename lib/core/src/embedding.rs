use serde::{Deserialize, Serialize};

/// A fixed-dimension embedding vector for one feature's text.
///
/// Dimensionality is provider-defined; the core only requires that both
/// sides of a comparison agree on it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Embedding {
    data: Vec<f32>,
}

impl Embedding {
    #[inline]
    #[must_use]
    pub fn new(data: Vec<f32>) -> Self {
        Self { data }
    }

    #[inline]
    #[must_use]
    pub fn from_slice(data: &[f32]) -> Self {
        Self {
            data: data.to_vec(),
        }
    }

    #[inline]
    #[must_use]
    pub fn dim(&self) -> usize {
        self.data.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    /// Dot product with another embedding of the same dimension.
    #[inline]
    #[must_use]
    pub fn dot(&self, other: &Embedding) -> f32 {
        dot_scalar(&self.data, &other.data)
    }

    /// Euclidean norm.
    #[inline]
    #[must_use]
    pub fn norm(&self) -> f32 {
        norm_scalar(&self.data)
    }
}

/// Scalar dot product with two accumulators for better pipelining.
#[inline]
fn dot_scalar(a: &[f32], b: &[f32]) -> f32 {
    let chunks = a.len() / 2 * 2;
    let mut acc0 = 0.0f32;
    let mut acc1 = 0.0f32;

    let mut i = 0;
    while i < chunks {
        acc0 += a[i] * b[i];
        acc1 += a[i + 1] * b[i + 1];
        i += 2;
    }
    if i < a.len() {
        acc0 += a[i] * b[i];
    }

    acc0 + acc1
}

#[inline]
fn norm_scalar(a: &[f32]) -> f32 {
    dot_scalar(a, a).sqrt()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_product() {
        let a = Embedding::new(vec![1.0, 2.0, 3.0]);
        let b = Embedding::new(vec![4.0, 5.0, 6.0]);
        assert!((a.dot(&b) - 32.0).abs() < 1e-6);
    }

    #[test]
    fn test_dot_product_odd_length() {
        let a = Embedding::new(vec![1.0, 2.0, 3.0, 4.0, 5.0]);
        let b = Embedding::new(vec![1.0, 1.0, 1.0, 1.0, 1.0]);
        assert!((a.dot(&b) - 15.0).abs() < 1e-6);
    }

    #[test]
    fn test_norm() {
        let a = Embedding::new(vec![3.0, 4.0]);
        assert!((a.norm() - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty() {
        let a = Embedding::new(vec![]);
        assert!(a.is_empty());
        assert_eq!(a.dim(), 0);
        assert_eq!(a.norm(), 0.0);
    }
}
