//! Evenly spaced sequences used for sampling.

/// `n` values evenly spaced over `[start, end]`, both ends included.
///
/// A single value sits at the midpoint; `n == 0` yields nothing.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![(start + end) / 2.0],
        _ => {
            let last = (n - 1) as f64;
            (0..n)
                .map(|i| start + (end - start) * (i as f64) / last)
                .collect()
        }
    }
}

/// Cartesian product of two sequences, outer-major.
pub fn product<A: Copy, B: Copy, T>(
    outer: &[A],
    inner: &[B],
    mut pair: impl FnMut(A, B) -> T,
) -> Vec<T> {
    let mut out = Vec::with_capacity(outer.len() * inner.len());
    for &a in outer {
        for &b in inner {
            out.push(pair(a, b));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn linspace_hits_both_ends_exactly() {
        let ts = linspace(0.0, 1.0, 100);
        assert_eq!(ts.len(), 100);
        assert_eq!(ts[0], 0.0);
        assert_eq!(ts[99], 1.0);
    }

    #[test]
    fn linspace_degenerate_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(0.0, 1.0, 1), vec![0.5]);
        assert_eq!(linspace(2.0, 4.0, 3), vec![2.0, 3.0, 4.0]);
    }

    #[test]
    fn product_is_outer_major() {
        let out = product(&[1, 2], &[10, 20], |a, b| a + b);
        assert_eq!(out, vec![11, 21, 12, 22]);
    }
}
