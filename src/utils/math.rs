//! Population (divide-by-N) moments over `f64` slices.
//!
//! Every function here assumes a non-empty input; callers validate lengths
//! before reaching for them.

#[inline]
pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Population variance: `Σ(v - mean)² / N`.
pub fn population_variance(values: &[f64]) -> f64 {
    let m = mean(values);
    values.iter().map(|v| (v - m) * (v - m)).sum::<f64>() / values.len() as f64
}

/// Population covariance: `Σ(x - mean_x)(y - mean_y) / N`.
///
/// Both slices must have the same length.
pub fn population_covariance(x: &[f64], y: &[f64]) -> f64 {
    debug_assert_eq!(x.len(), y.len());
    let mx = mean(x);
    let my = mean(y);
    x.iter()
        .zip(y)
        .map(|(a, b)| (a - mx) * (b - my))
        .sum::<f64>()
        / x.len() as f64
}

#[inline]
pub fn population_std(values: &[f64]) -> f64 {
    population_variance(values).sqrt()
}

/// Largest absolute value; `0.0` for an empty slice.
pub fn max_abs(values: &[f64]) -> f64 {
    values.iter().fold(0.0, |acc: f64, v| acc.max(v.abs()))
}

/// `n` evenly spaced samples over `[start, end]`, both ends included.
///
/// `n == 1` yields `[start]`, `n == 0` yields an empty vector.
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// Smallest and largest value of a slice, ignoring NaN. `None` when empty.
pub fn min_max(values: &[f64]) -> Option<(f64, f64)> {
    values
        .iter()
        .copied()
        .filter(|v| !v.is_nan())
        .fold(None, |acc, v| match acc {
            None => Some((v, v)),
            Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    const EPS: f64 = 1e-12;

    fn approx_eq(a: f64, b: f64, eps: f64) -> bool {
        (a - b).abs() <= eps
    }

    #[test]
    fn mean_and_variance_use_population_convention() {
        let v = [2.0, 4.0, 4.0, 4.0, 5.0, 5.0, 7.0, 9.0];
        assert!(approx_eq(mean(&v), 5.0, EPS));
        assert!(approx_eq(population_variance(&v), 4.0, EPS));
        assert!(approx_eq(population_std(&v), 2.0, EPS));
    }

    #[test]
    fn variance_of_constant_is_exactly_zero() {
        assert_eq!(population_variance(&[3.5, 3.5, 3.5]), 0.0);
    }

    #[test]
    fn covariance_matches_hand_computation() {
        let x = [1.0, 2.0, 3.0];
        let y = [2.0, 4.0, 9.0];
        // means 2 and 5; products (-1)(-3) + 0 + (1)(4) = 7
        assert!(approx_eq(population_covariance(&x, &y), 7.0 / 3.0, EPS));
    }

    #[test]
    fn covariance_with_itself_is_variance() {
        let v = [0.5, -1.0, 8.0, 3.25];
        assert!(approx_eq(
            population_covariance(&v, &v),
            population_variance(&v),
            EPS
        ));
    }

    #[test]
    fn max_abs_picks_largest_magnitude() {
        assert_eq!(max_abs(&[3.0, -8.5, 1e-3]), 8.5);
        assert_eq!(max_abs(&[f64::MAX, -f64::MAX]), f64::MAX);
        assert_eq!(max_abs(&[]), 0.0);
    }

    #[test]
    fn linspace_includes_both_ends() {
        let s = linspace(-1.0, 1.0, 5);
        assert_eq!(s, vec![-1.0, -0.5, 0.0, 0.5, 1.0]);

        let dense = linspace(0.3, 7.1, 100);
        assert_eq!(dense.len(), 100);
        assert_eq!(dense[0], 0.3);
        assert_eq!(dense[99], 7.1);
    }

    #[test]
    fn linspace_small_counts() {
        assert!(linspace(0.0, 1.0, 0).is_empty());
        assert_eq!(linspace(2.0, 9.0, 1), vec![2.0]);
    }

    #[test]
    fn min_max_skips_nan() {
        assert_eq!(min_max(&[3.0, f64::NAN, -2.0, 8.0]), Some((-2.0, 8.0)));
        assert_eq!(min_max(&[]), None);
    }
}
