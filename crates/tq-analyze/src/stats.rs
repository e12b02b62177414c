//! Descriptive statistics for the outlier and distribution checks.

/// Linear-interpolation quantile over already-sorted values.
/// `q` in `[0, 1]`. Returns None on empty input.
pub fn quantile(sorted: &[f64], q: f64) -> Option<f64> {
    if sorted.is_empty() {
        return None;
    }
    if sorted.len() == 1 {
        return Some(sorted[0]);
    }
    let position = q.clamp(0.0, 1.0) * (sorted.len() - 1) as f64;
    let lower = position.floor() as usize;
    let upper = position.ceil() as usize;
    if lower == upper {
        return Some(sorted[lower]);
    }
    let weight = position - lower as f64;
    Some(sorted[lower] * (1.0 - weight) + sorted[upper] * weight)
}

/// IQR outlier fences: `[Q1 - 1.5*IQR, Q3 + 1.5*IQR]`.
/// Returns None when there is no data to fence.
pub fn iqr_fences(sorted: &[f64]) -> Option<(f64, f64)> {
    let q1 = quantile(sorted, 0.25)?;
    let q3 = quantile(sorted, 0.75)?;
    let iqr = q3 - q1;
    Some((q1 - 1.5 * iqr, q3 + 1.5 * iqr))
}

/// Adjusted Fisher-Pearson sample skewness (the bias-corrected G1
/// statistic). Needs at least three values and nonzero variance.
pub fn skewness(values: &[f64]) -> Option<f64> {
    let n = values.len();
    if n < 3 {
        return None;
    }
    let count = n as f64;
    let mean = values.iter().sum::<f64>() / count;
    let m2 = values.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / count;
    let m3 = values.iter().map(|v| (v - mean).powi(3)).sum::<f64>() / count;
    if m2 == 0.0 {
        return None;
    }
    let g1 = m3 / m2.powf(1.5);
    Some(g1 * (count * (count - 1.0)).sqrt() / (count - 2.0))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quantile_interpolates_linearly() {
        let values = [1.0, 2.0, 3.0, 4.0];
        assert_eq!(quantile(&values, 0.25), Some(1.75));
        assert_eq!(quantile(&values, 0.5), Some(2.5));
        assert_eq!(quantile(&values, 0.75), Some(3.25));
        assert_eq!(quantile(&values, 0.0), Some(1.0));
        assert_eq!(quantile(&values, 1.0), Some(4.0));
    }

    #[test]
    fn quantile_edge_cases() {
        assert_eq!(quantile(&[], 0.5), None);
        assert_eq!(quantile(&[7.0], 0.25), Some(7.0));
    }

    #[test]
    fn fences_flag_a_single_extreme_value() {
        // [1,2,3,4,1000]: only 1000 falls outside the fences.
        let values = [1.0, 2.0, 3.0, 4.0, 1000.0];
        let (lower, upper) = iqr_fences(&values).unwrap();
        let outliers: Vec<f64> = values
            .iter()
            .copied()
            .filter(|v| *v < lower || *v > upper)
            .collect();
        assert_eq!(outliers, vec![1000.0]);
    }

    #[test]
    fn skewness_of_symmetric_data_is_zero() {
        let skew = skewness(&[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert!(skew.abs() < 1e-12);
    }

    #[test]
    fn skewness_needs_three_values_and_spread() {
        assert_eq!(skewness(&[1.0, 2.0]), None);
        assert_eq!(skewness(&[5.0, 5.0, 5.0, 5.0]), None);
    }

    #[test]
    fn skewness_is_positive_for_right_tail() {
        let skew = skewness(&[1.0, 1.0, 1.0, 1.0, 100.0]).unwrap();
        assert!(skew > 1.0);
    }
}
