//! Summary statistics over convergence-time samples.

use crate::aggregate::Groups;
use crate::model::GroupStats;

/// Arithmetic mean of the samples, or `None` when there are none.
pub fn mean(samples: &[f64]) -> Option<f64> {
    if samples.is_empty() {
        return None;
    }
    Some(samples.iter().sum::<f64>() / samples.len() as f64)
}

/// Population standard deviation (divisor N), or `None` when there are no
/// samples. A single sample has no spread, so it yields 0.0.
pub fn population_stddev(samples: &[f64]) -> Option<f64> {
    let mean = mean(samples)?;
    if samples.len() < 2 {
        return Some(0.0);
    }
    let variance = samples.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / samples.len() as f64;
    Some(variance.sqrt())
}

/// Derive per-group statistics, in ascending peer-count order.
pub fn summarize(groups: &Groups) -> Vec<GroupStats> {
    groups
        .iter()
        .filter_map(|(&n, times)| group_stats(n, times))
        .collect()
}

/// Statistics for one group of success times. `None` when the group is empty.
pub fn group_stats(n: u32, samples: &[f64]) -> Option<GroupStats> {
    let mean = mean(samples)?;
    let stddev = population_stddev(samples)?;
    let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
    let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    Some(GroupStats {
        n,
        mean,
        min,
        max,
        stddev,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mean() {
        assert_eq!(mean(&[1.0, 3.0]), Some(2.0));
        assert_eq!(mean(&[4.5]), Some(4.5));
        assert_eq!(mean(&[]), None);
    }

    #[test]
    fn test_population_stddev_uses_divisor_n() {
        // pstdev({1, 3}) = sqrt(((1-2)^2 + (3-2)^2) / 2) = 1
        assert_eq!(population_stddev(&[1.0, 3.0]), Some(1.0));
    }

    #[test]
    fn test_population_stddev_single_sample_is_zero() {
        assert_eq!(population_stddev(&[7.25]), Some(0.0));
    }

    #[test]
    fn test_population_stddev_empty() {
        assert_eq!(population_stddev(&[]), None);
    }

    #[test]
    fn test_group_stats_bounds() {
        let stats = group_stats(8, &[2.0, 5.0, 3.5, 4.0]).unwrap();

        assert_eq!(stats.min, 2.0);
        assert_eq!(stats.max, 5.0);
        assert!(stats.min <= stats.mean && stats.mean <= stats.max);
        assert!(stats.stddev >= 0.0);
    }

    #[test]
    fn test_group_stats_empty_group() {
        assert_eq!(group_stats(8, &[]), None);
    }

    #[test]
    fn test_summarize_ascending_order() {
        let mut groups = Groups::new();
        groups.insert(20, vec![3.0]);
        groups.insert(5, vec![1.0, 3.0]);
        groups.insert(10, vec![2.0]);

        let rows = summarize(&groups);
        let ns: Vec<u32> = rows.iter().map(|r| r.n).collect();

        assert_eq!(ns, vec![5, 10, 20]);
        assert_eq!(rows[0].mean, 2.0);
        assert_eq!(rows[0].stddev, 1.0);
    }
}
