use crate::classifiers::decision_tree::split_criteria::SplitCriterion;

/// Information gain in bits: entropy before the split minus the
/// size-weighted entropy of the branches.
#[derive(Debug, Clone, Copy, Default)]
pub struct InfoGainSplitCriterion {}

impl InfoGainSplitCriterion {
    pub fn new() -> Self {
        Self {}
    }

    /// Base-2 entropy of a count vector, with `0 * log2(0) = 0`.
    /// An all-zero distribution has entropy 0.
    pub fn compute_entropy(distribution: &[f64]) -> f64 {
        let total: f64 = distribution.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        let mut entropy = 0.0;
        for &count in distribution {
            if count > 0.0 {
                let p = count / total;
                entropy -= p * p.log2();
            }
        }
        entropy
    }

    /// Size-weighted mean entropy of the branches. Empty branches carry
    /// zero weight.
    pub fn compute_entropy_of_splits(dists: &[Vec<f64>]) -> f64 {
        let weights: Vec<f64> = dists.iter().map(|d| d.iter().sum()).collect();
        let total: f64 = weights.iter().sum();
        if total <= 0.0 {
            return 0.0;
        }
        dists
            .iter()
            .zip(&weights)
            .filter(|(_, w)| **w > 0.0)
            .map(|(d, w)| (w / total) * Self::compute_entropy(d))
            .sum()
    }
}

impl SplitCriterion for InfoGainSplitCriterion {
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64 {
        let gain = Self::compute_entropy(pre_split_distribution)
            - Self::compute_entropy_of_splits(post_split_dists);
        gain.max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn entropy_of_pure_and_empty_distributions_is_zero() {
        assert_eq!(InfoGainSplitCriterion::compute_entropy(&[4.0, 0.0]), 0.0);
        assert_eq!(InfoGainSplitCriterion::compute_entropy(&[0.0, 0.0]), 0.0);
        assert_eq!(InfoGainSplitCriterion::compute_entropy(&[]), 0.0);
    }

    #[test]
    fn entropy_of_uniform_distribution_is_log2_of_classes() {
        assert!((InfoGainSplitCriterion::compute_entropy(&[3.0, 3.0]) - 1.0).abs() < EPS);
        assert!(
            (InfoGainSplitCriterion::compute_entropy(&[1.0, 1.0, 1.0, 1.0]) - 2.0).abs() < EPS
        );
    }

    #[test]
    fn merit_ignores_empty_branches() {
        let c = InfoGainSplitCriterion::new();
        let pre = [2.0, 2.0];
        let post = vec![vec![2.0, 0.0], vec![0.0, 0.0], vec![0.0, 2.0]];
        assert!((c.get_merit_of_split(&pre, &post) - 1.0).abs() < EPS);
    }

    #[test]
    fn useless_split_has_zero_merit() {
        let c = InfoGainSplitCriterion::new();
        let pre = [2.0, 2.0];
        let post = vec![vec![1.0, 1.0], vec![1.0, 1.0]];
        assert_eq!(c.get_merit_of_split(&pre, &post), 0.0);
    }
}
