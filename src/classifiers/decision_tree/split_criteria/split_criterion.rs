/// Scores a candidate partition from class distributions alone.
///
/// `pre_split_distribution[c]` is the number of rows with class index `c`
/// before the split; `post_split_dists[v][c]` the same count restricted to
/// branch `v`.
pub trait SplitCriterion {
    fn get_merit_of_split(
        &self,
        pre_split_distribution: &[f64],
        post_split_dists: &[Vec<f64>],
    ) -> f64;
}
