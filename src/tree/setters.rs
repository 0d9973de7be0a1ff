use crate::impurity::Criterion;
use crate::splitter::ScoreCeiling;
use crate::tree::core::DecisionTree;

impl DecisionTree {
    // Set methods for paramters

    /// Set the maximum depth of the tree.
    /// * `max_depth` - Maximum number of split levels, at least 1.
    pub fn set_max_depth(mut self, max_depth: usize) -> Self {
        self.cfg.max_depth = max_depth;
        self
    }

    /// Set the minimum group size.
    /// * `min_size` - Groups with this many samples or fewer become leaves.
    pub fn set_min_size(mut self, min_size: usize) -> Self {
        self.cfg.min_size = min_size;
        self
    }

    /// Set the impurity criterion.
    pub fn set_criterion(mut self, criterion: Criterion) -> Self {
        self.cfg.criterion = criterion;
        self
    }

    /// Set the initial best score of the split search.
    /// * `score_ceiling` - `ScoreCeiling::Unbounded` lets entropy splits over many
    ///   classes register, `ScoreCeiling::Unit` only keeps candidates scoring below 1.
    pub fn set_score_ceiling(mut self, score_ceiling: ScoreCeiling) -> Self {
        self.cfg.score_ceiling = score_ceiling;
        self
    }

    /// Set whether the tree is grown on a rayon pool.
    pub fn set_parallel(mut self, parallel: bool) -> Self {
        self.cfg.parallel = parallel;
        self
    }

    /// Set the number of threads on the tree.
    /// * `num_threads` - Set the number of threads to be used during parallel builds.
    pub fn set_num_threads(mut self, num_threads: Option<usize>) -> Self {
        self.cfg.num_threads = num_threads;
        self
    }
}
