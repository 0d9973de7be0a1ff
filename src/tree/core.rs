use crate::constants::UNIT_SCORE_CEILING;
use crate::data::{Dataset, FeatureValue};
use crate::errors::ArborError;
use crate::impurity::Criterion;
use crate::node::Node;
use crate::splitter::{find_best_split, ScoreCeiling, SplitInfo};
use crate::tree::config::TreeConfig;
use crate::utils::majority_label;
use log::{debug, info, warn};
use std::time::Instant;

/// Decision tree classifier, grown greedily by exhaustive split search.
#[derive(Clone, Debug, Default)]
pub struct DecisionTree {
    pub cfg: TreeConfig,
    pub root: Option<Node>,
}

/// Leaf predicting the majority label of a group.
fn leaf(labels: &[usize]) -> Result<Node, ArborError> {
    Ok(Node::leaf(majority_label(labels)?, labels.len()))
}

impl DecisionTree {
    /// Decision tree object
    ///
    /// * `max_depth` - Maximum number of split levels, at least 1.
    /// * `min_size` - Groups with this many samples or fewer are not split further.
    /// * `criterion` - Impurity used to score splits.
    pub fn new(max_depth: usize, min_size: usize, criterion: Criterion) -> Result<Self, ArborError> {
        let cfg = TreeConfig {
            max_depth,
            min_size,
            criterion,
            ..Default::default()
        };
        Self::from_config(cfg)
    }

    pub fn from_config(cfg: TreeConfig) -> Result<Self, ArborError> {
        cfg.validate()?;
        Ok(DecisionTree { cfg, root: None })
    }

    pub fn root(&self) -> Option<&Node> {
        self.root.as_ref()
    }

    pub fn into_root(self) -> Option<Node> {
        self.root
    }

    /// Fit the tree to a dataset, replacing any previously fitted tree.
    pub fn fit(&mut self, data: &Dataset) -> Result<(), ArborError> {
        let start = Instant::now();
        let root = if self.cfg.parallel {
            let mut builder = rayon::ThreadPoolBuilder::new();
            if let Some(n) = self.cfg.num_threads {
                builder = builder.num_threads(n);
            }
            let pool = builder.build().map_err(|e| ArborError::ThreadPool(e.to_string()))?;
            pool.install(|| self.build(data))?
        } else {
            self.build(data)?
        };
        info!(
            "Fitted tree on {} samples: {} nodes, {} leaves, depth {}, in {:.3} seconds.",
            data.n_rows(),
            root.n_nodes(),
            root.n_leaves(),
            root.depth(),
            start.elapsed().as_secs_f32()
        );
        self.root = Some(root);
        Ok(())
    }

    /// Grow a tree on a dataset and return its root, leaving `self` untouched.
    ///
    /// The root split is searched over the whole dataset, then grown from depth 1.
    pub fn build(&self, data: &Dataset) -> Result<Node, ArborError> {
        self.cfg.validate()?;
        let n_classes = data.n_classes();
        if self.cfg.score_ceiling == ScoreCeiling::Unit
            && self.cfg.criterion.max_impurity(n_classes) > UNIT_SCORE_CEILING
        {
            warn!(
                "{} impurity of {} classes can exceed the unit score ceiling, some groups may find no split.",
                self.cfg.criterion, n_classes
            );
        }
        let split = find_best_split(data, self.cfg.criterion, self.cfg.score_ceiling, self.cfg.parallel)?;
        self.grow(split, 1)
    }

    /// Turn a split into a node, growing its children.
    fn grow(&self, split: SplitInfo, depth: usize) -> Result<Node, ArborError> {
        let SplitInfo {
            feature,
            value,
            score,
            left,
            right,
        } = split;
        let n_samples = left.n_rows() + right.n_rows();
        debug!(
            "Split {} samples on X{} at {} (score {:.4}, depth {}): {} left, {} right.",
            n_samples,
            feature + 1,
            value,
            score,
            depth,
            left.n_rows(),
            right.n_rows()
        );

        // A split that sends everything one way only carries a leaf on that side.
        if left.is_empty() {
            let right = leaf(right.labels())?;
            return Ok(Node::internal(feature, value, score, n_samples, None, Some(right)));
        }
        if right.is_empty() {
            let left = leaf(left.labels())?;
            return Ok(Node::internal(feature, value, score, n_samples, Some(left), None));
        }

        if depth >= self.cfg.max_depth {
            let (left, right) = (leaf(left.labels())?, leaf(right.labels())?);
            return Ok(Node::internal(feature, value, score, n_samples, Some(left), Some(right)));
        }

        let (left, right) = if self.cfg.parallel {
            let (l, r) = rayon::join(|| self.grow_side(left, depth), || self.grow_side(right, depth));
            (l?, r?)
        } else {
            (self.grow_side(left, depth)?, self.grow_side(right, depth)?)
        };
        Ok(Node::internal(feature, value, score, n_samples, Some(left), Some(right)))
    }

    /// Grow one child of a node at `depth`.
    fn grow_side(&self, side: Dataset, depth: usize) -> Result<Node, ArborError> {
        if side.n_rows() <= self.cfg.min_size {
            return leaf(side.labels());
        }
        let split = find_best_split(&side, self.cfg.criterion, self.cfg.score_ceiling, self.cfg.parallel)?;
        drop(side);
        if split.left.is_empty() {
            debug!("Collapsing degenerate split on X{} into a leaf.", split.feature + 1);
            return leaf(split.right.labels());
        }
        if split.right.is_empty() {
            debug!("Collapsing degenerate split on X{} into a leaf.", split.feature + 1);
            return leaf(split.left.labels());
        }
        self.grow(split, depth + 1)
    }
}

/// Grow a decision tree on rows of feature values and integer labels.
///
/// * `features` - Rows of samples, each an ordered sequence of feature values.
/// * `labels` - Non-negative class label of each row.
/// * `max_depth` - Maximum number of split levels, at least 1.
/// * `min_size` - Groups with this many samples or fewer become leaves.
/// * `criterion` - `"gini"` or `"entropy"`.
pub fn train_tree(
    features: Vec<Vec<FeatureValue>>,
    labels: &[i64],
    max_depth: usize,
    min_size: usize,
    criterion: &str,
) -> Result<Node, ArborError> {
    let criterion: Criterion = criterion.parse()?;
    let tree = DecisionTree::new(max_depth, min_size, criterion)?;
    let data = Dataset::new(features, labels)?;
    tree.build(&data)
}
