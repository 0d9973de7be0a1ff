//! Arbor
//!
//! Greedy induction of binary decision tree classifiers. At every node the
//! learner tries every feature against every distinct value it takes, keeps
//! the test with the lowest size weighted Gini impurity or entropy, and
//! recurses until the depth limit, the minimum group size, or a split that
//! sends every sample one way stops it.
//!
//! ```
//! use arbor::{train_tree, FeatureValue};
//!
//! let rows: Vec<Vec<FeatureValue>> = vec![
//!     vec![1.0.into(), "a".into()],
//!     vec![2.0.into(), "b".into()],
//!     vec![3.0.into(), "a".into()],
//!     vec![4.0.into(), "b".into()],
//! ];
//! let root = train_tree(rows, &[0, 0, 1, 1], 2, 0, "gini").unwrap();
//! println!("{}", root);
//! ```

// Modules
pub mod constants;
pub mod data;
pub mod errors;
pub mod impurity;
pub mod node;
pub mod splitter;
pub mod tree;
pub mod utils;

// Individual classes, and functions
pub use data::{Dataset, FeatureKind, FeatureValue, Matrix};
pub use errors::ArborError;
pub use impurity::Criterion;
pub use node::{InternalNode, LeafNode, Node};
pub use splitter::ScoreCeiling;
pub use tree::{train_tree, ConfigIO, DecisionTree, TreeConfig};
