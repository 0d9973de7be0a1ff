//! Tree Configuration
//!
//! Parameters governing how a `DecisionTree` is grown, with JSON
//! persistence of the configuration itself.
use crate::constants::{DEFAULT_MAX_DEPTH, DEFAULT_MIN_SIZE};
use crate::errors::ArborError;
use crate::impurity::Criterion;
use crate::splitter::ScoreCeiling;
use crate::utils::validate_min_parameter;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::fs;
use std::path::Path;

fn default_max_depth() -> usize {
    DEFAULT_MAX_DEPTH
}
fn default_min_size() -> usize {
    DEFAULT_MIN_SIZE
}

/// Configuration for the `DecisionTree`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct TreeConfig {
    /// Maximum number of split levels, at least 1.
    #[serde(default = "default_max_depth")]
    pub max_depth: usize,
    /// Groups with this many samples or fewer become leaves.
    #[serde(default = "default_min_size")]
    pub min_size: usize,
    /// Impurity used to score splits.
    #[serde(default)]
    pub criterion: Criterion,
    /// Initial best score of the split search.
    #[serde(default)]
    pub score_ceiling: ScoreCeiling,
    /// Grow sibling subtrees and scan features on a rayon pool.
    #[serde(default)]
    pub parallel: bool,
    /// Number of threads for parallel builds, all cores when unset.
    #[serde(default)]
    pub num_threads: Option<usize>,
}

impl Default for TreeConfig {
    fn default() -> Self {
        TreeConfig {
            max_depth: DEFAULT_MAX_DEPTH,
            min_size: DEFAULT_MIN_SIZE,
            criterion: Criterion::Gini,
            score_ceiling: ScoreCeiling::Unit,
            parallel: false,
            num_threads: None,
        }
    }
}

impl TreeConfig {
    pub fn validate(&self) -> Result<(), ArborError> {
        validate_min_parameter(self.max_depth, 1, "max_depth")?;
        if let Some(n) = self.num_threads {
            validate_min_parameter(n, 1, "num_threads")?;
        }
        Ok(())
    }
}

/// IO
pub trait ConfigIO: Serialize + DeserializeOwned + Sized {
    /// Save as a json object to a file.
    ///
    /// * `path` - Path to save to.
    fn save_config<P: AsRef<Path>>(&self, path: P) -> Result<(), ArborError> {
        fs::write(path, self.json_dump()?).map_err(|e| ArborError::UnableToWrite(e.to_string()))
    }

    /// Dump as a json object
    fn json_dump(&self) -> Result<String, ArborError> {
        serde_json::to_string(self).map_err(|e| ArborError::UnableToWrite(e.to_string()))
    }

    /// Load from a json string
    fn from_json(json_str: &str) -> Result<Self, ArborError> {
        serde_json::from_str::<Self>(json_str).map_err(|e| ArborError::UnableToRead(e.to_string()))
    }

    /// Load from a path to a json object.
    ///
    /// * `path` - Path to load from.
    fn load_config<P: AsRef<Path>>(path: P) -> Result<Self, ArborError> {
        let json_str = fs::read_to_string(path).map_err(|e| ArborError::UnableToRead(e.to_string()))?;
        Self::from_json(&json_str)
    }
}

impl ConfigIO for TreeConfig {}
