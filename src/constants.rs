pub const DEFAULT_MAX_DEPTH: usize = 5;
pub const DEFAULT_MIN_SIZE: usize = 2;
/// Initial best score of the split search, the largest Gini impurity of a two class problem.
pub const UNIT_SCORE_CEILING: f64 = 1.0;
