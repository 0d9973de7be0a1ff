// public modules
pub mod config;
pub mod core;

// private modules
mod render;
mod setters;

pub use self::config::{ConfigIO, TreeConfig};
pub use self::core::{train_tree, DecisionTree};
