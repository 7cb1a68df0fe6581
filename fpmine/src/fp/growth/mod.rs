pub mod builder;
pub mod mining;
pub mod tree;

pub use builder::{build_conditional_fp_tree, build_fp_tree};
pub use mining::{mine_tree, FpGrowthMiner};
pub use tree::{ConditionalPatternBase, FPNode, FPTree, NodeId};
