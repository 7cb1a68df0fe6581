//! FP-Growth: frequent itemsets from a prefix tree of transactions.

pub mod growth;


pub use growth::{
    build_conditional_fp_tree, build_fp_tree, mine_tree, ConditionalPatternBase, FPNode, FPTree,
    FpGrowthMiner, NodeId,
};
