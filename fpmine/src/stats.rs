use serde::{Deserialize, Serialize};

use crate::itemset::{FrequentLevel, Item};

/// Work counters for one mining call.
///
/// Each engine fills the counters relevant to it and leaves the rest at zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MiningStats {
    /// Apriori levels evaluated, including level 1.
    pub levels: usize,
    pub candidates_generated: usize,
    /// Candidates dropped because one of their subsets is infrequent.
    pub candidates_pruned: usize,
    /// Candidates whose support was counted against the dataset.
    pub candidates_counted: usize,
    /// FP-trees built, the initial tree included.
    pub trees_built: usize,
    /// Nodes across all FP-trees built, roots excluded.
    pub tree_nodes: usize,
    pub conditional_bases: usize,
    /// Eclat item combinations examined.
    pub combinations_checked: usize,
    /// Eclat tidset intersections performed.
    pub intersections: usize,
}

/// The patterns found by one mining call together with the work it took.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MiningOutcome<I: Item> {
    pub patterns: FrequentLevel<I>,
    pub stats: MiningStats,
}

impl<I: Item> MiningOutcome<I> {
    pub fn empty(itemset_size: usize) -> Self {
        Self {
            patterns: FrequentLevel::new(itemset_size),
            stats: MiningStats::default(),
        }
    }
}
