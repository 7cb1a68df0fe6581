use super::builder::{build_conditional_fp_tree, build_fp_tree};
use super::tree::FPTree;
use crate::data::TransactionSource;
use crate::itemset::{for_each_combination, FrequentLevel, Item, Itemset};
use crate::logger::MiningLogger;
use crate::params::MiningParams;
use crate::stats::{MiningOutcome, MiningStats};

/// Pattern growth over an FP-tree.
///
/// The dataset is compressed into one FP-tree; patterns are then grown one
/// suffix item at a time by mining the conditional tree of each item,
/// least frequent item first, until the suffix reaches size `k`.
#[derive(Debug, Clone)]
pub struct FpGrowthMiner {
    params: MiningParams,
}

impl FpGrowthMiner {
    pub fn new(params: MiningParams) -> Self {
        Self { params }
    }

    pub fn params(&self) -> &MiningParams {
        &self.params
    }

    pub fn mine<I, S>(&self, source: &S) -> MiningOutcome<I>
    where
        I: Item,
        S: TransactionSource<I> + ?Sized,
    {
        let k = self.params.k;
        if k == 0 {
            return MiningOutcome::empty(0);
        }

        let logger = MiningLogger::new("fp-growth", self.params.verbosity);
        let dataset = source.horizontal();
        let min_count = self.params.min_support.threshold(dataset.len());

        let fp_tree = build_fp_tree(&dataset, min_count);
        let mut stats = MiningStats {
            trees_built: 1,
            tree_nodes: fp_tree.node_count(),
            ..MiningStats::default()
        };
        logger.info(&format!(
            "built FP-tree over {} transactions: {} nodes, {} frequent items, single path: {}",
            fp_tree.len(),
            fp_tree.node_count(),
            fp_tree.item_counts().len(),
            fp_tree.is_single_path()
        ));

        let patterns = mine_tree(&fp_tree, k, min_count, &mut stats, &logger);
        logger.info(&format!("found {} patterns of size {}", patterns.len(), k));

        MiningOutcome { patterns, stats }
    }
}

/// Frequent itemsets of size `k` in `fp_tree`.
pub fn mine_tree<I: Item>(
    fp_tree: &FPTree<I>,
    k: usize,
    min_count: usize,
    stats: &mut MiningStats,
    logger: &MiningLogger,
) -> FrequentLevel<I> {
    let mut result = FrequentLevel::new(k);
    if k > 0 {
        fp_growth_recursive(fp_tree, k, &Itemset::empty(), min_count, &mut result, stats, logger);
    }
    result
}

/// Adds to `result` every frequent itemset of `fp_tree` with `remaining`
/// items, each joined with the suffix `alpha` the tree is conditioned on.
fn fp_growth_recursive<I: Item>(
    fp_tree: &FPTree<I>,
    remaining: usize,
    alpha: &Itemset<I>,
    min_count: usize,
    result: &mut FrequentLevel<I>,
    stats: &mut MiningStats,
    logger: &MiningLogger,
) {
    if fp_tree.is_single_path() {
        let path: Vec<(I, usize)> = fp_tree
            .single_path()
            .into_iter()
            .filter(|(_, count)| *count >= min_count)
            .collect();
        generate_combinations_from_path(&path, remaining, alpha, result);
        return;
    }

    for (item, support) in fp_tree.items_by_ascending_frequency() {
        if support < min_count {
            continue;
        }

        let new_pattern = alpha.with(item.clone());
        if remaining == 1 {
            result.add_itemset_with_support(new_pattern, support);
            continue;
        }

        let base = fp_tree.conditional_pattern_base(&item);
        if base.is_empty() {
            continue;
        }
        stats.conditional_bases += 1;

        let conditional_tree = build_conditional_fp_tree(&base, min_count);
        stats.trees_built += 1;
        stats.tree_nodes += conditional_tree.node_count();
        logger.debug(|| {
            format!(
                "conditional tree for {:?} (suffix {:?}): {} rows, {} nodes",
                item,
                alpha.as_slice(),
                base.len(),
                conditional_tree.node_count()
            )
        });

        fp_growth_recursive(
            &conditional_tree,
            remaining - 1,
            &new_pattern,
            min_count,
            result,
            stats,
            logger,
        );
    }
}

/// Every `k`-combination of a single path's items, joined with `alpha`.
/// The support of a combination is the smallest count among its nodes.
pub fn generate_combinations_from_path<I: Item>(
    path: &[(I, usize)],
    k: usize,
    alpha: &Itemset<I>,
    result: &mut FrequentLevel<I>,
) {
    if k == 0 || k > path.len() {
        return;
    }

    let indices: Vec<usize> = (0..path.len()).collect();
    for_each_combination(&indices, k, &mut |combination: &[usize]| {
        let mut pattern = alpha.as_slice().to_vec();
        let mut support = usize::MAX;
        for &idx in combination {
            pattern.push(path[idx].0.clone());
            support = support.min(path[idx].1);
        }
        result.add_itemset_with_support(pattern, support);
    });
}
