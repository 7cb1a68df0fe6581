use std::collections::BTreeSet;

use crate::data::Dataset;
use crate::itemset::{FrequentLevel, Item, Itemset};

/// Frequent 1-itemsets, counted from raw item occurrences.
pub fn frequent_items<I: Item>(
    dataset: &Dataset<I>,
    min_count: usize,
) -> (FrequentLevel<I>, usize) {
    let item_counts = dataset.item_counts();
    let distinct = item_counts.len();

    let mut level = FrequentLevel::new(1);
    for (item, count) in item_counts {
        if count >= min_count {
            level.add_itemset_with_support(vec![item], count);
        }
    }
    (level, distinct)
}

/// Extends every frequent (m-1)-itemset by every pool item it lacks.
///
/// Candidates are canonical itemsets in a set, so two extensions reaching
/// the same members collapse into one candidate.
pub fn generate_candidates<I: Item>(
    previous: &FrequentLevel<I>,
    pool: &[I],
) -> BTreeSet<Itemset<I>> {
    let mut candidates = BTreeSet::new();
    for itemset in previous.iter_itemsets() {
        for item in pool {
            if !itemset.contains(item) {
                candidates.insert(itemset.with(item.clone()));
            }
        }
    }
    candidates
}

/// Whether some (m-1)-subset of `candidate` is missing from `previous`.
pub fn has_infrequent_subset<I: Item>(candidate: &Itemset<I>, previous: &FrequentLevel<I>) -> bool {
    (0..candidate.len()).any(|idx| !previous.contains(&candidate.without_index(idx)))
}

/// Counts each candidate by a subset test against every transaction and
/// keeps those reaching `min_count`.
pub fn count_candidates<I: Item>(
    dataset: &Dataset<I>,
    candidates: impl IntoIterator<Item = Itemset<I>>,
    itemset_size: usize,
    min_count: usize,
) -> FrequentLevel<I> {
    let mut level = FrequentLevel::new(itemset_size);
    for candidate in candidates {
        let support = dataset.support(&candidate);
        if support >= min_count {
            level.add_itemset_with_support(candidate, support);
        }
    }
    level
}
