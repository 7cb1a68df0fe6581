//! Helpers shared across integration tests.

#![allow(dead_code)]

use fpmine::itemset::combinations;
use fpmine::{Dataset, FrequentLevel, Item, Itemset};
use proptest::prelude::*;

/// The five-transaction dataset used throughout the scenarios.
pub fn sample_dataset() -> Dataset<String> {
    Dataset::from_rows(
        [
            vec!["a", "b", "c"],
            vec!["a", "b"],
            vec!["a", "c"],
            vec!["a"],
            vec!["b", "c"],
        ]
        .into_iter()
        .map(|row| row.into_iter().map(str::to_string)),
    )
}

/// Itemsets of a level as plain sorted vectors, in canonical order.
pub fn as_vecs<I: Item>(level: &FrequentLevel<I>) -> Vec<Vec<I>> {
    level.iter_itemsets().map(|itemset| itemset.as_slice().to_vec()).collect()
}

/// Every `k`-itemset occurring in at least `min_count` transactions, found
/// by checking all combinations of the dataset's items.
pub fn brute_force<I: Item>(dataset: &Dataset<I>, k: usize, min_count: usize) -> FrequentLevel<I> {
    let mut level = FrequentLevel::new(k);
    if k == 0 {
        return level;
    }
    let items: Vec<I> = dataset.items().into_iter().collect();
    for combination in combinations(&items, k) {
        let itemset = Itemset::new(combination);
        let support = dataset.support(&itemset);
        if support >= min_count.max(1) {
            level.add_itemset_with_support(itemset, support);
        }
    }
    level
}

/// Small random datasets over items `0..8`, so brute force stays cheap.
pub fn dataset_strategy() -> impl Strategy<Value = Dataset<u8>> {
    proptest::collection::vec(proptest::collection::vec(0u8..8, 0..6), 0..12)
        .prop_map(Dataset::from_rows)
}
