use std::cmp::Ordering;
use std::collections::HashMap;

use super::tree::{ConditionalPatternBase, FPTree};
use crate::data::Dataset;
use crate::itemset::Item;

/// Builds the FP-tree of a whole dataset.
pub fn build_fp_tree<I: Item>(dataset: &Dataset<I>, min_count: usize) -> FPTree<I> {
    build_weighted_tree(dataset.iter().map(|row| (row.as_slice(), 1)), min_count)
}

/// Builds the conditional FP-tree of one item from its pattern base.
pub fn build_conditional_fp_tree<I: Item>(
    base: &ConditionalPatternBase<I>,
    min_count: usize,
) -> FPTree<I> {
    build_weighted_tree(base.iter(), min_count)
}

/// Two passes over `(row, weight)` pairs: the first counts items, the second
/// inserts each row reduced to its frequent items in descending count order.
/// Rows that keep no items still count towards the root.
pub fn build_weighted_tree<'a, I, R>(rows: R, min_count: usize) -> FPTree<I>
where
    I: Item + 'a,
    R: IntoIterator<Item = (&'a [I], usize)> + Clone,
{
    let mut item_counts: HashMap<I, usize> = HashMap::new();
    for (row, weight) in rows.clone() {
        for item in row {
            *item_counts.entry(item.clone()).or_insert(0) += weight;
        }
    }
    item_counts.retain(|_, count| *count >= min_count);

    let mut fp_tree = FPTree::new();
    let mut tx_items: Vec<I> = Vec::new();

    for (row, weight) in rows {
        tx_items.clear();
        tx_items.extend(row.iter().filter(|item| item_counts.contains_key(*item)).cloned());
        tx_items.sort_unstable_by(|a, b| by_descending_frequency(a, b, &item_counts));
        fp_tree.insert(&tx_items, weight);
    }

    fp_tree
}

/// Higher count first; equal counts fall back to ascending item order so
/// every row sorts its shared items identically.
fn by_descending_frequency<I: Item>(a: &I, b: &I, counts: &HashMap<I, usize>) -> Ordering {
    let count_a = counts.get(a).copied().unwrap_or(0);
    let count_b = counts.get(b).copied().unwrap_or(0);
    count_b.cmp(&count_a).then_with(|| a.cmp(b))
}
