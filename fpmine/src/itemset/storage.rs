use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{Item, Itemset};

/// One frequent itemset and its support count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "I: Item + Serialize",
    deserialize = "I: Item + Deserialize<'de>"
))]
pub struct Pattern<I: Item> {
    pub itemset: Itemset<I>,
    pub support: usize,
}

/// The frequent itemsets of a single size, keyed by canonical itemset.
///
/// Adding an itemset that is already present is a no-op, so engines that
/// reach the same itemset along several paths report it once. Iteration is
/// in ascending canonical order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "LevelRepr<I>", from = "LevelRepr<I>")]
#[serde(bound(
    serialize = "I: Item + Serialize",
    deserialize = "I: Item + Deserialize<'de>"
))]
pub struct FrequentLevel<I: Item> {
    pub itemset_size: usize,
    supports: BTreeMap<Itemset<I>, usize>,
}

#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "I: Item + Serialize",
    deserialize = "I: Item + Deserialize<'de>"
))]
struct LevelRepr<I: Item> {
    itemset_size: usize,
    patterns: Vec<Pattern<I>>,
}

impl<I: Item> FrequentLevel<I> {
    pub fn new(itemset_size: usize) -> Self {
        Self {
            itemset_size,
            supports: BTreeMap::new(),
        }
    }

    /// Records `items` with its support. Returns `false` if the itemset was
    /// already present, in which case the stored support is kept.
    pub fn add_itemset_with_support(
        &mut self,
        items: impl Into<Itemset<I>>,
        support: usize,
    ) -> bool {
        let itemset = items.into();
        debug_assert_eq!(itemset.len(), self.itemset_size);
        match self.supports.entry(itemset) {
            std::collections::btree_map::Entry::Occupied(_) => false,
            std::collections::btree_map::Entry::Vacant(slot) => {
                slot.insert(support);
                true
            }
        }
    }

    pub fn len(&self) -> usize {
        self.supports.len()
    }

    pub fn is_empty(&self) -> bool {
        self.supports.is_empty()
    }

    pub fn contains(&self, itemset: &Itemset<I>) -> bool {
        self.supports.contains_key(itemset)
    }

    pub fn support(&self, itemset: &Itemset<I>) -> Option<usize> {
        self.supports.get(itemset).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<I>, usize)> {
        self.supports.iter().map(|(itemset, &support)| (itemset, support))
    }

    pub fn iter_itemsets(&self) -> impl Iterator<Item = &Itemset<I>> {
        self.supports.keys()
    }

    pub fn into_itemsets(self) -> Vec<Itemset<I>> {
        self.supports.into_keys().collect()
    }

    pub fn into_patterns(self) -> Vec<Pattern<I>> {
        self.supports
            .into_iter()
            .map(|(itemset, support)| Pattern { itemset, support })
            .collect()
    }
}

impl<I: Item> From<FrequentLevel<I>> for LevelRepr<I> {
    fn from(level: FrequentLevel<I>) -> Self {
        Self {
            itemset_size: level.itemset_size,
            patterns: level.into_patterns(),
        }
    }
}

impl<I: Item> From<LevelRepr<I>> for FrequentLevel<I> {
    fn from(repr: LevelRepr<I>) -> Self {
        let mut level = FrequentLevel::new(repr.itemset_size);
        for pattern in repr.patterns {
            level.supports.entry(pattern.itemset).or_insert(pattern.support);
        }
        level
    }
}
