//! Item identifiers, the canonical itemset key, and per-size result storage.

pub mod combinations;
pub mod storage;


use std::fmt;
use std::hash::Hash;

use serde::{Deserialize, Serialize};

pub use combinations::{combinations, for_each_combination};
pub use storage::{FrequentLevel, Pattern};

/// Anything usable as an item identifier.
///
/// `Ord` supplies the canonical order of itemsets and breaks frequency ties.
pub trait Item: Clone + Ord + Hash + fmt::Debug + Send + Sync {}

impl<T> Item for T where T: Clone + Ord + Hash + fmt::Debug + Send + Sync {}

/// An itemset in canonical form: sorted ascending, without duplicates.
///
/// Two itemsets with the same members are equal, hash equally and order
/// equally, whatever order their items were supplied in.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Vec<I>")]
#[serde(bound(deserialize = "I: Item + Deserialize<'de>"))]
pub struct Itemset<I>(Vec<I>);

impl<I: Item> Itemset<I> {
    pub fn new<T: IntoIterator<Item = I>>(items: T) -> Self {
        let mut items: Vec<I> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn empty() -> Self {
        Self(Vec::new())
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn as_slice(&self) -> &[I] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, I> {
        self.0.iter()
    }

    pub fn contains(&self, item: &I) -> bool {
        self.0.binary_search(item).is_ok()
    }

    /// Whether every member occurs in `sorted`, which must be ascending.
    pub fn is_subset_of(&self, sorted: &[I]) -> bool {
        let mut rest = sorted;
        for item in &self.0 {
            match rest.binary_search(item) {
                Ok(pos) => rest = &rest[pos + 1..],
                Err(_) => return false,
            }
        }
        true
    }

    /// A copy of this itemset with `item` added.
    pub fn with(&self, item: I) -> Self {
        let mut items = self.0.clone();
        if let Err(pos) = items.binary_search(&item) {
            items.insert(pos, item);
        }
        Self(items)
    }

    /// A copy of this itemset with the member at `index` removed.
    pub fn without_index(&self, index: usize) -> Self {
        let mut items = self.0.clone();
        items.remove(index);
        Self(items)
    }

    pub fn into_vec(self) -> Vec<I> {
        self.0
    }
}

impl<I: Item> From<Vec<I>> for Itemset<I> {
    fn from(items: Vec<I>) -> Self {
        Self::new(items)
    }
}

impl<I: Item, const N: usize> From<[I; N]> for Itemset<I> {
    fn from(items: [I; N]) -> Self {
        Self::new(items)
    }
}

impl<I: Item> FromIterator<I> for Itemset<I> {
    fn from_iter<T: IntoIterator<Item = I>>(iter: T) -> Self {
        Self::new(iter)
    }
}

impl<'a, I> IntoIterator for &'a Itemset<I> {
    type Item = &'a I;
    type IntoIter = std::slice::Iter<'a, I>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<I: fmt::Display> fmt::Display for Itemset<I> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("{")?;
        for (i, item) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            write!(f, "{}", item)?;
        }
        f.write_str("}")
    }
}
