use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::dataset::Dataset;
use crate::error::DatasetError;
use crate::itemset::Item;

/// Vertical layout: each item maps to the sorted indices of the
/// transactions that contain it (its tidset).
///
/// Every tidset is non-empty and refers only to indices below
/// `num_transactions`; construction and deserialization both enforce this.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawVertical<I>", into = "RawVertical<I>")]
#[serde(bound(
    serialize = "I: Item + Serialize",
    deserialize = "I: Item + Deserialize<'de>"
))]
pub struct VerticalDataset<I: Item> {
    num_transactions: usize,
    tidsets: BTreeMap<I, Vec<usize>>,
}

#[derive(Serialize, Deserialize)]
#[serde(bound(
    serialize = "I: Item + Serialize",
    deserialize = "I: Item + Deserialize<'de>"
))]
struct RawVertical<I: Item> {
    num_transactions: usize,
    tidsets: BTreeMap<I, Vec<usize>>,
}

impl<I: Item> VerticalDataset<I> {
    pub fn from_dataset(dataset: &Dataset<I>) -> Self {
        let mut tidsets: BTreeMap<I, Vec<usize>> = BTreeMap::new();
        for (tid, row) in dataset.iter().enumerate() {
            for item in row {
                tidsets.entry(item.clone()).or_default().push(tid);
            }
        }
        Self {
            num_transactions: dataset.len(),
            tidsets,
        }
    }

    /// Builds a vertical dataset from explicit tidsets, checking that every
    /// index is in range and no tidset is empty. An item listed more than
    /// once has its tidsets merged.
    pub fn try_from_tidsets<T, S>(num_transactions: usize, tidsets: T) -> Result<Self, DatasetError>
    where
        T: IntoIterator<Item = (I, S)>,
        S: IntoIterator<Item = usize>,
    {
        let mut merged: BTreeMap<I, Vec<usize>> = BTreeMap::new();
        for (item, tids) in tidsets {
            merged.entry(item).or_default().extend(tids);
        }

        for (item, tids) in merged.iter_mut() {
            tids.sort_unstable();
            tids.dedup();
            match tids.last() {
                None => {
                    return Err(DatasetError::EmptyTidset {
                        item: format!("{:?}", item),
                    })
                }
                Some(&tid) if tid >= num_transactions => {
                    return Err(DatasetError::TidOutOfRange {
                        item: format!("{:?}", item),
                        tid,
                        num_transactions,
                    })
                }
                Some(_) => {}
            }
        }

        Ok(Self {
            num_transactions,
            tidsets: merged,
        })
    }

    /// Rebuilds the horizontal layout. Row `t` holds exactly the items whose
    /// tidset contains `t`; rows no item refers to come back empty.
    pub fn to_dataset(&self) -> Dataset<I> {
        let mut rows: Vec<Vec<I>> = vec![Vec::new(); self.num_transactions];
        for (item, tids) in &self.tidsets {
            for &tid in tids {
                rows[tid].push(item.clone());
            }
        }
        Dataset::from_rows(rows)
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    pub fn num_items(&self) -> usize {
        self.tidsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tidsets.is_empty()
    }

    pub fn items(&self) -> impl Iterator<Item = &I> {
        self.tidsets.keys()
    }

    pub fn tidset(&self, item: &I) -> Option<&[usize]> {
        self.tidsets.get(item).map(Vec::as_slice)
    }

    /// Support of the single item `{item}`.
    pub fn support(&self, item: &I) -> usize {
        self.tidsets.get(item).map_or(0, Vec::len)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&I, &[usize])> {
        self.tidsets.iter().map(|(item, tids)| (item, tids.as_slice()))
    }
}

impl<I: Item> From<&Dataset<I>> for VerticalDataset<I> {
    fn from(dataset: &Dataset<I>) -> Self {
        Self::from_dataset(dataset)
    }
}

impl<I: Item> TryFrom<RawVertical<I>> for VerticalDataset<I> {
    type Error = DatasetError;

    fn try_from(raw: RawVertical<I>) -> Result<Self, Self::Error> {
        Self::try_from_tidsets(raw.num_transactions, raw.tidsets)
    }
}

impl<I: Item> From<VerticalDataset<I>> for RawVertical<I> {
    fn from(vertical: VerticalDataset<I>) -> Self {
        Self {
            num_transactions: vertical.num_transactions,
            tidsets: vertical.tidsets,
        }
    }
}
