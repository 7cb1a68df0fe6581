use std::collections::{BTreeSet, HashMap};

use ndarray::ArrayView2;
use serde::{Deserialize, Serialize};

use crate::error::DatasetError;
use crate::itemset::{Item, Itemset};

/// A transaction is a set of items; it is stored in canonical order.
pub type Transaction<I> = Itemset<I>;

/// A dataset whose items have been coerced to integers.
pub type NumericalDataset = Dataset<i64>;

/// An ordered sequence of transactions (horizontal layout).
///
/// A transaction's position is its transaction index, which the vertical
/// layout refers to. Duplicate items inside a raw row collapse on insertion.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(
    serialize = "I: Item + Serialize",
    deserialize = "I: Item + Deserialize<'de>"
))]
pub struct Dataset<I: Item> {
    rows: Vec<Transaction<I>>,
}

impl<I: Item> Default for Dataset<I> {
    fn default() -> Self {
        Self::new()
    }
}

impl<I: Item> Dataset<I> {
    pub fn new() -> Self {
        Self { rows: Vec::new() }
    }

    pub fn from_rows<R, T>(rows: R) -> Self
    where
        R: IntoIterator<Item = T>,
        T: IntoIterator<Item = I>,
    {
        Self {
            rows: rows.into_iter().map(Itemset::new).collect(),
        }
    }

    /// Appends a transaction and returns its index.
    pub fn push<T: IntoIterator<Item = I>>(&mut self, row: T) -> usize {
        self.rows.push(Itemset::new(row));
        self.rows.len() - 1
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn transactions(&self) -> &[Transaction<I>] {
        &self.rows
    }

    pub fn get(&self, tid: usize) -> Option<&Transaction<I>> {
        self.rows.get(tid)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Transaction<I>> {
        self.rows.iter()
    }

    /// Distinct items across all transactions, ascending.
    pub fn items(&self) -> BTreeSet<I> {
        self.rows.iter().flat_map(|row| row.iter().cloned()).collect()
    }

    /// Number of transactions containing each item.
    pub fn item_counts(&self) -> HashMap<I, usize> {
        let mut counts: HashMap<I, usize> = HashMap::new();
        for row in &self.rows {
            for item in row {
                *counts.entry(item.clone()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Number of transactions that contain every member of `itemset`.
    pub fn support(&self, itemset: &Itemset<I>) -> usize {
        self.rows
            .iter()
            .filter(|row| itemset.is_subset_of(row.as_slice()))
            .count()
    }
}

impl Dataset<usize> {
    /// Builds a dataset from a one-hot transaction matrix: rows are
    /// transactions, columns are items, and any non-zero cell marks the
    /// column's item as present.
    pub fn from_dense(transactions: ArrayView2<'_, i32>) -> Self {
        let rows = transactions.outer_iter().map(|row| {
            row.iter()
                .enumerate()
                .filter(|&(_, &value)| value != 0)
                .map(|(item, _)| item)
                .collect::<Vec<usize>>()
        });
        Self::from_rows(rows)
    }
}

impl Dataset<String> {
    /// Parses every item as an integer.
    pub fn to_numerical(&self) -> Result<NumericalDataset, DatasetError> {
        let mut rows = Vec::with_capacity(self.rows.len());
        for (row_idx, row) in self.rows.iter().enumerate() {
            let parsed = row
                .iter()
                .map(|item| {
                    item.trim().parse::<i64>().map_err(|_| DatasetError::NonNumericItem {
                        row: row_idx,
                        item: item.clone(),
                    })
                })
                .collect::<Result<Vec<i64>, _>>()?;
            rows.push(parsed);
        }
        Ok(Dataset::from_rows(rows))
    }
}

impl<'a, I: Item> IntoIterator for &'a Dataset<I> {
    type Item = &'a Transaction<I>;
    type IntoIter = std::slice::Iter<'a, Transaction<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.rows.iter()
    }
}

impl<I: Item, T: IntoIterator<Item = I>> FromIterator<T> for Dataset<I> {
    fn from_iter<R: IntoIterator<Item = T>>(rows: R) -> Self {
        Self::from_rows(rows)
    }
}
