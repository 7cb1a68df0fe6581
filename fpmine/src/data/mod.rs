//! Transaction datasets in horizontal and vertical layout.
//!
//! The horizontal [`Dataset`] lists transactions; the [`VerticalDataset`]
//! maps each item to its tidset. The two convert into each other without
//! loss, and [`TransactionSource`] lets a miner ask for whichever layout it
//! works on, borrowing when no conversion is needed.

mod dataset;
mod repr;
mod vertical;


use std::borrow::Cow;

pub use dataset::{Dataset, NumericalDataset, Transaction};
pub use repr::{AnyDataset, AnyPatterns, DatasetKind};
pub use vertical::VerticalDataset;

use crate::itemset::Item;

/// Read-only access to a dataset in either layout.
pub trait TransactionSource<I: Item> {
    fn num_transactions(&self) -> usize;

    fn horizontal(&self) -> Cow<'_, Dataset<I>>;

    fn vertical(&self) -> Cow<'_, VerticalDataset<I>>;
}

impl<I: Item> TransactionSource<I> for Dataset<I> {
    fn num_transactions(&self) -> usize {
        self.len()
    }

    fn horizontal(&self) -> Cow<'_, Dataset<I>> {
        Cow::Borrowed(self)
    }

    fn vertical(&self) -> Cow<'_, VerticalDataset<I>> {
        Cow::Owned(VerticalDataset::from_dataset(self))
    }
}

impl<I: Item> TransactionSource<I> for VerticalDataset<I> {
    fn num_transactions(&self) -> usize {
        VerticalDataset::num_transactions(self)
    }

    fn horizontal(&self) -> Cow<'_, Dataset<I>> {
        Cow::Owned(self.to_dataset())
    }

    fn vertical(&self) -> Cow<'_, VerticalDataset<I>> {
        Cow::Borrowed(self)
    }
}
