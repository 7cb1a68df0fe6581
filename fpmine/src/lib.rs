//! Frequent itemset mining over transactional data.
//!
//! Three engines find every itemset of a requested size whose support (the
//! number of transactions containing it) reaches a minimum:
//!
//! - [`AprioriMiner`]: level-wise candidate generation and counting
//! - [`FpGrowthMiner`]: recursive mining of a prefix tree ([`FPTree`])
//! - [`EclatMiner`]: tidset intersection over the vertical layout
//!
//! All three accept any [`TransactionSource`], never mutate it, and agree on
//! their results: support is compared inclusively, and an itemset that
//! occurs in no transaction is never reported.
//!
//! ```
//! use fpmine::{fp_growth_patterns, Dataset, Itemset};
//!
//! let dataset = Dataset::from_rows(vec![
//!     vec!["a", "b", "c"],
//!     vec!["a", "b"],
//!     vec!["a", "c"],
//!     vec!["a"],
//!     vec!["b", "c"],
//! ]);
//!
//! let pairs = fp_growth_patterns(&dataset, 2, 2usize);
//! assert_eq!(pairs.len(), 3);
//! assert_eq!(pairs.support(&Itemset::from(["a", "b"])), Some(2));
//! ```

pub mod apriori;
pub mod data;
pub mod eclat;
pub mod error;
pub mod fp;
pub mod itemset;
pub mod logger;
pub mod params;
pub mod stats;

pub use apriori::AprioriMiner;
pub use data::{
    AnyDataset, AnyPatterns, Dataset, DatasetKind, NumericalDataset, TransactionSource,
    VerticalDataset,
};
pub use eclat::EclatMiner;
pub use error::{DatasetError, ParamsError};
pub use fp::{FPNode, FPTree, FpGrowthMiner};
pub use itemset::{FrequentLevel, Item, Itemset, Pattern};
pub use logger::Verbosity;
pub use params::{Algorithm, MinSupport, MiningParams};
pub use stats::{MiningOutcome, MiningStats};

/// Runs the chosen engine.
pub fn mine<I, S>(algorithm: Algorithm, source: &S, params: &MiningParams) -> MiningOutcome<I>
where
    I: Item,
    S: TransactionSource<I> + ?Sized,
{
    match algorithm {
        Algorithm::Apriori => AprioriMiner::new(params.clone()).mine(source),
        Algorithm::FpGrowth => FpGrowthMiner::new(params.clone()).mine(source),
        Algorithm::Eclat => EclatMiner::new(params.clone()).mine(source),
    }
}

/// Frequent `k`-itemsets by Apriori.
pub fn apriori_patterns<I, S>(
    source: &S,
    k: usize,
    min_support: impl Into<MinSupport>,
) -> FrequentLevel<I>
where
    I: Item,
    S: TransactionSource<I> + ?Sized,
{
    mine(Algorithm::Apriori, source, &MiningParams::new(k, min_support)).patterns
}

/// Frequent `k`-itemsets by FP-Growth.
pub fn fp_growth_patterns<I, S>(
    source: &S,
    k: usize,
    min_support: impl Into<MinSupport>,
) -> FrequentLevel<I>
where
    I: Item,
    S: TransactionSource<I> + ?Sized,
{
    mine(Algorithm::FpGrowth, source, &MiningParams::new(k, min_support)).patterns
}

/// Frequent `k`-itemsets by Eclat.
pub fn eclat_patterns<I, S>(
    source: &S,
    k: usize,
    min_support: impl Into<MinSupport>,
) -> FrequentLevel<I>
where
    I: Item,
    S: TransactionSource<I> + ?Sized,
{
    mine(Algorithm::Eclat, source, &MiningParams::new(k, min_support)).patterns
}
