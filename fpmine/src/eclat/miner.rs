use super::tidset::intersect_all;
use crate::data::TransactionSource;
use crate::itemset::{for_each_combination, FrequentLevel, Item, Itemset};
use crate::logger::MiningLogger;
use crate::params::MiningParams;
use crate::stats::{MiningOutcome, MiningStats};

/// Exhaustive tidset-intersection search.
///
/// Every `k`-combination of the dataset's items is checked by intersecting
/// the members' tidsets; the size of the intersection is the combination's
/// support. A horizontal source is converted to the vertical layout first.
#[derive(Debug, Clone)]
pub struct EclatMiner {
    params: MiningParams,
}

impl EclatMiner {
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

        let logger = MiningLogger::new("eclat", self.params.verbosity);
        let vertical = source.vertical();
        let min_count = self.params.min_support.threshold(vertical.num_transactions());
        logger.info(&format!(
            "mining k={} over {} items in {} transactions, min count {}",
            k,
            vertical.num_items(),
            vertical.num_transactions(),
            min_count
        ));

        let entries: Vec<(&I, &[usize])> = vertical.iter().collect();
        let positions: Vec<usize> = (0..entries.len()).collect();
        let mut patterns = FrequentLevel::new(k);
        let mut stats = MiningStats::default();

        for_each_combination(&positions, k, &mut |combination: &[usize]| {
            stats.combinations_checked += 1;
            let tidsets = combination.iter().map(|&pos| entries[pos].1);
            if let Some(tids) = intersect_all(tidsets, min_count, &mut stats.intersections) {
                let itemset: Itemset<I> = combination
                    .iter()
                    .map(|&pos| entries[pos].0.clone())
                    .collect();
                patterns.add_itemset_with_support(itemset, tids.len());
            }
        });

        logger.debug(|| {
            format!(
                "checked {} combinations with {} intersections",
                stats.combinations_checked, stats.intersections
            )
        });
        logger.info(&format!("found {} patterns of size {}", patterns.len(), k));

        MiningOutcome { patterns, stats }
    }
}
