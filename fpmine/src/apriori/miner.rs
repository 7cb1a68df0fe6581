use super::candidates::{
    count_candidates, frequent_items, generate_candidates, has_infrequent_subset,
};
use crate::data::TransactionSource;
use crate::itemset::{FrequentLevel, Item};
use crate::logger::MiningLogger;
use crate::params::MiningParams;
use crate::stats::{MiningOutcome, MiningStats};

/// Level-wise frequent itemset search.
///
/// Level 1 counts raw item occurrences. Each following level extends the
/// previous level's frequent itemsets by one frequent item, counts the
/// resulting candidates against every transaction, and keeps those whose
/// support reaches the threshold. An empty level ends the search.
#[derive(Debug, Clone)]
pub struct AprioriMiner {
    params: MiningParams,
    subset_pruning: bool,
}

impl AprioriMiner {
    pub fn new(params: MiningParams) -> Self {
        Self {
            params,
            subset_pruning: true,
        }
    }

    /// Toggles dropping candidates that have an infrequent (m-1)-subset
    /// before counting. The result is the same either way; only the number
    /// of counted candidates changes.
    #[must_use]
    pub fn with_subset_pruning(mut self, enabled: bool) -> Self {
        self.subset_pruning = enabled;
        self
    }

    pub fn params(&self) -> &MiningParams {
        &self.params
    }

    /// Frequent itemsets of size `k`.
    pub fn mine<I, S>(&self, source: &S) -> MiningOutcome<I>
    where
        I: Item,
        S: TransactionSource<I> + ?Sized,
    {
        let k = self.params.k;
        let (mut levels, stats) = self.mine_levels(source);
        let patterns = match levels.pop() {
            Some(level) if level.itemset_size == k => level,
            _ => FrequentLevel::new(k),
        };
        MiningOutcome { patterns, stats }
    }

    /// Frequent itemsets of every size from 1 up to `k`; entry `m - 1` holds
    /// size `m`. The search stops at the first empty level, which is the
    /// last entry returned.
    pub fn mine_levels<I, S>(&self, source: &S) -> (Vec<FrequentLevel<I>>, MiningStats)
    where
        I: Item,
        S: TransactionSource<I> + ?Sized,
    {
        let k = self.params.k;
        let logger = MiningLogger::new("apriori", self.params.verbosity);
        let mut stats = MiningStats::default();
        let mut levels: Vec<FrequentLevel<I>> = Vec::new();

        if k == 0 {
            return (levels, stats);
        }

        let dataset = source.horizontal();
        let min_count = self.params.min_support.threshold(dataset.len());
        logger.info(&format!(
            "mining k={} over {} transactions, min count {}",
            k,
            dataset.len(),
            min_count
        ));

        let (first, distinct) = frequent_items(&dataset, min_count);
        stats.levels = 1;
        stats.candidates_generated += distinct;
        stats.candidates_counted += distinct;
        logger.debug(|| format!("k=1: {} candidates, {} frequent", distinct, first.len()));

        let pool: Vec<_> = first
            .iter_itemsets()
            .filter_map(|itemset| itemset.iter().next().cloned())
            .collect();
        let mut exhausted = first.is_empty();
        levels.push(first);

        for size in 2..=k {
            if exhausted {
                logger.debug(|| format!("k={}: previous level empty, stopping", size));
                break;
            }
            let previous = &levels[size - 2];

            let mut candidates = generate_candidates(previous, &pool);
            stats.candidates_generated += candidates.len();

            if self.subset_pruning {
                let before = candidates.len();
                candidates.retain(|candidate| !has_infrequent_subset(candidate, previous));
                stats.candidates_pruned += before - candidates.len();
            }

            stats.levels += 1;
            stats.candidates_counted += candidates.len();
            let counted = candidates.len();
            let level = count_candidates(&dataset, candidates, size, min_count);
            logger.debug(|| {
                format!(
                    "k={}: {} candidates, {} frequent",
                    size,
                    counted,
                    level.len()
                )
            });
            exhausted = level.is_empty();
            levels.push(level);
        }

        let found = levels
            .last()
            .filter(|level| level.itemset_size == k)
            .map_or(0, FrequentLevel::len);
        logger.info(&format!("found {} patterns of size {}", found, k));
        (levels, stats)
    }
}
