mod common;

use common::{as_vecs, sample_dataset};
use fpmine::{
    mine, Algorithm, AnyDataset, Dataset, Itemset, MiningParams, MiningStats, Verbosity,
    VerticalDataset,
};

fn owned(rows: &[&[&str]]) -> Vec<Vec<String>> {
    rows.iter()
        .map(|row| row.iter().map(|item| item.to_string()).collect())
        .collect()
}

#[test]
fn singles_at_min_support_three() {
    let dataset = sample_dataset();
    for algorithm in Algorithm::ALL {
        let outcome = mine(algorithm, &dataset, &MiningParams::new(1, 3usize));
        assert_eq!(
            as_vecs(&outcome.patterns),
            owned(&[&["a"], &["b"], &["c"]]),
            "{algorithm}"
        );
        assert_eq!(outcome.patterns.support(&Itemset::from(["a".to_string()])), Some(4));
        assert_eq!(outcome.patterns.support(&Itemset::from(["b".to_string()])), Some(3));
        assert_eq!(outcome.patterns.support(&Itemset::from(["c".to_string()])), Some(3));
    }
}

#[test]
fn pairs_at_min_support_two() {
    let dataset = sample_dataset();
    for algorithm in Algorithm::ALL {
        let outcome = mine(algorithm, &dataset, &MiningParams::new(2, 2usize));
        assert_eq!(
            as_vecs(&outcome.patterns),
            owned(&[&["a", "b"], &["a", "c"], &["b", "c"]]),
            "{algorithm}"
        );
        for (_, support) in outcome.patterns.iter() {
            assert_eq!(support, 2);
        }
    }
}

#[test]
fn support_threshold_is_inclusive() {
    let dataset = sample_dataset();
    for algorithm in Algorithm::ALL {
        // b and c have support exactly 3
        let at = mine(algorithm, &dataset, &MiningParams::new(1, 3usize));
        let above = mine(algorithm, &dataset, &MiningParams::new(1, 4usize));
        assert_eq!(at.patterns.len(), 3, "{algorithm}");
        assert_eq!(above.patterns.len(), 1, "{algorithm}");
    }
}

#[test]
fn empty_dataset_yields_nothing() {
    let dataset: Dataset<String> = Dataset::new();
    let vertical = VerticalDataset::from_dataset(&dataset);
    for algorithm in Algorithm::ALL {
        for k in 0..4 {
            for min_support in 0..3usize {
                let params = MiningParams::new(k, min_support);
                assert!(mine(algorithm, &dataset, &params).patterns.is_empty());
                assert!(mine(algorithm, &vertical, &params).patterns.is_empty());
            }
        }
    }
}

#[test]
fn k_zero_yields_nothing_and_does_no_work() {
    let dataset = sample_dataset();
    for algorithm in Algorithm::ALL {
        let outcome = mine(algorithm, &dataset, &MiningParams::new(0, 0usize));
        assert!(outcome.patterns.is_empty());
        assert_eq!(outcome.stats, MiningStats::default());
    }
}

#[test]
fn verbose_mining_returns_the_same_patterns() {
    let dataset = sample_dataset();
    let quiet = MiningParams::new(2, 2usize);
    let loud = quiet.clone().with_verbosity(Verbosity::Debug);
    for algorithm in Algorithm::ALL {
        assert_eq!(
            mine(algorithm, &dataset, &quiet).patterns,
            mine(algorithm, &dataset, &loud).patterns
        );
    }
}

#[test]
fn algorithm_names_select_engines() {
    let dataset = AnyDataset::from(sample_dataset());
    let params = MiningParams::new(2, 2usize);
    for name in ["apriori", "fp-growth", "eclat"] {
        let algorithm: Algorithm = name.parse().unwrap();
        assert_eq!(dataset.mine(algorithm, &params).len(), 3);
    }
}

#[test]
fn numeric_items_order_numerically() {
    let text: Dataset<String> = Dataset::from_rows(vec![
        vec!["10".to_string(), "9".to_string()],
        vec!["10".to_string(), "9".to_string()],
    ]);
    let numerical = text.to_numerical().unwrap();

    let text_pairs = mine(Algorithm::Eclat, &text, &MiningParams::new(2, 2usize)).patterns;
    let numeric_pairs = mine(Algorithm::Eclat, &numerical, &MiningParams::new(2, 2usize)).patterns;

    assert_eq!(as_vecs(&text_pairs), vec![vec!["10".to_string(), "9".to_string()]]);
    assert_eq!(as_vecs(&numeric_pairs), vec![vec![9, 10]]);
}

#[test]
fn huge_k_yields_nothing() {
    let dataset = sample_dataset();
    let vertical = VerticalDataset::from_dataset(&dataset);
    let params = MiningParams::new(usize::MAX, 1usize);
    for algorithm in Algorithm::ALL {
        let outcome = mine(algorithm, &dataset, &params);
        assert!(outcome.patterns.is_empty(), "{algorithm}");
        assert_eq!(outcome.patterns.itemset_size, usize::MAX);
        assert!(mine(algorithm, &vertical, &params).patterns.is_empty(), "{algorithm}");
    }
}

#[test]
fn fractional_support_keeps_itemsets_on_the_boundary() {
    // item 1 is in exactly 7 of 100 rows, item 2 in all of them
    let dataset: Dataset<u32> =
        Dataset::from_rows((0..100).map(|tid| if tid < 7 { vec![1, 2] } else { vec![2] }));
    for algorithm in Algorithm::ALL {
        let singles = mine(algorithm, &dataset, &MiningParams::new(1, 0.07)).patterns;
        assert_eq!(singles.support(&Itemset::from([1])), Some(7), "{algorithm}");
        assert_eq!(singles.len(), 2, "{algorithm}");

        let pairs = mine(algorithm, &dataset, &MiningParams::new(2, 0.07)).patterns;
        assert_eq!(pairs.support(&Itemset::from([1, 2])), Some(7), "{algorithm}");

        let above = mine(algorithm, &dataset, &MiningParams::new(1, 0.08)).patterns;
        assert_eq!(above.len(), 1, "{algorithm}");
    }
}
