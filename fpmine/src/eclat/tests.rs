use super::tidset::{intersect_all, intersect_sorted};
use super::*;
use crate::data::{Dataset, VerticalDataset};
use crate::itemset::Itemset;
use crate::params::MiningParams;

fn sample_vertical() -> VerticalDataset<&'static str> {
    VerticalDataset::try_from_tidsets(
        5,
        vec![
            ("a", vec![0, 1, 2, 3]),
            ("b", vec![0, 1, 4]),
            ("c", vec![0, 2, 4]),
        ],
    )
    .unwrap()
}

#[test]
fn intersect_sorted_keeps_common_tids() {
    assert_eq!(intersect_sorted(&[0, 1, 2, 3], &[0, 2, 4]), vec![0, 2]);
    assert!(intersect_sorted(&[1, 3], &[0, 2]).is_empty());
    assert!(intersect_sorted(&[], &[0, 2]).is_empty());
}

#[test]
fn intersect_all_stops_below_min_count() {
    let mut intersections = 0;
    let sets: Vec<&[usize]> = vec![&[0, 1][..], &[2, 3][..], &[0, 1, 2, 3][..]];
    assert_eq!(intersect_all(sets, 1, &mut intersections), None);
    // the empty running intersection ends the scan before the third set
    assert_eq!(intersections, 1);

    let mut intersections = 0;
    let sets: Vec<&[usize]> = vec![&[0, 1, 2][..], &[1, 2, 3][..]];
    assert_eq!(intersect_all(sets, 2, &mut intersections), Some(vec![1, 2]));
    assert_eq!(intersections, 1);
}

#[test]
fn intersect_all_rejects_a_short_first_tidset() {
    let mut intersections = 0;
    let sets: Vec<&[usize]> = vec![&[4][..]];
    assert_eq!(intersect_all(sets, 2, &mut intersections), None);
    assert_eq!(intersections, 0);
}

#[test]
fn eclat_finds_frequent_singles() {
    let outcome = EclatMiner::new(MiningParams::new(1, 3usize)).mine(&sample_vertical());
    assert_eq!(outcome.patterns.len(), 3);
    assert_eq!(outcome.patterns.support(&Itemset::from(["a"])), Some(4));
    assert_eq!(outcome.stats.combinations_checked, 3);
    assert_eq!(outcome.stats.intersections, 0);
}

#[test]
fn eclat_finds_frequent_pairs() {
    let outcome = EclatMiner::new(MiningParams::new(2, 2usize)).mine(&sample_vertical());
    let found: Vec<_> = outcome.patterns.iter().map(|(s, n)| (s.as_slice().to_vec(), n)).collect();
    assert_eq!(
        found,
        vec![(vec!["a", "b"], 2), (vec!["a", "c"], 2), (vec!["b", "c"], 2)]
    );
}

#[test]
fn eclat_converts_horizontal_input() {
    let dataset = Dataset::from_rows(vec![
        vec!["a", "b", "c"],
        vec!["a", "b"],
        vec!["a", "c"],
        vec!["a"],
        vec!["b", "c"],
    ]);
    let from_rows = EclatMiner::new(MiningParams::new(2, 2usize)).mine(&dataset);
    let from_tidsets = EclatMiner::new(MiningParams::new(2, 2usize)).mine(&sample_vertical());
    assert_eq!(from_rows.patterns, from_tidsets.patterns);
}

#[test]
fn eclat_threshold_above_dataset_size_finds_nothing() {
    let outcome = EclatMiner::new(MiningParams::new(1, 6usize)).mine(&sample_vertical());
    assert!(outcome.patterns.is_empty());
}

#[test]
fn eclat_k_larger_than_item_count_finds_nothing() {
    let outcome = EclatMiner::new(MiningParams::new(4, 1usize)).mine(&sample_vertical());
    assert!(outcome.patterns.is_empty());
    assert_eq!(outcome.stats.combinations_checked, 0);
}
