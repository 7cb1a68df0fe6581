//! The engines only read their input, so one dataset can be shared across
//! threads and mined by all three at once.

mod common;

use common::sample_dataset;
use fpmine::{mine, Algorithm, Dataset, MiningParams, VerticalDataset};
use rayon::prelude::*;

#[test]
fn engines_share_one_dataset_across_threads() {
    let dataset = sample_dataset();
    let before = dataset.clone();
    let params = MiningParams::new(2, 2usize);

    let results: Vec<_> = Algorithm::ALL
        .par_iter()
        .map(|&algorithm| mine(algorithm, &dataset, &params).patterns)
        .collect();

    assert_eq!(dataset, before);
    assert!(results.windows(2).all(|pair| pair[0] == pair[1]));
    assert_eq!(results[0].len(), 3);
}

#[test]
fn repeated_parallel_runs_are_deterministic() {
    let dataset: Dataset<u32> =
        Dataset::from_rows((0..200u32).map(|tid| (0..6).filter(move |item| (tid + item) % 3 != 0)));
    let vertical = VerticalDataset::from_dataset(&dataset);
    let params = MiningParams::new(3, 0.2);

    let (horizontal_runs, vertical_runs) = rayon::join(
        || {
            (0..8)
                .into_par_iter()
                .map(|i| mine(Algorithm::ALL[i % 3], &dataset, &params).patterns)
                .collect::<Vec<_>>()
        },
        || {
            (0..8)
                .into_par_iter()
                .map(|i| mine(Algorithm::ALL[i % 3], &vertical, &params).patterns)
                .collect::<Vec<_>>()
        },
    );

    let reference = &horizontal_runs[0];
    assert!(horizontal_runs.iter().chain(vertical_runs.iter()).all(|run| run == reference));
}
