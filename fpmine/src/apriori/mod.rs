//! Apriori: level-wise candidate generation and counting.

pub mod candidates;
mod miner;


pub use miner::AprioriMiner;
