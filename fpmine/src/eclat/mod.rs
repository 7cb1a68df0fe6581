//! Eclat: itemset support by tidset intersection over the vertical layout.

mod miner;
pub mod tidset;

#[cfg(test)]
mod tests;

pub use miner::EclatMiner;
