use super::dataset::{Dataset, NumericalDataset};
use super::vertical::VerticalDataset;
use crate::error::DatasetError;
use crate::params::{Algorithm, MiningParams};
use crate::stats::{MiningOutcome, MiningStats};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DatasetKind {
    Horizontal,
    Numerical,
    Vertical,
}

/// A dataset in one of its concrete representations, as handed over by an
/// ingestion layer that decides the representation at run time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyDataset {
    Horizontal(Dataset<String>),
    Numerical(NumericalDataset),
    Vertical(VerticalDataset<String>),
}

/// Mining results keyed by the item type of the dataset they came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnyPatterns {
    Text(MiningOutcome<String>),
    Numeric(MiningOutcome<i64>),
}

impl AnyDataset {
    pub fn kind(&self) -> DatasetKind {
        match self {
            AnyDataset::Horizontal(_) => DatasetKind::Horizontal,
            AnyDataset::Numerical(_) => DatasetKind::Numerical,
            AnyDataset::Vertical(_) => DatasetKind::Vertical,
        }
    }

    /// Number of transactions.
    pub fn len(&self) -> usize {
        match self {
            AnyDataset::Horizontal(dataset) => dataset.len(),
            AnyDataset::Numerical(dataset) => dataset.len(),
            AnyDataset::Vertical(vertical) => vertical.num_transactions(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Coerces items to integers. A numerical dataset is returned as is.
    pub fn to_numerical(&self) -> Result<AnyDataset, DatasetError> {
        match self {
            AnyDataset::Horizontal(dataset) => Ok(AnyDataset::Numerical(dataset.to_numerical()?)),
            AnyDataset::Numerical(dataset) => Ok(AnyDataset::Numerical(dataset.clone())),
            AnyDataset::Vertical(vertical) => {
                Ok(AnyDataset::Numerical(vertical.to_dataset().to_numerical()?))
            }
        }
    }

    pub fn mine(&self, algorithm: Algorithm, params: &MiningParams) -> AnyPatterns {
        match self {
            AnyDataset::Horizontal(dataset) => {
                AnyPatterns::Text(crate::mine(algorithm, dataset, params))
            }
            AnyDataset::Numerical(dataset) => {
                AnyPatterns::Numeric(crate::mine(algorithm, dataset, params))
            }
            AnyDataset::Vertical(vertical) => {
                AnyPatterns::Text(crate::mine(algorithm, vertical, params))
            }
        }
    }
}

impl From<Dataset<String>> for AnyDataset {
    fn from(dataset: Dataset<String>) -> Self {
        AnyDataset::Horizontal(dataset)
    }
}

impl From<NumericalDataset> for AnyDataset {
    fn from(dataset: NumericalDataset) -> Self {
        AnyDataset::Numerical(dataset)
    }
}

impl From<VerticalDataset<String>> for AnyDataset {
    fn from(vertical: VerticalDataset<String>) -> Self {
        AnyDataset::Vertical(vertical)
    }
}

impl AnyPatterns {
    pub fn len(&self) -> usize {
        match self {
            AnyPatterns::Text(outcome) => outcome.patterns.len(),
            AnyPatterns::Numeric(outcome) => outcome.patterns.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn stats(&self) -> &MiningStats {
        match self {
            AnyPatterns::Text(outcome) => &outcome.stats,
            AnyPatterns::Numeric(outcome) => &outcome.stats,
        }
    }
}
