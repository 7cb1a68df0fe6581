//! Mining parameters shared by all three engines.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ParamsError;
use crate::logger::Verbosity;

/// Minimum support, either as an absolute transaction count or as a
/// fraction of the dataset size.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MinSupport {
    Count(usize),
    Fraction(f64),
}

impl MinSupport {
    /// Resolves to an absolute count for a dataset of `num_transactions` rows.
    ///
    /// Fractions round up, so `Fraction(0.5)` over 5 transactions needs 3.
    /// A product within rounding error of a whole number resolves to that
    /// number, so `Fraction(0.07)` over 100 transactions needs 7, not 8.
    /// NaN and negative fractions resolve to 0.
    pub fn resolve(&self, num_transactions: usize) -> usize {
        match *self {
            MinSupport::Count(count) => count,
            MinSupport::Fraction(fraction) => {
                if fraction.is_nan() || fraction <= 0.0 {
                    0
                } else {
                    let exact = fraction * num_transactions as f64;
                    let nearest = exact.round();
                    if (exact - nearest).abs() <= 1e-9 * exact.max(1.0) {
                        nearest as usize
                    } else {
                        exact.ceil() as usize
                    }
                }
            }
        }
    }

    /// The count an itemset's support must reach to be reported.
    ///
    /// Support comparison is inclusive, and an itemset that occurs in no
    /// transaction is never frequent, so the threshold is at least 1.
    pub fn threshold(&self, num_transactions: usize) -> usize {
        self.resolve(num_transactions).max(1)
    }
}

impl Default for MinSupport {
    fn default() -> Self {
        MinSupport::Count(1)
    }
}

impl From<usize> for MinSupport {
    fn from(count: usize) -> Self {
        MinSupport::Count(count)
    }
}

impl From<f64> for MinSupport {
    fn from(fraction: f64) -> Self {
        MinSupport::Fraction(fraction)
    }
}

/// Parameters for one mining call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MiningParams {
    /// Size of the itemsets to report. Zero requests nothing.
    pub k: usize,
    pub min_support: MinSupport,
    pub verbosity: Verbosity,
}

impl Default for MiningParams {
    fn default() -> Self {
        Self {
            k: 1,
            min_support: MinSupport::default(),
            verbosity: Verbosity::Silent,
        }
    }
}

impl MiningParams {
    pub fn new(k: usize, min_support: impl Into<MinSupport>) -> Self {
        Self {
            k,
            min_support: min_support.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub fn with_k(mut self, k: usize) -> Self {
        self.k = k;
        self
    }

    #[must_use]
    pub fn with_min_support(mut self, min_support: impl Into<MinSupport>) -> Self {
        self.min_support = min_support.into();
        self
    }

    #[must_use]
    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// The available mining engines.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    Apriori,
    FpGrowth,
    Eclat,
}

impl Algorithm {
    pub const ALL: [Algorithm; 3] = [Algorithm::Apriori, Algorithm::FpGrowth, Algorithm::Eclat];

    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Apriori => "apriori",
            Algorithm::FpGrowth => "fp-growth",
            Algorithm::Eclat => "eclat",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = ParamsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "apriori" => Ok(Algorithm::Apriori),
            "fp-growth" | "fpgrowth" | "fp_growth" => Ok(Algorithm::FpGrowth),
            "eclat" => Ok(Algorithm::Eclat),
            _ => Err(ParamsError::UnknownAlgorithm(s.to_string())),
        }
    }
}
