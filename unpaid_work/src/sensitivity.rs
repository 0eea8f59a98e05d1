//! Deterministic best/worst-case ranges from named assumption factors.

use getset::Getters;
use serde::{Deserialize, Serialize};

/// A named assumption with its variance and its correlation to the outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensitivityFactor {
    pub name: String,
    pub variance: f64,
    pub correlation: f64,
}

impl SensitivityFactor {
    pub fn new(name: &str, variance: f64, correlation: f64) -> Self {
        Self {
            name: name.to_string(),
            variance,
            correlation,
        }
    }
}

/// How one factor is reported alongside the analysis.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct FactorImpact {
    factor: String,
    /// The factor's correlation.
    impact: f64,
    /// `1 - |variance|`.
    likelihood: f64,
}

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct SensitivityAnalysis {
    base_case: f64,
    optimistic: f64,
    pessimistic: f64,
    /// Factor names in input order.
    key_assumptions: Vec<String>,
    sensitivity_factors: Vec<FactorImpact>,
}

/// Derives optimistic and pessimistic values for `base`.
///
/// The optimistic multiplier is the product of `1 + variance * correlation`
/// and the pessimistic one the product of `1 - variance * |correlation|`.
/// Both start at 1.0, so an empty factor list leaves `base` unchanged.
pub fn analyze_sensitivity(base: f64, factors: &[SensitivityFactor]) -> SensitivityAnalysis {
    let (optimistic_multiplier, pessimistic_multiplier) =
        factors.iter().fold((1.0, 1.0), |(opt, pess), f| {
            (
                opt * (1.0 + f.variance * f.correlation),
                pess * (1.0 - f.variance * f.correlation.abs()),
            )
        });

    SensitivityAnalysis {
        base_case: base,
        optimistic: base * optimistic_multiplier,
        pessimistic: base * pessimistic_multiplier,
        key_assumptions: factors.iter().map(|f| f.name.clone()).collect(),
        sensitivity_factors: factors
            .iter()
            .map(|f| FactorImpact {
                factor: f.name.clone(),
                impact: f.correlation,
                likelihood: 1.0 - f.variance.abs(),
            })
            .collect(),
    }
}
