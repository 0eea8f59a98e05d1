use getset::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::economics::CountryEconomics;
use crate::UnpaidWorkError;

/// Metric by which countries are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RankingMetric {
    /// Female over male unpaid hours.
    GapRatio,
    /// Value of unpaid work as a share of GDP.
    GdpPercentage,
    /// Daily unpaid hours of women.
    FemaleHours,
    /// Monetary value of unpaid work.
    EconomicValue,
}

impl RankingMetric {
    fn value_of(&self, economics: &CountryEconomics) -> f64 {
        match self {
            RankingMetric::GapRatio => *economics.gender_gap_ratio(),
            RankingMetric::GdpPercentage => *economics.gdp_percentage(),
            RankingMetric::FemaleHours => *economics.record().female_unpaid_hours(),
            RankingMetric::EconomicValue => *economics.economic_value(),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            RankingMetric::GapRatio => "Gender gap ratio",
            RankingMetric::GdpPercentage => "Share of GDP (%)",
            RankingMetric::FemaleHours => "Female unpaid hours",
            RankingMetric::EconomicValue => "Economic value",
        }
    }
}

impl fmt::Display for RankingMetric {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for RankingMetric {
    type Err = UnpaidWorkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "gap" | "gap_ratio" => Ok(RankingMetric::GapRatio),
            "gdp" | "gdp_percentage" => Ok(RankingMetric::GdpPercentage),
            "hours" | "female_hours" => Ok(RankingMetric::FemaleHours),
            "value" | "economic_value" => Ok(RankingMetric::EconomicValue),
            other => Err(UnpaidWorkError::InvalidInput(format!(
                "unknown ranking metric '{}', expected gap, gdp, hours or value",
                other
            ))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
#[getset(get = "pub")]
pub struct RankedCountry {
    /// 1-based position.
    rank: usize,
    code: String,
    name: String,
    value: f64,
    metric: RankingMetric,
}

/// Orders countries by `metric`, largest first.
///
/// The sort is stable, so countries with equal values keep their input order.
pub fn rank_countries(economics: &[CountryEconomics], metric: RankingMetric) -> Vec<RankedCountry> {
    let mut scored: Vec<(&CountryEconomics, f64)> = economics.iter().map(|e| (e, metric.value_of(e))).collect();
    scored.sort_by(|a, b| b.1.total_cmp(&a.1));

    scored
        .into_iter()
        .enumerate()
        .map(|(i, (e, value))| RankedCountry {
            rank: i + 1,
            code: e.record().code().clone(),
            name: e.record().name().clone(),
            value,
            metric,
        })
        .collect()
}

/// The first `n` entries of [`rank_countries`].
pub fn top_countries(economics: &[CountryEconomics], metric: RankingMetric, n: usize) -> Vec<RankedCountry> {
    let mut ranked = rank_countries(economics, metric);
    ranked.truncate(n);
    ranked
}
