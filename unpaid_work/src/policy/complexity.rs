use comfy_table::{Cell, Table};
use getset::Getters;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::record::{CountryProfile, EconomicContext, PolicyFocus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ComplexityCategory {
    Political,
    Technical,
    Financial,
    Social,
}

impl fmt::Display for ComplexityCategory {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            ComplexityCategory::Political => "Political",
            ComplexityCategory::Technical => "Technical",
            ComplexityCategory::Financial => "Financial",
            ComplexityCategory::Social => "Social",
        };
        f.write_str(name)
    }
}

/// Narrative entry explaining one complexity axis.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct ComplexityFactor {
    category: ComplexityCategory,
    description: String,
    complexity: f64,
    mitigation: String,
}

/// Four-axis rollout difficulty on a 1-10 scale.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct ImplementationComplexity {
    /// Rounded mean of the four axes.
    overall: u8,
    political: f64,
    technical: f64,
    financial: f64,
    social: f64,
    /// Always Political, Technical, Financial, Social in that order.
    factors: Vec<ComplexityFactor>,
}

fn clamp_score(score: f64) -> f64 {
    score.clamp(1.0, 10.0)
}

/// Scores how hard a `focus` program of size `economic_scale` (currency
/// units) would be to roll out in `country`.
///
/// Each axis is clamped to [1, 10] independently before the mean is taken.
pub fn score_complexity(country: &CountryProfile, focus: &PolicyFocus, economic_scale: f64) -> ImplementationComplexity {
    let context = *country.context();
    let stability = *country.political_stability();
    let fiscal_space = *country.fiscal_space();
    let female_labor = *country.female_labor();

    let political = clamp_score(10.0 - stability + context.political_penalty());
    let technical = focus.technical_complexity();

    let gdp_percentage = economic_scale / (country.gdp() * 1e9) * 100.0;
    let financial = clamp_score(gdp_percentage / fiscal_space * 5.0);

    let frontier_penalty = if context == EconomicContext::Frontier { 2.0 } else { 0.0 };
    let social = clamp_score((100.0 - female_labor) / 10.0 + frontier_penalty);

    let overall = ((political + technical + financial + social) / 4.0).round() as u8;

    let factors = vec![
        ComplexityFactor {
            category: ComplexityCategory::Political,
            description: format!(
                "Political stability: {}/10, institutional capacity affects implementation",
                stability
            ),
            complexity: political,
            mitigation: "Build cross-party consensus, leverage existing successful programs".to_string(),
        },
        ComplexityFactor {
            category: ComplexityCategory::Technical,
            description: format!("{} infrastructure requires specialized systems and workforce", focus),
            complexity: technical,
            mitigation: "Partner with international experts, phased technology deployment".to_string(),
        },
        ComplexityFactor {
            category: ComplexityCategory::Financial,
            description: format!(
                "Investment represents {:.1}% of GDP vs {}% fiscal space",
                gdp_percentage, fiscal_space
            ),
            complexity: financial,
            mitigation: "Multi-year funding, international development finance, private partnerships".to_string(),
        },
        ComplexityFactor {
            category: ComplexityCategory::Social,
            description: format!(
                "Cultural adaptation needed for {}% traditional households",
                100.0 - female_labor
            ),
            complexity: social,
            mitigation: "Community engagement, gradual rollout, cultural sensitivity training".to_string(),
        },
    ];

    tracing::debug!(country = %country.name(), %focus, overall, "scored implementation complexity");

    ImplementationComplexity {
        overall,
        political,
        technical,
        financial,
        social,
        factors,
    }
}

impl ImplementationComplexity {
    pub fn summary(&self) {
        println!("Implementation Complexity: {}/10", self.overall);
        let mut table = Table::new();
        table.set_header(vec!["Category", "Score", "Description", "Mitigation"]);
        for factor in &self.factors {
            table.add_row(vec![
                Cell::new(factor.category),
                Cell::new(format!("{:.1}", factor.complexity)),
                Cell::new(&factor.description),
                Cell::new(&factor.mitigation),
            ]);
        }
        println!("{}", table);
    }
}
