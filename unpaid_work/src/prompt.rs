use crate::format::{format_currency, format_percentage};
use crate::policy::impact::EconomicImpact;
use crate::record::{CountryProfile, PolicyScenario};

/// Renders the request text handed to an external advisory text service.
///
/// The prompt is fully determined by its inputs. The reply is never parsed
/// here.
pub fn advisory_prompt(scenario: &PolicyScenario, country: &CountryProfile, impact: &EconomicImpact) -> String {
    let mut prompt = String::new();
    prompt.push_str(&format!(
        "You are a senior economic policy advisor. Analyze {} policy for {}.\n\n",
        scenario.policy_focus,
        country.name()
    ));

    prompt.push_str("COUNTRY PROFILE:\n");
    prompt.push_str(&format!(
        "- {}: {} economy, ${}B GDP, {}M population\n",
        country.name(),
        country.context(),
        scenario.gdp,
        scenario.population
    ));
    prompt.push_str(&format!(
        "- Female labor participation: {}% ({}h/day of unpaid work)\n",
        country.female_labor(),
        scenario.unpaid_hours
    ));
    prompt.push_str(&format!(
        "- Political stability: {}/10, Institutional capacity: {}/10\n",
        country.political_stability(),
        country.institutional_capacity()
    ));
    prompt.push_str(&format!("- Fiscal space: {}% of GDP available\n\n", country.fiscal_space()));

    prompt.push_str("BASELINE ESTIMATES:\n");
    prompt.push_str(&format!(
        "- Hidden value of unpaid work: {} per year\n",
        format_currency(*impact.hidden_value().mid())
    ));
    prompt.push_str(&format!(
        "- Share of GDP: {}\n\n",
        format_percentage(*impact.gdp_percentage().mid())
    ));

    prompt.push_str("REQUIRED ANALYSIS:\n");
    prompt.push_str("1. Executive summary with specific economic projections\n");
    prompt.push_str("2. Three policy recommendations with investment ranges, job creation, GDP impact, timelines and political feasibility\n");
    prompt.push_str("3. International evidence from comparable economies\n");
    prompt.push_str("4. Risk assessment with probability and impact scores\n");
    prompt.push_str("5. Stakeholder analysis with influence mapping\n");
    prompt
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::impact::compute_economic_impact;
    use crate::record::{EconomicContext, PolicyFocus};

    #[test]
    fn test_prompt_contains_profile_and_estimates() {
        let profile = CountryProfile::builder("Japan", EconomicContext::Developed)
            .population(125.0)
            .gdp(4900.0)
            .unpaid_hours(3.6)
            .female_labor(53.2)
            .political_stability(8.0)
            .institutional_capacity(8.0)
            .fiscal_space(10.0)
            .build()
            .unwrap();
        let scenario = PolicyScenario::for_country("JP", &profile, PolicyFocus::Eldercare);
        let impact = compute_economic_impact(&scenario, &profile).unwrap();

        let prompt = advisory_prompt(&scenario, &profile, &impact);
        assert!(prompt.starts_with("You are a senior economic policy advisor. Analyze eldercare policy for Japan."));
        assert!(prompt.contains("- Japan: developed economy, $4900B GDP, 125M population"));
        assert!(prompt.contains("Female labor participation: 53.2% (3.6h/day of unpaid work)"));
        assert!(prompt.contains("Fiscal space: 10% of GDP available"));
        assert!(prompt.contains(&format_currency(*impact.hidden_value().mid())));
        assert_eq!(prompt, advisory_prompt(&scenario, &profile, &impact));
    }
}
