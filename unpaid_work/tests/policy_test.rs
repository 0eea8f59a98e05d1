use serde_json::Value;
use unpaid_work::{
    build_interval, UnpaidWorkError, build_recommendations, compute_economic_impact, map_stakeholders, score_complexity,
    CountryProfile, EconomicContext, PolicyFocus, PolicyScenario, RecommendationTier,
};

fn profiles() -> Vec<(&'static str, CountryProfile)> {
    let rows = [
        ("US", "United States", 331.0, 25400.0, 3.8, 56.2, EconomicContext::Developed, 7.0, 8.0, 15.0),
        ("CN", "China", 1412.0, 17700.0, 4.2, 61.9, EconomicContext::Emerging, 8.0, 7.0, 25.0),
        ("IN", "India", 1380.0, 3700.0, 5.2, 20.3, EconomicContext::Emerging, 6.0, 5.0, 8.0),
        ("DE", "Germany", 83.0, 4200.0, 3.1, 55.4, EconomicContext::Developed, 9.0, 9.0, 12.0),
        ("JP", "Japan", 125.0, 4900.0, 3.6, 53.2, EconomicContext::Developed, 8.0, 8.0, 10.0),
    ];
    rows.iter()
        .map(|&(code, name, pop, gdp, hours, labor, context, stability, capacity, fiscal)| {
            let profile = CountryProfile::builder(name, context)
                .population(pop)
                .gdp(gdp)
                .unpaid_hours(hours)
                .female_labor(labor)
                .political_stability(stability)
                .institutional_capacity(capacity)
                .fiscal_space(fiscal)
                .build()
                .unwrap();
            (code, profile)
        })
        .collect()
}

const FOCUSES: [&str; 10] = [
    "childcare",
    "eldercare",
    "comprehensive",
    "healthcare",
    "education",
    "mental",
    "financial",
    "cooking",
    "cleaning",
    "transport",
];

#[test]
fn test_interval_reference_points() {
    let perfect = build_interval(100.0, 0.3, 1.0);
    assert_eq!((*perfect.low(), *perfect.mid(), *perfect.high()), (100.0, 100.0, 100.0));
    let none = build_interval(100.0, 0.3, 0.0);
    assert!((none.low() - 70.0).abs() < 1e-9);
    assert!((none.high() - 130.0).abs() < 1e-9);
    assert_eq!(*none.confidence(), 0.0);
}

#[test]
fn test_complexity_in_range_for_every_profile_and_focus() {
    for (_, profile) in profiles() {
        for tag in FOCUSES {
            let focus: PolicyFocus = tag.parse().unwrap();
            let scenario = PolicyScenario::for_country("XX", &profile, focus.clone());
            let impact = compute_economic_impact(&scenario, &profile).unwrap();
            let c = score_complexity(&profile, &focus, *impact.hidden_value().mid());
            for score in [c.political(), c.technical(), c.financial(), c.social()] {
                assert!((1.0..=10.0).contains(score));
            }
            assert!((1..=10).contains(c.overall()));
            assert_eq!(c.factors().len(), 4);
        }
    }
}

#[test]
fn test_hidden_value_ordering() {
    for (code, profile) in profiles() {
        let scenario = PolicyScenario::for_country(code, &profile, PolicyFocus::Comprehensive);
        let impact = compute_economic_impact(&scenario, &profile).unwrap();
        for ci in [
            impact.hidden_value(),
            impact.gdp_percentage(),
            impact.workforce_equivalent(),
            impact.productivity_gain(),
        ] {
            assert!(ci.low() <= ci.mid() && ci.mid() <= ci.high(), "{} interval out of order", code);
        }
    }
}

#[test]
fn test_recommendations_for_every_profile() {
    for (code, profile) in profiles() {
        let scenario = PolicyScenario::for_country(code, &profile, PolicyFocus::Childcare);
        let impact = compute_economic_impact(&scenario, &profile).unwrap();
        let recs = build_recommendations(&scenario, &profile, &impact);

        let tiers: Vec<RecommendationTier> = recs.iter().map(|r| *r.tier()).collect();
        assert_eq!(tiers, RecommendationTier::ALL.to_vec());
        for pair in recs.windows(2) {
            assert!(pair[0].investment().mid() < pair[1].investment().mid());
            assert!(pair[0].gdp_impact().mid() > pair[1].gdp_impact().mid());
        }
        for rec in &recs {
            assert!((3.0..=10.0).contains(rec.political_feasibility()));
            assert_eq!(rec.implementation().len(), 3);
            assert_eq!(rec.competitive_advantage().len(), 2);
        }
    }
}

#[test]
fn test_stakeholder_influence_below_one() {
    let profile = CountryProfile::builder("Iceland", EconomicContext::Developed)
        .population(0.4)
        .gdp(30.0)
        .unpaid_hours(2.8)
        .female_labor(95.0)
        .build()
        .unwrap();
    let map = map_stakeholders(&profile, &PolicyFocus::Childcare);
    assert!((map.opponents()[1].influence() - 0.5).abs() < 1e-9);
}

#[test]
fn test_impact_json_export() -> Result<(), Box<dyn std::error::Error>> {
    let (code, profile) = profiles().remove(3);
    let scenario = PolicyScenario::for_country(code, &profile, PolicyFocus::Eldercare);
    let impact = compute_economic_impact(&scenario, &profile).unwrap();

    let json: Value = serde_json::from_str(&impact.to_json()?)?;
    assert!(json["hidden_value"]["mid"].is_number());
    assert_eq!(json["sensitivity"]["wage_assumption"]["base_case"], 25.0);
    assert_eq!(
        json["sensitivity"]["hours_reduction"]["key_assumptions"][1],
        "Quality preferences"
    );

    let markdown = impact.to_markdown();
    assert!(markdown.contains("| Metric | Low | Mid | High | Confidence |"));
    Ok(())
}

#[test]
fn test_deserialized_scenario_is_validated() {
    let (_, profile) = profiles().remove(0);
    let scenario: PolicyScenario = serde_json::from_str(
        r#"{
            "country": "US",
            "policy_focus": "childcare",
            "unpaid_hours": -3.0,
            "population": 331.0,
            "gdp": 0.0,
            "country_context": "developed"
        }"#,
    )
    .unwrap();

    match compute_economic_impact(&scenario, &profile) {
        Err(UnpaidWorkError::InvalidInput(msg)) => assert!(msg.contains("gdp"), "{}", msg),
        other => panic!("expected InvalidInput, got {:?}", other),
    }

    let mut fixed = scenario;
    fixed.gdp = 25400.0;
    let err = compute_economic_impact(&fixed, &profile).unwrap_err();
    assert!(err.to_string().contains("unpaid hours"));
}
