use comfy_table::{Cell, Table};
use getset::Getters;
use serde::{Deserialize, Serialize};

use crate::record::{CountryProfile, EconomicContext, PolicyFocus};

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Champion {
    name: String,
    influence: f64,
    support: f64,
    role: String,
}

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct Opponent {
    name: String,
    influence: f64,
    opposition: f64,
    concerns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct NeutralParty {
    name: String,
    influence: f64,
    persuadability: f64,
    key_interests: Vec<String>,
}

/// Champions, opponents and neutral parties for a program.
#[derive(Debug, Clone, PartialEq, Getters, Serialize, Deserialize)]
#[getset(get = "pub")]
pub struct StakeholderAnalysis {
    champions: Vec<Champion>,
    opponents: Vec<Opponent>,
    neutral: Vec<NeutralParty>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// Builds the stakeholder map for a `focus` program in `country`.
///
/// Produces four champions, three opponents and three neutral parties. Scores
/// follow from the country's context and female labor participation and are
/// not clamped; the family advocacy influence falls below 1 once
/// participation exceeds 90%.
pub fn map_stakeholders(country: &CountryProfile, focus: &PolicyFocus) -> StakeholderAnalysis {
    let name = country.name();
    let context = *country.context();
    let female_labor = *country.female_labor();
    let ministry = context.ministry_influence();

    let champions = vec![
        Champion {
            name: format!("{} Ministry of Women & Social Development", name),
            influence: ministry,
            support: 9.0,
            role: format!("Primary {} policy owner and implementation lead", focus),
        },
        Champion {
            name: format!("{} Economic Planning Commission", name),
            influence: ministry + 1.0,
            support: 7.0,
            role: format!("Budget allocation and {} economic impact validation", focus),
        },
        Champion {
            name: "International Development Partners (World Bank, UN Women)".to_string(),
            influence: if context == EconomicContext::Frontier { 8.0 } else { 5.0 },
            support: 9.0,
            role: format!("Technical assistance and co-financing for {} programs", focus),
        },
        Champion {
            name: "Women's Rights Organizations".to_string(),
            influence: if female_labor > 50.0 { 6.0 } else { 4.0 },
            support: 10.0,
            role: format!("Advocacy and grassroots mobilization for {} reform in {}", focus, name),
        },
    ];

    let opponents = vec![
        Opponent {
            name: "Fiscal Conservative Coalition".to_string(),
            influence: if context == EconomicContext::Developed { 7.0 } else { 4.0 },
            opposition: 6.0,
            concerns: strings(&["Budget deficit concerns", "Government overreach", "Private sector displacement"]),
        },
        Opponent {
            name: "Traditional Family Advocacy Groups".to_string(),
            influence: (100.0 - female_labor) / 10.0,
            opposition: 8.0,
            concerns: strings(&["Cultural values", "Family structure changes", "Government interference"]),
        },
        Opponent {
            name: "Existing Service Providers".to_string(),
            influence: 5.0,
            opposition: 7.0,
            concerns: strings(&["Market disruption", "Competition from subsidized services", "Regulatory burden"]),
        },
    ];

    let neutral = vec![
        NeutralParty {
            name: format!("{} Business Federation", name),
            influence: 8.0,
            persuadability: 7.0,
            key_interests: strings(&["Workforce productivity", "Tax implications", "Regulatory clarity"]),
        },
        NeutralParty {
            name: format!("{} Labor Unions", name),
            influence: if context == EconomicContext::Developed { 6.0 } else { 3.0 },
            persuadability: 8.0,
            key_interests: strings(&["Job creation", "Worker rights", "Wage impacts"]),
        },
        NeutralParty {
            name: "Regional Governments".to_string(),
            influence: 6.0,
            persuadability: 6.0,
            key_interests: strings(&["Implementation burden", "Local economic impact", "Political credit"]),
        },
    ];

    StakeholderAnalysis {
        champions,
        opponents,
        neutral,
    }
}

impl StakeholderAnalysis {
    pub fn summary(&self) {
        let mut table = Table::new();
        table.set_header(vec!["Stance", "Stakeholder", "Influence", "Score", "Notes"]);
        for c in &self.champions {
            table.add_row(vec![
                Cell::new("Champion"),
                Cell::new(&c.name),
                Cell::new(format!("{:.1}", c.influence)),
                Cell::new(format!("support {:.0}", c.support)),
                Cell::new(&c.role),
            ]);
        }
        for o in &self.opponents {
            table.add_row(vec![
                Cell::new("Opponent"),
                Cell::new(&o.name),
                Cell::new(format!("{:.1}", o.influence)),
                Cell::new(format!("opposition {:.0}", o.opposition)),
                Cell::new(o.concerns.join(", ")),
            ]);
        }
        for n in &self.neutral {
            table.add_row(vec![
                Cell::new("Neutral"),
                Cell::new(&n.name),
                Cell::new(format!("{:.1}", n.influence)),
                Cell::new(format!("persuadability {:.0}", n.persuadability)),
                Cell::new(n.key_interests.join(", ")),
            ]);
        }
        println!("Stakeholder Map");
        println!("{}", table);
    }
}
