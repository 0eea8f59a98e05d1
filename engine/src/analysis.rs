use crate::types::*;
use polars::prelude::*;
use std::io::Cursor;
use unpaid_work::frame::records_from_frame;
use unpaid_work::{
    advisory_prompt, assemble_record, build_recommendations, compute_all, compute_economic_impact,
    compute_global_stats, map_stakeholders, score_complexity, top_countries, CountryProfile, CountryRecord,
    EconomicContext, EconomicIndicators, PolicyFocus, PolicyScenario, RankingMetric, SurveyEntry,
};

fn record_from_row(row: &CountryRow) -> Result<CountryRecord, String> {
    let year = row.year.unwrap_or_default();
    match row.average_wage {
        Some(wage) => CountryRecord::builder(&row.code, &row.name)
            .unpaid_hours(row.female_unpaid_hours, row.male_unpaid_hours)
            .population(row.population, row.population as f64 * row.female_population_percent / 100.0)
            .gdp(row.gdp)
            .average_wage(wage)
            .year(year)
            .build()
            .map_err(|e| e.to_string()),
        None => {
            let survey = SurveyEntry {
                country_code: row.code.clone(),
                country_name: row.name.clone(),
                female_unpaid_hours: row.female_unpaid_hours,
                male_unpaid_hours: row.male_unpaid_hours,
                survey_year: year,
                source: String::new(),
            };
            let indicators = EconomicIndicators {
                gdp: row.gdp,
                population: row.population,
                female_population_percent: row.female_population_percent,
                year,
            };
            assemble_record(&survey, &indicators).map_err(|e| e.to_string())
        }
    }
}

fn load_records(req: &GlobalStatsRequest) -> Result<Vec<CountryRecord>, String> {
    if let Some(rows) = &req.rows {
        return rows.iter().map(record_from_row).collect();
    }
    let csv_data = req
        .csv_data
        .as_ref()
        .ok_or_else(|| "Request must contain either rows or csv_data.".to_string())?;
    let cursor = Cursor::new(csv_data);
    let df = CsvReader::new(cursor).finish().map_err(|e| e.to_string())?;
    records_from_frame(&df).map_err(|e| e.to_string())
}

pub fn global_stats_inner(req: GlobalStatsRequest) -> Result<GlobalStatsResponse, String> {
    let metric: RankingMetric = req
        .rank_by
        .as_deref()
        .unwrap_or("gap")
        .parse()
        .map_err(|e: unpaid_work::UnpaidWorkError| e.to_string())?;

    let records = load_records(&req)?;
    let stats = compute_global_stats(&records).map_err(|e| e.to_string())?;
    let economics = compute_all(&records).map_err(|e| e.to_string())?;
    let ranking = top_countries(&economics, metric, req.top.unwrap_or(10));

    tracing::debug!(countries = records.len(), %metric, "computed global statistics");

    Ok(GlobalStatsResponse {
        total_countries: *stats.total_countries(),
        average_female_hours: *stats.average_female_hours(),
        average_male_hours: *stats.average_male_hours(),
        total_economic_value: *stats.total_economic_value(),
        average_gdp_percentage: *stats.average_gdp_percentage(),
        rank_by: metric.to_string(),
        ranking: ranking
            .into_iter()
            .map(|r| RankingEntry {
                rank: *r.rank(),
                code: r.code().clone(),
                name: r.name().clone(),
                value: *r.value(),
            })
            .collect(),
        countries: economics
            .iter()
            .map(|e| CountryMetrics {
                code: e.record().code().clone(),
                name: e.record().name().clone(),
                annual_unpaid_hours: *e.annual_unpaid_hours(),
                economic_value: *e.economic_value(),
                gdp_percentage: *e.gdp_percentage(),
                gender_gap_hours: *e.gender_gap_hours(),
                gender_gap_ratio: *e.gender_gap_ratio(),
            })
            .collect(),
    })
}

pub fn simulate_inner(req: ScenarioRequest) -> Result<SimulationResponse, String> {
    let context: EconomicContext = req.context.parse().map_err(|e: unpaid_work::UnpaidWorkError| e.to_string())?;
    let focus = PolicyFocus::from(req.policy_focus.clone().unwrap_or_else(|| "comprehensive".to_string()));

    let profile = CountryProfile::builder(&req.country, context)
        .population(req.population)
        .gdp(req.gdp)
        .unpaid_hours(req.unpaid_hours)
        .female_labor(req.female_labor)
        .political_stability(req.political_stability.unwrap_or(5.0))
        .institutional_capacity(req.institutional_capacity.unwrap_or(5.0))
        .fiscal_space(req.fiscal_space.unwrap_or(10.0))
        .priority(focus.clone())
        .build()
        .map_err(|e| e.to_string())?;

    let code = req.code.as_deref().unwrap_or(&req.country);
    let scenario = PolicyScenario::for_country(code, &profile, focus);

    let impact = compute_economic_impact(&scenario, &profile).map_err(|e| e.to_string())?;
    let complexity = score_complexity(&profile, &scenario.policy_focus, *impact.hidden_value().mid());
    let stakeholders = map_stakeholders(&profile, &scenario.policy_focus);
    let recommendations = build_recommendations(&scenario, &profile, &impact);
    let prompt = advisory_prompt(&scenario, &profile, &impact);

    Ok(SimulationResponse {
        scenario,
        impact,
        complexity,
        stakeholders,
        recommendations,
        prompt,
    })
}
