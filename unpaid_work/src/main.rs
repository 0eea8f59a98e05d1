use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use comfy_table::{Cell, Table};
use polars::prelude::*;
use serde::Serialize;
use std::path::PathBuf;
use unpaid_work::format::{format_currency, format_hours, format_percentage};
use unpaid_work::frame::records_from_frame;
use unpaid_work::{
    advisory_prompt, build_recommendations, compute_all, compute_economic_impact, compute_global_stats,
    map_stakeholders, score_complexity, top_countries, CountryProfile, EconomicContext, EconomicImpact,
    GlobalStats, ImplementationComplexity, PolicyFocus, PolicyRecommendation, PolicyScenario, RankedCountry,
    RankingMetric, StakeholderAnalysis,
};

#[derive(Parser, Debug)]
#[command(author, version, about = "Valuation of unpaid domestic labor and policy impact projections", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compute global statistics and a country ranking from a CSV of country records
    Stats(StatsArgs),
    /// Project the impact of a policy scenario for one country
    Simulate(SimulateArgs),
}

#[derive(Parser, Debug)]
struct StatsArgs {
    /// Path to the input CSV data file
    #[arg(short, long)]
    data: PathBuf,

    /// Metric used to rank countries [choices: gap, gdp, hours, value]
    #[arg(long, default_value = "gap")]
    rank_by: String,

    /// Number of countries to show in the ranking
    #[arg(long, default_value_t = 10)]
    top: usize,

    /// Path to export statistics and ranking as JSON
    #[arg(long)]
    output_json: Option<PathBuf>,
}

#[derive(Parser, Debug)]
struct SimulateArgs {
    /// Country name
    #[arg(long)]
    country: String,

    /// Country code used to label the scenario (defaults to the country name)
    #[arg(long)]
    code: Option<String>,

    /// Economic context [choices: developed, emerging, frontier]
    #[arg(long)]
    context: String,

    /// Population in millions
    #[arg(long)]
    population: f64,

    /// GDP in billions
    #[arg(long)]
    gdp: f64,

    /// Daily unpaid work hours
    #[arg(long)]
    unpaid_hours: f64,

    /// Female labor force participation in percent
    #[arg(long)]
    female_labor: f64,

    /// Political stability on a 0-10 scale
    #[arg(long, default_value_t = 5.0)]
    political_stability: f64,

    /// Institutional capacity on a 0-10 scale
    #[arg(long, default_value_t = 5.0)]
    institutional_capacity: f64,

    /// Fiscal space in percent of GDP
    #[arg(long, default_value_t = 10.0)]
    fiscal_space: f64,

    /// Policy focus, e.g. childcare, eldercare or comprehensive
    #[arg(long, default_value = "comprehensive")]
    policy_focus: String,

    /// Path to export the full simulation as JSON
    #[arg(long)]
    output_json: Option<PathBuf>,

    /// Path to export the impact projection as Markdown
    #[arg(long)]
    output_markdown: Option<PathBuf>,

    /// Print the advisory prompt for the scenario
    #[arg(long)]
    prompt: bool,
}

#[derive(Serialize)]
struct StatsExport<'a> {
    stats: &'a GlobalStats,
    ranking: &'a [RankedCountry],
}

#[derive(Serialize)]
struct SimulationExport<'a> {
    scenario: &'a PolicyScenario,
    impact: &'a EconomicImpact,
    complexity: &'a ImplementationComplexity,
    stakeholders: &'a StakeholderAnalysis,
    recommendations: &'a [PolicyRecommendation],
}

fn run_stats(args: StatsArgs) -> Result<()> {
    let metric: RankingMetric = args.rank_by.parse()?;
    let df = LazyCsvReader::new(&args.data)
        .with_has_header(true)
        .finish()?
        .collect()
        .with_context(|| format!("failed to read {}", args.data.display()))?;

    let records = records_from_frame(&df)?;
    tracing::info!(countries = records.len(), "loaded country records");

    let stats = compute_global_stats(&records)?;
    stats.summary();

    let economics = compute_all(&records)?;
    let ranking = top_countries(&economics, metric, args.top);
    let mut table = Table::new();
    table.set_header(vec!["Rank", "Code", "Country", metric.label()]);
    for entry in &ranking {
        let value = match metric {
            RankingMetric::GapRatio => format!("{:.2}", entry.value()),
            RankingMetric::GdpPercentage => format_percentage(*entry.value()),
            RankingMetric::FemaleHours => format_hours(*entry.value()),
            RankingMetric::EconomicValue => format_currency(*entry.value()),
        };
        table.add_row(vec![
            Cell::new(entry.rank()),
            Cell::new(entry.code()),
            Cell::new(entry.name()),
            Cell::new(value),
        ]);
    }
    println!("\nTop {} by {}", ranking.len(), metric);
    println!("{}", table);

    if let Some(path) = args.output_json {
        let export = StatsExport {
            stats: &stats,
            ranking: &ranking,
        };
        let json = serde_json::to_string_pretty(&export).context("failed to serialize to JSON")?;
        std::fs::write(path, json)?;
    }
    Ok(())
}

fn run_simulate(args: SimulateArgs) -> Result<()> {
    let context: EconomicContext = args.context.parse()?;
    let focus: PolicyFocus = args.policy_focus.parse()?;
    let profile = CountryProfile::builder(&args.country, context)
        .population(args.population)
        .gdp(args.gdp)
        .unpaid_hours(args.unpaid_hours)
        .female_labor(args.female_labor)
        .political_stability(args.political_stability)
        .institutional_capacity(args.institutional_capacity)
        .fiscal_space(args.fiscal_space)
        .priority(focus.clone())
        .build()?;
    let code = args.code.as_deref().unwrap_or(&args.country);
    let scenario = PolicyScenario::for_country(code, &profile, focus);

    let impact = compute_economic_impact(&scenario, &profile)?;
    let complexity = score_complexity(&profile, &scenario.policy_focus, *impact.hidden_value().mid());
    let stakeholders = map_stakeholders(&profile, &scenario.policy_focus);
    let recommendations = build_recommendations(&scenario, &profile, &impact);

    impact.summary();
    println!();
    complexity.summary();
    println!();
    stakeholders.summary();
    for recommendation in &recommendations {
        println!();
        recommendation.summary();
    }

    if args.prompt {
        println!("\n{}", advisory_prompt(&scenario, &profile, &impact));
    }
    if let Some(path) = args.output_json {
        let export = SimulationExport {
            scenario: &scenario,
            impact: &impact,
            complexity: &complexity,
            stakeholders: &stakeholders,
            recommendations: &recommendations,
        };
        let json = serde_json::to_string_pretty(&export).context("failed to serialize to JSON")?;
        std::fs::write(path, json)?;
    }
    if let Some(path) = args.output_markdown {
        std::fs::write(path, impact.to_markdown())?;
    }
    Ok(())
}

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()),
        )
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Stats(args) => run_stats(args),
        Commands::Simulate(args) => run_simulate(args),
    };
    if let Err(e) = result {
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}
