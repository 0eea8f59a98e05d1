use polars::prelude::*;
use unpaid_work::frame::records_from_frame;
use unpaid_work::{compute_all, compute_global_stats, top_countries, RankingMetric, UnpaidWorkError};

fn load(path: &str) -> Result<DataFrame, PolarsError> {
    LazyCsvReader::new(path).with_has_header(true).finish()?.collect()
}

#[test]
fn test_csv_to_global_stats() -> Result<(), Box<dyn std::error::Error>> {
    let df = load("tests/data/countries.csv")?;
    let records = records_from_frame(&df)?;
    assert_eq!(records.len(), 8);

    let stats = compute_global_stats(&records)?;
    assert_eq!(*stats.total_countries(), 8);
    let mean_female = (4.0 + 4.2 + 5.6 + 4.0 + 5.0 + 3.7 + 3.4 + 4.4) / 8.0;
    assert!((stats.average_female_hours() - mean_female).abs() < 1e-9);
    assert!(*stats.total_economic_value() > 0.0);
    Ok(())
}

#[test]
fn test_csv_ranking() -> Result<(), Box<dyn std::error::Error>> {
    let df = load("tests/data/countries.csv")?;
    let economics = compute_all(&records_from_frame(&df)?)?;

    let by_gap = top_countries(&economics, RankingMetric::GapRatio, 3);
    let codes: Vec<&str> = by_gap.iter().map(|r| r.code().as_str()).collect();
    assert_eq!(codes, vec!["IN", "JP", "CN"]);

    let by_hours = top_countries(&economics, RankingMetric::FemaleHours, 1);
    assert_eq!(by_hours[0].code(), "JP");
    Ok(())
}

#[test]
fn test_missing_gdp_column() -> Result<(), Box<dyn std::error::Error>> {
    let df = load("tests/data/missing_gdp.csv")?;
    match records_from_frame(&df) {
        Err(UnpaidWorkError::ColumnNotFound(name)) => assert_eq!(name, "gdp"),
        other => panic!("expected ColumnNotFound, got {:?}", other),
    }
    Ok(())
}
