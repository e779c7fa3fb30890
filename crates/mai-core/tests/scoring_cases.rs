use std::fs;
use std::path::PathBuf;

use chrono::{Duration, NaiveDate};
use mai_core::{aggregate, build_index, RiskLevel, WeatherObservation, WeatherSeries};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Case {
    name: String,
    observation: WeatherObservation,
    expected_normalized_score: u8,
    expected_level: RiskLevel,
}

fn load_cases() -> Vec<Case> {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let fixture = root
        .join("..")
        .join("..")
        .join("data")
        .join("fixtures")
        .join("scoring_cases.json");

    let content = fs::read_to_string(&fixture)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {e}", fixture.display()));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("failed to parse fixture {}: {e}", fixture.display()))
}

#[test]
fn fixture_cases_score_as_expected() {
    let cases = load_cases();
    assert!(!cases.is_empty());

    for case in cases {
        let out = aggregate(&case.observation);
        assert_eq!(
            out.normalized_score, case.expected_normalized_score,
            "case {} normalized score",
            case.name
        );
        assert_eq!(
            out.risk_level, case.expected_level,
            "case {} risk level",
            case.name
        );
    }
}

#[test]
fn fixture_week_builds_matching_index() {
    let cases = load_cases();
    let start = NaiveDate::from_ymd_opt(2025, 7, 18).expect("start date");

    let series: WeatherSeries = cases
        .iter()
        .enumerate()
        .map(|(i, c)| {
            let offset = i64::try_from(i).expect("small offset");
            (start + Duration::days(offset), c.observation)
        })
        .collect();

    let index = build_index(&series).expect("non-empty series");
    assert_eq!(index.len(), cases.len());

    for (day, case) in index.iter().zip(&cases) {
        assert_eq!(day.level(), case.expected_level, "case {}", case.name);
    }
    assert_eq!(
        index.dates().collect::<Vec<_>>(),
        series.dates().collect::<Vec<_>>()
    );
}
