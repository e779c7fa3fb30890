use std::fmt;

use serde::{Deserialize, Serialize};

use crate::factors::{score_factors, FactorBreakdown};
use crate::types::WeatherObservation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RiskLevel {
    Low,
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
    Severe,
}

impl RiskLevel {
    pub const ALL: [Self; 5] = [
        Self::Low,
        Self::Medium,
        Self::High,
        Self::VeryHigh,
        Self::Severe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
            Self::VeryHigh => "Very High",
            Self::Severe => "Severe",
        }
    }

    /// Behavioural guidance handed to the narrator alongside each day.
    pub fn advice(self) -> &'static str {
        match self {
            Self::Severe => {
                "Use repellents, avoid outdoor exposure in early morning and evening, and eliminate standing water."
            }
            Self::VeryHigh => {
                "Cover exposed skin outdoors, apply repellent and clear standing water around the home."
            }
            Self::High => "Limit evening exposure and ensure window screens are intact.",
            Self::Medium => "Stay alert and monitor conditions, especially after rain.",
            Self::Low => "Risk is minimal, but stay aware during dusk and dawn.",
        }
    }
}

impl fmt::Display for RiskLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maps a 0–100 score onto the five risk bands. Lower bounds are inclusive.
pub fn classify(normalized_score: u8) -> RiskLevel {
    match normalized_score {
        0..=19 => RiskLevel::Low,
        20..=39 => RiskLevel::Medium,
        40..=59 => RiskLevel::High,
        60..=79 => RiskLevel::VeryHigh,
        _ => RiskLevel::Severe,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RiskAssessment {
    pub raw_score: f64,
    pub normalized_score: u8,
    pub risk_level: RiskLevel,
}

/// `round(sum * wind / 3 * 100)` with halves rounded up. With the sum in
/// hundredths and wind in tenths this is `sum * wind / 30`, kept in integers.
fn normalize(factors: &FactorBreakdown) -> u8 {
    let product = factors.additive_hundredths() * factors.wind_tenths();
    let scaled = (product * 2 + 30) / 60;
    u8::try_from(scaled.min(100)).unwrap_or(100)
}

pub fn aggregate(obs: &WeatherObservation) -> RiskAssessment {
    let factors = score_factors(obs);
    let raw_score = factors.additive() * factors.wind;
    let normalized_score = normalize(&factors);

    RiskAssessment {
        raw_score,
        normalized_score,
        risk_level: classify(normalized_score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::factors::MAX_RAW_SCORE;

    #[test]
    fn classify_boundaries_are_exact() {
        let cases = [
            (0, RiskLevel::Low),
            (19, RiskLevel::Low),
            (20, RiskLevel::Medium),
            (39, RiskLevel::Medium),
            (40, RiskLevel::High),
            (59, RiskLevel::High),
            (60, RiskLevel::VeryHigh),
            (79, RiskLevel::VeryHigh),
            (80, RiskLevel::Severe),
            (100, RiskLevel::Severe),
        ];
        for (score, expected) in cases {
            assert_eq!(classify(score), expected, "score {score}");
        }
    }

    #[test]
    fn classify_is_monotonic() {
        let mut prev = classify(0);
        for score in 0..=100 {
            let level = classify(score);
            assert!(level >= prev);
            prev = level;
        }
    }

    #[test]
    fn ideal_conditions_are_severe() {
        let out = aggregate(&WeatherObservation::new(28.0, 70.0, 6.0, 10.0));
        assert_eq!(out.raw_score, 3.0);
        assert_eq!(out.normalized_score, 100);
        assert_eq!(out.risk_level, RiskLevel::Severe);
    }

    #[test]
    fn cold_dry_windy_day_is_low() {
        let out = aggregate(&WeatherObservation::new(10.0, 30.0, 0.0, 30.0));
        assert_eq!(out.raw_score, 0.0);
        assert_eq!(out.normalized_score, 0);
        assert_eq!(out.risk_level, RiskLevel::Low);
    }

    #[test]
    fn wind_damps_but_keeps_risk() {
        // (1 + 1 + 1) * 0.3 = 0.9 -> 30
        let out = aggregate(&WeatherObservation::new(27.0, 80.0, 12.0, 40.0));
        assert_eq!(out.normalized_score, 30);
        assert_eq!(out.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn score_rounds_to_nearest() {
        // (0.25 + 0.5 + 0) * 1.0 = 0.75 -> 25
        let out = aggregate(&WeatherObservation::new(16.0, 45.0, 0.0, 0.0));
        assert_eq!(out.normalized_score, 25);
        // (0.8 + 0.5 + 0.5) * 0.7 = 1.26 -> 42
        let out = aggregate(&WeatherObservation::new(33.0, 50.0, 2.0, 20.0));
        assert_eq!(out.normalized_score, 42);
        assert_eq!(out.risk_level, RiskLevel::High);
    }

    #[test]
    fn exact_halves_round_up() {
        // (0.25 + 0.5 + 0) * 0.7 = 0.525 -> 17.5 -> 18
        let out = aggregate(&WeatherObservation::new(16.0, 50.0, 0.0, 20.0));
        assert_eq!(out.normalized_score, 18);
        assert_eq!(out.risk_level, RiskLevel::Low);
        // (0.8 + 1 + 0.5) * 0.3 = 0.675 -> 22.5 -> 23
        let out = aggregate(&WeatherObservation::new(33.0, 70.0, 2.0, 30.0));
        assert_eq!(out.normalized_score, 23);
        assert_eq!(out.risk_level, RiskLevel::Medium);
    }

    #[test]
    fn every_bucket_combination_matches_exact_rounding() {
        // Temperature buckets in hundredths, then the representative reading.
        let temps = [(0, 10.0), (25, 16.0), (50, 22.0), (100, 27.0), (80, 33.0)];
        let hums = [(0, 30.0), (50, 50.0), (100, 80.0)];
        let rains = [(0, 0.0), (50, 3.0), (100, 8.0)];
        let winds = [(10, 5.0), (7, 20.0), (3, 40.0)];
        for (th, t) in temps {
            for (hh, h) in hums {
                for (rh, r) in rains {
                    for (wt, w) in winds {
                        // score = (th + hh + rh) * wt / 30; half-up on the exact ratio.
                        let numerator = (th + hh + rh) * wt;
                        let mut expected = numerator / 30;
                        if (numerator % 30) * 2 >= 30 {
                            expected += 1;
                        }
                        let out = aggregate(&WeatherObservation::new(t, h, r, w));
                        assert_eq!(
                            u32::from(out.normalized_score),
                            expected,
                            "t={t} h={h} r={r} w={w}"
                        );
                    }
                }
            }
        }
    }

    #[test]
    fn normalized_score_stays_in_range() {
        let temps = [-20.0, 14.0, 18.0, 22.0, 27.0, 35.0];
        let hums = [0.0, 50.0, 95.0];
        let rains = [0.0, 3.0, 50.0];
        let winds = [0.0, 20.0, 60.0];
        for t in temps {
            for h in hums {
                for r in rains {
                    for w in winds {
                        let out = aggregate(&WeatherObservation::new(t, h, r, w));
                        assert!(out.normalized_score <= 100);
                        assert!((0.0..=MAX_RAW_SCORE).contains(&out.raw_score));
                        assert_eq!(out.risk_level, classify(out.normalized_score));
                    }
                }
            }
        }
    }

    #[test]
    fn very_high_serializes_with_space() {
        assert_eq!(RiskLevel::VeryHigh.to_string(), "Very High");
        let json = serde_json::to_string(&RiskLevel::VeryHigh).unwrap_or_default();
        assert_eq!(json, "\"Very High\"");
    }

    #[test]
    fn every_level_has_advice() {
        for level in RiskLevel::ALL {
            assert!(!level.advice().is_empty());
        }
    }
}
