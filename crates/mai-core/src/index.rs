use chrono::NaiveDate;
use serde::Serialize;
use thiserror::Error;

use crate::assessment::{aggregate, RiskAssessment, RiskLevel};
use crate::types::WeatherSeries;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("weather series is empty; nothing to forecast")]
pub struct EmptySeriesError;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct DailyRisk {
    pub date: NaiveDate,
    #[serde(flatten)]
    pub assessment: RiskAssessment,
}

impl DailyRisk {
    pub fn level(&self) -> RiskLevel {
        self.assessment.risk_level
    }
}

/// Per-day risk levels, keyed and ordered exactly like the source series.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct DailyRiskIndex {
    days: Vec<DailyRisk>,
}

impl DailyRiskIndex {
    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|d| d.date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<RiskLevel> {
        self.days.iter().find(|d| d.date == date).map(DailyRisk::level)
    }

    pub fn iter(&self) -> impl Iterator<Item = &DailyRisk> + '_ {
        self.days.iter()
    }

    /// Highest level across the window.
    pub fn peak(&self) -> Option<RiskLevel> {
        self.days.iter().map(DailyRisk::level).max()
    }
}

pub fn build_index(series: &WeatherSeries) -> Result<DailyRiskIndex, EmptySeriesError> {
    if series.is_empty() {
        return Err(EmptySeriesError);
    }

    let days = series
        .iter()
        .map(|(date, obs)| DailyRisk {
            date,
            assessment: aggregate(obs),
        })
        .collect();

    Ok(DailyRiskIndex { days })
}
