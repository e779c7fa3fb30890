use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One calendar day of forecast weather.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub temperature_c: f64,
    pub humidity_pct: f64,
    pub rainfall_mm: f64,
    pub wind_kmh: f64,
}

impl WeatherObservation {
    pub fn new(temperature_c: f64, humidity_pct: f64, rainfall_mm: f64, wind_kmh: f64) -> Self {
        Self {
            temperature_c,
            humidity_pct,
            rainfall_mm,
            wind_kmh,
        }
    }

    pub fn is_finite(&self) -> bool {
        self.temperature_c.is_finite()
            && self.humidity_pct.is_finite()
            && self.rainfall_mm.is_finite()
            && self.wind_kmh.is_finite()
    }
}

/// Date-keyed observations in the order they were produced.
///
/// Keys are expected to be unique; the series neither sorts nor deduplicates.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WeatherSeries {
    days: Vec<(NaiveDate, WeatherObservation)>,
}

impl WeatherSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, date: NaiveDate, observation: WeatherObservation) {
        self.days.push((date, observation));
    }

    pub fn len(&self) -> usize {
        self.days.len()
    }

    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }

    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> + '_ {
        self.days.iter().map(|(date, _)| *date)
    }

    pub fn get(&self, date: NaiveDate) -> Option<&WeatherObservation> {
        self.days
            .iter()
            .find(|(d, _)| *d == date)
            .map(|(_, obs)| obs)
    }

    pub fn iter(&self) -> impl Iterator<Item = (NaiveDate, &WeatherObservation)> + '_ {
        self.days.iter().map(|(date, obs)| (*date, obs))
    }
}

impl FromIterator<(NaiveDate, WeatherObservation)> for WeatherSeries {
    fn from_iter<I: IntoIterator<Item = (NaiveDate, WeatherObservation)>>(iter: I) -> Self {
        Self {
            days: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// True when both axes are finite and inside WGS84 bounds.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 7, d).expect("valid date")
    }

    #[test]
    fn series_keeps_insertion_order() {
        let obs = WeatherObservation::new(20.0, 50.0, 0.0, 5.0);
        let series: WeatherSeries = [(day(20), obs), (day(18), obs), (day(19), obs)]
            .into_iter()
            .collect();
        let dates: Vec<_> = series.dates().collect();
        assert_eq!(dates, vec![day(20), day(18), day(19)]);
        assert_eq!(series.len(), 3);
        assert!(series.get(day(18)).is_some());
        assert!(series.get(day(21)).is_none());
    }

    #[test]
    fn coordinates_reject_out_of_range() {
        assert!(Coordinates::new(-33.87, 151.21).is_valid());
        assert!(Coordinates::new(90.0, -180.0).is_valid());
        assert!(!Coordinates::new(91.0, 0.0).is_valid());
        assert!(!Coordinates::new(0.0, 180.5).is_valid());
        assert!(!Coordinates::new(f64::NAN, 0.0).is_valid());
    }
}
