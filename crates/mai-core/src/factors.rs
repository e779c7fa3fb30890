use crate::types::WeatherObservation;

/// Lower bound of the wind damping multiplier.
pub const MIN_WIND_FACTOR: f64 = 0.3;

/// Upper bound of the summed additive factor scores.
pub const MAX_RAW_SCORE: f64 = 3.0;

/// Activity peaks in the 25–30 °C band and eases off above it.
pub fn temperature_score(temp_c: f64) -> f64 {
    if temp_c.is_nan() || temp_c < 15.0 {
        0.0
    } else if temp_c < 20.0 {
        0.25
    } else if temp_c < 25.0 {
        0.5
    } else if temp_c <= 30.0 {
        1.0
    } else {
        0.8
    }
}

pub fn humidity_score(humidity_pct: f64) -> f64 {
    if humidity_pct.is_nan() || humidity_pct < 40.0 {
        0.0
    } else if humidity_pct <= 60.0 {
        0.5
    } else {
        1.0
    }
}

/// Rainfall stands in for available breeding habitat.
pub fn rainfall_score(rainfall_mm: f64) -> f64 {
    if rainfall_mm.is_nan() || rainfall_mm < 1.0 {
        0.0
    } else if rainfall_mm <= 5.0 {
        0.5
    } else {
        1.0
    }
}

/// Multiplicative damping in [0.3, 1]. Never zero.
pub fn wind_factor(wind_kmh: f64) -> f64 {
    if wind_kmh.is_nan() || wind_kmh < 15.0 {
        1.0
    } else if wind_kmh <= 25.0 {
        0.7
    } else {
        MIN_WIND_FACTOR
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FactorBreakdown {
    pub temperature: f64,
    pub humidity: f64,
    pub rainfall: f64,
    pub wind: f64,
}

impl FactorBreakdown {
    /// Sum of the additive factors before wind damping.
    pub fn additive(&self) -> f64 {
        self.temperature + self.humidity + self.rainfall
    }

    /// Additive sum in hundredths. Every bucket value is a whole number of hundredths.
    pub fn additive_hundredths(&self) -> u32 {
        to_fixed(self.temperature, 100)
            + to_fixed(self.humidity, 100)
            + to_fixed(self.rainfall, 100)
    }

    /// Wind factor in tenths.
    pub fn wind_tenths(&self) -> u32 {
        to_fixed(self.wind, 10)
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn to_fixed(score: f64, scale: u32) -> u32 {
    let scaled = (score * f64::from(scale)).round();
    if scaled.is_nan() || scaled < 0.0 {
        return 0;
    }
    scaled as u32
}

pub fn score_factors(obs: &WeatherObservation) -> FactorBreakdown {
    FactorBreakdown {
        temperature: temperature_score(obs.temperature_c),
        humidity: humidity_score(obs.humidity_pct),
        rainfall: rainfall_score(obs.rainfall_mm),
        wind: wind_factor(obs.wind_kmh),
    }
}
