use thiserror::Error;

/// Failures of a forecast fetch. `Http` covers transport problems only; a
/// response that arrives but cannot be read as a forecast is `Decode` or
/// `InvalidResponse`.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("weather provider misconfigured: {0}")]
    Config(String),

    #[error("forecast request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("forecast body could not be decoded: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("forecast data unusable: {0}")]
    InvalidResponse(String),

    #[error("weather API error: status={status}, body={body}")]
    Api { status: u16, body: String },
}

impl ProviderError {
    /// True when the upstream answered but with data the adapter cannot use.
    pub fn is_data_shape(&self) -> bool {
        matches!(self, Self::Decode(_) | Self::InvalidResponse(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_shape_failures_are_distinct_from_upstream_status() {
        let decode = serde_json::from_str::<u8>("\"x\"").expect_err("not a number");
        assert!(ProviderError::Decode(decode).is_data_shape());
        assert!(ProviderError::InvalidResponse("missing day".to_string()).is_data_shape());
        assert!(
            !ProviderError::Api {
                status: 503,
                body: "busy".to_string()
            }
            .is_data_shape()
        );
        assert!(!ProviderError::Config("days".to_string()).is_data_shape());
    }
}
