use thiserror::Error;

/// Failure while turning an observation into display sections.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Cannot render field '{field}': {reason}")]
pub struct RenderError {
    pub field: String,
    pub reason: String,
}

impl RenderError {
    pub fn new(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self { field: field.into(), reason: reason.into() }
    }
}

/// Everything that can go wrong between asking for a station and holding a report.
#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("Error: Not connected")]
    Fetch(#[source] reqwest::Error),

    #[error("Error: HTTP code {status}, Requested host reported an error: {body}")]
    ProviderHttp { status: u16, body: String },

    #[error("Failed to decode provider response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("server has not returned any data")]
    NoData,

    #[error(transparent)]
    Render(#[from] RenderError),
}

impl WeatherError {
    /// The action shown to the user when this error is reported.
    pub fn action(&self) -> &'static str {
        match self {
            WeatherError::Render(_) => "Weather rendering",
            _ => "Weather receiving",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn provider_http_message_carries_status_and_body() {
        let err = WeatherError::ProviderHttp { status: 401, body: "bad key".into() };
        assert_eq!(
            err.to_string(),
            "Error: HTTP code 401, Requested host reported an error: bad key"
        );
        assert_eq!(err.action(), "Weather receiving");
    }

    #[test]
    fn render_error_names_the_field() {
        let err = WeatherError::from(RenderError::new("observed", "bad timestamp"));
        assert!(err.to_string().contains("'observed'"));
        assert_eq!(err.action(), "Weather rendering");
    }
}
