use std::fmt::{self, Debug};

use async_trait::async_trait;

use crate::{
    error::WeatherError,
    model::WeatherEnvelope,
    parser,
    report::{self, RenderedReport},
};

pub mod checkwx;

pub use checkwx::CheckWxProvider;

/// Four-character ICAO airport code, upper-cased.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Icao(String);

impl Icao {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Icao {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<&str> for Icao {
    type Error = anyhow::Error;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        let code = value.trim();

        if code.len() != 4 || !code.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(anyhow::anyhow!(
                "Invalid ICAO code '{value}'. Expected 4 letters or digits, e.g. EGLL."
            ));
        }

        Ok(Icao(code.to_ascii_uppercase()))
    }
}

impl std::str::FromStr for Icao {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Icao::try_from(s)
    }
}

#[async_trait]
pub trait MetarProvider: Send + Sync + Debug {
    /// Fetch the decoded METAR envelope for a station.
    async fn decoded(&self, icao: &Icao) -> Result<WeatherEnvelope, WeatherError>;
}

/// Fetch, extract and render the current report for `icao`.
pub async fn fetch_report(
    provider: &dyn MetarProvider,
    icao: &Icao,
) -> Result<RenderedReport, WeatherError> {
    let envelope = provider.decoded(icao).await?;
    let observation = parser::parse(envelope)?;
    Ok(report::assemble(&observation)?)
}
