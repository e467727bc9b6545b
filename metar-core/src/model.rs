use std::fmt;

use serde::{Deserialize, Deserializer};

/// Top-level response of the decoded METAR endpoint.
///
/// Records are kept undecoded so a malformed one can be reported by field
/// when it is parsed, instead of rejecting the whole response.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherEnvelope {
    #[serde(default)]
    pub results: Option<u32>,
    #[serde(default)]
    pub data: Vec<serde_json::Value>,
}

/// A numeric reading exactly as the provider wrote it.
///
/// Decoded reports mix integers, decimals and pre-formatted strings
/// (`"16,093"`), so the value is kept verbatim and printed back unchanged.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Reading {
    Number(serde_json::Number),
    Text(String),
}

impl fmt::Display for Reading {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Reading::Number(n) => write!(f, "{n}"),
            Reading::Text(s) => f.write_str(s),
        }
    }
}

impl Reading {
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Reading::Number(n) => n.as_f64(),
            Reading::Text(s) => s.trim().parse().ok(),
        }
    }

    /// Numeric comparison when both sides are numbers, so `2500` equals `2500.0`.
    pub fn same_value(&self, other: &Reading) -> bool {
        match (self.as_f64(), other.as_f64()) {
            (Some(a), Some(b)) => a == b,
            _ => self == other,
        }
    }
}

impl From<i64> for Reading {
    fn from(value: i64) -> Self {
        Reading::Number(value.into())
    }
}

impl From<f64> for Reading {
    fn from(value: f64) -> Self {
        serde_json::Number::from_f64(value)
            .map(Reading::Number)
            .unwrap_or_else(|| Reading::Text(value.to_string()))
    }
}

impl From<&str> for Reading {
    fn from(value: &str) -> Self {
        Reading::Text(value.to_string())
    }
}

/// One decoded METAR record for a single station and time.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Observation {
    #[serde(default)]
    pub icao: Option<String>,
    #[serde(default)]
    pub station: Option<Station>,
    #[serde(default)]
    pub elevation: Option<Elevation>,
    /// `YYYY-MM-DDTHH:MM:SS`, UTC.
    #[serde(default, rename = "observed")]
    pub observed_at: Option<String>,
    #[serde(default)]
    pub wind: Option<Wind>,
    #[serde(default)]
    pub visibility: Option<Visibility>,
    #[serde(default)]
    pub conditions: Option<Vec<Condition>>,
    /// Always non-empty when present, whatever shape the provider used.
    #[serde(default, deserialize_with = "one_or_many")]
    pub ceiling: Option<Vec<CloudLayer>>,
    #[serde(default)]
    pub clouds: Option<Vec<CloudLayer>>,
    #[serde(default)]
    pub temperature: Option<Temperature>,
    #[serde(default)]
    pub dewpoint: Option<Temperature>,
    #[serde(default)]
    pub windchill: Option<Temperature>,
    #[serde(default)]
    pub barometer: Option<Barometer>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub raw_text: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Station {
    #[serde(default, deserialize_with = "null_as_empty")]
    pub location: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub name: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Elevation {
    #[serde(default)]
    pub feet: Option<Reading>,
    #[serde(default)]
    pub meters: Option<Reading>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Wind {
    #[serde(default)]
    pub degrees: Option<Reading>,
    #[serde(default)]
    pub speed_kts: Option<Reading>,
    #[serde(default)]
    pub speed_mps: Option<Reading>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Visibility {
    #[serde(default)]
    pub miles: Option<Reading>,
    #[serde(default)]
    pub meters: Option<Reading>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Condition {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
}

/// A ceiling or cloud layer; both share the same shape.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CloudLayer {
    #[serde(default)]
    pub code: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub text: String,
    #[serde(default)]
    pub base_feet_agl: Option<Reading>,
    #[serde(default)]
    pub base_meters_agl: Option<Reading>,
    #[serde(default)]
    pub feet: Option<Reading>,
    #[serde(default)]
    pub meters: Option<Reading>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Temperature {
    #[serde(default)]
    pub celsius: Option<Reading>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Barometer {
    #[serde(default)]
    pub hg: Option<Reading>,
    #[serde(default)]
    pub hpa: Option<Reading>,
}

/// Treats an explicit `null` like a missing key.
fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    // Tried first: a derived struct also accepts the positional sequence form.
    Many(Vec<CloudLayer>),
    One(CloudLayer),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Option<Vec<CloudLayer>>, D::Error>
where
    D: Deserializer<'de>,
{
    let layers = match Option::<OneOrMany>::deserialize(deserializer)? {
        None => return Ok(None),
        Some(OneOrMany::One(layer)) => vec![layer],
        Some(OneOrMany::Many(layers)) => layers,
    };

    Ok(if layers.is_empty() { None } else { Some(layers) })
}
