use serde::Deserialize;
use serde_json::{Map, Value};

use crate::{
    error::{RenderError, WeatherError},
    model::{Observation, WeatherEnvelope},
};

/// Take the observation out of a provider envelope.
///
/// Missing fields are left to the formatters. A field of the wrong shape
/// fails as a `RenderError` naming that field.
pub fn parse(envelope: WeatherEnvelope) -> Result<Observation, WeatherError> {
    let record = envelope.data.into_iter().next().ok_or(WeatherError::NoData)?;

    decode_observation(&record).map_err(|e| {
        tracing::error!(field = %e.field, reason = %e.reason, "Malformed observation");
        WeatherError::Render(e)
    })
}

/// Decode a raw response body and take its observation.
pub fn parse_json(body: &str) -> Result<Observation, WeatherError> {
    let envelope: WeatherEnvelope = serde_json::from_str(body)?;
    parse(envelope)
}

fn decode_observation(record: &Value) -> Result<Observation, RenderError> {
    Observation::deserialize(record)
        .map_err(|err| RenderError::new(failing_field(record), err.to_string()))
}

/// First top-level key whose value does not decode on its own.
fn failing_field(record: &Value) -> String {
    let Value::Object(fields) = record else {
        return "observation".to_string();
    };

    fields
        .iter()
        .find(|(key, value)| {
            let single: Map<String, Value> =
                [((*key).clone(), (*value).clone())].into_iter().collect();
            Observation::deserialize(&Value::Object(single)).is_err()
        })
        .map(|(key, _)| key.clone())
        .unwrap_or_else(|| "observation".to_string())
}
