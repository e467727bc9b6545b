//! One formatter per report section.
//!
//! Every formatter reads the observation and returns at most one section.
//! Bodies are built from an ordered list of optional fragments that are
//! joined at the end, so a missing value simply drops its fragment.

use chrono::NaiveDateTime;

use crate::{
    error::RenderError,
    model::{CloudLayer, Observation, Reading, Temperature},
    report::RenderedSection,
};

/// Layout of the `observed` timestamp (naive, UTC).
pub const OBSERVED_FORMAT: &str = "%Y-%m-%dT%H:%M:%S";

/// Cloud layer text that replaces the whole Clouds section.
pub const CLEAR_SKIES: &str = "Clear skies";

fn join<I>(fragments: I, sep: &str) -> Option<String>
where
    I: IntoIterator<Item = Option<String>>,
{
    let parts: Vec<String> = fragments.into_iter().flatten().collect();
    if parts.is_empty() { None } else { Some(parts.join(sep)) }
}

fn unit(value: Option<&Reading>, suffix: &str) -> Option<String> {
    value.map(|v| format!("{v} {suffix}"))
}

fn bracketed(value: Option<&Reading>, suffix: &str) -> Option<String> {
    value.map(|v| format!("[{v} {suffix}]"))
}

pub fn location(obs: &Observation) -> Option<RenderedSection> {
    let station = obs.station.as_ref()?;

    let elevation = obs.elevation.as_ref().and_then(|e| {
        join(
            [unit(e.feet.as_ref(), "ft"), bracketed(e.meters.as_ref(), "m")],
            " ",
        )
    });

    let body = join(
        [
            Some(format!("Location: {}", station.location)),
            elevation.map(|e| format!("Elevation: {e}")),
        ],
        "\n",
    )?;

    Some(RenderedSection::new("Location", body))
}

/// `"1 h, 30 m, 0 s back"`; the hour segment is left out when zero.
pub fn age_text(seconds: i64) -> String {
    let hours = seconds / 3600;
    let minutes = (seconds % 3600) / 60;
    let seconds = seconds % 60;

    let hours = (hours != 0).then(|| format!("{hours} h"));
    join(
        [
            hours,
            Some(format!("{minutes} m")),
            Some(format!("{seconds} s back")),
        ],
        ", ",
    )
    .unwrap_or_default()
}

pub fn observed_age(obs: &Observation, now: NaiveDateTime) -> Result<RenderedSection, RenderError> {
    let raw = obs
        .observed_at
        .as_deref()
        .ok_or_else(|| RenderError::new("observed", "observation time is missing"))?;

    let observed = NaiveDateTime::parse_from_str(raw, OBSERVED_FORMAT).map_err(|e| {
        RenderError::new("observed", format!("'{raw}' does not match {OBSERVED_FORMAT}: {e}"))
    })?;

    // A report stamped slightly ahead of the local clock reads as fresh.
    let elapsed = (now - observed).num_seconds().max(0);

    Ok(RenderedSection::new(
        "Observed at",
        format!("{raw} [{}]", age_text(elapsed)),
    ))
}

pub fn wind(obs: &Observation) -> Option<RenderedSection> {
    let wind = obs.wind.as_ref()?;
    let degrees = wind.degrees.as_ref()?;
    let kts = wind.speed_kts.as_ref()?;
    let mps = wind.speed_mps.as_ref()?;

    Some(RenderedSection::new(
        "Wind",
        format!("{degrees}° at {kts} kts [{mps} m/s]"),
    ))
}

pub fn visibility(obs: &Observation) -> Option<RenderedSection> {
    let vis = obs.visibility.as_ref()?;
    let body = join(
        [unit(vis.miles.as_ref(), "miles"), bracketed(vis.meters.as_ref(), "m")],
        " ",
    )?;

    Some(RenderedSection::new("Visibility", body))
}

pub fn conditions(obs: &Observation) -> Option<RenderedSection> {
    let conditions = obs.conditions.as_ref().filter(|c| !c.is_empty())?;
    let body: String = conditions.iter().map(|c| c.text.as_str()).collect();

    Some(RenderedSection::new("Conditions", body))
}

/// Altitude part of a layer: a range when base and top differ, a point otherwise.
fn altitude(layer: &CloudLayer) -> Option<String> {
    match (layer.base_feet_agl.as_ref(), layer.feet.as_ref()) {
        (Some(base), Some(top)) if !base.same_value(top) => {
            let top_meters = layer
                .meters
                .as_ref()
                .filter(|m| !layer.base_meters_agl.as_ref().is_some_and(|b| b.same_value(m)));

            join(
                [
                    Some(format!("from {base} ft")),
                    bracketed(layer.base_meters_agl.as_ref(), "m"),
                    Some(format!("to {top} ft")),
                    bracketed(top_meters, "m"),
                ],
                " ",
            )
        }
        (Some(base), _) => join(
            [
                Some(format!("at {base} ft")),
                bracketed(layer.base_meters_agl.as_ref(), "m"),
            ],
            " ",
        ),
        (None, Some(top)) => join(
            [Some(format!("at {top} ft")), bracketed(layer.meters.as_ref(), "m")],
            " ",
        ),
        (None, None) => None,
    }
}

/// `"<text> <altitude>"` for a single ceiling or cloud layer.
pub fn layer_text(layer: &CloudLayer) -> String {
    let label = (!layer.text.is_empty()).then(|| layer.text.clone());
    join([label, altitude(layer)], " ").unwrap_or_default()
}

fn layers_text(layers: &[CloudLayer]) -> String {
    layers.iter().map(layer_text).collect::<Vec<_>>().join("\n")
}

pub fn ceiling(obs: &Observation) -> Option<RenderedSection> {
    let layers = obs.ceiling.as_ref().filter(|l| !l.is_empty())?;
    Some(RenderedSection::new("Ceiling", layers_text(layers)))
}

pub fn clouds(obs: &Observation) -> Option<RenderedSection> {
    let layers = obs.clouds.as_ref().filter(|l| !l.is_empty())?;

    let body = if layers.iter().any(|l| l.text == CLEAR_SKIES) {
        CLEAR_SKIES.to_string()
    } else {
        layers_text(layers)
    };

    Some(RenderedSection::new("Clouds", body))
}

/// Always produces a section, even when nothing is known.
pub fn temperature(obs: &Observation) -> RenderedSection {
    let celsius = |t: &Option<Temperature>| {
        t.as_ref().and_then(|t| t.celsius.clone())
    };

    let headline = match celsius(&obs.temperature) {
        Some(c) => format!("Temperature {c}℃"),
        None => "Temperature unknown".to_string(),
    };
    let dewpoint = celsius(&obs.dewpoint).map(|c| format!(", dewpoint {c}℃"));
    let windchill = celsius(&obs.windchill).map(|c| format!("\nWindchill {c}℃"));

    let body = join([Some(headline), dewpoint, windchill], "").unwrap_or_default();
    RenderedSection::new("Temperature", body)
}

pub fn barometer(obs: &Observation) -> Option<RenderedSection> {
    let baro = obs.barometer.as_ref()?;
    let body = join(
        [unit(baro.hg.as_ref(), "inHg"), bracketed(baro.hpa.as_ref(), "hPa")],
        " ",
    )?;

    Some(RenderedSection::new("Barometer", body))
}
