//! Assembles the formatted sections into a complete report.

use chrono::{NaiveDateTime, Utc};
use crate::{error::RenderError, format, model::Observation, remarks};

/// One named block of a rendered report.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedSection {
    pub title: String,
    pub body: String,
    pub inline: bool,
}

impl RenderedSection {
    pub fn new(title: impl Into<String>, body: impl Into<String>) -> Self {
        Self { title: title.into(), body: body.into(), inline: false }
    }
}

/// Ordered sections ready to hand to a transport.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedReport {
    pub title: String,
    pub sections: Vec<RenderedSection>,
    pub footer: Option<String>,
}

impl RenderedReport {
    pub fn section(&self, title: &str) -> Option<&RenderedSection> {
        self.sections.iter().find(|s| s.title == title)
    }

    pub fn titles(&self) -> Vec<&str> {
        self.sections.iter().map(|s| s.title.as_str()).collect()
    }
}

pub fn report_title(obs: &Observation) -> String {
    match (&obs.station, &obs.icao) {
        (Some(station), _) if !station.name.is_empty() => {
            format!("Current weather at {}", station.name)
        }
        (_, Some(icao)) => format!("Current weather at {icao}"),
        _ => "Current weather".to_string(),
    }
}

/// Render against the current UTC time.
pub fn assemble(obs: &Observation) -> Result<RenderedReport, RenderError> {
    assemble_at(obs, Utc::now().naive_utc())
}

/// Render with `now` as the reference for the observation age.
pub fn assemble_at(obs: &Observation, now: NaiveDateTime) -> Result<RenderedReport, RenderError> {
    let observed = format::observed_age(obs, now).inspect_err(|e| {
        tracing::error!(field = %e.field, reason = %e.reason, "Failed to render observation");
    })?;

    let candidates = [
        ("Location", format::location(obs)),
        ("Observed at", Some(observed)),
        ("Wind", format::wind(obs)),
        ("Visibility", format::visibility(obs)),
        ("Conditions", format::conditions(obs)),
        ("Ceiling", format::ceiling(obs)),
        ("Clouds", format::clouds(obs)),
        ("Temperature", Some(format::temperature(obs))),
        ("Barometer", format::barometer(obs)),
    ];

    let mut sections = Vec::with_capacity(candidates.len() + 1);
    for (name, section) in candidates {
        match section {
            Some(section) => sections.push(section),
            None => tracing::debug!("No {} were received", name.to_lowercase()),
        }
    }

    let remarks = remarks::interpret(&obs.raw_text);
    if let Some(info) = remarks.report_info {
        sections.push(RenderedSection::new("Report info", info));
    }

    Ok(RenderedReport {
        title: report_title(obs),
        sections,
        footer: remarks.footer.map(str::to_string),
    })
}
