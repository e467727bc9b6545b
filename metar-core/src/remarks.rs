//! Annotations derived from codes in the raw METAR text.

/// Trend indicators, highest priority first. At most one applies.
pub const TREND_RULES: &[(&str, &str)] = &[
    (
        "NOSIG",
        "No significant change is expected to reported conditions within the next 2 hours",
    ),
    (
        "BECMG",
        "Significant stable change is expected to reported conditions within the next 2 hours",
    ),
    (
        "TEMPO",
        "Temporary fluctuations are expected to reported conditions within the next 2 hours",
    ),
];

/// Station type markers. Each one that matches contributes its phrase.
pub const STATION_RULES: &[(&str, &str)] = &[
    ("AUTO", "Fully Automated Report"),
    ("AO1", "Automated station without precipitation discriminator"),
    ("AO2", "Automated station with precipitation discriminator"),
];

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Remarks {
    pub footer: Option<&'static str>,
    pub report_info: Option<String>,
}

/// First trend rule (in priority order, not text order) found in `raw_text`.
pub fn trend(raw_text: &str) -> Option<&'static str> {
    TREND_RULES
        .iter()
        .find(|(code, _)| raw_text.contains(code))
        .map(|(_, phrase)| *phrase)
}

/// Phrases of every matching station rule, concatenated without a separator.
pub fn station_info(raw_text: &str) -> Option<String> {
    let info: String = STATION_RULES
        .iter()
        .filter(|(code, _)| raw_text.contains(code))
        .map(|(_, phrase)| *phrase)
        .collect();

    (!info.is_empty()).then_some(info)
}

pub fn interpret(raw_text: &str) -> Remarks {
    Remarks {
        footer: trend(raw_text),
        report_info: station_info(raw_text),
    }
}
