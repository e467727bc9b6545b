//! Chat-style embed: one title, one colour, ordered named fields and a footer.

use std::fmt::Write as _;

use crate::report::RenderedReport;

/// Colour used for weather reports and command manuals.
pub const BLURPLE: u32 = 0x5865F2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmbedKind {
    Info,
    Crit,
    Good,
}

impl EmbedKind {
    pub const fn color(self) -> u32 {
        match self {
            EmbedKind::Info => rgb(0, 255, 255),
            EmbedKind::Crit => rgb(255, 0, 0),
            EmbedKind::Good => rgb(0, 175, 15),
        }
    }
}

const fn rgb(r: u8, g: u8, b: u8) -> u32 {
    ((r as u32) << 16) | ((g as u32) << 8) | b as u32
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmbedField {
    pub name: String,
    pub value: String,
    pub inline: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Embed {
    pub title: String,
    pub description: Option<String>,
    pub color: u32,
    pub fields: Vec<EmbedField>,
    pub footer: Option<String>,
}

impl Embed {
    pub fn new(title: impl Into<String>, color: u32) -> Self {
        Self {
            title: title.into(),
            description: None,
            color,
            fields: Vec::new(),
            footer: None,
        }
    }

    pub fn custom(title: impl Into<String>, description: impl Into<String>, kind: EmbedKind) -> Self {
        Self {
            description: Some(description.into()),
            ..Self::new(title, kind.color())
        }
    }

    /// `"<action> failed: <error>"` in a critical embed.
    pub fn error(action: &str, error: impl std::fmt::Display) -> Self {
        Self::custom("Failed!", format!("{action} failed: {error}"), EmbedKind::Crit)
    }

    pub fn success(description: impl Into<String>) -> Self {
        Self::custom("Success!", description, EmbedKind::Good)
    }

    pub fn add_field(&mut self, name: impl Into<String>, value: impl Into<String>, inline: bool) {
        self.fields.push(EmbedField { name: name.into(), value: value.into(), inline });
    }

    pub fn set_footer(&mut self, footer: impl Into<String>) {
        self.footer = Some(footer.into());
    }

    /// Plain-text rendering that keeps the field order.
    pub fn render_text(&self) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "== {} ==", self.title);

        if let Some(description) = &self.description {
            let _ = writeln!(out, "{description}");
        }

        for field in &self.fields {
            let _ = writeln!(out, "\n{}:", field.name);
            for line in field.value.lines() {
                let _ = writeln!(out, "  {line}");
            }
        }

        if let Some(footer) = &self.footer {
            let _ = writeln!(out, "\n-- {footer}");
        }

        out
    }
}

impl From<&RenderedReport> for Embed {
    fn from(report: &RenderedReport) -> Self {
        let mut embed = Embed::new(report.title.clone(), BLURPLE);
        for section in &report.sections {
            embed.add_field(section.title.clone(), section.body.clone(), section.inline);
        }
        if let Some(footer) = &report.footer {
            embed.set_footer(footer.clone());
        }
        embed
    }
}
