//! Core library for the `metar` weather bot.
//!
//! This crate defines:
//! - The decoded METAR data model and envelope parsing
//! - Section formatters, remark interpretation and report assembly
//! - The embed model handed to the chat transport
//! - The CheckWX provider client and configuration
//!
//! It is used by `metar-cli`, but can also be reused by other front ends.

pub mod config;
pub mod embed;
pub mod error;
pub mod format;
pub mod model;
pub mod parser;
pub mod provider;
pub mod remarks;
pub mod report;

pub use config::Config;
pub use embed::{Embed, EmbedField, EmbedKind};
pub use error::{RenderError, WeatherError};
pub use model::{Observation, WeatherEnvelope};
pub use parser::{parse, parse_json};
pub use provider::{CheckWxProvider, Icao, MetarProvider, fetch_report};
pub use report::{RenderedReport, RenderedSection, assemble, assemble_at};
