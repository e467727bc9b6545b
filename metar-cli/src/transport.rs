use std::{io::Write, time::Duration};

use anyhow::{Context, Result};
use metar_core::Embed;

/// Delivers embeds to a writer after a fixed courtesy delay.
pub struct Transport<W> {
    delay: Duration,
    out: W,
}

impl Transport<std::io::Stdout> {
    pub fn stdout(delay: Duration) -> Self {
        Self::new(delay, std::io::stdout())
    }
}

impl<W: Write> Transport<W> {
    pub fn new(delay: Duration, out: W) -> Self {
        Self { delay, out }
    }

    pub async fn send(&mut self, embed: &Embed) -> Result<()> {
        tokio::time::sleep(self.delay).await;

        self.out
            .write_all(embed.render_text().as_bytes())
            .and_then(|_| self.out.flush())
            .context("Failed to deliver message")
    }

    #[cfg(test)]
    pub fn into_inner(self) -> W {
        self.out
    }
}
