use std::{fs, io::Write};

use anyhow::Context;
use tracing::debug;

use crate::{config::Config, entry::Entry};

fn header(tool: &str) -> String {
    format!("#This file was automatically generated by the {tool} command\n")
}

fn write_template(mut writer: impl Write, tool: &str, entries: &[Entry]) -> anyhow::Result<()> {
    writer
        .write_all(header(tool).as_bytes())
        .context("write header")?;
    for (i, entry) in entries.iter().enumerate() {
        let Some(line) = entry.render_line() else {
            debug!(index = i, "skipping entry without a name");
            continue;
        };
        writer
            .write_all(line.as_bytes())
            .with_context(|| format!("write entry {i} '{entry}'"))?;
    }
    writer.flush().context("flush output")?;
    Ok(())
}

#[derive(Debug)]
pub struct Gwjt<W: std::io::Write, X: std::io::Write> {
    pub config: Config<W, X>,
}

impl<W: std::io::Write, X: std::io::Write> Gwjt<W, X> {
    /// Writes the template and reports failures only on the error stream.
    pub fn generate(&mut self, entries: &[Entry]) {
        if let Err(err) = self.try_generate(entries) {
            debug!("failed to generate job template: {err:#}");
            // best-effort
            let _ = writeln!(self.config.error_writer, "{err:?}");
        }
    }

    pub fn try_generate(&mut self, entries: &[Entry]) -> anyhow::Result<()> {
        match &self.config.output {
            Some(path) => {
                debug!(path = %path.display(), entries = entries.len(), "writing job template");
                let mut file = fs::File::create(path)
                    .with_context(|| format!("create output file '{}'", path.display()))?;
                write_template(&mut file, &self.config.tool, entries)
                    .with_context(|| format!("write output file '{}'", path.display()))?;
                // dropping a File discards close errors, surface deferred ones here
                file.sync_all()
                    .with_context(|| format!("close output file '{}'", path.display()))?;
            }
            None => {
                debug!(entries = entries.len(), "writing job template to console");
                write_template(&mut self.config.writer, &self.config.tool, entries)
                    .context("write job template to console")?;
            }
        }
        Ok(())
    }
}
