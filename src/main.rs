use std::path::PathBuf;

use clap::Parser;

use crate::config::{Config, DEFAULT_TOOL};
use crate::entry::{read_entries_file, Entry};
use crate::gwjt::Gwjt;

mod config;
mod entry;
mod gwjt;
mod logging;
#[cfg(test)]
mod test;

/// Write name/value entries as a GridWay job template.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Template file to create; printed to stdout when omitted.
    #[clap(short = 'o', long)]
    output: Option<PathBuf>,

    /// Command name recorded in the header line.
    #[clap(long, default_value = DEFAULT_TOOL)]
    tool: String,

    /// Exit with an error status when the template cannot be written.
    #[clap(long)]
    strict: bool,

    /// File with one entry per line, read before the positional entries.
    #[clap(long)]
    entries_file: Option<PathBuf>,

    /// Entries as `name=value`, `name` or `=value`.
    #[clap(name = "entry")]
    entries: Vec<String>,
}

impl Args {
    fn entries(&self) -> anyhow::Result<Vec<Entry>> {
        let mut entries = match &self.entries_file {
            Some(path) => read_entries_file(path)?,
            None => Vec::new(),
        };
        entries.extend(self.entries.iter().map(|e| Entry::from(e.as_str())));
        Ok(entries)
    }
}

fn main() -> anyhow::Result<()> {
    logging::init();
    let args = Args::parse();
    let entries = args.entries()?;

    let config = Config {
        output: args.output,
        tool: args.tool,
        ..Config::default()
    };
    let mut gwjt = Gwjt { config };
    if args.strict {
        gwjt.try_generate(&entries)?;
    } else {
        gwjt.generate(&entries);
    }
    Ok(())
}
