use std::path::PathBuf;

pub const DEFAULT_TOOL: &str = "jsdl2gw";

#[derive(Debug)]
pub struct Config<W: std::io::Write, X: std::io::Write> {
    pub writer: W,
    pub error_writer: X,
    pub output: Option<PathBuf>,
    pub tool: String,
}

impl Default for Config<std::io::Stdout, std::io::Stderr> {
    fn default() -> Self {
        Self {
            writer: std::io::stdout(),
            error_writer: std::io::stderr(),
            output: None,
            tool: DEFAULT_TOOL.to_string(),
        }
    }
}
