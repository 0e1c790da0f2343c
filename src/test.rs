use std::io::Write;
use std::path::PathBuf;

use crate::config::{Config, DEFAULT_TOOL};
use crate::gwjt::Gwjt;

pub type TestGwjt = Gwjt<Vec<u8>, Vec<u8>>;

pub(crate) fn build_test_gwjt(output: Option<PathBuf>) -> TestGwjt {
    let writer = Vec::new();
    let error_writer = Vec::new();
    let config = Config {
        writer,
        error_writer,
        output,
        tool: DEFAULT_TOOL.to_string(),
    };
    Gwjt { config }
}

/// Accepts `limit` writes, then fails every following one.
#[derive(Debug)]
pub(crate) struct FailAfter {
    limit: usize,
    pub(crate) written: Vec<u8>,
}

impl FailAfter {
    pub(crate) fn new(limit: usize) -> Self {
        Self {
            limit,
            written: Vec::new(),
        }
    }
}

impl Write for FailAfter {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        if self.limit == 0 {
            return Err(std::io::Error::other("disk full"));
        }
        self.limit -= 1;
        self.written.extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
