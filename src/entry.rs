use std::{
    fmt::{self, Display},
    fs,
    path::Path,
};

use anyhow::Context;

/// One name/value pair destined for one output line.
#[derive(Debug, PartialEq, Eq, Default, Clone)]
pub struct Entry {
    pub name: Option<String>,
    pub value: Option<String>,
}

impl Entry {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: Some(value.into()),
        }
    }

    pub fn name_only(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            value: None,
        }
    }

    pub fn value_only(value: impl Into<String>) -> Self {
        Self {
            name: None,
            value: Some(value.into()),
        }
    }

    /// Text this entry contributes to the output, if any.
    ///
    /// The value is only appended after a name, so a nameless entry renders
    /// nothing, and a name without a value renders `name=` with no newline.
    pub fn render_line(&self) -> Option<String> {
        let mut line = String::new();
        if let Some(name) = &self.name {
            line.push_str(name);
            line.push('=');
        }
        if let Some(value) = &self.value {
            if !line.is_empty() {
                line.push_str(value);
                line.push('\n');
            }
        }
        if line.is_empty() {
            None
        } else {
            Some(line)
        }
    }
}

// `name=value`, `name`, `=value`; split at the first '='
impl From<&str> for Entry {
    fn from(value: &str) -> Self {
        match value.split_once('=') {
            Some(("", v)) => Entry::value_only(v),
            Some((n, v)) => Entry::new(n, v),
            None => Entry::name_only(value),
        }
    }
}

impl Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.name, &self.value) {
            (Some(name), Some(value)) => write!(f, "{name}={value}"),
            (Some(name), None) => write!(f, "{name}"),
            (None, Some(value)) => write!(f, "={value}"),
            (None, None) => Ok(()),
        }
    }
}

pub(crate) fn read_entries_file(path: &Path) -> anyhow::Result<Vec<Entry>> {
    let contents = fs::read_to_string(path)
        .with_context(|| format!("read entries file '{}'", path.display()))?;
    Ok(contents
        .lines()
        .filter(|line| !line.trim().is_empty() && !line.starts_with('#'))
        .map(Entry::from)
        .collect())
}
