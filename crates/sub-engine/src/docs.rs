//! Script metadata extraction.
//!
//! A script documents itself through the comment block that follows its shebang:
//!
//! ```text
//! #!/bin/sh
//! # Summary: Greets someone
//! # Usage: {cmd} <name> [--loud]
//! #
//! # Prints a greeting. With --loud, shouts it.
//! ```
//!
//! Scanning stops at the first line that is neither a comment nor blank, so the body of
//! the script is never read.

use crate::error::Result;
use crate::spec::{ArgKind, ArgSpec};
use crate::usage;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

static TAG_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(Summary|Usage):\s*(.*?)\s*$").unwrap());

/// Parsed metadata from a script's leading comment block.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UsageInfo {
    pub summary: Option<String>,
    /// Raw usage template, still containing the `{cmd}` placeholder
    pub usage: Option<String>,
    pub arg_specs: Vec<ArgSpec>,
    pub help: Option<String>,
}

impl UsageInfo {
    /// True when the usage line declares anything besides a rest slot.
    ///
    /// Scripts that only declare `[args]...` (or nothing) get their arguments passed through untouched.
    pub fn declares_arguments(&self) -> bool {
        self.arg_specs.iter().any(|spec| spec.kind != ArgKind::Rest)
    }
}

/// Extract metadata from in-memory file contents.
pub fn extract(contents: &str) -> UsageInfo {
    let mut builder = Builder::default();
    for (index, line) in contents.lines().enumerate() {
        if !builder.feed(index, line) {
            break;
        }
    }
    builder.finish()
}

/// Extract metadata from a reader, consuming only the leading comment block.
///
/// Lines are decoded lossily so that compiled executables in the tree do not
/// produce errors; their first line simply ends the block.
pub fn extract_from_reader<R: BufRead>(mut reader: R) -> Result<UsageInfo> {
    let mut builder = Builder::default();
    let mut buf = Vec::new();
    let mut index = 0;

    loop {
        buf.clear();
        if reader.read_until(b'\n', &mut buf)? == 0 {
            break;
        }
        let line = String::from_utf8_lossy(&buf);
        let line = line.trim_end_matches(['\n', '\r']);
        if !builder.feed(index, line) {
            break;
        }
        index += 1;
    }

    Ok(builder.finish())
}

pub fn extract_from_path(path: &Path) -> Result<UsageInfo> {
    let file = File::open(path)?;
    extract_from_reader(BufReader::new(file))
}

#[derive(Default)]
struct Builder {
    summary: Option<String>,
    usage: Option<String>,
    help: Vec<String>,
}

impl Builder {
    /// Returns false once the comment block has ended.
    fn feed(&mut self, index: usize, line: &str) -> bool {
        if index == 0 && line.starts_with("#!") {
            return true;
        }

        let trimmed = line.trim();
        if trimmed.is_empty() {
            return true;
        }

        let Some(body) = trimmed.strip_prefix('#') else {
            return false;
        };

        if let Some(caps) = TAG_RE.captures(body.trim()) {
            let value = caps[2].to_string();
            match &caps[1] {
                "Summary" => self.summary = Some(value).filter(|v| !v.is_empty()),
                _ => self.usage = Some(value).filter(|v| !v.is_empty()),
            }
            return true;
        }

        let text = body.strip_prefix(' ').unwrap_or(body).trim_end();
        if text.trim().is_empty() {
            if !self.help.is_empty() {
                self.help.push(String::new());
            }
        } else {
            self.help.push(text.to_string());
        }
        true
    }

    fn finish(mut self) -> UsageInfo {
        while self.help.last().is_some_and(|line| line.is_empty()) {
            self.help.pop();
        }

        let arg_specs = self.usage.as_deref().map(usage::parse).unwrap_or_default();
        let help = if self.help.is_empty() {
            None
        } else {
            Some(self.help.join("\n"))
        };

        UsageInfo {
            summary: self.summary,
            usage: self.usage,
            arg_specs,
            help,
        }
    }
}
