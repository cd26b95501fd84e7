//! Section scanner: splits a YAML file into its top-level blocks.
//!
//! A block starts at a first-level key and runs until the next one:
//!
//! ```text
//! # Leading comments with exactly one space after "#" belong to the block
//! framework:
//!     secret: '%secret%'
//!     # still part of framework
//!
//! # An escaped block called "monolog"
//! #monolog:
//! #    handlers: ~
//! ```
//!
//! Line numbers are zero-based and inclusive.

use crate::error::{CfgError, Result};
use crate::yaml::{self, Value};
use regex::Regex;
use std::path::Path;
use std::sync::LazyLock;

/// Name of the pseudo-module holding a file's own import list.
pub const IMPORTS_KEY: &str = "imports";

static SECTION_START: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^(#?)([A-Za-z0-9_\-]+):").expect("valid section regex"));

static LEADING_COMMENT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^# [A-Za-z0-9]+").expect("valid comment regex"));

/// One top-level section of a YAML file.
#[derive(Debug, Clone, PartialEq)]
pub struct ModuleBlock {
    pub name: String,
    pub start_line: usize,
    pub end_line: usize,
    /// Whether the section key itself is commented out (`#name:`).
    pub commented: bool,
    /// The block's lines, verbatim, including line endings.
    pub raw_text: String,
    /// `raw_text` parsed as YAML; `None` for comment-only blocks.
    pub data: Option<Value>,
}

impl ModuleBlock {
    /// The value stored under the block's own key, if the block parsed to one.
    pub fn value(&self) -> Option<&Value> {
        self.data.as_ref().and_then(|data| data.get(self.name.as_str()))
    }

    /// Number of source lines covered by the block.
    pub fn line_count(&self) -> usize {
        self.end_line - self.start_line + 1
    }
}

/// Ordered set of blocks, keyed by name in first-seen order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ModuleSet {
    blocks: Vec<ModuleBlock>,
}

impl ModuleSet {
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    pub fn len(&self) -> usize {
        self.blocks.len()
    }

    pub fn get(&self, name: &str) -> Option<&ModuleBlock> {
        self.blocks.iter().find(|block| block.name == name)
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.blocks.iter().map(|block| block.name.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = &ModuleBlock> {
        self.blocks.iter()
    }

    /// The file's own `imports` block, if present.
    pub fn imports(&self) -> Option<&ModuleBlock> {
        self.get(IMPORTS_KEY)
    }

    /// Every block that can be moved into its own file (all but `imports`).
    pub fn distributable(&self) -> impl Iterator<Item = &ModuleBlock> {
        self.blocks.iter().filter(|block| block.name != IMPORTS_KEY)
    }
}

struct Span {
    name: String,
    start: usize,
    end: usize,
    commented: bool,
}

/// Scan a file on disk.
pub fn scan_file(path: &Path) -> Result<ModuleSet> {
    let content = crate::fs::read_file(path)?;
    scan_text(&content).map_err(|e| match e {
        CfgError::Yaml(msg) => CfgError::Yaml(format!("{}: {}", path.display(), msg)),
        CfgError::DuplicateModule(msg) => {
            CfgError::DuplicateModule(format!("{}: {}", path.display(), msg))
        }
        other => other,
    })
}

/// Scan YAML text, keeping line endings in each block's raw text.
pub fn scan_text(text: &str) -> Result<ModuleSet> {
    let lines: Vec<&str> = text.split_inclusive('\n').collect();
    scan_lines(&lines)
}

/// Partition lines into top-level blocks.
pub fn scan_lines<S: AsRef<str>>(lines: &[S]) -> Result<ModuleSet> {
    let mut spans: Vec<Span> = Vec::new();

    for (i, raw) in lines.iter().enumerate() {
        let line = raw.as_ref().trim_end();
        if line.is_empty() {
            continue;
        }

        let Some(caps) = SECTION_START.captures(line) else {
            continue;
        };
        let name = caps[2].to_string();

        if let Some(existing) = spans.iter().find(|span| span.name == name) {
            return Err(CfgError::DuplicateModule(format!(
                "section '{}' appears twice (lines {} and {}); merge or remove one of them and retry",
                name,
                existing.start + 1,
                i + 1
            )));
        }

        let mut start = i;
        while start > 0 && LEADING_COMMENT.is_match(lines[start - 1].as_ref()) {
            start -= 1;
        }

        // The previous key line never matches LEADING_COMMENT, so start > prev.start.
        if let Some(prev) = spans.last_mut() {
            prev.end = start - 1;
        }

        spans.push(Span {
            name,
            start,
            end: i,
            commented: !caps[1].is_empty(),
        });
    }

    if let Some(last) = spans.last_mut() {
        last.end = lines.len() - 1;
    }

    let blocks = spans
        .into_iter()
        .map(|span| build_block(lines, span))
        .collect::<Result<Vec<_>>>()?;

    Ok(ModuleSet { blocks })
}

fn build_block<S: AsRef<str>>(lines: &[S], span: Span) -> Result<ModuleBlock> {
    let raw_text: String = lines[span.start..=span.end]
        .iter()
        .map(|line| line.as_ref())
        .collect();

    let data = yaml::parse(&raw_text).map_err(|e| match e {
        CfgError::Yaml(msg) => CfgError::Yaml(format!(
            "section '{}' (lines {}-{}): {}",
            span.name,
            span.start + 1,
            span.end + 1,
            msg
        )),
        other => other,
    })?;

    Ok(ModuleBlock {
        name: span.name,
        start_line: span.start,
        end_line: span.end,
        commented: span.commented,
        raw_text,
        data,
    })
}
