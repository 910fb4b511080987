// Line-based extraction of class declarations from QL sources
//
// Each line is matched on its own; declarations spread over several lines are
// not recognised.

use crate::analysis::ClassRegistry;
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use regex::bytes::Regex;
use std::path::Path;
use tracing::{debug, warn};

/// Optional indentation, optional `abstract`, `class Name`, optional `extends Dotted.Name`.
///
/// `\w` and `\s` are ASCII only, so a name stops at the first non-ASCII byte.
pub const CLASS_PATTERN: &str = r"(?-u)^\s*(?:abstract\s+)?class\s+(\w+)(?:\s+extends\s+([\w.]+))?";

/// Lines longer than this stop the scan of their file
pub const MAX_LINE_LEN: usize = 64 * 1024;

/// A class declared on a single line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDeclaration {
    pub name: String,
    /// Parent as written after `extends`, possibly dotted
    pub parent: Option<String>,
}

impl ClassDeclaration {
    pub fn new(name: impl Into<String>, parent: Option<&str>) -> Self {
        Self {
            name: name.into(),
            parent: parent.map(str::to_string),
        }
    }
}

/// Where and why a scan stopped early
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanStop {
    /// 1-based line number
    pub line: usize,
    pub message: String,
}

/// Result of scanning one file's content
#[derive(Debug, Default)]
pub struct LineScan {
    /// Declarations in line order, with their 1-based line numbers
    pub declarations: Vec<(usize, ClassDeclaration)>,
    pub stopped: Option<ScanStop>,
}

/// Matches class declaration lines
pub struct LineParser {
    class_pattern: Regex,
}

impl LineParser {
    /// Create a new parser
    pub fn new() -> Result<Self> {
        Ok(Self {
            class_pattern: Regex::new(CLASS_PATTERN)?,
        })
    }

    /// Match a single line
    pub fn parse_line(&self, line: &str) -> Option<ClassDeclaration> {
        self.parse_raw_line(line.as_bytes())
    }

    /// Match a single line given as raw bytes, in any encoding
    pub fn parse_raw_line(&self, line: &[u8]) -> Option<ClassDeclaration> {
        let caps = self.class_pattern.captures(line)?;
        // Captures hold ASCII word characters only
        let name = String::from_utf8_lossy(caps.get(1)?.as_bytes()).into_owned();
        let parent = caps
            .get(2)
            .map(|m| String::from_utf8_lossy(m.as_bytes()).into_owned());
        Some(ClassDeclaration { name, parent })
    }

    /// Scan raw file content line by line.
    ///
    /// Lines are split on `\n` with a trailing `\r` removed and matched as
    /// bytes, so text in other encodings is harmless. A line longer than
    /// [`MAX_LINE_LEN`] ends the scan; declarations found before it are kept.
    pub fn scan(&self, content: &[u8]) -> LineScan {
        let mut result = LineScan::default();
        if content.is_empty() {
            return result;
        }

        let content = content.strip_suffix(b"\n").unwrap_or(content);
        for (idx, raw) in content.split(|b| *b == b'\n').enumerate() {
            let line_no = idx + 1;
            let raw = raw.strip_suffix(b"\r").unwrap_or(raw);

            if raw.len() > MAX_LINE_LEN {
                result.stopped = Some(ScanStop {
                    line: line_no,
                    message: format!("line exceeds {} bytes", MAX_LINE_LEN),
                });
                break;
            }

            if let Some(decl) = self.parse_raw_line(raw) {
                result.declarations.push((line_no, decl));
            }
        }

        result
    }

    /// Read a file, scan it and record its declarations.
    ///
    /// Returns the number of declarations recorded. Problems are pushed to
    /// `diagnostics` and never abort the caller.
    pub fn parse_file(
        &self,
        path: &Path,
        registry: &mut ClassRegistry,
        diagnostics: &mut Vec<Diagnostic>,
    ) -> usize {
        let content = match std::fs::read(path) {
            Ok(content) => content,
            Err(e) => {
                warn!(path = %path.display(), error = %e, "failed to read file");
                diagnostics.push(Diagnostic::Read {
                    path: path.to_path_buf(),
                    message: e.to_string(),
                });
                return 0;
            }
        };

        let scan = self.scan(&content);
        let recorded = scan.declarations.len();
        for (line, decl) in scan.declarations {
            debug!(path = %path.display(), line, class = %decl.name, parent = ?decl.parent, "class declaration");
            registry.record(decl);
        }

        if let Some(stop) = scan.stopped {
            warn!(path = %path.display(), line = stop.line, "scan stopped early");
            diagnostics.push(Diagnostic::Scan {
                path: path.to_path_buf(),
                line: stop.line,
                message: stop.message,
            });
        }

        recorded
    }
}
