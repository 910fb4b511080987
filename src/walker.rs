// Source file discovery

use crate::config::ScanConfig;
use crate::diagnostics::Diagnostic;
use crate::error::Result;
use glob::Pattern;
use std::path::Path;
use tracing::{debug, warn};
use walkdir::WalkDir;

/// Decides which files under the root get scanned
#[derive(Debug, Clone)]
pub struct SourceFilter {
    /// Allowed extensions, without the leading dot
    extensions: Vec<String>,
    /// Root-relative paths matching any of these are skipped
    exclude: Vec<Pattern>,
}

impl SourceFilter {
    /// Create a filter from an extension allow-list and exclusion globs
    pub fn new(extensions: &[String], exclude: &[String]) -> Result<Self> {
        let exclude = exclude
            .iter()
            .map(|p| Pattern::new(p))
            .collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Self {
            extensions: extensions.to_vec(),
            exclude,
        })
    }

    pub fn from_config(config: &ScanConfig) -> Result<Self> {
        Self::new(&config.extensions, &config.exclude)
    }

    /// Check whether a file should be handed to the parser
    pub fn matches(&self, path: &Path, root: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map_or(false, |ext| self.extensions.iter().any(|allowed| allowed == ext));
        if !has_extension {
            return false;
        }

        let relative = path.strip_prefix(root).unwrap_or(path);
        !self.exclude.iter().any(|p| p.matches_path(relative))
    }
}

/// Walk `root` recursively and call `handler` for every matching regular file.
///
/// Errors are pushed to `diagnostics`; the failing branch is skipped and the
/// walk carries on with its siblings. The handler gets the same list so its
/// own reports stay in walk order. Returns the number of files handled.
pub fn walk_source_files<F>(
    root: &Path,
    filter: &SourceFilter,
    diagnostics: &mut Vec<Diagnostic>,
    mut handler: F,
) -> usize
where
    F: FnMut(&Path, &mut Vec<Diagnostic>),
{
    let mut handled = 0;

    for entry in WalkDir::new(root).follow_links(false) {
        let entry = match entry {
            Ok(entry) => entry,
            Err(err) => {
                let message = err
                    .io_error()
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                warn!(path = ?err.path(), error = %message, "skipping unreadable entry");
                diagnostics.push(Diagnostic::Traversal {
                    path: err.path().map(Path::to_path_buf),
                    message,
                });
                continue;
            }
        };

        if !entry.file_type().is_file() {
            continue;
        }

        let path = entry.path();
        if !filter.matches(path, root) {
            continue;
        }

        debug!(path = %path.display(), "visiting source file");
        handler(path, diagnostics);
        handled += 1;
    }

    handled
}
