// Non-fatal problems collected while scanning

use std::fmt;
use std::path::PathBuf;

/// A warning raised during the scan. None of these abort the run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// The root or a directory entry could not be accessed; that branch was skipped
    Traversal {
        path: Option<PathBuf>,
        message: String,
    },
    /// A matching file could not be read
    Read { path: PathBuf, message: String },
    /// Scanning stopped at `line` (1-based)
    Scan {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl Diagnostic {
    /// Path the diagnostic refers to, if known
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            Diagnostic::Traversal { path, .. } => path.as_ref(),
            Diagnostic::Read { path, .. } | Diagnostic::Scan { path, .. } => Some(path),
        }
    }

    pub fn is_traversal(&self) -> bool {
        matches!(self, Diagnostic::Traversal { .. })
    }

    pub fn is_read(&self) -> bool {
        matches!(self, Diagnostic::Read { .. })
    }

    pub fn is_scan(&self) -> bool {
        matches!(self, Diagnostic::Scan { .. })
    }
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Traversal {
                path: Some(path),
                message,
            } => write!(f, "Error walking {}: {}", path.display(), message),
            Diagnostic::Traversal { path: None, message } => {
                write!(f, "Error walking directory: {}", message)
            }
            Diagnostic::Read { path, message } => {
                write!(f, "Error reading file {}: {}", path.display(), message)
            }
            Diagnostic::Scan {
                path,
                line,
                message,
            } => write!(
                f,
                "Error scanning file {} at line {}: {}",
                path.display(),
                line,
                message
            ),
        }
    }
}
