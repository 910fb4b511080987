// Parser module for extracting class declarations from QL sources

mod ql;

pub use ql::{ClassDeclaration, LineParser, LineScan, ScanStop, CLASS_PATTERN, MAX_LINE_LEN};
