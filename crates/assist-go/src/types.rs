//! Types for Go module and import analysis.

/// A dependency requirement from a go.mod require block.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ModuleDependency {
    /// Module path (e.g., "github.com/gin-gonic/gin")
    pub name: String,
    /// Version constraint string (e.g., "v1.9.1")
    pub version: String,
}

/// Structured facts extracted from a go.mod file.
///
/// Absent directives are represented by empty strings rather than errors,
/// since a partially written go.mod is an expected input.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct ModuleInfo {
    /// Declared module path, or "" when no `module` directive was found
    pub module: String,
    /// Go version directive, or "" when absent
    pub go_version: String,
    /// All require entries, in source order across all blocks
    pub requirements: Vec<ModuleDependency>,
}

/// One import statement from a .go file.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct FileImport {
    /// Import path with surrounding quotes stripped
    pub name: String,
    /// Local binding name, or "" when the import has no rename.
    /// A blank import keeps its `_` token as the alias.
    pub alias: String,
}

/// Where a new import statement should be inserted into a .go file.
///
/// All line numbers are 0-based indices over the text split on `\n`.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum ImportPosition {
    /// The file has no import section; insert a new statement at
    /// `insert_line`, the line immediately after the package declaration.
    NoImport { insert_line: usize },
    /// The requested path already appears in the import section.
    AlreadyImported,
    /// The file has exactly one single-line import at `line`.
    /// `original_text` is the matched statement, so the caller can
    /// replace it with a parenthesized block.
    SingleImport { line: usize, original_text: String },
    /// The file has a parenthesized import block spanning `start_line`
    /// (the `import (` line) through `end_line` (the closing `)` line).
    MultiImport { start_line: usize, end_line: usize },
}
