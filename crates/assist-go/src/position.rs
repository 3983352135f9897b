//! Import insertion point lookup for .go source files.
//!
//! Unlike the import extractor, this module must preserve exact line
//! indices, so line comments are blanked to a bare `//` marker instead of
//! being deleted, and the scan is strictly line-by-line.

use crate::error::{AssistError, Result};
use crate::types::ImportPosition;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.+").unwrap());
static PACKAGE_DECL: Lazy<Regex> = Lazy::new(|| Regex::new(r"package (\S+)").unwrap());
static SINGLE_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"import (.*"\S+")"#).unwrap());
static BLOCK_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)import \(.+?\)").unwrap());

/// Determines where an import for `module_path` should be inserted.
///
/// Returns [`ImportPosition::AlreadyImported`] when the quoted path is
/// already present in the import section, and otherwise reports the file's
/// import shape with 0-based line indices so the caller can apply an edit.
///
/// Fails with [`AssistError::MissingPackageDeclaration`] when the file has
/// no `package` line, since that line anchors the insertion point for files
/// without imports.
///
/// Known limitation: the line scan stops at the first bare `)` line, so in
/// a file with several separate import blocks only the first one is
/// recognized.
pub fn find_import_position(content: &str, module_path: &str) -> Result<ImportPosition> {
    let content = LINE_COMMENT.replace_all(content, "//");

    if !PACKAGE_DECL.is_match(&content) {
        return Err(AssistError::MissingPackageDeclaration);
    }
    let single_import = SINGLE_IMPORT.find(&content);
    let has_import_block = BLOCK_IMPORT.is_match(&content);

    let mut package_line = 0; // line of `package xxx`
    let mut import_line = 0; // line of `import [alias] "path"`
    let mut block_start_line = 0; // line of `import (`
    let mut block_end_line = 0; // line of `)` pairing with block_start_line

    let lines: Vec<&str> = content.split('\n').map(str::trim).collect();
    for (i, line) in lines.iter().enumerate() {
        if PACKAGE_DECL.is_match(line) {
            package_line = i;
        }
        if SINGLE_IMPORT.is_match(line) {
            import_line = i;
            break;
        }
        if line.contains("import (") {
            block_start_line = i;
        }
        if *line == ")" {
            block_end_line = i;
            break;
        }
    }

    // Bounded check: covers the single import line or the whole block, but
    // never code below the import section, so a path mentioned further down
    // is not mistaken for an existing import.
    let check_range = import_line.max(block_end_line.saturating_sub(1)) + 1;
    let quoted = format!("\"{module_path}\"");
    if lines.iter().take(check_range).any(|l| l.contains(&quoted)) {
        tracing::debug!(module = %module_path, "module already imported");
        return Ok(ImportPosition::AlreadyImported);
    }

    let position = if single_import.is_none() && !has_import_block {
        ImportPosition::NoImport {
            insert_line: package_line + 1,
        }
    } else if let Some(matched) = single_import {
        ImportPosition::SingleImport {
            line: import_line,
            original_text: matched.as_str().to_string(),
        }
    } else {
        ImportPosition::MultiImport {
            start_line: block_start_line,
            end_line: block_end_line,
        }
    };

    tracing::debug!(module = %module_path, position = ?position, "found import position");
    Ok(position)
}
