//! go.mod parsing.
//!
//! Extracts the module path, Go version directive, and require blocks from
//! raw go.mod text using regex patterns and line splitting. Directive
//! absence yields empty values, never an error, so a half-written go.mod
//! still produces a usable result.

use crate::types::{ModuleDependency, ModuleInfo};
use once_cell::sync::Lazy;
use regex::Regex;

static REQUIRE_BLOCK: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)require\s+\(.+?\)").unwrap());
static MODULE_DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"module (\S+)").unwrap());
static GO_DIRECTIVE: Lazy<Regex> = Lazy::new(|| Regex::new(r"go (\S+)").unwrap());

/// Parses every `require ( ... )` block in a go.mod file.
///
/// A go.mod may carry several blocks (commonly one for direct and one for
/// indirect dependencies); entries are returned in source order across all
/// of them. Only the first two whitespace-separated tokens of each line
/// are used, so trailing `// indirect` annotations are ignored.
pub fn parse_go_mod_requirements(content: &str) -> Vec<ModuleDependency> {
    let mut requirements = Vec::new();

    for block in REQUIRE_BLOCK.find_iter(content) {
        let lines: Vec<&str> = block.as_str().split('\n').collect();
        if lines.len() < 2 {
            continue;
        }
        // Drop the `require (` line and the closing `)` line.
        for line in &lines[1..lines.len() - 1] {
            let mut words = line.split_whitespace();
            let Some(name) = words.next() else { continue };
            let Some(version) = words.next() else { continue };
            requirements.push(ModuleDependency {
                name: name.to_string(),
                version: version.to_string(),
            });
        }
    }

    tracing::debug!(
        requirements = %requirements.len(),
        "parsed go.mod require blocks"
    );
    requirements
}

/// Parses a go.mod file into its module path, Go version, and requirements.
///
/// The first occurrence of each directive wins; repeated `module` or `go`
/// lines are not aggregated. Missing directives yield empty strings.
pub fn parse_go_mod_info(content: &str) -> ModuleInfo {
    let module = MODULE_DIRECTIVE
        .captures(content)
        .map_or_else(String::new, |caps| caps[1].to_string());
    let go_version = GO_DIRECTIVE
        .captures(content)
        .map_or_else(String::new, |caps| caps[1].to_string());

    let requirements = parse_go_mod_requirements(content);

    tracing::debug!(
        module = %module,
        go_version = %go_version,
        "parsed go.mod info"
    );
    ModuleInfo {
        module,
        go_version,
        requirements,
    }
}
