//! Import extraction for .go source files.
//!
//! Recognizes both the single-line form (`import alias "path"`) and the
//! parenthesized block form. Comments are stripped up front so that
//! commented-out imports never match.

use crate::types::FileImport;
use once_cell::sync::Lazy;
use regex::Regex;

static LINE_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"//.+").unwrap());
static BLOCK_COMMENT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)/\*.+?\*/").unwrap());
static SINGLE_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r#"import (.*"\S+")"#).unwrap());
static BLOCK_IMPORT: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?s)import \(.+?\)").unwrap());

/// Parses the import section(s) of a .go file.
///
/// Single-line imports take precedence: if any exist, only those are
/// returned. Otherwise every `import ( ... )` block is scanned and its
/// entries concatenated in source order. A file without imports yields an
/// empty vec. A `_` blank import keeps `_` as an ordinary alias.
pub fn parse_go_file_imports(content: &str) -> Vec<FileImport> {
    let content = LINE_COMMENT.replace_all(content, "");
    let content = BLOCK_COMMENT.replace_all(&content, "");

    let mut imports = Vec::new();

    let mut saw_single_line = false;
    for caps in SINGLE_IMPORT.captures_iter(&content) {
        saw_single_line = true;
        if let Some(import) = split_import_line(&caps[1]) {
            imports.push(import);
        }
    }
    if saw_single_line {
        tracing::debug!(imports = %imports.len(), "parsed single-line imports");
        return imports;
    }

    for block in BLOCK_IMPORT.find_iter(&content) {
        for line in block.as_str().split('\n') {
            let line = line.trim();
            // Skip blanks, emptied comment lines, and the block delimiters.
            if line.is_empty()
                || line == "//"
                || line.starts_with("import")
                || line.starts_with(')')
            {
                continue;
            }
            if let Some(import) = split_import_line(line) {
                imports.push(import);
            }
        }
    }

    tracing::debug!(imports = %imports.len(), "parsed import blocks");
    imports
}

/// Splits one import entry into its alias and quoted path.
///
/// Two or more tokens mean `alias "path"`; a lone token is a bare `"path"`.
fn split_import_line(line: &str) -> Option<FileImport> {
    let mut words = line.split_whitespace();
    let first = words.next()?;
    match words.next() {
        Some(path) => Some(FileImport {
            name: path.replace('"', ""),
            alias: first.to_string(),
        }),
        None => Some(FileImport {
            name: first.replace('"', ""),
            alias: String::new(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_IMPORT: &str = "
// Some comments here
// Some more comments here
package main

func main() {
\tfmt.Println(\"Hello, world!\")
}
";

    const SINGLE_IMPORT_FILE: &str = "
// Some comments here
// Some more comments here
package main

import \"fmt\"
";

    const MULTI_IMPORT_FILE: &str = "package main

import (
\t\"fmt\"
\to \"os\"
\t\"strings\"
)

func main() {
\tfmt.Println(\"Hello, world!\")
}
";

    const COMPLEX_FILE: &str = r#"/*
Copyright 2023.

Licensed under the Apache License, Version 2.0 (the "License");
you may not use this file except in compliance with the License.
You may obtain a copy of the License at

    http://www.apache.org/licenses/LICENSE-2.0
*/

package main

import (
	"context"
	"flag"
	"os"

	// Import all Kubernetes client auth plugins (e.g. Azure, GCP, OIDC, etc.)
	// to ensure that exec-entrypoint and run can make use of them.

	"go.uber.org/zap/zapcore"
	_ "k8s.io/client-go/plugin/pkg/client/auth"

	utilruntime "k8s.io/apimachinery/pkg/util/runtime"
	ctrl "sigs.k8s.io/controller-runtime"
	"sigs.k8s.io/controller-runtime/pkg/healthz"

	v1alpha1 "github.com/oceanbase/ob-operator/api/v1alpha1"
	"github.com/oceanbase/ob-operator/internal/telemetry"
	//+kubebuilder:scaffold:imports
)

var (
	scheme   = runtime.NewScheme()
	setupLog = ctrl.Log.WithName("setup")
)"#;

    #[test]
    fn test_no_import_statement() {
        let parsed = parse_go_file_imports(NO_IMPORT);
        assert_eq!(parsed.len(), 0);
    }

    #[test]
    fn test_single_import_statement() {
        let parsed = parse_go_file_imports(SINGLE_IMPORT_FILE);
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "fmt");
        assert_eq!(parsed[0].alias, "");
    }

    #[test]
    fn test_single_import_with_alias() {
        let parsed = parse_go_file_imports("package main\n\nimport f \"fmt\"\n");
        assert_eq!(parsed.len(), 1);
        assert_eq!(parsed[0].name, "fmt");
        assert_eq!(parsed[0].alias, "f");
    }

    #[test]
    fn test_multi_import_statement() {
        let parsed = parse_go_file_imports(MULTI_IMPORT_FILE);
        assert_eq!(parsed.len(), 3);
        assert_eq!(parsed[0].name, "fmt");
        assert_eq!(parsed[0].alias, "");
        assert_eq!(parsed[1].name, "os");
        assert_eq!(parsed[1].alias, "o");
        assert_eq!(parsed[2].name, "strings");
        assert_eq!(parsed[2].alias, "");
    }

    #[test]
    fn test_complex_file() {
        let parsed = parse_go_file_imports(COMPLEX_FILE);
        assert_eq!(parsed.len(), 10);
        assert_eq!(parsed[0].name, "context");
        assert_eq!(parsed[0].alias, "");
        assert_eq!(parsed[3].name, "go.uber.org/zap/zapcore");
        assert_eq!(parsed[3].alias, "");
        // Blank import keeps its underscore token
        assert_eq!(parsed[4].name, "k8s.io/client-go/plugin/pkg/client/auth");
        assert_eq!(parsed[4].alias, "_");
        assert_eq!(parsed[5].name, "k8s.io/apimachinery/pkg/util/runtime");
        assert_eq!(parsed[5].alias, "utilruntime");
        assert_eq!(parsed[8].name, "github.com/oceanbase/ob-operator/api/v1alpha1");
        assert_eq!(parsed[8].alias, "v1alpha1");
        assert_eq!(parsed[9].name, "github.com/oceanbase/ob-operator/internal/telemetry");
    }

    #[test]
    fn test_commented_out_imports_ignored() {
        let content = "package main\n\n/*\nimport \"fmt\"\n*/\n\n// import \"os\"\n";
        let parsed = parse_go_file_imports(content);
        assert_eq!(parsed.len(), 0);
    }

    #[test]
    fn test_round_trip() {
        let parsed = parse_go_file_imports(MULTI_IMPORT_FILE);

        let mut rebuilt = String::from("package main\n\nimport (\n");
        for import in &parsed {
            if import.alias.is_empty() {
                rebuilt.push_str(&format!("\t\"{}\"\n", import.name));
            } else {
                rebuilt.push_str(&format!("\t{} \"{}\"\n", import.alias, import.name));
            }
        }
        rebuilt.push_str(")\n");

        assert_eq!(parse_go_file_imports(&rebuilt), parsed);
    }

    #[test]
    fn test_idempotent() {
        assert_eq!(
            parse_go_file_imports(COMPLEX_FILE),
            parse_go_file_imports(COMPLEX_FILE)
        );
    }
}
