//! Go module and import analysis for import-insertion tooling.
//!
//! This crate extracts structured facts from raw Go source text: the
//! module path, Go version, and require blocks of a go.mod file, and the
//! import statements of a .go file. It also locates where a new import
//! should be inserted into a file that has no imports, one single-line
//! import, or a grouped import block.
//!
//! All entry points are pure functions over `&str`; the host tool reads
//! files into strings and applies any edit implied by an
//! [`ImportPosition`] result back to storage.
//!
//! # Example
//!
//! ```
//! use assist_go::{find_import_position, parse_go_mod_info, ImportPosition};
//!
//! let info = parse_go_mod_info("module example.com/myapp\n\ngo 1.21\n");
//! assert_eq!(info.module, "example.com/myapp");
//! assert_eq!(info.go_version, "1.21");
//!
//! let source = "package main\n\nfunc main() {}\n";
//! let pos = find_import_position(source, "fmt").unwrap();
//! assert_eq!(pos, ImportPosition::NoImport { insert_line: 1 });
//! ```

pub mod error;
pub mod imports;
pub mod modfile;
pub mod position;
pub mod types;

// Re-export commonly used types
pub use error::{AssistError, Result};
pub use imports::parse_go_file_imports;
pub use modfile::{parse_go_mod_info, parse_go_mod_requirements};
pub use position::find_import_position;
pub use types::{FileImport, ImportPosition, ModuleDependency, ModuleInfo};
