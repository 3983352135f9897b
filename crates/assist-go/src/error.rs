//! Errors for Go source analysis.

use thiserror::Error;

/// Errors that can occur while analyzing Go source text.
#[derive(Error, Debug)]
pub enum AssistError {
    /// The file has no `package` declaration line, so there is no anchor
    /// for computing an import insertion point.
    #[error("no package declaration found in the file")]
    MissingPackageDeclaration,
}

/// Result type alias for Go source analysis operations.
pub type Result<T> = std::result::Result<T, AssistError>;
