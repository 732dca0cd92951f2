use thiserror::Error;

/// Failures that abort profile assembly. Everything else degrades to empty values.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProfileError {
  #[error("profile document is empty")]
  EmptyDocument,

  #[error("profile document has no identifying data (missing id)")]
  MissingIdentity,
}
