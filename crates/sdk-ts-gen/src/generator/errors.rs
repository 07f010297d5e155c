use thiserror::Error;

/// Unrecoverable problems found while turning a document into client code.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerationError {
  #[error("operation '{method} {path}' has no operationId; every operation needs one to name its client method")]
  MissingOperationId { method: String, path: String },
  #[error("{context}: cannot resolve reference '{reference}'")]
  UnresolvedReference { context: String, reference: String },
  #[error("unsupported OpenAPI version '{version}': only 3.x documents are supported")]
  UnsupportedVersion { version: String },
}

pub type GenerationResult<T> = Result<T, GenerationError>;
