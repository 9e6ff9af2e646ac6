//! Error types for `pedigree-core`.

use thiserror::Error;
use uuid::Uuid;

use crate::store::StoreError;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid NNI: {0:?}")]
  InvalidNni(String),

  #[error("pedigree not found: {0}")]
  PedigreeNotFound(Uuid),

  #[error("NNI {0} is already registered")]
  NniAlreadyRegistered(String),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

impl StoreError for Error {
  fn is_conflict(&self) -> bool {
    matches!(self, Self::NniAlreadyRegistered(_))
  }
}
