//! Violation taxonomy for the validation engine.
//!
//! Violations are data, not failures: the engine collects every one it finds
//! and returns them together in a [`crate::FieldErrorMap`].

use serde::Serialize;
use thiserror::Error;

/// The category of a single field violation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
  /// Malformed identifier or unparsable date.
  Format,
  /// A mandatory field or role is absent.
  RequiredField,
  /// A birth date is in the future or does not post-date an ancestor's.
  Chronology,
  /// Two or more of the six identifiers coincide.
  DuplicateIdentifier,
  /// A value has the wrong JSON type or is outside its enumerated domain.
  Type,
}

/// A violation not yet attached to a field path.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{message}")]
pub struct FieldError {
  pub kind:    ViolationKind,
  pub message: String,
}

impl FieldError {
  pub fn new(kind: ViolationKind, message: impl Into<String>) -> Self {
    Self {
      kind,
      message: message.into(),
    }
  }

  pub fn format(message: impl Into<String>) -> Self {
    Self::new(ViolationKind::Format, message)
  }

  pub fn required() -> Self {
    Self::new(ViolationKind::RequiredField, "champ obligatoire")
  }

  pub fn chronology(message: impl Into<String>) -> Self {
    Self::new(ViolationKind::Chronology, message)
  }

  pub fn duplicate_identifier() -> Self {
    Self::new(
      ViolationKind::DuplicateIdentifier,
      "tous les NNI du pedigree doivent être uniques",
    )
  }

  pub fn type_mismatch(message: impl Into<String>) -> Self {
    Self::new(ViolationKind::Type, message)
  }
}
