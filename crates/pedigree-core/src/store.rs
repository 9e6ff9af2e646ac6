//! The `PedigreeStore` trait: the persistence collaborator's contract.
//!
//! A store only ever receives records that already passed validation. It is
//! responsible for what validation cannot see: uniqueness of the subject NNI
//! against previously stored records, identity assignment and timestamps.

use std::future::Future;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Nni, record::PedigreeRecord};

/// A record as persisted, with its storage identity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredPedigree {
  pub id:         Uuid,
  #[serde(flatten)]
  pub record:     PedigreeRecord,
  pub created_at: DateTime<Utc>,
  pub updated_at: DateTime<Utc>,
}

/// What a store failure means to a caller.
pub trait StoreError: std::error::Error + Send + Sync + 'static {
  /// True when a write was refused because another record already uses the
  /// subject NNI.
  fn is_conflict(&self) -> bool;
}

/// Abstraction over a pedigree storage backend.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait PedigreeStore: Send + Sync {
  type Error: StoreError;

  /// Persist a new record. Fails with a conflict if another stored record
  /// already uses the same subject NNI; the check and the write are atomic.
  fn insert(
    &self,
    record: PedigreeRecord,
  ) -> impl Future<Output = Result<StoredPedigree, Self::Error>> + Send + '_;

  /// Retrieve a record by id. Returns `None` if not found.
  fn get(
    &self,
    id: Uuid,
  ) -> impl Future<Output = Result<Option<StoredPedigree>, Self::Error>> + Send + '_;

  /// All stored records, oldest first.
  fn list(
    &self,
  ) -> impl Future<Output = Result<Vec<StoredPedigree>, Self::Error>> + Send + '_;

  /// Look up the record whose subject carries `nni`.
  fn find_by_nni<'a>(
    &'a self,
    nni: &'a Nni,
  ) -> impl Future<Output = Result<Option<StoredPedigree>, Self::Error>> + Send + 'a;

  /// Replace the record stored under `id` with an already-merged and
  /// re-validated `record`, bumping `updated_at`. Fails with a conflict if
  /// a different record already uses the new subject NNI.
  fn replace(
    &self,
    id: Uuid,
    record: PedigreeRecord,
  ) -> impl Future<Output = Result<StoredPedigree, Self::Error>> + Send + '_;
}
