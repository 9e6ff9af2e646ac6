//! Handlers for `/pedigrees` endpoints.
//!
//! | Method  | Path | Notes |
//! |---------|------|-------|
//! | `GET`   | `/pedigrees` | All stored records |
//! | `POST`  | `/pedigrees` | Body: raw record; 201 + stored record, 422 on violations |
//! | `GET`   | `/pedigrees/{id}` | 404 if not found |
//! | `GET`   | `/pedigrees/by-nni/{nni}` | Record whose subject carries `nni` |
//! | `PATCH` | `/pedigrees/{id}` | Body: partial record; merged result is re-validated |
//!
//! Subject-NNI uniqueness across records is enforced by the store alone;
//! its conflict errors come back as `409`.

use std::sync::Arc;

use axum::{
  Json,
  extract::{Path, State},
  http::StatusCode,
  response::IntoResponse,
};
use pedigree_core::{
  Nni,
  store::{PedigreeStore, StoredPedigree},
};
use serde_json::Value;
use uuid::Uuid;

use crate::error::ApiError;

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /pedigrees`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Vec<StoredPedigree>>, ApiError>
where
  S: PedigreeStore,
{
  let records = store
    .list()
    .await
    .map_err(ApiError::from_store)?;
  Ok(Json(records))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /pedigrees/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
) -> Result<Json<StoredPedigree>, ApiError>
where
  S: PedigreeStore,
{
  let record = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("pedigree {id} not found")))?;
  Ok(Json(record))
}

/// `GET /pedigrees/by-nni/{nni}`
pub async fn get_by_nni<S>(
  State(store): State<Arc<S>>,
  Path(raw): Path<String>,
) -> Result<Json<StoredPedigree>, ApiError>
where
  S: PedigreeStore,
{
  let nni = Nni::parse(&raw).map_err(|_| {
    ApiError::BadRequest(format!("{raw:?} is not a valid NNI"))
  })?;
  let record = store
    .find_by_nni(&nni)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("no pedigree for NNI {nni}")))?;
  Ok(Json(record))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// `POST /pedigrees`: validate, then hand the normalized record to the
/// store.
pub async fn create<S>(
  State(store): State<Arc<S>>,
  Json(body): Json<Value>,
) -> Result<impl IntoResponse, ApiError>
where
  S: PedigreeStore,
{
  let record = pedigree_validate::validate_create(&body).map_err(|errors| {
    tracing::warn!(violations = errors.len(), "pedigree submission rejected");
    ApiError::Invalid(errors)
  })?;

  let stored = store
    .insert(record)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(
    id = %stored.id,
    nni = %stored.record.subject.nni,
    "pedigree stored"
  );
  Ok((StatusCode::CREATED, Json(stored)))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// `PATCH /pedigrees/{id}`: body is a partial record.
///
/// The update is validated on its own first, so violations are reported
/// against the submitted paths. The merged record is then validated as a
/// full record, which catches chronology and uniqueness conflicts between
/// the update and the roles it left untouched. An empty body changes
/// nothing and returns the stored record as is.
pub async fn update_one<S>(
  State(store): State<Arc<S>>,
  Path(id): Path<Uuid>,
  Json(body): Json<Value>,
) -> Result<Json<StoredPedigree>, ApiError>
where
  S: PedigreeStore,
{
  let update =
    pedigree_validate::validate_update(&body).map_err(ApiError::Invalid)?;

  let existing = store
    .get(id)
    .await
    .map_err(ApiError::from_store)?
    .ok_or_else(|| ApiError::NotFound(format!("pedigree {id} not found")))?;
  if update.is_empty() {
    return Ok(Json(existing));
  }

  let mut merged = existing.record;
  merged.apply(update);
  let merged_json =
    serde_json::to_value(&merged).map_err(|e| ApiError::Store(Box::new(e)))?;
  let merged = pedigree_validate::validate_create(&merged_json).map_err(|errors| {
    tracing::warn!(%id, violations = errors.len(), "pedigree update rejected");
    ApiError::Invalid(errors)
  })?;

  let stored = store
    .replace(id, merged)
    .await
    .map_err(ApiError::from_store)?;
  tracing::info!(%id, "pedigree updated");
  Ok(Json(stored))
}
