//! Stateless validation endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `POST` | `/pedigrees/validate` | Create-mode dry run; 200 + normalized record or 422 |
//! | `POST` | `/pedigrees/validate-update` | Update-mode dry run |
//! | `GET`  | `/nni/{value}` | Live identifier check |
//! | `GET`  | `/birth-date/{value}` | Live birth-date check |

use axum::{Json, extract::Path};
use pedigree_core::record::{PedigreeRecord, UpdatePedigreeRecord};
use serde::Serialize;
use serde_json::Value;

use crate::error::ApiError;

// ─── Dry runs ─────────────────────────────────────────────────────────────────

/// `POST /pedigrees/validate`
pub async fn create(
  Json(body): Json<Value>,
) -> Result<Json<PedigreeRecord>, ApiError> {
  pedigree_validate::validate_create(&body)
    .map(Json)
    .map_err(ApiError::Invalid)
}

/// `POST /pedigrees/validate-update`
pub async fn update(
  Json(body): Json<Value>,
) -> Result<Json<UpdatePedigreeRecord>, ApiError> {
  pedigree_validate::validate_update(&body)
    .map(Json)
    .map_err(ApiError::Invalid)
}

// ─── Live field checks ────────────────────────────────────────────────────────

/// Verdict for a single field typed into a form.
#[derive(Debug, Serialize)]
pub struct FieldCheck {
  /// The normalized value when valid, otherwise the input unchanged.
  pub value: String,
  pub valid: bool,
}

/// `GET /nni/{value}`
pub async fn nni(Path(value): Path<String>) -> Json<FieldCheck> {
  let check = match pedigree_validate::field::validate_identifier(&value) {
    Ok(nni) => FieldCheck {
      value: nni.into(),
      valid: true,
    },
    Err(_) => FieldCheck {
      value,
      valid: false,
    },
  };
  Json(check)
}

/// `GET /birth-date/{value}`
pub async fn birth_date(Path(value): Path<String>) -> Json<FieldCheck> {
  let valid = pedigree_validate::validate_birth_date(&value);
  Json(FieldCheck { value, valid })
}
