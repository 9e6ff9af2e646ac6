//! Atomic field validators.
//!
//! Each validator takes the raw string form of one field and either returns
//! its normalized value or a [`FieldError`]. None of them know about paths,
//! roles, or whether the field was required; that is the schema layer's job.

use std::str::FromStr;

use chrono::{DateTime, NaiveDate, Utc};
use pedigree_core::Nni;
use serde_json::Value;
use strum::IntoEnumIterator;

use crate::error::FieldError;

/// The validation date used when the caller does not supply one.
pub fn today() -> NaiveDate { Utc::now().date_naive() }

/// Extract a string, or report the JSON type mismatch.
pub(crate) fn as_str(value: &Value) -> Result<&str, FieldError> {
  value.as_str().ok_or_else(|| {
    FieldError::type_mismatch(format!(
      "type invalide : chaîne de caractères attendue, {} reçu",
      json_type_name(value)
    ))
  })
}

pub(crate) fn json_type_name(value: &Value) -> &'static str {
  match value {
    Value::Null => "null",
    Value::Bool(_) => "booléen",
    Value::Number(_) => "nombre",
    Value::String(_) => "chaîne",
    Value::Array(_) => "tableau",
    Value::Object(_) => "objet",
  }
}

// ─── Identifier ──────────────────────────────────────────────────────────────

/// Upper-case `raw` and check it is two letters followed by ten digits.
pub fn validate_identifier(raw: &str) -> Result<Nni, FieldError> {
  if raw.is_empty() {
    return Err(FieldError::format("NNI invalide : valeur vide"));
  }
  Nni::parse(raw).map_err(|_| {
    FieldError::format(
      "NNI invalide : deux lettres suivies de dix chiffres attendues (ex. \
       FR1234567890)",
    )
  })
}

/// Live check for UI collaborators; same rule as [`validate_identifier`].
pub fn validate_identifier_format(raw: &str) -> bool {
  validate_identifier(raw).is_ok()
}

// ─── Birth date ──────────────────────────────────────────────────────────────

/// Parse a strict `YYYY-MM-DD` date, or an RFC 3339 timestamp reduced to its
/// UTC calendar date.
pub fn parse_date(raw: &str) -> Result<NaiveDate, FieldError> {
  let invalid =
    || FieldError::format("date invalide : format AAAA-MM-JJ attendu");
  if is_calendar_date(raw) {
    return NaiveDate::parse_from_str(raw, "%Y-%m-%d").map_err(|_| invalid());
  }
  DateTime::parse_from_rfc3339(raw)
    .map(|dt| dt.with_timezone(&Utc).date_naive())
    .map_err(|_| invalid())
}

/// Exactly four digits, a dash, two digits, a dash, two digits.
fn is_calendar_date(raw: &str) -> bool {
  let bytes = raw.as_bytes();
  bytes.len() == 10
    && bytes.iter().enumerate().all(|(i, b)| match i {
      4 | 7 => *b == b'-',
      _ => b.is_ascii_digit(),
    })
}

/// Parse a birth date and reject it if it lies after `today`.
pub fn validate_birth_date_as_of(
  raw: &str,
  today: NaiveDate,
) -> Result<NaiveDate, FieldError> {
  let date = parse_date(raw)?;
  if date > today {
    return Err(FieldError::chronology(
      "date invalide : la date de naissance ne peut pas être dans le futur",
    ));
  }
  Ok(date)
}

/// Live check for UI collaborators, against today's date.
pub fn validate_birth_date(raw: &str) -> bool {
  validate_birth_date_as_of(raw, today()).is_ok()
}

// ─── Enumerations ────────────────────────────────────────────────────────────

/// Check membership in an enumerated domain. The message lists every
/// allowed value so a form can show them.
pub fn validate_enum<E>(raw: &str, field: &str) -> Result<E, FieldError>
where
  E: FromStr + IntoEnumIterator + AsRef<str>,
{
  E::from_str(raw).map_err(|_| {
    let allowed: Vec<String> =
      E::iter().map(|v| v.as_ref().to_string()).collect();
    FieldError::type_mismatch(format!(
      "valeur invalide pour {field} : attendu l'une de {}",
      allowed.join(", ")
    ))
  })
}

// ─── Free text ───────────────────────────────────────────────────────────────

/// A reference string that must contain something other than whitespace.
pub fn validate_required_string(raw: &str) -> Result<String, FieldError> {
  let trimmed = raw.trim();
  if trimmed.is_empty() {
    return Err(FieldError::required());
  }
  Ok(trimmed.to_string())
}
