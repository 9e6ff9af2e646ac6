//! Violation collection and rendering.
//!
//! Pipeline:
//!   rule / field check
//!     └─ Collector::push(FieldPath, FieldError)   (every violation kept)
//!          └─ Collector::finish()                 → FieldErrorMap
//!               (first violation per path wins, canonical path order)

use std::{collections::HashSet, fmt};

use pedigree_core::role::PedigreeRole;
use serde::{Serialize, ser::SerializeMap};
use thiserror::Error;

use crate::{
  error::{FieldError, ViolationKind},
  keys,
};

// ─── Paths ───────────────────────────────────────────────────────────────────

/// The top-level part of a record a path points into. Declaration order is
/// reporting order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Section {
  /// The input as a whole.
  Root,
  Role(PedigreeRole),
  Complementary,
  CreatedBy,
}

impl Section {
  pub fn key(self) -> &'static str {
    match self {
      Self::Root => "",
      Self::Role(role) => role.key(),
      Self::Complementary => keys::COMPLEMENTARY,
      Self::CreatedBy => keys::CREATED_BY,
    }
  }

  fn attributes(self) -> &'static [&'static str] {
    match self {
      Self::Role(role) => keys::role_attributes(role),
      Self::Complementary => keys::complementary_attributes(),
      Self::Root | Self::CreatedBy => &[],
    }
  }
}

/// A dotted field path such as `infos_sujet.date_naissance`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FieldPath {
  section: Section,
  field:   Option<&'static str>,
}

impl FieldPath {
  pub const ROOT: FieldPath = FieldPath::section(Section::Root);

  pub const fn section(section: Section) -> Self {
    Self {
      section,
      field: None,
    }
  }

  pub const fn field(section: Section, field: &'static str) -> Self {
    Self {
      section,
      field: Some(field),
    }
  }

  pub const fn role(role: PedigreeRole, field: &'static str) -> Self {
    Self::field(Section::Role(role), field)
  }

  /// Section first, then the section-level path, then attributes in their
  /// declared order.
  fn rank(&self) -> (Section, usize) {
    let field_rank = match self.field {
      None => 0,
      Some(f) => self
        .section
        .attributes()
        .iter()
        .position(|a| *a == f)
        .map_or(usize::MAX, |i| i + 1),
    };
    (self.section, field_rank)
  }
}

impl fmt::Display for FieldPath {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    match self.field {
      None => f.write_str(self.section.key()),
      Some(field) => write!(f, "{}.{field}", self.section.key()),
    }
  }
}

// ─── Collector ───────────────────────────────────────────────────────────────

/// Accumulates violations in discovery order. Never short-circuits.
#[derive(Debug, Default)]
pub(crate) struct Collector {
  found: Vec<(FieldPath, FieldError)>,
}

impl Collector {
  pub(crate) fn push(&mut self, path: FieldPath, error: FieldError) {
    self.found.push((path, error));
  }

  pub(crate) fn is_empty(&self) -> bool { self.found.is_empty() }

  /// Keep the first violation per path and order the survivors.
  pub(crate) fn finish(self) -> FieldErrorMap {
    let mut seen = HashSet::new();
    let mut kept: Vec<_> = self
      .found
      .into_iter()
      .filter(|(path, _)| seen.insert(*path))
      .collect();
    // Stable: equal ranks only arise for unknown attributes, which then keep
    // discovery order.
    kept.sort_by_key(|(path, _)| path.rank());

    FieldErrorMap {
      entries: kept
        .into_iter()
        .map(|(path, error)| FieldEntry {
          path:    path.to_string(),
          kind:    error.kind,
          message: error.message,
        })
        .collect(),
    }
  }
}

// ─── FieldErrorMap ───────────────────────────────────────────────────────────

/// One rendered violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldEntry {
  pub path:    String,
  pub kind:    ViolationKind,
  pub message: String,
}

/// An ordered mapping from dotted field path to a single message.
///
/// Serializes as a plain JSON object `{ "path": "message", … }` in
/// reporting order. The violation kind is kept for programmatic callers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Error)]
#[error("{} invalid field(s)", .entries.len())]
pub struct FieldErrorMap {
  entries: Vec<FieldEntry>,
}

impl FieldErrorMap {
  pub fn is_empty(&self) -> bool { self.entries.is_empty() }

  pub fn len(&self) -> usize { self.entries.len() }

  pub fn get(&self, path: &str) -> Option<&FieldEntry> {
    self.entries.iter().find(|e| e.path == path)
  }

  /// The message at `path`, if any.
  pub fn message(&self, path: &str) -> Option<&str> {
    self.get(path).map(|e| e.message.as_str())
  }

  pub fn kind(&self, path: &str) -> Option<ViolationKind> {
    self.get(path).map(|e| e.kind)
  }

  pub fn paths(&self) -> impl Iterator<Item = &str> {
    self.entries.iter().map(|e| e.path.as_str())
  }

  pub fn iter(&self) -> std::slice::Iter<'_, FieldEntry> { self.entries.iter() }
}

impl<'a> IntoIterator for &'a FieldErrorMap {
  type IntoIter = std::slice::Iter<'a, FieldEntry>;
  type Item = &'a FieldEntry;

  fn into_iter(self) -> Self::IntoIter { self.entries.iter() }
}

impl Serialize for FieldErrorMap {
  fn serialize<S: serde::Serializer>(
    &self,
    serializer: S,
  ) -> Result<S::Ok, S::Error> {
    let mut map = serializer.serialize_map(Some(self.entries.len()))?;
    for entry in &self.entries {
      map.serialize_entry(&entry.path, &entry.message)?;
    }
    map.end()
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn paths_render_dotted() {
    assert_eq!(
      FieldPath::role(PedigreeRole::Father, keys::BIRTH_DATE).to_string(),
      "pere.date_naissance"
    );
    assert_eq!(
      FieldPath::section(Section::Role(PedigreeRole::Mother)).to_string(),
      "infos_mere"
    );
    assert_eq!(
      FieldPath::field(Section::Complementary, keys::FARM).to_string(),
      "complem.exploitation"
    );
    assert_eq!(FieldPath::section(Section::CreatedBy).to_string(), "createdBy");
    assert_eq!(FieldPath::ROOT.to_string(), "");
  }

  #[test]
  fn first_violation_per_path_wins() {
    let path = FieldPath::role(PedigreeRole::Subject, keys::BIRTH_DATE);
    let mut c = Collector::default();
    c.push(path, FieldError::chronology("first"));
    c.push(path, FieldError::chronology("second"));
    let map = c.finish();
    assert_eq!(map.len(), 1);
    assert_eq!(map.message("infos_sujet.date_naissance"), Some("first"));
  }

  #[test]
  fn distinct_paths_are_all_kept_in_reporting_order() {
    let mut c = Collector::default();
    c.push(FieldPath::section(Section::CreatedBy), FieldError::required());
    c.push(
      FieldPath::role(PedigreeRole::PaternalGrandmother, keys::NNI),
      FieldError::format("x"),
    );
    c.push(
      FieldPath::field(Section::Complementary, keys::BREEDER),
      FieldError::required(),
    );
    c.push(
      FieldPath::role(PedigreeRole::Subject, keys::ANIMAL_TYPE),
      FieldError::type_mismatch("x"),
    );
    c.push(
      FieldPath::role(PedigreeRole::MaternalGrandfather, keys::BREED),
      FieldError::type_mismatch("x"),
    );
    c.push(
      FieldPath::role(PedigreeRole::Subject, keys::NNI),
      FieldError::duplicate_identifier(),
    );
    c.push(
      FieldPath::role(PedigreeRole::Father, keys::BIRTH_DATE),
      FieldError::chronology("x"),
    );

    let map = c.finish();
    let paths: Vec<_> = map.paths().collect();
    assert_eq!(
      paths,
      [
        "infos_sujet.nni",
        "infos_sujet.type_animal",
        "grand_pere_maternel.race",
        "pere.date_naissance",
        "grand_mere_paternelle.nni",
        "complem.eleveur",
        "createdBy",
      ]
    );
  }

  #[test]
  fn serializes_as_flat_object() {
    let mut c = Collector::default();
    c.push(
      FieldPath::role(PedigreeRole::Mother, keys::NNI),
      FieldError::format("NNI invalide"),
    );
    let json = serde_json::to_value(c.finish()).unwrap();
    assert_eq!(json, serde_json::json!({ "infos_mere.nni": "NNI invalide" }));
  }
}
