//! Pedigree record shapes.
//!
//! [`PedigreeRecord`] is the fully populated, normalized record produced by a
//! successful create-mode validation. [`UpdatePedigreeRecord`] mirrors it with
//! every role and every field optional; absent parts are left untouched when
//! an update is applied.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{
  Nni,
  animal::{AnimalType, Breed, Sex},
  role::PedigreeRole,
};

// ─── Roles ───────────────────────────────────────────────────────────────────

/// The animal the record identifies.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectInfo {
  pub nni:         Nni,
  #[serde(rename = "date_naissance")]
  pub birth_date:  NaiveDate,
  #[serde(rename = "race")]
  pub breed:       Breed,
  #[serde(rename = "sexe")]
  pub sex:         Sex,
  #[serde(rename = "type_animal")]
  pub animal_type: AnimalType,
}

/// Any of the five recorded ancestors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorInfo {
  pub nni:        Nni,
  #[serde(rename = "date_naissance")]
  pub birth_date: NaiveDate,
  #[serde(rename = "race")]
  pub breed:      Breed,
}

// ─── Complementary metadata ──────────────────────────────────────────────────

/// Non-genealogical references attached to a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplementaryInfo {
  #[serde(rename = "eleveur")]
  pub breeder:       String,
  #[serde(rename = "exploitation")]
  pub farm:          String,
  #[serde(rename = "responsable_local")]
  pub local_manager: String,
}

// ─── Full record ─────────────────────────────────────────────────────────────

/// A validated three-generation identification record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PedigreeRecord {
  #[serde(rename = "infos_sujet")]
  pub subject:              SubjectInfo,
  #[serde(rename = "infos_mere")]
  pub mother:               AncestorInfo,
  #[serde(rename = "grand_pere_maternel")]
  pub maternal_grandfather: AncestorInfo,
  #[serde(rename = "pere")]
  pub father:               AncestorInfo,
  #[serde(rename = "grand_pere_paternel")]
  pub paternal_grandfather: AncestorInfo,
  #[serde(rename = "grand_mere_paternelle")]
  pub paternal_grandmother: AncestorInfo,
  #[serde(rename = "complem")]
  pub complementary:        ComplementaryInfo,
  #[serde(rename = "createdBy")]
  pub created_by:           String,
}

impl PedigreeRecord {
  /// Overlay every field present in `update` onto this record.
  ///
  /// The result is not re-validated; callers that need the record-level
  /// invariants must run the merged record through the validator again.
  pub fn apply(&mut self, update: UpdatePedigreeRecord) {
    if let Some(s) = update.subject {
      s.apply_to(&mut self.subject);
    }
    let ancestors = [
      (update.mother, &mut self.mother),
      (update.maternal_grandfather, &mut self.maternal_grandfather),
      (update.father, &mut self.father),
      (update.paternal_grandfather, &mut self.paternal_grandfather),
      (update.paternal_grandmother, &mut self.paternal_grandmother),
    ];
    for (patch, target) in ancestors {
      if let Some(patch) = patch {
        patch.apply_to(target);
      }
    }
    if let Some(c) = update.complementary {
      c.apply_to(&mut self.complementary);
    }
    if let Some(created_by) = update.created_by {
      self.created_by = created_by;
    }
  }
}

// ─── Partial shapes ──────────────────────────────────────────────────────────

/// Subject fields supplied by an update; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nni:         Option<Nni>,
  #[serde(
    rename = "date_naissance",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub birth_date:  Option<NaiveDate>,
  #[serde(rename = "race", default, skip_serializing_if = "Option::is_none")]
  pub breed:       Option<Breed>,
  #[serde(rename = "sexe", default, skip_serializing_if = "Option::is_none")]
  pub sex:         Option<Sex>,
  #[serde(
    rename = "type_animal",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub animal_type: Option<AnimalType>,
}

impl SubjectUpdate {
  /// Promote to a full [`SubjectInfo`] if every field is present.
  pub fn complete(self) -> Option<SubjectInfo> {
    Some(SubjectInfo {
      nni:         self.nni?,
      birth_date:  self.birth_date?,
      breed:       self.breed?,
      sex:         self.sex?,
      animal_type: self.animal_type?,
    })
  }

  fn apply_to(self, target: &mut SubjectInfo) {
    if let Some(v) = self.nni {
      target.nni = v;
    }
    if let Some(v) = self.birth_date {
      target.birth_date = v;
    }
    if let Some(v) = self.breed {
      target.breed = v;
    }
    if let Some(v) = self.sex {
      target.sex = v;
    }
    if let Some(v) = self.animal_type {
      target.animal_type = v;
    }
  }
}

/// Ancestor fields supplied by an update; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AncestorUpdate {
  #[serde(default, skip_serializing_if = "Option::is_none")]
  pub nni:        Option<Nni>,
  #[serde(
    rename = "date_naissance",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub birth_date: Option<NaiveDate>,
  #[serde(rename = "race", default, skip_serializing_if = "Option::is_none")]
  pub breed:      Option<Breed>,
}

impl AncestorUpdate {
  pub fn complete(self) -> Option<AncestorInfo> {
    Some(AncestorInfo {
      nni:        self.nni?,
      birth_date: self.birth_date?,
      breed:      self.breed?,
    })
  }

  fn apply_to(self, target: &mut AncestorInfo) {
    if let Some(v) = self.nni {
      target.nni = v;
    }
    if let Some(v) = self.birth_date {
      target.birth_date = v;
    }
    if let Some(v) = self.breed {
      target.breed = v;
    }
  }
}

/// Complementary fields supplied by an update; every field optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComplementaryUpdate {
  #[serde(rename = "eleveur", default, skip_serializing_if = "Option::is_none")]
  pub breeder:       Option<String>,
  #[serde(
    rename = "exploitation",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub farm:          Option<String>,
  #[serde(
    rename = "responsable_local",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub local_manager: Option<String>,
}

impl ComplementaryUpdate {
  pub fn complete(self) -> Option<ComplementaryInfo> {
    Some(ComplementaryInfo {
      breeder:       self.breeder?,
      farm:          self.farm?,
      local_manager: self.local_manager?,
    })
  }

  fn apply_to(self, target: &mut ComplementaryInfo) {
    if let Some(v) = self.breeder {
      target.breeder = v;
    }
    if let Some(v) = self.farm {
      target.farm = v;
    }
    if let Some(v) = self.local_manager {
      target.local_manager = v;
    }
  }
}

/// A validated partial record; absent roles and fields are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdatePedigreeRecord {
  #[serde(
    rename = "infos_sujet",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub subject:              Option<SubjectUpdate>,
  #[serde(
    rename = "infos_mere",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub mother:               Option<AncestorUpdate>,
  #[serde(
    rename = "grand_pere_maternel",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub maternal_grandfather: Option<AncestorUpdate>,
  #[serde(rename = "pere", default, skip_serializing_if = "Option::is_none")]
  pub father:               Option<AncestorUpdate>,
  #[serde(
    rename = "grand_pere_paternel",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub paternal_grandfather: Option<AncestorUpdate>,
  #[serde(
    rename = "grand_mere_paternelle",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub paternal_grandmother: Option<AncestorUpdate>,
  #[serde(rename = "complem", default, skip_serializing_if = "Option::is_none")]
  pub complementary:        Option<ComplementaryUpdate>,
  #[serde(
    rename = "createdBy",
    default,
    skip_serializing_if = "Option::is_none"
  )]
  pub created_by:           Option<String>,
}

impl UpdatePedigreeRecord {
  /// The ancestor patch at `role`, or `None` for the subject or an absent
  /// role.
  pub fn ancestor(&self, role: PedigreeRole) -> Option<&AncestorUpdate> {
    match role {
      PedigreeRole::Subject => None,
      PedigreeRole::Mother => self.mother.as_ref(),
      PedigreeRole::MaternalGrandfather => self.maternal_grandfather.as_ref(),
      PedigreeRole::Father => self.father.as_ref(),
      PedigreeRole::PaternalGrandfather => self.paternal_grandfather.as_ref(),
      PedigreeRole::PaternalGrandmother => self.paternal_grandmother.as_ref(),
    }
  }

  /// True when the update changes nothing.
  pub fn is_empty(&self) -> bool { *self == Self::default() }

  /// Promote to a full [`PedigreeRecord`] if every role and field is
  /// present.
  pub fn complete(self) -> Option<PedigreeRecord> {
    Some(PedigreeRecord {
      subject:              self.subject?.complete()?,
      mother:               self.mother?.complete()?,
      maternal_grandfather: self.maternal_grandfather?.complete()?,
      father:               self.father?.complete()?,
      paternal_grandfather: self.paternal_grandfather?.complete()?,
      paternal_grandmother: self.paternal_grandmother?.complete()?,
      complementary:        self.complementary?.complete()?,
      created_by:           self.created_by?,
    })
  }
}
