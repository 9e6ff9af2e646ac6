//! Enumerated animal attributes: breed, sex and production type.
//!
//! The wire value of each variant is its snake_case name; serde and strum
//! agree on it so that the validator's allowed-value listing and the JSON
//! encoding never drift apart.

use serde::{Deserialize, Serialize};
use strum::{AsRefStr, Display, EnumIter, EnumString};

/// Cattle breeds accepted in a pedigree record.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum Breed {
  Charolaise,
  Limousine,
  BlondeDAquitaine,
  Salers,
  Aubrac,
  Gasconne,
  Bazadaise,
  Parthenaise,
  RougeDesPres,
  Montbeliarde,
  Normande,
  PrimHolstein,
  Abondance,
  Tarentaise,
  /// Cross-bred animal.
  Croisee,
}

/// Sex of the subject animal.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
pub enum Sex {
  #[serde(rename = "male")]
  #[strum(serialize = "male")]
  Male,
  #[serde(rename = "femelle")]
  #[strum(serialize = "femelle")]
  Female,
}

/// Production orientation of the subject animal.
#[derive(
  Debug,
  Clone,
  Copy,
  PartialEq,
  Eq,
  Hash,
  Serialize,
  Deserialize,
  Display,
  EnumString,
  EnumIter,
  AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnimalType {
  /// Beef suckler herd.
  Allaitant,
  /// Dairy herd.
  Laitier,
  Mixte,
}
