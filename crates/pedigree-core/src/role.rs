//! The six fixed genealogical positions of a three-generation pedigree.

use serde::{Deserialize, Serialize};

/// A position in the pedigree tree.
///
/// Declaration order is the canonical reporting order: the maternal line is
/// listed before the paternal line, each parent followed by its ancestors.
#[derive(
  Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
pub enum PedigreeRole {
  #[serde(rename = "infos_sujet")]
  Subject,
  #[serde(rename = "infos_mere")]
  Mother,
  #[serde(rename = "grand_pere_maternel")]
  MaternalGrandfather,
  #[serde(rename = "pere")]
  Father,
  #[serde(rename = "grand_pere_paternel")]
  PaternalGrandfather,
  #[serde(rename = "grand_mere_paternelle")]
  PaternalGrandmother,
}

impl PedigreeRole {
  /// Every role, in reporting order.
  pub const ALL: [PedigreeRole; 6] = [
    Self::Subject,
    Self::Mother,
    Self::MaternalGrandfather,
    Self::Father,
    Self::PaternalGrandfather,
    Self::PaternalGrandmother,
  ];

  /// The JSON key under which this role appears in a record.
  pub fn key(self) -> &'static str {
    match self {
      Self::Subject => "infos_sujet",
      Self::Mother => "infos_mere",
      Self::MaternalGrandfather => "grand_pere_maternel",
      Self::Father => "pere",
      Self::PaternalGrandfather => "grand_pere_paternel",
      Self::PaternalGrandmother => "grand_mere_paternelle",
    }
  }

  /// The recorded ancestors one generation up. Not every biological parent
  /// is tracked: the mother's mother is absent from the record shape.
  pub fn parents(self) -> &'static [PedigreeRole] {
    match self {
      Self::Subject => &[Self::Mother, Self::Father],
      Self::Mother => &[Self::MaternalGrandfather],
      Self::Father => &[Self::PaternalGrandfather, Self::PaternalGrandmother],
      Self::MaternalGrandfather
      | Self::PaternalGrandfather
      | Self::PaternalGrandmother => &[],
    }
  }

  /// French possessive phrase used in user-facing messages, e.g.
  /// `"de la mère"`.
  pub fn possessive(self) -> &'static str {
    match self {
      Self::Subject => "du sujet",
      Self::Mother => "de la mère",
      Self::MaternalGrandfather => "du grand-père maternel",
      Self::Father => "du père",
      Self::PaternalGrandfather => "du grand-père paternel",
      Self::PaternalGrandmother => "de la grand-mère paternelle",
    }
  }
}
