//! JSON keys of the raw record shape.
//!
//! Role keys live on [`pedigree_core::role::PedigreeRole::key`]; everything
//! below a role or at the top level is named here.

use pedigree_core::role::PedigreeRole;

pub const NNI: &str = "nni";
pub const BIRTH_DATE: &str = "date_naissance";
pub const BREED: &str = "race";
pub const SEX: &str = "sexe";
pub const ANIMAL_TYPE: &str = "type_animal";

pub const COMPLEMENTARY: &str = "complem";
pub const BREEDER: &str = "eleveur";
pub const FARM: &str = "exploitation";
pub const LOCAL_MANAGER: &str = "responsable_local";

pub const CREATED_BY: &str = "createdBy";

const SUBJECT_ATTRIBUTES: &[&str] = &[NNI, BIRTH_DATE, BREED, SEX, ANIMAL_TYPE];
const ANCESTOR_ATTRIBUTES: &[&str] = &[NNI, BIRTH_DATE, BREED];
const COMPLEMENTARY_ATTRIBUTES: &[&str] = &[BREEDER, FARM, LOCAL_MANAGER];

/// The attributes a role carries, in reporting order.
pub fn role_attributes(role: PedigreeRole) -> &'static [&'static str] {
  match role {
    PedigreeRole::Subject => SUBJECT_ATTRIBUTES,
    _ => ANCESTOR_ATTRIBUTES,
  }
}

/// The attributes of the `complem` object, in reporting order.
pub fn complementary_attributes() -> &'static [&'static str] {
  COMPLEMENTARY_ATTRIBUTES
}
