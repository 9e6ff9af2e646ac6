//! Role schemas: per-section composition of field validators.
//!
//! A schema reads every attribute of its section, records a violation for
//! each one that fails, and returns whatever parsed successfully as a
//! partial shape. Whether a missing attribute is a violation depends on the
//! [`Mode`].

use chrono::NaiveDate;
use pedigree_core::{
  animal::{AnimalType, Breed, Sex},
  record::{AncestorUpdate, ComplementaryUpdate, SubjectUpdate},
};
use serde_json::{Map, Value};

use crate::{
  error::FieldError,
  field, keys,
  report::{Collector, FieldPath, Section},
};

/// Which record shape is being validated.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
  /// Every role and attribute is required.
  Create,
  /// Only what is present is checked.
  Update,
}

/// Read access to one JSON object of the input, addressed by its section.
pub(crate) struct Reader<'a> {
  object:  &'a Map<String, Value>,
  section: Section,
  mode:    Mode,
}

impl<'a> Reader<'a> {
  /// Locate `section` under `root`.
  ///
  /// Returns `None` when the section is absent (a violation only in create
  /// mode) or is not a JSON object (always a violation).
  pub(crate) fn open(
    root: &'a Map<String, Value>,
    section: Section,
    mode: Mode,
    sink: &mut Collector,
  ) -> Option<Self> {
    let path = FieldPath::section(section);
    match root.get(section.key()) {
      None | Some(Value::Null) => {
        if mode == Mode::Create {
          sink.push(path, FieldError::required());
        }
        None
      }
      Some(Value::Object(object)) => Some(Self {
        object,
        section,
        mode,
      }),
      Some(other) => {
        sink.push(
          path,
          FieldError::type_mismatch(format!(
            "type invalide : objet attendu, {} reçu",
            field::json_type_name(other)
          )),
        );
        None
      }
    }
  }

  /// Read and validate one attribute. An absent or `null` attribute is
  /// required in create mode and skipped in update mode.
  pub(crate) fn attribute<T>(
    &self,
    name: &'static str,
    sink: &mut Collector,
    validate: impl FnOnce(&str) -> Result<T, FieldError>,
  ) -> Option<T> {
    let path = FieldPath::field(self.section, name);
    let outcome = match self.object.get(name) {
      None | Some(Value::Null) => match self.mode {
        Mode::Create => Err(FieldError::required()),
        Mode::Update => return None,
      },
      Some(value) => field::as_str(value).and_then(validate),
    };
    outcome.map_err(|e| sink.push(path, e)).ok()
  }
}

// ─── Role schemas ────────────────────────────────────────────────────────────

/// `infos_sujet`: identifier, birth date, breed, sex, animal type.
pub(crate) fn subject(
  reader: &Reader<'_>,
  today: NaiveDate,
  sink: &mut Collector,
) -> SubjectUpdate {
  SubjectUpdate {
    nni:         reader.attribute(keys::NNI, sink, field::validate_identifier),
    birth_date:  reader.attribute(keys::BIRTH_DATE, sink, |s| {
      field::validate_birth_date_as_of(s, today)
    }),
    breed:       reader.attribute(keys::BREED, sink, |s| {
      field::validate_enum::<Breed>(s, keys::BREED)
    }),
    sex:         reader.attribute(keys::SEX, sink, |s| {
      field::validate_enum::<Sex>(s, keys::SEX)
    }),
    animal_type: reader.attribute(keys::ANIMAL_TYPE, sink, |s| {
      field::validate_enum::<AnimalType>(s, keys::ANIMAL_TYPE)
    }),
  }
}

/// Any ancestor role: identifier, birth date, breed.
pub(crate) fn ancestor(
  reader: &Reader<'_>,
  today: NaiveDate,
  sink: &mut Collector,
) -> AncestorUpdate {
  AncestorUpdate {
    nni:        reader.attribute(keys::NNI, sink, field::validate_identifier),
    birth_date: reader.attribute(keys::BIRTH_DATE, sink, |s| {
      field::validate_birth_date_as_of(s, today)
    }),
    breed:      reader.attribute(keys::BREED, sink, |s| {
      field::validate_enum::<Breed>(s, keys::BREED)
    }),
  }
}

/// `complem`: three independent non-empty references.
pub(crate) fn complementary(
  reader: &Reader<'_>,
  sink: &mut Collector,
) -> ComplementaryUpdate {
  ComplementaryUpdate {
    breeder:       reader.attribute(
      keys::BREEDER,
      sink,
      field::validate_required_string,
    ),
    farm:          reader.attribute(
      keys::FARM,
      sink,
      field::validate_required_string,
    ),
    local_manager: reader.attribute(
      keys::LOCAL_MANAGER,
      sink,
      field::validate_required_string,
    ),
  }
}

/// The top-level `createdBy` audit string.
pub(crate) fn created_by(
  root: &Map<String, Value>,
  mode: Mode,
  sink: &mut Collector,
) -> Option<String> {
  let path = FieldPath::section(Section::CreatedBy);
  let outcome = match root.get(keys::CREATED_BY) {
    None | Some(Value::Null) => match mode {
      Mode::Create => Err(FieldError::required()),
      Mode::Update => return None,
    },
    Some(value) => {
      field::as_str(value).and_then(field::validate_required_string)
    }
  };
  outcome.map_err(|e| sink.push(path, e)).ok()
}
