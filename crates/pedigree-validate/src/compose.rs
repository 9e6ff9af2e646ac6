//! Record composer: runs every schema, then the cross-role rules.

use chrono::NaiveDate;
use pedigree_core::{
  record::{PedigreeRecord, UpdatePedigreeRecord},
  role::PedigreeRole,
};
use serde_json::Value;

use crate::{
  FieldErrorMap,
  consistency::{self, Lineage},
  error::FieldError,
  field,
  report::{Collector, FieldPath, Section},
  schema::{self, Mode, Reader},
};

/// Validate a full record for creation, as of today.
pub fn validate_create(
  input: &Value,
) -> Result<PedigreeRecord, FieldErrorMap> {
  validate_create_as_of(input, field::today())
}

/// Validate a full record for creation; birth dates after `today` are
/// rejected.
pub fn validate_create_as_of(
  input: &Value,
  today: NaiveDate,
) -> Result<PedigreeRecord, FieldErrorMap> {
  let record = complete(run(input, Mode::Create, today)?)?;
  tracing::debug!(nni = %record.subject.nni, "pedigree accepted");
  Ok(record)
}

/// Validate a partial record for update, as of today.
pub fn validate_update(
  input: &Value,
) -> Result<UpdatePedigreeRecord, FieldErrorMap> {
  validate_update_as_of(input, field::today())
}

/// Validate a partial record. Only present roles and attributes are
/// checked, and cross-role rules run only where both operands are present.
pub fn validate_update_as_of(
  input: &Value,
  today: NaiveDate,
) -> Result<UpdatePedigreeRecord, FieldErrorMap> {
  let update = run(input, Mode::Update, today)?;
  tracing::debug!("pedigree update accepted");
  Ok(update)
}

/// Promote a create-mode draft that produced no violations.
///
/// Create mode reports every missing role and attribute, so an incomplete
/// draft here still gets a root violation rather than an empty rejection.
pub(crate) fn complete(
  draft: UpdatePedigreeRecord,
) -> Result<PedigreeRecord, FieldErrorMap> {
  draft.complete().ok_or_else(|| {
    let mut sink = Collector::default();
    sink.push(FieldPath::ROOT, FieldError::required());
    rejected(sink)
  })
}

fn rejected(sink: Collector) -> FieldErrorMap {
  let map = sink.finish();
  tracing::debug!(violations = map.len(), "pedigree rejected");
  map
}

/// Parse every section into a draft and collect all violations, including
/// cross-role ones over whatever parsed. The draft is returned only when no
/// violation was found.
fn run(
  input: &Value,
  mode: Mode,
  today: NaiveDate,
) -> Result<UpdatePedigreeRecord, FieldErrorMap> {
  let mut sink = Collector::default();

  let Some(root) = input.as_object() else {
    sink.push(
      FieldPath::ROOT,
      FieldError::type_mismatch(format!(
        "type invalide : objet attendu, {} reçu",
        field::json_type_name(input)
      )),
    );
    return Err(rejected(sink));
  };

  let mut draft = UpdatePedigreeRecord::default();
  for role in PedigreeRole::ALL {
    let Some(reader) = Reader::open(root, Section::Role(role), mode, &mut sink)
    else {
      continue;
    };
    match role {
      PedigreeRole::Subject => {
        draft.subject = Some(schema::subject(&reader, today, &mut sink));
      }
      PedigreeRole::Mother => {
        draft.mother = Some(schema::ancestor(&reader, today, &mut sink));
      }
      PedigreeRole::MaternalGrandfather => {
        draft.maternal_grandfather =
          Some(schema::ancestor(&reader, today, &mut sink));
      }
      PedigreeRole::Father => {
        draft.father = Some(schema::ancestor(&reader, today, &mut sink));
      }
      PedigreeRole::PaternalGrandfather => {
        draft.paternal_grandfather =
          Some(schema::ancestor(&reader, today, &mut sink));
      }
      PedigreeRole::PaternalGrandmother => {
        draft.paternal_grandmother =
          Some(schema::ancestor(&reader, today, &mut sink));
      }
    }
  }

  draft.complementary =
    Reader::open(root, Section::Complementary, mode, &mut sink)
      .map(|reader| schema::complementary(&reader, &mut sink));
  draft.created_by = schema::created_by(root, mode, &mut sink);

  consistency::check(&Lineage::from(&draft), &mut sink);

  if sink.is_empty() {
    Ok(draft)
  } else {
    Err(rejected(sink))
  }
}
