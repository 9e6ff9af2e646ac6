//! Cross-role rules evaluated over the normalized operands of a record.
//!
//! Every rule is independent: each one inspects the [`Lineage`] and pushes
//! its own violations, so one failing rule never hides another. A rule whose
//! operands are missing (absent role, or a field that failed to parse) is
//! skipped rather than failed.

use std::collections::{BTreeMap, HashSet};

use chrono::NaiveDate;
use pedigree_core::{Nni, record::UpdatePedigreeRecord, role::PedigreeRole};

use crate::{
  error::FieldError,
  keys,
  report::{Collector, FieldPath},
};

/// The parts of a role that cross-role rules look at.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Operand {
  pub(crate) nni:        Option<Nni>,
  pub(crate) birth_date: Option<NaiveDate>,
}

/// Operands of every role that is present in the candidate.
#[derive(Debug, Clone, Default)]
pub(crate) struct Lineage {
  roles: BTreeMap<PedigreeRole, Operand>,
}

impl Lineage {
  pub(crate) fn insert(&mut self, role: PedigreeRole, operand: Operand) {
    self.roles.insert(role, operand);
  }

  fn birth_date(&self, role: PedigreeRole) -> Option<NaiveDate> {
    self.roles.get(&role).and_then(|o| o.birth_date)
  }

  fn identifiers(&self) -> impl Iterator<Item = &Nni> {
    self.roles.values().filter_map(|o| o.nni.as_ref())
  }
}

impl From<&UpdatePedigreeRecord> for Lineage {
  fn from(draft: &UpdatePedigreeRecord) -> Self {
    let mut lineage = Lineage::default();
    if let Some(s) = &draft.subject {
      lineage.insert(PedigreeRole::Subject, Operand {
        nni:        s.nni.clone(),
        birth_date: s.birth_date,
      });
    }
    for role in PedigreeRole::ALL {
      if let Some(a) = draft.ancestor(role) {
        lineage.insert(role, Operand {
          nni:        a.nni.clone(),
          birth_date: a.birth_date,
        });
      }
    }
    lineage
  }
}

// ─── Rules ───────────────────────────────────────────────────────────────────

type Rule = fn(&Lineage, &mut Collector);

const RULES: &[Rule] = &[check_chronology, check_uniqueness];

/// Run every cross-role rule.
pub(crate) fn check(lineage: &Lineage, sink: &mut Collector) {
  for rule in RULES {
    rule(lineage, sink);
  }
}

/// Every `(child, ancestor)` pair whose birth dates must be strictly
/// ordered, in reporting order.
pub fn chronology_pairs() -> impl Iterator<Item = (PedigreeRole, PedigreeRole)>
{
  PedigreeRole::ALL.into_iter().flat_map(|child| {
    child.parents().iter().map(move |&ancestor| (child, ancestor))
  })
}

/// A child must be born strictly after each recorded parent. Equal dates
/// fail.
fn check_chronology(lineage: &Lineage, sink: &mut Collector) {
  for (child, ancestor) in chronology_pairs() {
    let (Some(born), Some(ancestor_born)) =
      (lineage.birth_date(child), lineage.birth_date(ancestor))
    else {
      continue;
    };
    if born <= ancestor_born {
      sink.push(
        FieldPath::role(child, keys::BIRTH_DATE),
        FieldError::chronology(format!(
          "date invalide : doit être postérieure à la date de naissance {}",
          ancestor.possessive()
        )),
      );
    }
  }
}

/// No identifier may appear twice among the present roles. The violation
/// names the conflict generically and is attached to the subject.
fn check_uniqueness(lineage: &Lineage, sink: &mut Collector) {
  let mut seen = HashSet::new();
  let duplicated = lineage.identifiers().any(|nni| !seen.insert(nni));
  if duplicated {
    sink.push(
      FieldPath::role(PedigreeRole::Subject, keys::NNI),
      FieldError::duplicate_identifier(),
    );
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::error::ViolationKind;

  fn operand(nni: &str, date: &str) -> Operand {
    Operand {
      nni:        Some(Nni::parse(nni).unwrap()),
      birth_date: Some(date.parse().unwrap()),
    }
  }

  fn full_lineage() -> Lineage {
    let mut l = Lineage::default();
    l.insert(PedigreeRole::Subject, operand("FR0000000001", "2020-01-01"));
    l.insert(PedigreeRole::Mother, operand("FR0000000002", "2015-01-01"));
    l.insert(
      PedigreeRole::MaternalGrandfather,
      operand("FR0000000003", "2010-01-01"),
    );
    l.insert(PedigreeRole::Father, operand("FR0000000004", "2014-01-01"));
    l.insert(
      PedigreeRole::PaternalGrandfather,
      operand("FR0000000005", "2008-01-01"),
    );
    l.insert(
      PedigreeRole::PaternalGrandmother,
      operand("FR0000000006", "2009-01-01"),
    );
    l
  }

  fn run(lineage: &Lineage) -> crate::FieldErrorMap {
    let mut sink = Collector::default();
    check(lineage, &mut sink);
    sink.finish()
  }

  #[test]
  fn pairs_cover_the_five_links() {
    let pairs: Vec<_> = chronology_pairs().collect();
    assert_eq!(pairs, [
      (PedigreeRole::Subject, PedigreeRole::Mother),
      (PedigreeRole::Subject, PedigreeRole::Father),
      (PedigreeRole::Mother, PedigreeRole::MaternalGrandfather),
      (PedigreeRole::Father, PedigreeRole::PaternalGrandfather),
      (PedigreeRole::Father, PedigreeRole::PaternalGrandmother),
    ]);
  }

  #[test]
  fn consistent_lineage_passes() {
    assert!(run(&full_lineage()).is_empty());
  }

  #[test]
  fn equal_dates_fail() {
    for (child, ancestor) in chronology_pairs() {
      let mut l = full_lineage();
      let shared: NaiveDate = "2012-05-05".parse().unwrap();
      l.roles.get_mut(&child).unwrap().birth_date = Some(shared);
      l.roles.get_mut(&ancestor).unwrap().birth_date = Some(shared);

      let map = run(&l);
      let path = format!("{}.date_naissance", child.key());
      assert_eq!(
        map.kind(&path),
        Some(ViolationKind::Chronology),
        "{child:?} vs {ancestor:?}: {map:?}"
      );
    }
  }

  #[test]
  fn every_failing_pair_is_reported() {
    let mut l = full_lineage();
    // Mother born after the subject, grandmother born after the father.
    l.roles.get_mut(&PedigreeRole::Mother).unwrap().birth_date =
      Some("2021-01-01".parse().unwrap());
    l.roles.get_mut(&PedigreeRole::PaternalGrandmother).unwrap().birth_date =
      Some("2019-01-01".parse().unwrap());

    let map = run(&l);
    assert_eq!(
      map.paths().collect::<Vec<_>>(),
      ["infos_sujet.date_naissance", "pere.date_naissance"]
    );
    assert!(
      map
        .message("infos_sujet.date_naissance")
        .unwrap()
        .contains("de la mère")
    );
  }

  #[test]
  fn first_failing_pair_wins_at_shared_path() {
    let mut l = full_lineage();
    l.roles.get_mut(&PedigreeRole::Subject).unwrap().birth_date =
      Some("2013-01-01".parse().unwrap());

    let map = run(&l);
    assert_eq!(map.len(), 1);
    assert!(
      map
        .message("infos_sujet.date_naissance")
        .unwrap()
        .ends_with("de la mère")
    );
  }

  #[test]
  fn missing_ancestor_skips_its_rules() {
    let mut l = full_lineage();
    l.roles.remove(&PedigreeRole::Mother);
    l.roles.get_mut(&PedigreeRole::MaternalGrandfather).unwrap().birth_date =
      Some("2019-12-31".parse().unwrap());
    assert!(run(&l).is_empty());
  }

  #[test]
  fn unparsed_date_skips_its_rules() {
    let mut l = full_lineage();
    l.roles.get_mut(&PedigreeRole::Father).unwrap().birth_date = None;
    l.roles.get_mut(&PedigreeRole::PaternalGrandfather).unwrap().birth_date =
      Some("2023-01-01".parse().unwrap());
    assert!(run(&l).is_empty());
  }

  #[test]
  fn any_duplicate_identifier_fails_once_on_subject() {
    let roles = PedigreeRole::ALL;
    for (i, a) in roles.iter().enumerate() {
      for b in &roles[i + 1..] {
        let mut l = full_lineage();
        let nni = l.roles[a].nni.clone();
        l.roles.get_mut(b).unwrap().nni = nni;

        let map = run(&l);
        assert_eq!(map.len(), 1, "{a:?}/{b:?}");
        assert_eq!(
          map.kind("infos_sujet.nni"),
          Some(ViolationKind::DuplicateIdentifier)
        );
      }
    }
  }

  #[test]
  fn swapping_distinct_identifiers_still_passes() {
    let mut l = full_lineage();
    let subject_nni = l.roles[&PedigreeRole::Subject].nni.clone();
    let father_nni = l.roles[&PedigreeRole::Father].nni.clone();
    l.roles.get_mut(&PedigreeRole::Subject).unwrap().nni = father_nni;
    l.roles.get_mut(&PedigreeRole::Father).unwrap().nni = subject_nni;
    assert!(run(&l).is_empty());
  }

  #[test]
  fn duplicates_among_present_roles_only() {
    let mut l = Lineage::default();
    l.insert(PedigreeRole::Mother, operand("FR0000000002", "2015-01-01"));
    l.insert(
      PedigreeRole::PaternalGrandmother,
      operand("fr0000000002", "2009-01-01"),
    );
    let map = run(&l);
    assert_eq!(
      map.kind("infos_sujet.nni"),
      Some(ViolationKind::DuplicateIdentifier)
    );
  }
}
