//! In-memory [`PedigreeStore`] used by the development server and tests.
//!
//! Records live in a `Vec` behind a tokio `RwLock`; nothing survives a
//! restart.

use std::sync::Arc;

use chrono::Utc;
use pedigree_core::{
  Error, Nni, Result,
  record::PedigreeRecord,
  store::{PedigreeStore, StoredPedigree},
};
use tokio::sync::RwLock;
use uuid::Uuid;

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
  records: Arc<RwLock<Vec<StoredPedigree>>>,
}

impl MemoryStore {
  pub fn new() -> Self { Self::default() }
}

/// Fail if a record other than `except` already uses `nni` for its subject.
fn ensure_unregistered(
  records: &[StoredPedigree],
  nni: &Nni,
  except: Option<Uuid>,
) -> Result<()> {
  let taken = records
    .iter()
    .any(|r| r.record.subject.nni == *nni && Some(r.id) != except);
  if taken {
    return Err(Error::NniAlreadyRegistered(nni.to_string()));
  }
  Ok(())
}

impl PedigreeStore for MemoryStore {
  type Error = Error;

  async fn insert(&self, record: PedigreeRecord) -> Result<StoredPedigree> {
    let mut records = self.records.write().await;
    ensure_unregistered(&records, &record.subject.nni, None)?;

    let now = Utc::now();
    let stored = StoredPedigree {
      id: Uuid::new_v4(),
      record,
      created_at: now,
      updated_at: now,
    };
    records.push(stored.clone());
    Ok(stored)
  }

  async fn get(&self, id: Uuid) -> Result<Option<StoredPedigree>> {
    let records = self.records.read().await;
    Ok(records.iter().find(|r| r.id == id).cloned())
  }

  async fn list(&self) -> Result<Vec<StoredPedigree>> {
    Ok(self.records.read().await.clone())
  }

  async fn find_by_nni<'a>(
    &'a self,
    nni: &'a Nni,
  ) -> Result<Option<StoredPedigree>> {
    let records = self.records.read().await;
    Ok(records.iter().find(|r| r.record.subject.nni == *nni).cloned())
  }

  async fn replace(
    &self,
    id: Uuid,
    record: PedigreeRecord,
  ) -> Result<StoredPedigree> {
    let mut records = self.records.write().await;
    ensure_unregistered(&records, &record.subject.nni, Some(id))?;

    let stored = records
      .iter_mut()
      .find(|r| r.id == id)
      .ok_or(Error::PedigreeNotFound(id))?;
    stored.record = record;
    stored.updated_at = Utc::now();
    Ok(stored.clone())
  }
}

#[cfg(test)]
mod tests {
  use pedigree_core::{
    animal::{AnimalType, Breed, Sex},
    record::{AncestorInfo, ComplementaryInfo, SubjectInfo},
    store::StoreError,
  };

  use super::*;

  fn ancestor(nni: &str, date: &str) -> AncestorInfo {
    AncestorInfo {
      nni:        Nni::parse(nni).unwrap(),
      birth_date: date.parse().unwrap(),
      breed:      Breed::Salers,
    }
  }

  fn record(subject_nni: &str) -> PedigreeRecord {
    PedigreeRecord {
      subject:              SubjectInfo {
        nni:         Nni::parse(subject_nni).unwrap(),
        birth_date:  "2021-01-01".parse().unwrap(),
        breed:       Breed::Salers,
        sex:         Sex::Male,
        animal_type: AnimalType::Allaitant,
      },
      mother:               ancestor("FR2000000001", "2016-01-01"),
      maternal_grandfather: ancestor("FR3000000001", "2011-01-01"),
      father:               ancestor("FR2000000002", "2015-01-01"),
      paternal_grandfather: ancestor("FR3000000002", "2009-01-01"),
      paternal_grandmother: ancestor("FR3000000003", "2010-01-01"),
      complementary:        ComplementaryInfo {
        breeder:       "EL-1".into(),
        farm:          "EX-1".into(),
        local_manager: "RL-1".into(),
      },
      created_by:           "tester".into(),
    }
  }

  #[tokio::test]
  async fn insert_then_get_and_find() {
    let store = MemoryStore::new();
    let stored = store.insert(record("FR1000000001")).await.unwrap();
    assert_eq!(stored.created_at, stored.updated_at);

    let fetched = store.get(stored.id).await.unwrap().unwrap();
    assert_eq!(fetched, stored);

    let nni = Nni::parse("FR1000000001").unwrap();
    let found = store.find_by_nni(&nni).await.unwrap().unwrap();
    assert_eq!(found.id, stored.id);
    assert!(store.get(Uuid::new_v4()).await.unwrap().is_none());
  }

  #[tokio::test]
  async fn subject_nni_is_unique_across_records() {
    let store = MemoryStore::new();
    store.insert(record("FR1000000001")).await.unwrap();
    let err = store.insert(record("FR1000000001")).await.unwrap_err();
    assert!(matches!(err, Error::NniAlreadyRegistered(_)));
    assert!(err.is_conflict());
    assert_eq!(store.list().await.unwrap().len(), 1);
  }

  #[tokio::test]
  async fn replace_keeps_identity_and_checks_conflicts() {
    let store = MemoryStore::new();
    let a = store.insert(record("FR1000000001")).await.unwrap();
    store.insert(record("FR1000000002")).await.unwrap();

    let mut changed = record("FR1000000001");
    changed.created_by = "someone-else".into();
    let replaced = store.replace(a.id, changed).await.unwrap();
    assert_eq!(replaced.id, a.id);
    assert_eq!(replaced.created_at, a.created_at);
    assert_eq!(replaced.record.created_by, "someone-else");

    let err = store
      .replace(a.id, record("FR1000000002"))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::NniAlreadyRegistered(_)));

    let err = store
      .replace(Uuid::new_v4(), record("FR1000000009"))
      .await
      .unwrap_err();
    assert!(matches!(err, Error::PedigreeNotFound(_)));
  }
}
