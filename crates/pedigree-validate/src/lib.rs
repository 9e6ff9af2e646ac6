//! Pedigree consistency validation engine.
//!
//! Decides whether a candidate identification record (full creation or
//! partial update) is structurally and genealogically well-formed. Pure and
//! synchronous; no I/O, no shared state.
//!
//! The engine is exhaustive rather than fail-fast: every violation it can
//! detect is returned in one [`FieldErrorMap`], keyed by dotted field path.
//!
//! # Quick start
//!
//! ```no_run
//! use pedigree_validate::validate_create;
//!
//! let body = serde_json::json!({ "infos_sujet": { "nni": "fr1234567890" } });
//! match validate_create(&body) {
//!   Ok(record) => println!("accepted {}", record.subject.nni),
//!   Err(errors) => {
//!     for entry in &errors {
//!       println!("{}: {}", entry.path, entry.message);
//!     }
//!   }
//! }
//! ```

mod compose;
mod consistency;
pub mod error;
pub mod field;
pub mod keys;
mod report;
mod schema;

pub use compose::{
  validate_create, validate_create_as_of, validate_update,
  validate_update_as_of,
};
pub use consistency::chronology_pairs;
pub use error::{FieldError, ViolationKind};
pub use field::{validate_birth_date, validate_identifier_format};
pub use report::{FieldEntry, FieldErrorMap};
