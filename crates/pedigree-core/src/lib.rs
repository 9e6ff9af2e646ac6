//! Core types and trait definitions for livestock pedigree records.
//!
//! This crate is deliberately free of HTTP and validation logic. It defines
//! the normalized record shapes that the validation engine produces and the
//! storage abstraction that persistence backends implement.

pub mod animal;
pub mod error;
pub mod nni;
pub mod record;
pub mod role;
pub mod store;

pub use error::{Error, Result};
pub use nni::Nni;
