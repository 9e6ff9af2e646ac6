//! JSON REST API for pedigree records.
//!
//! Exposes an axum [`Router`] backed by any
//! [`pedigree_core::store::PedigreeStore`]. Every write goes through
//! [`pedigree_validate`] first; rejected submissions come back as
//! `422 {"errors": {"<path>": "<message>", …}}`. Auth and TLS are the
//! caller's responsibility.
//!
//! # Mounting
//!
//! ```rust,ignore
//! .nest("/api", pedigree_api::api_router(store.clone()))
//! ```

pub mod error;
pub mod memory;
pub mod pedigrees;
pub mod validate;

use std::sync::Arc;

use axum::{
  Router,
  routing::{get, post},
};
use pedigree_core::store::PedigreeStore;
use tower_http::trace::TraceLayer;

pub use error::ApiError;
pub use memory::MemoryStore;

/// Build a fully-materialised API router for `store`.
///
/// The returned `Router<()>` can be nested into any parent router regardless
/// of its own state type.
pub fn api_router<S>(store: Arc<S>) -> Router<()>
where
  S: PedigreeStore + 'static,
{
  Router::new()
    // Records
    .route(
      "/pedigrees",
      get(pedigrees::list::<S>).post(pedigrees::create::<S>),
    )
    .route(
      "/pedigrees/{id}",
      get(pedigrees::get_one::<S>).patch(pedigrees::update_one::<S>),
    )
    .route("/pedigrees/by-nni/{nni}", get(pedigrees::get_by_nni::<S>))
    // Dry runs
    .route("/pedigrees/validate", post(validate::create))
    .route("/pedigrees/validate-update", post(validate::update))
    // Live field checks
    .route("/nni/{value}", get(validate::nni))
    .route("/birth-date/{value}", get(validate::birth_date))
    .with_state(store)
    .layer(TraceLayer::new_for_http())
}

// ─── Integration tests ────────────────────────────────────────────────────────
