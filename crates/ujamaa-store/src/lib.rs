//! # ujamaa-store
//!
//! The persistence and consistency layer of the Ujamaa platform: an
//! in-memory object graph with one id-keyed map per entity type, flushed
//! to a single JSON backing file.
//!
//! The crate exposes a synchronous [`DataStore`] with typed get / put /
//! list accessors for every domain model, the whole-store `load` and
//! `save` operations, and invariant-preserving helpers (donation
//! accumulation, derived NGO member counts).  There is no concurrency
//! control: the design assumes a single process and a single writer.

pub mod store;

mod collab;
mod error;
mod fundings;
mod insights;
mod metrics;
mod ngos;
mod notifications;
mod projects;
mod seed;
mod users;
mod workspaces;

pub use error::{Result, StoreError};
pub use store::{DataStore, SCHEMA_VERSION};
