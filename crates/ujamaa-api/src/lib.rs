//! # ujamaa-api
//!
//! The operation layer of the Ujamaa platform: registration and login,
//! NGO and project management, crowdfunding donations, workspace resource
//! sharing, progress metrics and the trend insight.
//!
//! Every operation that needs caller identity takes an explicit `actor`
//! id — there is no ambient "current user" state, so the crate can serve
//! more than one logical session without cross-contamination.  Mutating
//! operations persist eagerly: the store is saved before they return.

pub mod auth;
pub mod collab;
pub mod insights;
pub mod ngos;
pub mod notifications;
pub mod projects;
pub mod workspaces;

mod error;

use std::path::PathBuf;

use ujamaa_store::DataStore;

pub use error::{ApiError, Result};

/// Handle to the platform: owns the data store and exposes every
/// operation as a method.
pub struct Platform {
    pub(crate) store: DataStore,
}

impl Platform {
    /// Open the platform against the default application data store.
    pub fn new() -> Result<Self> {
        Ok(Self {
            store: DataStore::new()?,
        })
    }

    /// Open the platform against an explicit backing file path.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        Ok(Self {
            store: DataStore::open_at(path)?,
        })
    }

    /// Read access to the underlying store.
    pub fn store(&self) -> &DataStore {
        &self.store
    }
}
