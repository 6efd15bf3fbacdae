//! The [`DataStore`]: one id-keyed map per entity type, synchronized with
//! a single JSON backing file.
//!
//! The store is single-writer and synchronous.  It offers typed get / put
//! / list accessors (in the per-entity modules of this crate) plus the
//! whole-store `load` and `save`.  Callers persist eagerly: every mutating
//! API operation is expected to call [`DataStore::save`] before returning.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use ujamaa_shared::models::{
    AiInsight, Comment, Discussion, DiscussionThread, Funding, Ngo, Notification, Project,
    ProjectIndicator, ProjectUpdate, ProgressMetric, Resource, User, Workspace,
};

use crate::error::{Result, StoreError};

/// Version written into every saved document.  Loads accept any version
/// (no migrations exist yet); the field is there so future code can tell
/// old files apart.
pub const SCHEMA_VERSION: u32 = 1;

fn default_schema_version() -> u32 {
    SCHEMA_VERSION
}

/// The on-disk document: one top-level field per entity type, each
/// mapping entity id to the full persisted record.
///
/// This is an explicit schema, not reflection: adding a field to an
/// entity or an entity type to the store requires touching this struct,
/// which keeps save and load symmetric by construction.
#[derive(Debug, Serialize, Deserialize)]
pub(crate) struct StoreDocument {
    #[serde(default = "default_schema_version")]
    pub schema_version: u32,
    pub users: HashMap<Uuid, User>,
    pub ngos: HashMap<Uuid, Ngo>,
    pub projects: HashMap<Uuid, Project>,
    pub workspaces: HashMap<Uuid, Workspace>,
    pub updates: HashMap<Uuid, ProjectUpdate>,
    pub comments: HashMap<Uuid, Comment>,
    pub discussions: HashMap<Uuid, Discussion>,
    pub discussion_threads: HashMap<Uuid, DiscussionThread>,
    pub indicators: HashMap<Uuid, ProjectIndicator>,
    pub metrics: HashMap<Uuid, ProgressMetric>,
    pub insights: HashMap<Uuid, AiInsight>,
    pub notifications: HashMap<Uuid, Notification>,
    pub fundings: HashMap<Uuid, Funding>,
    pub resources: HashMap<Uuid, Resource>,
}

/// In-memory object graph with JSON single-file persistence.
#[derive(Debug)]
pub struct DataStore {
    path: PathBuf,
    pub(crate) users: HashMap<Uuid, User>,
    pub(crate) ngos: HashMap<Uuid, Ngo>,
    pub(crate) projects: HashMap<Uuid, Project>,
    pub(crate) workspaces: HashMap<Uuid, Workspace>,
    pub(crate) updates: HashMap<Uuid, ProjectUpdate>,
    pub(crate) comments: HashMap<Uuid, Comment>,
    pub(crate) discussions: HashMap<Uuid, Discussion>,
    pub(crate) discussion_threads: HashMap<Uuid, DiscussionThread>,
    pub(crate) indicators: HashMap<Uuid, ProjectIndicator>,
    pub(crate) metrics: HashMap<Uuid, ProgressMetric>,
    pub(crate) insights: HashMap<Uuid, AiInsight>,
    pub(crate) notifications: HashMap<Uuid, Notification>,
    pub(crate) fundings: HashMap<Uuid, Funding>,
    pub(crate) resources: HashMap<Uuid, Resource>,
}

impl DataStore {
    /// Open (or create) the default application store.
    ///
    /// The backing file is placed in the platform-appropriate data
    /// directory:
    /// - Linux:   `~/.local/share/ujamaa/datastore.json`
    /// - macOS:   `~/Library/Application Support/org.ujamaa.ujamaa/datastore.json`
    /// - Windows: `{FOLDERID_RoamingAppData}\ujamaa\ujamaa\data\datastore.json`
    pub fn new() -> Result<Self> {
        let project_dirs =
            ProjectDirs::from("org", "ujamaa", "ujamaa").ok_or(StoreError::NoDataDir)?;

        let data_dir = project_dirs.data_dir();
        fs::create_dir_all(data_dir)?;

        Self::open_at(data_dir.join("datastore.json"))
    }

    /// Open (or create) a store with an explicit backing file path.
    ///
    /// This is useful for tests and for embedding the store inside custom
    /// directory layouts.
    ///
    /// If the backing file exists it is loaded in full; parse and I/O
    /// failures propagate rather than yielding an empty store.  If the
    /// file does not exist, a small deterministic demo dataset is seeded
    /// and persisted immediately, so first-run state is never empty.
    pub fn open_at(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let mut store = Self::empty(path);

        if store.path.exists() {
            tracing::info!(path = %store.path.display(), "loading data store");
            store.load()?;
        } else {
            tracing::info!(path = %store.path.display(), "no backing file, seeding demo data");
            store.seed_demo_data();
            store.save()?;
        }

        Ok(store)
    }

    /// A store with empty maps and no backing-file interaction yet.
    fn empty(path: PathBuf) -> Self {
        Self {
            path,
            users: HashMap::new(),
            ngos: HashMap::new(),
            projects: HashMap::new(),
            workspaces: HashMap::new(),
            updates: HashMap::new(),
            comments: HashMap::new(),
            discussions: HashMap::new(),
            discussion_threads: HashMap::new(),
            indicators: HashMap::new(),
            metrics: HashMap::new(),
            insights: HashMap::new(),
            notifications: HashMap::new(),
            fundings: HashMap::new(),
            resources: HashMap::new(),
        }
    }

    /// Filesystem path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    // ------------------------------------------------------------------
    // Whole-store persistence
    // ------------------------------------------------------------------

    /// Re-read the backing file and replace every entity map.
    ///
    /// The document is parsed in full before any map is touched, so a
    /// malformed file leaves the in-memory state exactly as it was and
    /// surfaces a [`StoreError::Serialization`].  A missing file is an
    /// [`StoreError::Io`] — once a path was known to exist, silently
    /// falling back to an empty store would corrupt state.
    pub fn load(&mut self) -> Result<()> {
        let raw = fs::read_to_string(&self.path)?;
        let doc: StoreDocument = serde_json::from_str(&raw)?;

        tracing::debug!(
            schema_version = doc.schema_version,
            users = doc.users.len(),
            projects = doc.projects.len(),
            "data store loaded"
        );

        self.users = doc.users;
        self.ngos = doc.ngos;
        self.projects = doc.projects;
        self.workspaces = doc.workspaces;
        self.updates = doc.updates;
        self.comments = doc.comments;
        self.discussions = doc.discussions;
        self.discussion_threads = doc.discussion_threads;
        self.indicators = doc.indicators;
        self.metrics = doc.metrics;
        self.insights = doc.insights;
        self.notifications = doc.notifications;
        self.fundings = doc.fundings;
        self.resources = doc.resources;

        Ok(())
    }

    /// Serialize every entity map into one document and atomically
    /// replace the backing file.
    ///
    /// The document is written to `<path>.tmp` and renamed over the
    /// destination, so an interruption mid-write never leaves a
    /// truncated backing file behind.
    pub fn save(&self) -> Result<()> {
        let doc = self.to_document();
        let json = serde_json::to_string_pretty(&doc)?;

        let tmp = tmp_path(&self.path);
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;

        tracing::debug!(path = %self.path.display(), "data store saved");
        Ok(())
    }

    fn to_document(&self) -> StoreDocument {
        StoreDocument {
            schema_version: SCHEMA_VERSION,
            users: self.users.clone(),
            ngos: self.ngos.clone(),
            projects: self.projects.clone(),
            workspaces: self.workspaces.clone(),
            updates: self.updates.clone(),
            comments: self.comments.clone(),
            discussions: self.discussions.clone(),
            discussion_threads: self.discussion_threads.clone(),
            indicators: self.indicators.clone(),
            metrics: self.metrics.clone(),
            insights: self.insights.clone(),
            notifications: self.notifications.clone(),
            fundings: self.fundings.clone(),
            resources: self.resources.clone(),
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().unwrap_or_default().to_os_string();
    name.push(".tmp");
    path.with_file_name(name)
}
