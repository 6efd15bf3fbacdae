//! Domain model structs persisted in the platform data store.
//!
//! Every struct derives `Serialize` and `Deserialize` so it can be written
//! to the JSON backing file and handed back to the API layer unchanged.
//! Fields are write-once after creation unless noted otherwise.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ---------------------------------------------------------------------------
// Enums
// ---------------------------------------------------------------------------

/// Role a user holds inside their organization.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Founder,
    Admin,
    Member,
}

/// Lifecycle status of a project.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ProjectStatus {
    Active,
    Completed,
    Paused,
    Archived,
}

/// What a shared resource actually is.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ResourceKind {
    File,
    Skill,
    Tech,
}

// ---------------------------------------------------------------------------
// User
// ---------------------------------------------------------------------------

/// A platform user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub id: Uuid,
    pub email: String,
    /// Salted credential digest (`"salt_hex:digest_hex"`).  Persisted with
    /// the record but never included in the outward [`UserView`].
    pub password_hash: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    /// The NGO this user belongs to, if any.
    pub ngo_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// NGO
// ---------------------------------------------------------------------------

/// A non-profit organization.
///
/// Member count is derived from the live user set at view time and is
/// deliberately not a field here.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Ngo {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub country: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub is_verified: bool,
    /// Comma-separated UN SDG codes, e.g. `"3,4,5"`.
    pub sdg_targets: Option<String>,
    pub focus_areas: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Project
// ---------------------------------------------------------------------------

/// An SDG-aligned project run by an NGO.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Project {
    pub id: Uuid,
    pub ngo_id: Uuid,
    pub created_by_id: Uuid,
    pub title: String,
    pub description: String,
    /// Comma-separated UN SDG codes, e.g. `"3,4,5"`.
    pub sdg_targets: String,
    pub status: ProjectStatus,
    pub focus_areas: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub beneficiaries: Option<u32>,
    pub budget: Option<f64>,
    /// Crowdfunding target.  Mutable via the API layer.
    pub funding_goal: f64,
    /// Sum of all donation amounts recorded against this project.
    /// Only ever increases, and only through the store's donation helper.
    pub current_funding: f64,
    pub is_public: bool,
    /// Users collaborating on this project besides the creator.
    pub collaborators: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Funding
// ---------------------------------------------------------------------------

/// A single crowdfunding donation.  Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Funding {
    pub id: Uuid,
    pub project_id: Uuid,
    pub donor_id: Uuid,
    /// Donated amount; the API layer rejects non-positive values.
    pub amount: f64,
    pub message: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Workspace & resources
// ---------------------------------------------------------------------------

/// A collaboration space grouping members for resource sharing.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Workspace {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    /// Users allowed to read and contribute.  Mutable via the API layer.
    pub members: Vec<Uuid>,
    pub created_at: DateTime<Utc>,
}

/// A resource shared inside a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Resource {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub uploaded_by_id: Uuid,
    pub name: String,
    pub description: String,
    pub kind: ResourceKind,
    /// Opaque payload; interpretation is left to the caller.
    pub content: String,
    pub is_shared_publicly: bool,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Collaboration records
// ---------------------------------------------------------------------------

/// A progress update posted on a project.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectUpdate {
    pub id: Uuid,
    pub project_id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A comment on a project update.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Comment {
    pub id: Uuid,
    pub update_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A discussion topic opened in a workspace.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Discussion {
    pub id: Uuid,
    pub workspace_id: Uuid,
    pub created_by_id: Uuid,
    pub title: String,
    pub created_at: DateTime<Utc>,
}

/// A reply inside a discussion.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiscussionThread {
    pub id: Uuid,
    pub discussion_id: Uuid,
    pub author_id: Uuid,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Metrics & insights
// ---------------------------------------------------------------------------

/// A measurable indicator a project reports against.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProjectIndicator {
    pub id: Uuid,
    pub project_id: Uuid,
    pub name: String,
    pub description: Option<String>,
    pub target_value: f64,
    pub unit: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// One recorded observation of a project metric.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ProgressMetric {
    pub id: Uuid,
    pub project_id: Uuid,
    pub indicator_id: Option<Uuid>,
    pub metric_name: String,
    pub metric_value: f64,
    /// When the observation was made, as opposed to when it was entered.
    pub recorded_date: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

/// A generated trend insight for a project.  Immutable once created.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AiInsight {
    pub id: Uuid,
    pub project_id: Uuid,
    pub analysis_type: String,
    pub title: String,
    pub insight: String,
    /// 0–100.
    pub confidence_score: f64,
    pub recommendations: Option<String>,
    pub created_at: DateTime<Utc>,
}

// ---------------------------------------------------------------------------
// Notification
// ---------------------------------------------------------------------------

/// An in-app notification delivered to a single user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub user_id: Uuid,
    pub title: String,
    pub message: String,
    pub notification_type: String,
    /// Flips to `true` once the recipient marks it read.
    pub is_read: bool,
    pub created_at: DateTime<Utc>,
}
