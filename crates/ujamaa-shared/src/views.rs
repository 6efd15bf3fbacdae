//! Outward serialization views.
//!
//! Most entities are handed to callers exactly as persisted: serde already
//! renders ids and timestamps as strings.  A dedicated view struct exists
//! only where the outward shape must differ from the stored record — the
//! user's credential is stripped, and the NGO's member count is derived
//! from the live user set rather than stored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{Ngo, User, UserRole};

/// A [`User`] as exposed to callers.  Never carries the password hash.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserView {
    pub id: String,
    pub email: String,
    pub first_name: String,
    pub last_name: String,
    pub role: UserRole,
    pub ngo_id: Option<String>,
    pub created_at: String,
}

impl User {
    /// Build the outward view, excluding the credential field.
    pub fn view(&self) -> UserView {
        UserView {
            id: self.id.to_string(),
            email: self.email.clone(),
            first_name: self.first_name.clone(),
            last_name: self.last_name.clone(),
            role: self.role,
            ngo_id: self.ngo_id.map(|id| id.to_string()),
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

/// An [`Ngo`] as exposed to callers, with the derived member count.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NgoView {
    pub id: String,
    pub name: String,
    pub email: String,
    pub country: String,
    pub description: Option<String>,
    pub website: Option<String>,
    pub phone: Option<String>,
    pub city: Option<String>,
    pub is_verified: bool,
    pub sdg_targets: Option<String>,
    pub focus_areas: Option<String>,
    /// Count of users whose `ngo_id` references this NGO.  Recomputed at
    /// view time; zero when no user collection was supplied.
    pub member_count: usize,
    pub created_at: String,
}

impl Ngo {
    /// Build the outward view.
    ///
    /// Pass the full user collection to compute `member_count`; with
    /// `None` the count defaults to zero.
    pub fn view(&self, users: Option<&HashMap<Uuid, User>>) -> NgoView {
        let member_count = users
            .map(|us| us.values().filter(|u| u.ngo_id == Some(self.id)).count())
            .unwrap_or(0);

        NgoView {
            id: self.id.to_string(),
            name: self.name.clone(),
            email: self.email.clone(),
            country: self.country.clone(),
            description: self.description.clone(),
            website: self.website.clone(),
            phone: self.phone.clone(),
            city: self.city.clone(),
            is_verified: self.is_verified,
            sdg_targets: self.sdg_targets.clone(),
            focus_areas: self.focus_areas.clone(),
            member_count,
            created_at: self.created_at.to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    fn sample_user(ngo_id: Option<Uuid>) -> User {
        User {
            id: Uuid::new_v4(),
            email: "amina@example.org".into(),
            password_hash: "aa11:bb22".into(),
            first_name: "Amina".into(),
            last_name: "Otieno".into(),
            role: UserRole::Member,
            ngo_id,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn user_view_never_contains_credential() {
        let user = sample_user(None);
        let json = serde_json::to_value(user.view()).unwrap();
        assert!(json.get("password_hash").is_none());
        // And nothing that even looks like the digest.
        assert!(!json.to_string().contains("bb22"));
    }

    #[test]
    fn ngo_member_count_is_derived() {
        let ngo = Ngo {
            id: Uuid::new_v4(),
            name: "Maji Safi".into(),
            email: "info@majisafi.org".into(),
            country: "Kenya".into(),
            description: None,
            website: None,
            phone: None,
            city: None,
            is_verified: true,
            sdg_targets: Some("6".into()),
            focus_areas: None,
            created_at: Utc::now(),
        };

        let mut users = HashMap::new();
        let u1 = sample_user(Some(ngo.id));
        let u2 = sample_user(None);
        users.insert(u1.id, u1);
        users.insert(u2.id, u2);

        assert_eq!(ngo.view(Some(&users)).member_count, 1);
        assert_eq!(ngo.view(None).member_count, 0);
    }
}
