//! Project management and crowdfunding.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use ujamaa_shared::models::{Funding, Notification, Project, ProjectStatus};

use crate::error::{ApiError, Result};
use crate::Platform;

/// Optional fields for a new project.
#[derive(Debug, Clone, Default)]
pub struct ProjectDetails {
    pub focus_areas: Option<String>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub location: Option<String>,
    pub beneficiaries: Option<u32>,
    pub budget: Option<f64>,
    pub funding_goal: f64,
    pub is_public: bool,
}

impl Platform {
    /// Create a project under the acting user's NGO.
    pub fn create_project(
        &mut self,
        actor: Uuid,
        title: &str,
        description: &str,
        sdg_targets: &str,
        details: ProjectDetails,
    ) -> Result<Project> {
        let acting = self.require_actor(actor)?;
        let ngo_id = acting.ngo_id.ok_or(ApiError::Forbidden)?;

        if title.trim().is_empty() {
            return Err(ApiError::Validation("project title must not be empty".into()));
        }
        if details.funding_goal < 0.0 {
            return Err(ApiError::Validation("funding goal must not be negative".into()));
        }

        let project = Project {
            id: Uuid::new_v4(),
            ngo_id,
            created_by_id: actor,
            title: title.to_string(),
            description: description.to_string(),
            sdg_targets: sdg_targets.to_string(),
            status: ProjectStatus::Active,
            focus_areas: details.focus_areas,
            start_date: details.start_date,
            end_date: details.end_date,
            location: details.location,
            beneficiaries: details.beneficiaries,
            budget: details.budget,
            funding_goal: details.funding_goal,
            current_funding: 0.0,
            is_public: details.is_public,
            collaborators: Vec::new(),
            created_at: Utc::now(),
        };
        let created = project.clone();

        info!(project_id = %project.id, ngo_id = %ngo_id, "project created");
        self.store.put_project(project);
        self.store.save()?;

        Ok(created)
    }

    /// Publicly visible projects, newest first.
    pub fn list_public_projects(&self) -> Vec<Project> {
        self.store
            .list_public_projects()
            .into_iter()
            .cloned()
            .collect()
    }

    /// Set the crowdfunding goal on a project owned by the actor's NGO.
    pub fn set_funding_goal(&mut self, actor: Uuid, project_id: Uuid, goal: f64) -> Result<()> {
        let acting_ngo = self.require_actor(actor)?.ngo_id;

        if goal < 0.0 {
            return Err(ApiError::Validation("funding goal must not be negative".into()));
        }

        let project = self
            .store
            .get_project_mut(project_id)
            .ok_or(ApiError::NotFound)?;
        if acting_ngo != Some(project.ngo_id) {
            return Err(ApiError::Forbidden);
        }

        project.funding_goal = goal;
        self.store.save()?;
        Ok(())
    }

    /// Donate to a project.
    ///
    /// Records the funding, bumps the project's accumulator and notifies
    /// the project creator.  The amount must be strictly positive.
    pub fn donate(
        &mut self,
        actor: Uuid,
        project_id: Uuid,
        amount: f64,
        message: Option<String>,
    ) -> Result<Funding> {
        let donor = self.require_actor(actor)?;
        let donor_name = donor.first_name.clone();

        if !(amount > 0.0) {
            return Err(ApiError::Validation("donation amount must be positive".into()));
        }

        let (creator_id, project_title) = {
            let project = self.store.get_project(project_id).ok_or(ApiError::NotFound)?;
            (project.created_by_id, project.title.clone())
        };

        let funding = Funding {
            id: Uuid::new_v4(),
            project_id,
            donor_id: actor,
            amount,
            message,
            created_at: Utc::now(),
        };
        let recorded = funding.clone();
        self.store.record_donation(funding)?;

        self.store.put_notification(Notification {
            id: Uuid::new_v4(),
            user_id: creator_id,
            title: "New Donation".into(),
            message: format!("{donor_name} donated {amount} to {project_title}"),
            notification_type: "funding".into(),
            is_read: false,
            created_at: Utc::now(),
        });

        info!(project_id = %project_id, amount, "donation recorded");
        self.store.save()?;

        Ok(recorded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngos::NgoDetails;

    fn platform_with_project() -> (tempfile::TempDir, Platform, Uuid, Uuid) {
        let dir = tempfile::tempdir().unwrap();
        let mut p = Platform::open_at(dir.path().join("store.json")).unwrap();

        let founder = p
            .register("founder@example.org", "pw123456", "F", "O")
            .unwrap();
        let founder_id = Uuid::parse_str(&founder.id).unwrap();
        p.create_ngo(founder_id, "N1", "n1@example.org", "Kenya", NgoDetails::default())
            .unwrap();
        let project = p
            .create_project(
                founder_id,
                "P1",
                "Water project",
                "6",
                ProjectDetails {
                    funding_goal: 1000.0,
                    is_public: true,
                    ..Default::default()
                },
            )
            .unwrap();

        (dir, p, founder_id, project.id)
    }

    #[test]
    fn donations_accumulate_and_notify() {
        let (_dir, mut p, founder_id, project_id) = platform_with_project();

        let donor = p.register("donor@example.org", "pw123456", "D", "R").unwrap();
        let donor_id = Uuid::parse_str(&donor.id).unwrap();

        p.donate(donor_id, project_id, 250.0, None).unwrap();
        p.donate(donor_id, project_id, 100.0, Some("Karibu!".into()))
            .unwrap();

        let project = p.store().get_project(project_id).unwrap();
        assert_eq!(project.current_funding, 350.0);
        assert_eq!(p.store().list_fundings_for_project(project_id).len(), 2);

        // The creator was notified once per donation.
        let notifs = p.store().list_notifications_for_user(founder_id);
        assert_eq!(notifs.len(), 2);
        assert_eq!(notifs[0].notification_type, "funding");
    }

    #[test]
    fn non_positive_donation_is_rejected_untouched() {
        let (_dir, mut p, _founder, project_id) = platform_with_project();
        let donor = p.register("donor@example.org", "pw123456", "D", "R").unwrap();
        let donor_id = Uuid::parse_str(&donor.id).unwrap();

        for bad in [0.0, -5.0, f64::NAN] {
            assert!(matches!(
                p.donate(donor_id, project_id, bad, None),
                Err(ApiError::Validation(_))
            ));
        }
        assert_eq!(p.store().get_project(project_id).unwrap().current_funding, 0.0);
        assert!(p.store().list_fundings_for_project(project_id).is_empty());
    }

    #[test]
    fn funding_goal_requires_owning_ngo() {
        let (_dir, mut p, founder_id, project_id) = platform_with_project();

        let outsider = p
            .register("other@example.org", "pw123456", "O", "T")
            .unwrap();
        let outsider_id = Uuid::parse_str(&outsider.id).unwrap();
        p.create_ngo(outsider_id, "N2", "n2@example.org", "Uganda", NgoDetails::default())
            .unwrap();

        assert!(matches!(
            p.set_funding_goal(outsider_id, project_id, 2000.0),
            Err(ApiError::Forbidden)
        ));

        p.set_funding_goal(founder_id, project_id, 2000.0).unwrap();
        assert_eq!(p.store().get_project(project_id).unwrap().funding_goal, 2000.0);
    }

    #[test]
    fn project_creation_requires_an_ngo() {
        let dir = tempfile::tempdir().unwrap();
        let mut p = Platform::open_at(dir.path().join("store.json")).unwrap();
        let loner = p.register("loner@example.org", "pw123456", "L", "N").unwrap();
        let loner_id = Uuid::parse_str(&loner.id).unwrap();

        assert!(matches!(
            p.create_project(loner_id, "P", "d", "1", ProjectDetails::default()),
            Err(ApiError::Forbidden)
        ));
    }
}
