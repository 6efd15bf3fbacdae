//! First-run demo data.

use chrono::Utc;
use uuid::Uuid;

use ujamaa_shared::auth::hash_password;
use ujamaa_shared::models::{Ngo, Project, ProjectStatus, User, UserRole, Workspace};

use crate::store::DataStore;

impl DataStore {
    /// Populate a small demo graph: one verified NGO, its founder, one
    /// public project and a workspace around it.
    ///
    /// Only called when the backing file does not exist yet, so a
    /// legitimately user-free store is never overwritten.  Ids and
    /// timestamps are freshly generated; the shape (entity counts per
    /// type) is fixed.
    pub(crate) fn seed_demo_data(&mut self) {
        let now = Utc::now();

        let ngo_id = Uuid::new_v4();
        let founder_id = Uuid::new_v4();
        let project_id = Uuid::new_v4();

        self.put_ngo(Ngo {
            id: ngo_id,
            name: "Green Horizons Initiative".into(),
            email: "hello@greenhorizons.org".into(),
            country: "Kenya".into(),
            description: Some("Community-led climate resilience projects.".into()),
            website: Some("https://greenhorizons.org".into()),
            phone: None,
            city: Some("Nairobi".into()),
            is_verified: true,
            sdg_targets: Some("13,15".into()),
            focus_areas: Some("climate,reforestation".into()),
            created_at: now,
        });

        self.put_user(User {
            id: founder_id,
            email: "demo@greenhorizons.org".into(),
            password_hash: hash_password("demo1234"),
            first_name: "Wanjiru".into(),
            last_name: "Kamau".into(),
            role: UserRole::Founder,
            ngo_id: Some(ngo_id),
            created_at: now,
        });

        self.put_project(Project {
            id: project_id,
            ngo_id,
            created_by_id: founder_id,
            title: "Ngong Hills Reforestation".into(),
            description: "Plant and nurture 10,000 indigenous trees.".into(),
            sdg_targets: "13,15".into(),
            status: ProjectStatus::Active,
            focus_areas: Some("reforestation".into()),
            start_date: None,
            end_date: None,
            location: Some("Ngong Hills, Kenya".into()),
            beneficiaries: Some(4000),
            budget: Some(25_000.0),
            funding_goal: 10_000.0,
            current_funding: 0.0,
            is_public: true,
            collaborators: Vec::new(),
            created_at: now,
        });

        self.put_workspace(Workspace {
            id: Uuid::new_v4(),
            project_id,
            name: "Reforestation planning".into(),
            description: None,
            members: vec![founder_id],
            created_at: now,
        });

        tracing::info!(
            users = self.users.len(),
            ngos = self.ngos.len(),
            projects = self.projects.len(),
            workspaces = self.workspaces.len(),
            "seeded demo data"
        );
    }
}
