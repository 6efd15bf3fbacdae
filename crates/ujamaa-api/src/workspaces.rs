//! Workspaces and resource sharing.

use chrono::Utc;
use tracing::info;
use uuid::Uuid;

use ujamaa_shared::models::{Resource, ResourceKind, Workspace};

use crate::error::{ApiError, Result};
use crate::Platform;

impl Platform {
    /// Create a workspace around a project.  The creator is its first
    /// member.
    pub fn create_workspace(
        &mut self,
        actor: Uuid,
        project_id: Uuid,
        name: &str,
        description: Option<String>,
    ) -> Result<Workspace> {
        self.require_actor(actor)?;
        if self.store.get_project(project_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let workspace = Workspace {
            id: Uuid::new_v4(),
            project_id,
            name: name.to_string(),
            description,
            members: vec![actor],
            created_at: Utc::now(),
        };
        let created = workspace.clone();

        info!(workspace_id = %workspace.id, project_id = %project_id, "workspace created");
        self.store.put_workspace(workspace);
        self.store.save()?;
        Ok(created)
    }

    /// Add a user to a workspace.  Only existing members may invite.
    pub fn join_workspace(&mut self, actor: Uuid, workspace_id: Uuid, user_id: Uuid) -> Result<()> {
        self.require_actor(actor)?;
        if self.store.get_user(user_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let workspace = self
            .store
            .get_workspace_mut(workspace_id)
            .ok_or(ApiError::NotFound)?;
        if !workspace.members.contains(&actor) {
            return Err(ApiError::Forbidden);
        }
        if !workspace.members.contains(&user_id) {
            workspace.members.push(user_id);
        }

        self.store.save()?;
        Ok(())
    }

    /// Share a resource inside a workspace the actor belongs to.
    pub fn add_resource(
        &mut self,
        actor: Uuid,
        workspace_id: Uuid,
        name: &str,
        description: &str,
        kind: ResourceKind,
        content: &str,
        is_shared_publicly: bool,
    ) -> Result<Resource> {
        self.require_actor(actor)?;

        let workspace = self
            .store
            .get_workspace(workspace_id)
            .ok_or(ApiError::NotFound)?;
        if !workspace.members.contains(&actor) {
            return Err(ApiError::Forbidden);
        }

        let resource = Resource {
            id: Uuid::new_v4(),
            workspace_id,
            uploaded_by_id: actor,
            name: name.to_string(),
            description: description.to_string(),
            kind,
            content: content.to_string(),
            is_shared_publicly,
            created_at: Utc::now(),
        };
        let created = resource.clone();

        info!(resource_id = %resource.id, workspace_id = %workspace_id, "resource added");
        self.store.put_resource(resource);
        self.store.save()?;
        Ok(created)
    }

    /// Resources shared in a workspace, newest first.
    pub fn list_resources(&self, workspace_id: Uuid) -> Vec<Resource> {
        self.store
            .list_resources_for_workspace(workspace_id)
            .into_iter()
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ngos::NgoDetails;
    use crate::projects::ProjectDetails;

    fn setup() -> (tempfile::TempDir, Platform, Uuid, Uuid) {
        let dir = tempfile::tempdir().unwrap();
        let mut p = Platform::open_at(dir.path().join("store.json")).unwrap();

        let founder = p
            .register("founder@example.org", "pw123456", "F", "O")
            .unwrap();
        let founder_id = Uuid::parse_str(&founder.id).unwrap();
        p.create_ngo(founder_id, "N1", "n1@example.org", "Kenya", NgoDetails::default())
            .unwrap();
        let project = p
            .create_project(founder_id, "P1", "d", "6", ProjectDetails::default())
            .unwrap();
        let ws = p
            .create_workspace(founder_id, project.id, "Planning", None)
            .unwrap();

        (dir, p, founder_id, ws.id)
    }

    #[test]
    fn members_can_share_resources() {
        let (_dir, mut p, founder_id, ws_id) = setup();

        let r = p
            .add_resource(
                founder_id,
                ws_id,
                "Pump specs",
                "Vendor datasheet",
                ResourceKind::File,
                "specs.pdf",
                false,
            )
            .unwrap();
        assert_eq!(r.kind, ResourceKind::File);
        assert_eq!(p.list_resources(ws_id).len(), 1);
    }

    #[test]
    fn non_members_are_denied() {
        let (_dir, mut p, _founder, ws_id) = setup();

        let outsider = p
            .register("other@example.org", "pw123456", "O", "T")
            .unwrap();
        let outsider_id = Uuid::parse_str(&outsider.id).unwrap();

        assert!(matches!(
            p.add_resource(
                outsider_id,
                ws_id,
                "n",
                "d",
                ResourceKind::Skill,
                "",
                false
            ),
            Err(ApiError::Forbidden)
        ));
    }

    #[test]
    fn joining_makes_sharing_possible() {
        let (_dir, mut p, founder_id, ws_id) = setup();

        let guest = p.register("guest@example.org", "pw123456", "G", "T").unwrap();
        let guest_id = Uuid::parse_str(&guest.id).unwrap();

        // Only members can invite.
        assert!(matches!(
            p.join_workspace(guest_id, ws_id, guest_id),
            Err(ApiError::Forbidden)
        ));

        p.join_workspace(founder_id, ws_id, guest_id).unwrap();
        p.add_resource(guest_id, ws_id, "Solar sizing", "", ResourceKind::Skill, "", true)
            .unwrap();
    }
}
