//! Accessors for [`Workspace`] and [`Resource`] records.

use uuid::Uuid;

use ujamaa_shared::models::{Resource, Workspace};

use crate::store::DataStore;

impl DataStore {
    /// Insert or replace a workspace.
    pub fn put_workspace(&mut self, workspace: Workspace) {
        self.workspaces.insert(workspace.id, workspace);
    }

    /// Look up a workspace by id.
    pub fn get_workspace(&self, id: Uuid) -> Option<&Workspace> {
        self.workspaces.get(&id)
    }

    /// Mutable access for the membership list.
    pub fn get_workspace_mut(&mut self, id: Uuid) -> Option<&mut Workspace> {
        self.workspaces.get_mut(&id)
    }

    /// All workspaces, newest first.
    pub fn list_workspaces(&self) -> Vec<&Workspace> {
        let mut workspaces: Vec<&Workspace> = self.workspaces.values().collect();
        workspaces.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        workspaces
    }

    /// Insert or replace a shared resource.
    pub fn put_resource(&mut self, resource: Resource) {
        self.resources.insert(resource.id, resource);
    }

    /// Look up a resource by id.
    pub fn get_resource(&self, id: Uuid) -> Option<&Resource> {
        self.resources.get(&id)
    }

    /// Resources shared in one workspace, newest first.
    pub fn list_resources_for_workspace(&self, workspace_id: Uuid) -> Vec<&Resource> {
        let mut resources: Vec<&Resource> = self
            .resources
            .values()
            .filter(|r| r.workspace_id == workspace_id)
            .collect();
        resources.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        resources
    }
}
