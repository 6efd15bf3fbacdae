//! Accessors for [`Project`] records.

use uuid::Uuid;

use ujamaa_shared::models::Project;

use crate::store::DataStore;

impl DataStore {
    /// Insert or replace a project.
    pub fn put_project(&mut self, project: Project) {
        self.projects.insert(project.id, project);
    }

    /// Look up a project by id.
    pub fn get_project(&self, id: Uuid) -> Option<&Project> {
        self.projects.get(&id)
    }

    /// Mutable access for the fields designed as mutable (status,
    /// funding goal, visibility, collaborators).  The funding
    /// accumulator itself is only touched by
    /// [`DataStore::record_donation`].
    pub fn get_project_mut(&mut self, id: Uuid) -> Option<&mut Project> {
        self.projects.get_mut(&id)
    }

    /// All projects, newest first.
    pub fn list_projects(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self.projects.values().collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }

    /// Projects owned by one NGO, newest first.
    pub fn list_projects_for_ngo(&self, ngo_id: Uuid) -> Vec<&Project> {
        let mut projects: Vec<&Project> = self
            .projects
            .values()
            .filter(|p| p.ngo_id == ngo_id)
            .collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }

    /// Publicly visible projects, newest first.
    pub fn list_public_projects(&self) -> Vec<&Project> {
        let mut projects: Vec<&Project> =
            self.projects.values().filter(|p| p.is_public).collect();
        projects.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        projects
    }
}
