//! Accessors for [`Funding`] records and the donation accumulator.

use uuid::Uuid;

use ujamaa_shared::models::Funding;

use crate::error::{Result, StoreError};
use crate::store::DataStore;

impl DataStore {
    /// Record a donation against its project.
    ///
    /// Inserts the funding record and bumps the project's
    /// `current_funding` by exactly `funding.amount`.  This is the only
    /// code path that touches the accumulator, which is how it stays
    /// equal to the sum of all recorded donations and never decreases.
    ///
    /// Returns [`StoreError::NotFound`] if the referenced project does
    /// not exist; nothing is inserted in that case.
    pub fn record_donation(&mut self, funding: Funding) -> Result<()> {
        let project = self
            .projects
            .get_mut(&funding.project_id)
            .ok_or(StoreError::NotFound)?;

        project.current_funding += funding.amount;
        self.fundings.insert(funding.id, funding);
        Ok(())
    }

    /// Look up a funding record by id.
    pub fn get_funding(&self, id: Uuid) -> Option<&Funding> {
        self.fundings.get(&id)
    }

    /// All donations made to one project, newest first.
    pub fn list_fundings_for_project(&self, project_id: Uuid) -> Vec<&Funding> {
        let mut fundings: Vec<&Funding> = self
            .fundings
            .values()
            .filter(|f| f.project_id == project_id)
            .collect();
        fundings.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        fundings
    }
}
