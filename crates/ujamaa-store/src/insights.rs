//! Accessors for [`AiInsight`] records.

use uuid::Uuid;

use ujamaa_shared::models::AiInsight;

use crate::store::DataStore;

impl DataStore {
    /// Insert a generated insight.  Insights are immutable once created.
    pub fn put_insight(&mut self, insight: AiInsight) {
        self.insights.insert(insight.id, insight);
    }

    pub fn get_insight(&self, id: Uuid) -> Option<&AiInsight> {
        self.insights.get(&id)
    }

    /// Insights generated for one project, newest first.
    pub fn list_insights_for_project(&self, project_id: Uuid) -> Vec<&AiInsight> {
        let mut insights: Vec<&AiInsight> = self
            .insights
            .values()
            .filter(|i| i.project_id == project_id)
            .collect();
        insights.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        insights
    }
}
