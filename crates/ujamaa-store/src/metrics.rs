//! Accessors for [`ProjectIndicator`] and [`ProgressMetric`] records.

use uuid::Uuid;

use ujamaa_shared::models::{ProgressMetric, ProjectIndicator};

use crate::store::DataStore;

impl DataStore {
    pub fn put_indicator(&mut self, indicator: ProjectIndicator) {
        self.indicators.insert(indicator.id, indicator);
    }

    pub fn get_indicator(&self, id: Uuid) -> Option<&ProjectIndicator> {
        self.indicators.get(&id)
    }

    /// Indicators defined for one project, newest first.
    pub fn list_indicators_for_project(&self, project_id: Uuid) -> Vec<&ProjectIndicator> {
        let mut indicators: Vec<&ProjectIndicator> = self
            .indicators
            .values()
            .filter(|i| i.project_id == project_id)
            .collect();
        indicators.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        indicators
    }

    pub fn put_metric(&mut self, metric: ProgressMetric) {
        self.metrics.insert(metric.id, metric);
    }

    pub fn get_metric(&self, id: Uuid) -> Option<&ProgressMetric> {
        self.metrics.get(&id)
    }

    /// Metric observations for one project, ordered by recorded date
    /// ascending — the order the trend fit consumes them in.
    pub fn list_metrics_for_project(&self, project_id: Uuid) -> Vec<&ProgressMetric> {
        let mut metrics: Vec<&ProgressMetric> = self
            .metrics
            .values()
            .filter(|m| m.project_id == project_id)
            .collect();
        metrics.sort_by(|a, b| a.recorded_date.cmp(&b.recorded_date));
        metrics
    }
}
