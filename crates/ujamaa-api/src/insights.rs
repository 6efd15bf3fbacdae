//! Progress metrics and the trend-prediction insight.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use ujamaa_shared::models::{AiInsight, ProgressMetric, ProjectIndicator};

use crate::error::{ApiError, Result};
use crate::Platform;

const SECONDS_PER_DAY: f64 = 86_400.0;

impl Platform {
    /// Define an indicator a project will report against.
    pub fn add_indicator(
        &mut self,
        actor: Uuid,
        project_id: Uuid,
        name: &str,
        description: Option<String>,
        target_value: f64,
        unit: Option<String>,
    ) -> Result<ProjectIndicator> {
        self.require_actor(actor)?;
        if self.store.get_project(project_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let indicator = ProjectIndicator {
            id: Uuid::new_v4(),
            project_id,
            name: name.to_string(),
            description,
            target_value,
            unit,
            created_at: Utc::now(),
        };
        let created = indicator.clone();
        self.store.put_indicator(indicator);
        self.store.save()?;
        Ok(created)
    }

    /// Record one metric observation for a project.
    pub fn record_metric(
        &mut self,
        actor: Uuid,
        project_id: Uuid,
        metric_name: &str,
        metric_value: f64,
        recorded_date: DateTime<Utc>,
        indicator_id: Option<Uuid>,
    ) -> Result<ProgressMetric> {
        self.require_actor(actor)?;
        if self.store.get_project(project_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let metric = ProgressMetric {
            id: Uuid::new_v4(),
            project_id,
            indicator_id,
            metric_name: metric_name.to_string(),
            metric_value,
            recorded_date,
            created_at: Utc::now(),
        };
        let created = metric.clone();
        self.store.put_metric(metric);
        self.store.save()?;
        Ok(created)
    }

    /// Fit a linear trend over a project's metric observations and store
    /// the resulting insight.
    ///
    /// Returns `Ok(None)` when fewer than two observations exist — there
    /// is no trend to fit.  The prediction extrapolates the fitted slope
    /// thirty days past the latest observation.
    pub fn generate_insight(&mut self, project_id: Uuid) -> Result<Option<AiInsight>> {
        if self.store.get_project(project_id).is_none() {
            return Err(ApiError::NotFound);
        }

        let metrics = self.store.list_metrics_for_project(project_id);
        if metrics.len() < 2 {
            return Ok(None);
        }

        let days: Vec<f64> = metrics
            .iter()
            .map(|m| m.recorded_date.timestamp() as f64 / SECONDS_PER_DAY)
            .collect();
        let values: Vec<f64> = metrics.iter().map(|m| m.metric_value).collect();
        let last_value = values[values.len() - 1];

        let slope = least_squares_slope(&days, &values);
        let prediction = slope * 30.0 + last_value;

        let insight = AiInsight {
            id: Uuid::new_v4(),
            project_id,
            analysis_type: "prediction".into(),
            title: "Metric Trend Analysis".into(),
            insight: format!(
                "Trend slope: {slope:.2}. Predicted next value: {prediction:.2}."
            ),
            confidence_score: 90.0,
            recommendations: Some("Adjust based on trend.".into()),
            created_at: Utc::now(),
        };
        let created = insight.clone();

        info!(project_id = %project_id, slope, prediction, "trend insight generated");
        self.store.put_insight(insight);
        self.store.save()?;

        Ok(Some(created))
    }
}

/// Ordinary least-squares slope of `y` over `x`.
///
/// Zero x-variance (all observations on the same day) yields a flat
/// trend rather than a division by zero.
fn least_squares_slope(x: &[f64], y: &[f64]) -> f64 {
    let n = x.len() as f64;
    let mean_x: f64 = x.iter().sum::<f64>() / n;
    let mean_y: f64 = y.iter().sum::<f64>() / n;

    // Centered form: x values are days since the epoch, so the raw
    // normal-equation sums would cancel catastrophically.
    let cov: f64 = x
        .iter()
        .zip(y)
        .map(|(a, b)| (a - mean_x) * (b - mean_y))
        .sum();
    let var: f64 = x.iter().map(|a| (a - mean_x) * (a - mean_x)).sum();

    if var.abs() < f64::EPSILON {
        return 0.0;
    }
    cov / var
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

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
        (dir, p, founder_id, project.id)
    }

    fn day(d: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2026, 1, d, 12, 0, 0).unwrap()
    }

    #[test]
    fn fewer_than_two_metrics_yields_no_insight() {
        let (_dir, mut p, actor, project_id) = setup();

        assert!(p.generate_insight(project_id).unwrap().is_none());

        p.record_metric(actor, project_id, "trees", 100.0, day(1), None)
            .unwrap();
        assert!(p.generate_insight(project_id).unwrap().is_none());
    }

    #[test]
    fn increasing_series_predicts_above_last_value() {
        let (_dir, mut p, actor, project_id) = setup();

        // 10 units per day.
        for (d, v) in [(1, 100.0), (2, 110.0), (3, 120.0), (4, 130.0)] {
            p.record_metric(actor, project_id, "trees", v, day(d), None)
                .unwrap();
        }

        let insight = p.generate_insight(project_id).unwrap().unwrap();
        assert_eq!(insight.analysis_type, "prediction");
        assert_eq!(insight.confidence_score, 90.0);
        // slope 10/day, extrapolated 30 days past the last value of 130.
        assert_eq!(insight.insight, "Trend slope: 10.00. Predicted next value: 430.00.");
        assert_eq!(p.store().list_insights_for_project(project_id).len(), 1);
    }

    #[test]
    fn exact_slope_for_clean_series() {
        let x = [0.0, 1.0, 2.0, 3.0];
        let y = [5.0, 7.0, 9.0, 11.0];
        assert!((least_squares_slope(&x, &y) - 2.0).abs() < 1e-9);
    }

    #[test]
    fn same_day_observations_fit_flat() {
        let x = [4.0, 4.0, 4.0];
        let y = [1.0, 2.0, 3.0];
        assert_eq!(least_squares_slope(&x, &y), 0.0);
    }
}
