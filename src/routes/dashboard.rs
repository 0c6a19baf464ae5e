//! Dashboard route and the presentation model it returns.

use axum::{extract::State, Json};
use chrono::{NaiveDate, Utc};
use serde::Serialize;

use crate::errors::{ApiResponse, AppError};
use crate::middleware::auth::CurrentUser;
use crate::models::meal::Meal;
use crate::models::progress::Progress;
use crate::models::workout::Workout;
use crate::services::dashboard::{self, Dashboard};
use crate::AppState;

/// One labelled chart point.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SeriesPoint<T: Serialize> {
    pub label: String,
    pub value: T,
}

/// Wire form of the dashboard.
#[derive(Debug, Serialize)]
pub struct DashboardResponse {
    pub last_meal: Option<Meal>,
    pub last_workout: Option<Workout>,
    pub last_progress: Option<Progress>,
    pub weight_series: Vec<SeriesPoint<f64>>,
    pub calorie_series: Vec<SeriesPoint<i64>>,
    pub workout_series: Vec<SeriesPoint<i64>>,
}

/// Day/month label, e.g. `15/03`.
pub fn day_label(day: NaiveDate) -> String {
    day.format("%d/%m").to_string()
}

/// Week label, e.g. `Semana 07`.
pub fn week_label(week: u32) -> String {
    format!("Semana {week:02}")
}

impl From<Dashboard> for DashboardResponse {
    fn from(d: Dashboard) -> Self {
        Self {
            weight_series: d
                .weight_series
                .into_iter()
                .map(|p| SeriesPoint {
                    label: day_label(p.date.date_naive()),
                    value: p.weight_kg,
                })
                .collect(),
            calorie_series: d
                .calorie_series
                .into_iter()
                .map(|c| SeriesPoint {
                    label: day_label(c.day),
                    value: c.calories,
                })
                .collect(),
            workout_series: d
                .workout_series
                .into_iter()
                .map(|w| SeriesPoint {
                    label: week_label(w.week),
                    value: w.count,
                })
                .collect(),
            last_meal: d.last_meal,
            last_workout: d.last_workout,
            last_progress: d.last_progress,
        }
    }
}

/// GET /api/v1/dashboard: latest entries and summaries for the current user.
pub async fn get(
    State(state): State<AppState>,
    user: CurrentUser,
) -> Result<Json<ApiResponse<DashboardResponse>>, AppError> {
    let dashboard = dashboard::build_dashboard(state.entries.as_ref(), user.id, Utc::now()).await?;
    if dashboard.is_empty() {
        tracing::debug!(user_id = %user.id, "Dashboard requested before any entry was logged");
    }
    Ok(ApiResponse::success(DashboardResponse::from(dashboard)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    use crate::services::aggregation::{DailyCalories, WeeklyWorkouts, WeightPoint};

    #[test]
    fn labels_are_day_month_and_padded_week() {
        let day = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(day_label(day), "05/03");
        assert_eq!(week_label(7), "Semana 07");
        assert_eq!(week_label(12), "Semana 12");
    }

    #[test]
    fn dashboard_converts_to_labelled_series() {
        let dashboard = Dashboard {
            last_meal: None,
            last_workout: None,
            last_progress: None,
            weight_series: vec![WeightPoint {
                date: Utc.with_ymd_and_hms(2024, 3, 15, 7, 0, 0).unwrap(),
                weight_kg: 81.2,
            }],
            calorie_series: vec![DailyCalories {
                day: NaiveDate::from_ymd_opt(2024, 3, 18).unwrap(),
                calories: 1000,
            }],
            workout_series: vec![
                WeeklyWorkouts {
                    week: 10,
                    count: 2,
                },
                WeeklyWorkouts {
                    week: 12,
                    count: 1,
                },
            ],
        };

        let json = serde_json::to_value(DashboardResponse::from(dashboard)).unwrap();
        assert!(json["last_meal"].is_null());
        assert_eq!(json["weight_series"][0]["label"], "15/03");
        assert_eq!(json["weight_series"][0]["value"], 81.2);
        assert_eq!(json["calorie_series"][0]["label"], "18/03");
        assert_eq!(json["calorie_series"][0]["value"], 1000);
        assert_eq!(
            json["workout_series"],
            serde_json::json!([
                { "label": "Semana 10", "value": 2 },
                { "label": "Semana 12", "value": 1 }
            ])
        );
    }
}
