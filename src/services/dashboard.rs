//! Dashboard assembly: latest entry of each kind plus the three summaries.

use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::meal::Meal;
use crate::models::progress::Progress;
use crate::models::workout::Workout;
use crate::services::aggregation::{self, DailyCalories, WeeklyWorkouts, WeightPoint};
use crate::store::EntryStore;

/// Typed dashboard for one user. Formatting happens at the HTTP boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct Dashboard {
    pub last_meal: Option<Meal>,
    pub last_workout: Option<Workout>,
    pub last_progress: Option<Progress>,
    pub weight_series: Vec<WeightPoint>,
    pub calorie_series: Vec<DailyCalories>,
    pub workout_series: Vec<WeeklyWorkouts>,
}

impl Dashboard {
    /// True when the user has not logged anything yet.
    pub fn is_empty(&self) -> bool {
        self.last_meal.is_none()
            && self.last_workout.is_none()
            && self.last_progress.is_none()
            && self.weight_series.is_empty()
            && self.calorie_series.is_empty()
            && self.workout_series.is_empty()
    }
}

/// Build the dashboard as of `now`. Any store failure fails the whole build.
pub async fn build_dashboard(
    store: &dyn EntryStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Dashboard, AppError> {
    let (last_meal, last_workout, last_progress, summaries) = tokio::try_join!(
        store.latest_meal(user_id),
        store.latest_workout(user_id),
        store.latest_progress(user_id),
        aggregation::summarize(store, user_id, now),
    )?;

    tracing::debug!(
        user_id = %user_id,
        weight_points = summaries.weight_series.len(),
        calorie_days = summaries.calorie_series.len(),
        workout_weeks = summaries.workout_series.len(),
        "Dashboard built"
    );

    Ok(Dashboard {
        last_meal,
        last_workout,
        last_progress,
        weight_series: summaries.weight_series,
        calorie_series: summaries.calorie_series,
        workout_series: summaries.workout_series,
    })
}
