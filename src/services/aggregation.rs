//! Per-user time-series summaries: weight history, daily calories over the
//! last 7 days, and workouts per week over the last 6 weeks.
//!
//! Bucketing is done in UTC. Empty buckets are omitted rather than
//! zero-filled; callers that need a dense series fill the gaps themselves.
//!
//! Weeks are numbered Monday-first: week 1 begins on the first Monday of the
//! year and any days before it fall into week 0, so numbers range 0–53. Week
//! buckets are keyed and ordered by week number alone, so a window that
//! crosses New Year lists `01` before `52`.

use std::collections::BTreeMap;

use chrono::{DateTime, Datelike, Duration, NaiveDate, NaiveTime, Utc};
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::meal::Meal;
use crate::models::progress::Progress;
use crate::models::workout::Workout;
use crate::store::EntryStore;

/// Calendar days covered by the calorie summary, today included.
pub const CALORIE_WINDOW_DAYS: i64 = 7;

/// Weeks covered by the workout summary.
pub const WORKOUT_WINDOW_WEEKS: i64 = 6;

/// One body-weight measurement.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WeightPoint {
    pub date: DateTime<Utc>,
    pub weight_kg: f64,
}

/// Calories summed over one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCalories {
    pub day: NaiveDate,
    pub calories: i64,
}

/// Monday-first week number of `date`, 0 to 53.
pub fn week_of_year(date: NaiveDate) -> u32 {
    (date.ordinal0() + 7 - date.weekday().num_days_from_monday()) / 7
}

/// Number of workouts logged in one week.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WeeklyWorkouts {
    pub week: u32,
    pub count: i64,
}

/// The three summaries computed for one user.
#[derive(Debug, Clone, PartialEq)]
pub struct Summaries {
    pub weight_series: Vec<WeightPoint>,
    pub calorie_series: Vec<DailyCalories>,
    pub workout_series: Vec<WeeklyWorkouts>,
}

/// Window for the calorie summary: from midnight of the first of the last
/// seven calendar days up to `now`.
pub fn calorie_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    let first_day = now.date_naive() - Duration::days(CALORIE_WINDOW_DAYS - 1);
    (first_day.and_time(NaiveTime::MIN).and_utc(), now)
}

/// Window for the workout summary: the six weeks ending at `now`.
pub fn workout_window(now: DateTime<Utc>) -> (DateTime<Utc>, DateTime<Utc>) {
    (now - Duration::weeks(WORKOUT_WINDOW_WEEKS), now)
}

/// Map progress entries to weight points in chronological order.
pub fn weight_series(history: &[Progress]) -> Vec<WeightPoint> {
    let mut ordered: Vec<&Progress> = history.iter().collect();
    ordered.sort_by_key(|p| (p.date, p.id));
    ordered
        .into_iter()
        .map(|p| WeightPoint {
            date: p.date,
            weight_kg: p.weight_kg,
        })
        .collect()
}

/// Sum calories per calendar day, days ascending.
pub fn calories_by_day(meals: &[Meal]) -> Vec<DailyCalories> {
    let mut buckets: BTreeMap<NaiveDate, i64> = BTreeMap::new();
    for meal in meals {
        *buckets.entry(meal.date.date_naive()).or_default() += i64::from(meal.calories);
    }
    buckets
        .into_iter()
        .map(|(day, calories)| DailyCalories { day, calories })
        .collect()
}

/// Count workouts per week number, week numbers ascending.
pub fn workouts_by_week(workouts: &[Workout]) -> Vec<WeeklyWorkouts> {
    let mut buckets: BTreeMap<u32, i64> = BTreeMap::new();
    for workout in workouts {
        *buckets.entry(week_of_year(workout.date.date_naive())).or_default() += 1;
    }
    buckets
        .into_iter()
        .map(|(week, count)| WeeklyWorkouts { week, count })
        .collect()
}

/// Full weight history of the user.
pub async fn weight_history(
    store: &dyn EntryStore,
    user_id: Uuid,
) -> Result<Vec<WeightPoint>, AppError> {
    let history = store.progress_history(user_id).await?;
    Ok(weight_series(&history))
}

/// Daily calorie totals over the last seven calendar days.
pub async fn recent_calories(
    store: &dyn EntryStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<DailyCalories>, AppError> {
    let (from, to) = calorie_window(now);
    let meals = store.meals_in_range(user_id, from, to).await?;
    Ok(calories_by_day(&meals))
}

/// Weekly workout counts over the last six weeks.
pub async fn recent_workouts(
    store: &dyn EntryStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Vec<WeeklyWorkouts>, AppError> {
    let (from, to) = workout_window(now);
    let workouts = store.workouts_in_range(user_id, from, to).await?;
    Ok(workouts_by_week(&workouts))
}

/// Compute all three summaries concurrently.
pub async fn summarize(
    store: &dyn EntryStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> Result<Summaries, AppError> {
    let (weight_series, calorie_series, workout_series) = tokio::try_join!(
        weight_history(store, user_id),
        recent_calories(store, user_id, now),
        recent_workouts(store, user_id, now),
    )?;

    Ok(Summaries {
        weight_series,
        calorie_series,
        workout_series,
    })
}
