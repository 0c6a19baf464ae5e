//! Entry Store: persistence of meals, workouts and progress entries.
//!
//! Services receive the store as `&dyn EntryStore` so the same logic runs
//! against PostgreSQL in production and against [`MemoryEntryStore`] in tests.
//!
//! Read contract, per entry kind:
//! - `latest_*`: the entry with the greatest `date`, ties broken by highest id;
//! - `list_*`: every entry of the user, newest first (same tie-break);
//! - `progress_history`: every progress entry, oldest first;
//! - `*_in_range`: entries with `from <= date <= to`, oldest first.
//!
//! Reads never fail for an unknown user; they return nothing.

pub mod memory;
pub mod postgres;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::errors::AppError;
use crate::models::meal::{Meal, MealInput};
use crate::models::progress::{Progress, ProgressInput};
use crate::models::workout::{Workout, WorkoutInput};

pub use memory::MemoryEntryStore;
pub use postgres::PgEntryStore;

#[async_trait]
pub trait EntryStore: std::fmt::Debug + Send + Sync {
    // Meals
    async fn insert_meal(&self, meal: Meal) -> Result<Meal, AppError>;
    async fn find_meal(&self, id: Uuid) -> Result<Option<Meal>, AppError>;
    async fn update_meal(&self, id: Uuid, input: &MealInput) -> Result<Option<Meal>, AppError>;
    async fn delete_meal(&self, id: Uuid) -> Result<bool, AppError>;
    async fn list_meals(&self, user_id: Uuid) -> Result<Vec<Meal>, AppError>;
    async fn latest_meal(&self, user_id: Uuid) -> Result<Option<Meal>, AppError>;
    async fn meals_in_range(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Meal>, AppError>;

    // Workouts
    async fn insert_workout(&self, workout: Workout) -> Result<Workout, AppError>;
    async fn find_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError>;
    async fn update_workout(
        &self,
        id: Uuid,
        input: &WorkoutInput,
    ) -> Result<Option<Workout>, AppError>;
    async fn delete_workout(&self, id: Uuid) -> Result<bool, AppError>;
    async fn list_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>, AppError>;
    async fn latest_workout(&self, user_id: Uuid) -> Result<Option<Workout>, AppError>;
    async fn workouts_in_range(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Workout>, AppError>;

    // Progress
    async fn insert_progress(&self, progress: Progress) -> Result<Progress, AppError>;
    async fn find_progress(&self, id: Uuid) -> Result<Option<Progress>, AppError>;
    async fn update_progress(
        &self,
        id: Uuid,
        input: &ProgressInput,
    ) -> Result<Option<Progress>, AppError>;
    async fn delete_progress(&self, id: Uuid) -> Result<bool, AppError>;
    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<Progress>, AppError>;
    async fn latest_progress(&self, user_id: Uuid) -> Result<Option<Progress>, AppError>;
    async fn progress_history(&self, user_id: Uuid) -> Result<Vec<Progress>, AppError>;
}
