//! PostgreSQL entry store.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use uuid::Uuid;

use super::EntryStore;
use crate::errors::AppError;
use crate::models::meal::{Meal, MealInput};
use crate::models::progress::{Progress, ProgressInput};
use crate::models::workout::{Workout, WorkoutInput};

#[derive(Debug, Clone)]
pub struct PgEntryStore {
    pool: PgPool,
}

impl PgEntryStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl EntryStore for PgEntryStore {
    async fn insert_meal(&self, meal: Meal) -> Result<Meal, AppError> {
        let row = sqlx::query_as::<_, Meal>(
            r#"
            INSERT INTO meals (id, user_id, date, description, calories)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING *
            "#,
        )
        .bind(meal.id)
        .bind(meal.user_id)
        .bind(meal.date)
        .bind(&meal.description)
        .bind(meal.calories)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_meal(&self, id: Uuid) -> Result<Option<Meal>, AppError> {
        let row = sqlx::query_as::<_, Meal>("SELECT * FROM meals WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_meal(&self, id: Uuid, input: &MealInput) -> Result<Option<Meal>, AppError> {
        let row = sqlx::query_as::<_, Meal>(
            "UPDATE meals SET description = $2, calories = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&input.description)
        .bind(input.calories)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_meal(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM meals WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_meals(&self, user_id: Uuid) -> Result<Vec<Meal>, AppError> {
        let rows = sqlx::query_as::<_, Meal>(
            "SELECT * FROM meals WHERE user_id = $1 ORDER BY date DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn latest_meal(&self, user_id: Uuid) -> Result<Option<Meal>, AppError> {
        let row = sqlx::query_as::<_, Meal>(
            "SELECT * FROM meals WHERE user_id = $1 ORDER BY date DESC, id DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn meals_in_range(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Meal>, AppError> {
        let rows = sqlx::query_as::<_, Meal>(
            r#"
            SELECT * FROM meals
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date, id
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_workout(&self, workout: Workout) -> Result<Workout, AppError> {
        let row = sqlx::query_as::<_, Workout>(
            r#"
            INSERT INTO workouts (id, user_id, date, exercise, sets, reps, weight_kg)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(workout.id)
        .bind(workout.user_id)
        .bind(workout.date)
        .bind(&workout.exercise)
        .bind(workout.sets)
        .bind(workout.reps)
        .bind(workout.weight_kg)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError> {
        let row = sqlx::query_as::<_, Workout>("SELECT * FROM workouts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_workout(
        &self,
        id: Uuid,
        input: &WorkoutInput,
    ) -> Result<Option<Workout>, AppError> {
        let row = sqlx::query_as::<_, Workout>(
            r#"
            UPDATE workouts SET exercise = $2, sets = $3, reps = $4, weight_kg = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(&input.exercise)
        .bind(input.sets)
        .bind(input.reps)
        .bind(input.weight_kg)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_workout(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM workouts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>, AppError> {
        let rows = sqlx::query_as::<_, Workout>(
            "SELECT * FROM workouts WHERE user_id = $1 ORDER BY date DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn latest_workout(&self, user_id: Uuid) -> Result<Option<Workout>, AppError> {
        let row = sqlx::query_as::<_, Workout>(
            "SELECT * FROM workouts WHERE user_id = $1 ORDER BY date DESC, id DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn workouts_in_range(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Workout>, AppError> {
        let rows = sqlx::query_as::<_, Workout>(
            r#"
            SELECT * FROM workouts
            WHERE user_id = $1 AND date BETWEEN $2 AND $3
            ORDER BY date, id
            "#,
        )
        .bind(user_id)
        .bind(from)
        .bind(to)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn insert_progress(&self, progress: Progress) -> Result<Progress, AppError> {
        let row = sqlx::query_as::<_, Progress>(
            r#"
            INSERT INTO progress (id, user_id, date, weight_kg, height_cm, body_fat_pct, notes)
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING *
            "#,
        )
        .bind(progress.id)
        .bind(progress.user_id)
        .bind(progress.date)
        .bind(progress.weight_kg)
        .bind(progress.height_cm)
        .bind(progress.body_fat_pct)
        .bind(&progress.notes)
        .fetch_one(&self.pool)
        .await?;
        Ok(row)
    }

    async fn find_progress(&self, id: Uuid) -> Result<Option<Progress>, AppError> {
        let row = sqlx::query_as::<_, Progress>("SELECT * FROM progress WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await?;
        Ok(row)
    }

    async fn update_progress(
        &self,
        id: Uuid,
        input: &ProgressInput,
    ) -> Result<Option<Progress>, AppError> {
        let row = sqlx::query_as::<_, Progress>(
            r#"
            UPDATE progress SET weight_kg = $2, height_cm = $3, body_fat_pct = $4, notes = $5
            WHERE id = $1
            RETURNING *
            "#,
        )
        .bind(id)
        .bind(input.weight_kg)
        .bind(input.height_cm)
        .bind(input.body_fat_pct)
        .bind(&input.notes)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn delete_progress(&self, id: Uuid) -> Result<bool, AppError> {
        let result = sqlx::query("DELETE FROM progress WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<Progress>, AppError> {
        let rows = sqlx::query_as::<_, Progress>(
            "SELECT * FROM progress WHERE user_id = $1 ORDER BY date DESC, id DESC",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }

    async fn latest_progress(&self, user_id: Uuid) -> Result<Option<Progress>, AppError> {
        let row = sqlx::query_as::<_, Progress>(
            "SELECT * FROM progress WHERE user_id = $1 ORDER BY date DESC, id DESC LIMIT 1",
        )
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(row)
    }

    async fn progress_history(&self, user_id: Uuid) -> Result<Vec<Progress>, AppError> {
        let rows = sqlx::query_as::<_, Progress>(
            "SELECT * FROM progress WHERE user_id = $1 ORDER BY date, id",
        )
        .bind(user_id)
        .fetch_all(&self.pool)
        .await?;
        Ok(rows)
    }
}
