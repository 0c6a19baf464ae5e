//! In-process entry store backed by vectors behind async read/write locks.

use std::cmp::Reverse;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;
use uuid::Uuid;

use super::EntryStore;
use crate::errors::AppError;
use crate::models::entry::{self, Entry};
use crate::models::meal::{Meal, MealInput};
use crate::models::progress::{Progress, ProgressInput};
use crate::models::workout::{Workout, WorkoutInput};

/// Entry store that keeps everything in memory. Used by tests and tooling.
#[derive(Debug, Default)]
pub struct MemoryEntryStore {
    meals: RwLock<Vec<Meal>>,
    workouts: RwLock<Vec<Workout>>,
    progress: RwLock<Vec<Progress>>,
}

impl MemoryEntryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

fn insert_row<E: Entry + Clone>(rows: &mut Vec<E>, row: E) -> Result<E, AppError> {
    if rows.iter().any(|r| r.id() == row.id()) {
        return Err(AppError::Conflict(format!("Entry {} already exists", row.id())));
    }
    rows.push(row.clone());
    Ok(row)
}

fn find_row<E: Entry + Clone>(rows: &[E], id: Uuid) -> Option<E> {
    rows.iter().find(|r| r.id() == id).cloned()
}

fn delete_row<E: Entry>(rows: &mut Vec<E>, id: Uuid) -> bool {
    let before = rows.len();
    rows.retain(|r| r.id() != id);
    rows.len() != before
}

fn newest_first<E: Entry + Clone>(rows: &[E], user_id: Uuid) -> Vec<E> {
    let mut out: Vec<E> = rows
        .iter()
        .filter(|r| r.is_owned_by(user_id))
        .cloned()
        .collect();
    out.sort_by_key(|r| Reverse(r.recency_key()));
    out
}

fn oldest_first<E: Entry + Clone>(
    rows: &[E],
    user_id: Uuid,
    range: Option<(DateTime<Utc>, DateTime<Utc>)>,
) -> Vec<E> {
    let mut out: Vec<E> = rows
        .iter()
        .filter(|r| r.is_owned_by(user_id))
        .filter(|r| range.map_or(true, |(from, to)| r.date() >= from && r.date() <= to))
        .cloned()
        .collect();
    out.sort_by_key(|r| r.recency_key());
    out
}

fn latest_row<E: Entry + Clone>(rows: &[E], user_id: Uuid) -> Option<E> {
    entry::latest(rows.iter().filter(|r| r.is_owned_by(user_id))).cloned()
}

#[async_trait]
impl EntryStore for MemoryEntryStore {
    async fn insert_meal(&self, meal: Meal) -> Result<Meal, AppError> {
        insert_row(&mut *self.meals.write().await, meal)
    }

    async fn find_meal(&self, id: Uuid) -> Result<Option<Meal>, AppError> {
        Ok(find_row(&self.meals.read().await, id))
    }

    async fn update_meal(&self, id: Uuid, input: &MealInput) -> Result<Option<Meal>, AppError> {
        let mut meals = self.meals.write().await;
        Ok(meals.iter_mut().find(|m| m.id == id).map(|m| {
            m.apply(input);
            m.clone()
        }))
    }

    async fn delete_meal(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(delete_row(&mut *self.meals.write().await, id))
    }

    async fn list_meals(&self, user_id: Uuid) -> Result<Vec<Meal>, AppError> {
        Ok(newest_first(&self.meals.read().await, user_id))
    }

    async fn latest_meal(&self, user_id: Uuid) -> Result<Option<Meal>, AppError> {
        Ok(latest_row(&self.meals.read().await, user_id))
    }

    async fn meals_in_range(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Meal>, AppError> {
        Ok(oldest_first(&self.meals.read().await, user_id, Some((from, to))))
    }

    async fn insert_workout(&self, workout: Workout) -> Result<Workout, AppError> {
        insert_row(&mut *self.workouts.write().await, workout)
    }

    async fn find_workout(&self, id: Uuid) -> Result<Option<Workout>, AppError> {
        Ok(find_row(&self.workouts.read().await, id))
    }

    async fn update_workout(
        &self,
        id: Uuid,
        input: &WorkoutInput,
    ) -> Result<Option<Workout>, AppError> {
        let mut workouts = self.workouts.write().await;
        Ok(workouts.iter_mut().find(|w| w.id == id).map(|w| {
            w.apply(input);
            w.clone()
        }))
    }

    async fn delete_workout(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(delete_row(&mut *self.workouts.write().await, id))
    }

    async fn list_workouts(&self, user_id: Uuid) -> Result<Vec<Workout>, AppError> {
        Ok(newest_first(&self.workouts.read().await, user_id))
    }

    async fn latest_workout(&self, user_id: Uuid) -> Result<Option<Workout>, AppError> {
        Ok(latest_row(&self.workouts.read().await, user_id))
    }

    async fn workouts_in_range(
        &self,
        user_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<Workout>, AppError> {
        Ok(oldest_first(&self.workouts.read().await, user_id, Some((from, to))))
    }

    async fn insert_progress(&self, progress: Progress) -> Result<Progress, AppError> {
        insert_row(&mut *self.progress.write().await, progress)
    }

    async fn find_progress(&self, id: Uuid) -> Result<Option<Progress>, AppError> {
        Ok(find_row(&self.progress.read().await, id))
    }

    async fn update_progress(
        &self,
        id: Uuid,
        input: &ProgressInput,
    ) -> Result<Option<Progress>, AppError> {
        let mut progress = self.progress.write().await;
        Ok(progress.iter_mut().find(|p| p.id == id).map(|p| {
            p.apply(input);
            p.clone()
        }))
    }

    async fn delete_progress(&self, id: Uuid) -> Result<bool, AppError> {
        Ok(delete_row(&mut *self.progress.write().await, id))
    }

    async fn list_progress(&self, user_id: Uuid) -> Result<Vec<Progress>, AppError> {
        Ok(newest_first(&self.progress.read().await, user_id))
    }

    async fn latest_progress(&self, user_id: Uuid) -> Result<Option<Progress>, AppError> {
        Ok(latest_row(&self.progress.read().await, user_id))
    }

    async fn progress_history(&self, user_id: Uuid) -> Result<Vec<Progress>, AppError> {
        Ok(oldest_first(&self.progress.read().await, user_id, None))
    }
}
