//! Owner-scoped CRUD for meals, workouts and progress entries.
//!
//! A missing entry is `NotFound`; an entry that belongs to someone else is
//! `Forbidden`. New entries are stamped with the current time, and updates
//! never touch that timestamp.

use chrono::Utc;
use uuid::Uuid;
use validator::Validate;

use crate::errors::AppError;
use crate::models::entry::Entry;
use crate::models::meal::{Meal, MealInput};
use crate::models::progress::{Progress, ProgressInput};
use crate::models::workout::{Workout, WorkoutInput};
use crate::store::EntryStore;

/// Resolve a fetched entry against its requester.
fn ensure_owner<E: Entry>(entry: Option<E>, user_id: Uuid, kind: &str) -> Result<E, AppError> {
    let entry = entry.ok_or_else(|| AppError::NotFound(format!("{kind} not found")))?;
    if !entry.is_owned_by(user_id) {
        tracing::warn!(entry_id = %entry.id(), user_id = %user_id, kind, "Access to foreign entry denied");
        return Err(AppError::Forbidden(format!("{kind} belongs to another user")));
    }
    Ok(entry)
}

fn gone(kind: &str) -> AppError {
    AppError::NotFound(format!("{kind} not found"))
}

// ── Meals ───────────────────────────────────────────────────────────

pub async fn create_meal(
    store: &dyn EntryStore,
    user_id: Uuid,
    input: MealInput,
) -> Result<Meal, AppError> {
    input.validate()?;
    store.insert_meal(Meal::new(user_id, Utc::now(), input)).await
}

pub async fn list_meals(store: &dyn EntryStore, user_id: Uuid) -> Result<Vec<Meal>, AppError> {
    store.list_meals(user_id).await
}

pub async fn get_meal(store: &dyn EntryStore, user_id: Uuid, id: Uuid) -> Result<Meal, AppError> {
    ensure_owner(store.find_meal(id).await?, user_id, "Meal")
}

pub async fn update_meal(
    store: &dyn EntryStore,
    user_id: Uuid,
    id: Uuid,
    input: &MealInput,
) -> Result<Meal, AppError> {
    input.validate()?;
    get_meal(store, user_id, id).await?;
    store
        .update_meal(id, input)
        .await?
        .ok_or_else(|| gone("Meal"))
}

pub async fn delete_meal(store: &dyn EntryStore, user_id: Uuid, id: Uuid) -> Result<(), AppError> {
    get_meal(store, user_id, id).await?;
    if !store.delete_meal(id).await? {
        return Err(gone("Meal"));
    }
    Ok(())
}

// ── Workouts ────────────────────────────────────────────────────────

pub async fn create_workout(
    store: &dyn EntryStore,
    user_id: Uuid,
    input: WorkoutInput,
) -> Result<Workout, AppError> {
    input.validate()?;
    store
        .insert_workout(Workout::new(user_id, Utc::now(), input))
        .await
}

pub async fn list_workouts(
    store: &dyn EntryStore,
    user_id: Uuid,
) -> Result<Vec<Workout>, AppError> {
    store.list_workouts(user_id).await
}

pub async fn get_workout(
    store: &dyn EntryStore,
    user_id: Uuid,
    id: Uuid,
) -> Result<Workout, AppError> {
    ensure_owner(store.find_workout(id).await?, user_id, "Workout")
}

pub async fn update_workout(
    store: &dyn EntryStore,
    user_id: Uuid,
    id: Uuid,
    input: &WorkoutInput,
) -> Result<Workout, AppError> {
    input.validate()?;
    get_workout(store, user_id, id).await?;
    store
        .update_workout(id, input)
        .await?
        .ok_or_else(|| gone("Workout"))
}

pub async fn delete_workout(
    store: &dyn EntryStore,
    user_id: Uuid,
    id: Uuid,
) -> Result<(), AppError> {
    get_workout(store, user_id, id).await?;
    if !store.delete_workout(id).await? {
        return Err(gone("Workout"));
    }
    Ok(())
}

// ── Progress ────────────────────────────────────────────────────────

pub async fn create_progress(
    store: &dyn EntryStore,
    user_id: Uuid,
    input: ProgressInput,
) -> Result<Progress, AppError> {
    input.validate()?;
    store
        .insert_progress(Progress::new(user_id, Utc::now(), input))
        .await
}

pub async fn list_progress(
    store: &dyn EntryStore,
    user_id: Uuid,
) -> Result<Vec<Progress>, AppError> {
    store.list_progress(user_id).await
}

pub async fn get_progress(
    store: &dyn EntryStore,
    user_id: Uuid,
    id: Uuid,
) -> Result<Progress, AppError> {
    ensure_owner(store.find_progress(id).await?, user_id, "Progress entry")
}

pub async fn update_progress(
    store: &dyn EntryStore,
    user_id: Uuid,
    id: Uuid,
    input: &ProgressInput,
) -> Result<Progress, AppError> {
    input.validate()?;
    get_progress(store, user_id, id).await?;
    store
        .update_progress(id, input)
        .await?
        .ok_or_else(|| gone("Progress entry"))
}

pub async fn delete_progress(
    store: &dyn EntryStore,
    user_id: Uuid,
    id: Uuid,
) -> Result<(), AppError> {
    get_progress(store, user_id, id).await?;
    if !store.delete_progress(id).await? {
        return Err(gone("Progress entry"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryEntryStore;

    fn lunch() -> MealInput {
        MealInput {
            description: "Rice and beans".to_string(),
            calories: 620,
        }
    }

    #[tokio::test]
    async fn owner_can_read_update_and_delete() {
        let store = MemoryEntryStore::new();
        let user = Uuid::new_v4();
        let meal = create_meal(&store, user, lunch()).await.unwrap();

        let fetched = get_meal(&store, user, meal.id).await.unwrap();
        assert_eq!(fetched, meal);

        let updated = update_meal(
            &store,
            user,
            meal.id,
            &MealInput {
                description: "Rice, beans and salad".to_string(),
                calories: 700,
            },
        )
        .await
        .unwrap();
        assert_eq!(updated.calories, 700);
        assert_eq!(updated.date, meal.date);

        delete_meal(&store, user, meal.id).await.unwrap();
        let err = get_meal(&store, user, meal.id).await.unwrap_err();
        assert!(err.is_not_found());
    }

    #[tokio::test]
    async fn other_users_are_forbidden() {
        let store = MemoryEntryStore::new();
        let owner = Uuid::new_v4();
        let intruder = Uuid::new_v4();
        let workout = create_workout(
            &store,
            owner,
            WorkoutInput {
                exercise: "Pull-up".to_string(),
                sets: 3,
                reps: 8,
                weight_kg: None,
            },
        )
        .await
        .unwrap();

        assert!(get_workout(&store, intruder, workout.id)
            .await
            .unwrap_err()
            .is_forbidden());
        assert!(delete_workout(&store, intruder, workout.id)
            .await
            .unwrap_err()
            .is_forbidden());
        assert!(get_workout(&store, owner, workout.id).await.is_ok());
    }

    #[tokio::test]
    async fn invalid_input_is_rejected_before_storage() {
        let store = MemoryEntryStore::new();
        let user = Uuid::new_v4();
        let err = create_progress(
            &store,
            user,
            ProgressInput {
                weight_kg: -1.0,
                height_cm: None,
                body_fat_pct: None,
                notes: None,
            },
        )
        .await
        .unwrap_err();
        assert!(matches!(err, AppError::Validation(_)));
        assert!(list_progress(&store, user).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn missing_entry_is_not_found() {
        let store = MemoryEntryStore::new();
        let err = update_meal(&store, Uuid::new_v4(), Uuid::new_v4(), &lunch())
            .await
            .unwrap_err();
        assert!(err.is_not_found());
    }
}
