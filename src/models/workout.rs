//! Workout entries: one exercise with its sets, reps and optional load.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::entry::Entry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Workout {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub exercise: String,
    pub sets: i32,
    pub reps: i32,
    /// Load in kilograms, absent for bodyweight work.
    pub weight_kg: Option<f64>,
}

impl Workout {
    pub fn new(user_id: Uuid, date: DateTime<Utc>, input: WorkoutInput) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            date,
            exercise: input.exercise,
            sets: input.sets,
            reps: input.reps,
            weight_kg: input.weight_kg,
        }
    }

    /// Replace the editable fields. The timestamp is immutable.
    pub fn apply(&mut self, input: &WorkoutInput) {
        self.exercise = input.exercise.clone();
        self.sets = input.sets;
        self.reps = input.reps;
        self.weight_kg = input.weight_kg;
    }
}

impl Entry for Workout {
    fn id(&self) -> Uuid {
        self.id
    }

    fn user_id(&self) -> Uuid {
        self.user_id
    }

    fn date(&self) -> DateTime<Utc> {
        self.date
    }
}

/// Create/update payload for a workout.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WorkoutInput {
    #[validate(length(min = 1, max = 100, message = "must be 1 to 100 characters"))]
    pub exercise: String,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub sets: i32,
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub reps: i32,
    #[validate(range(min = 0.0, message = "must not be negative"))]
    pub weight_kg: Option<f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn input(sets: i32, reps: i32, weight_kg: Option<f64>) -> WorkoutInput {
        WorkoutInput {
            exercise: "Squat".to_string(),
            sets,
            reps,
            weight_kg,
        }
    }

    #[test]
    fn input_validation() {
        assert!(input(3, 10, Some(80.0)).validate().is_ok());
        assert!(input(3, 10, None).validate().is_ok());
        assert!(input(0, 10, None).validate().is_err());
        assert!(input(3, 0, None).validate().is_err());
        assert!(input(3, 10, Some(-5.0)).validate().is_err());
    }

    #[test]
    fn apply_can_clear_weight() {
        let mut workout = Workout::new(Uuid::new_v4(), Utc::now(), input(5, 5, Some(100.0)));
        let date = workout.date;
        workout.apply(&input(3, 12, None));
        assert_eq!(workout.weight_kg, None);
        assert_eq!(workout.sets, 3);
        assert_eq!(workout.date, date);
    }
}
