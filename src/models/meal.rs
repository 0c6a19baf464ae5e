//! Meal entries: what the user ate and how many calories it had.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::entry::Entry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Meal {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub description: String,
    pub calories: i32,
}

impl Meal {
    /// Build a new meal stamped at `date` with a fresh time-ordered id.
    pub fn new(user_id: Uuid, date: DateTime<Utc>, input: MealInput) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            date,
            description: input.description,
            calories: input.calories,
        }
    }

    /// Replace the editable fields. The timestamp is immutable.
    pub fn apply(&mut self, input: &MealInput) {
        self.description = input.description.clone();
        self.calories = input.calories;
    }
}

impl Entry for Meal {
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

/// Create/update payload for a meal.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct MealInput {
    #[validate(length(min = 1, max = 200, message = "must be 1 to 200 characters"))]
    pub description: String,
    #[validate(range(min = 0, message = "must not be negative"))]
    pub calories: i32,
}
