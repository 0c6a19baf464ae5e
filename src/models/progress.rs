//! Body progress entries (weight, and optionally height, body fat and notes).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;
use validator::Validate;

use crate::models::entry::Entry;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Progress {
    pub id: Uuid,
    pub user_id: Uuid,
    pub date: DateTime<Utc>,
    pub weight_kg: f64,
    pub height_cm: Option<f64>,
    pub body_fat_pct: Option<f64>,
    pub notes: Option<String>,
}

impl Progress {
    pub fn new(user_id: Uuid, date: DateTime<Utc>, input: ProgressInput) -> Self {
        Self {
            id: Uuid::now_v7(),
            user_id,
            date,
            weight_kg: input.weight_kg,
            height_cm: input.height_cm,
            body_fat_pct: input.body_fat_pct,
            notes: input.notes,
        }
    }

    /// Replace the editable fields. The timestamp is immutable.
    pub fn apply(&mut self, input: &ProgressInput) {
        self.weight_kg = input.weight_kg;
        self.height_cm = input.height_cm;
        self.body_fat_pct = input.body_fat_pct;
        self.notes = input.notes.clone();
    }
}

impl Entry for Progress {
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

/// Create/update payload for a progress entry.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ProgressInput {
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub weight_kg: f64,
    #[validate(range(exclusive_min = 0.0, message = "must be greater than 0"))]
    pub height_cm: Option<f64>,
    #[validate(range(min = 0.0, max = 100.0, message = "must be between 0 and 100"))]
    pub body_fat_pct: Option<f64>,
    #[validate(length(max = 200, message = "must be at most 200 characters"))]
    pub notes: Option<String>,
}
