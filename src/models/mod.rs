//! Domain entities and request DTOs.

pub mod entry;
pub mod meal;
pub mod progress;
pub mod user;
pub mod workout;
