//! Business logic services.

pub mod aggregation;
pub mod auth;
pub mod dashboard;
pub mod entries;
