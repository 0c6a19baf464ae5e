//! Seed script for development: populates a fresh database with a demo user
//! and a few weeks of meals, workouts and progress entries.
//!
//! Usage: `cargo run --bin seed`
//!
//! Requires `DATABASE_URL` (reads .env).

use chrono::{DateTime, Duration, Utc};
use fitlife::models::meal::{Meal, MealInput};
use fitlife::models::progress::{Progress, ProgressInput};
use fitlife::models::workout::{Workout, WorkoutInput};
use fitlife::store::{EntryStore, PgEntryStore};
use sqlx::PgPool;
use uuid::Uuid;

const DEMO_USERNAME: &str = "demo";
const DEMO_EMAIL: &str = "demo@fitlife.local";
const DEMO_PASSWORD: &str = "demo123";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let db_url = std::env::var("DATABASE_URL")?;
    let pool = fitlife::db::create_pool(&db_url, 5).await?;

    // Run migrations first
    fitlife::db::run_migrations(&pool).await?;

    println!("=== FitLife Seed Script ===");

    let user_id = seed_demo_user(&pool).await?;
    let store = PgEntryStore::new(pool.clone());
    let now = Utc::now();

    let existing = store.list_meals(user_id).await?;
    if !existing.is_empty() {
        println!("[skip] Demo user already has {} meals", existing.len());
        return Ok(());
    }

    seed_meals(&store, user_id, now).await?;
    seed_workouts(&store, user_id, now).await?;
    seed_progress(&store, user_id, now).await?;

    println!("\n=== Seed complete! ===");
    println!("Demo login: {DEMO_EMAIL} / {DEMO_PASSWORD}");

    Ok(())
}

async fn seed_demo_user(pool: &PgPool) -> anyhow::Result<Uuid> {
    let existing: Option<Uuid> = sqlx::query_scalar("SELECT id FROM users WHERE username = $1")
        .bind(DEMO_USERNAME)
        .fetch_optional(pool)
        .await?;

    let hash = fitlife::services::auth::hash_password(DEMO_PASSWORD)?;

    if let Some(id) = existing {
        sqlx::query("UPDATE users SET password_hash = $1 WHERE id = $2")
            .bind(&hash)
            .bind(id)
            .execute(pool)
            .await?;
        println!("[done] Updated demo password");
        return Ok(id);
    }

    let id = Uuid::now_v7();
    sqlx::query("INSERT INTO users (id, username, email, password_hash) VALUES ($1, $2, $3, $4)")
        .bind(id)
        .bind(DEMO_USERNAME)
        .bind(DEMO_EMAIL)
        .bind(&hash)
        .execute(pool)
        .await?;

    println!("[done] Created demo user");
    Ok(id)
}

async fn seed_meals(store: &dyn EntryStore, user_id: Uuid, now: DateTime<Utc>) -> anyhow::Result<()> {
    let menu = [
        ("Oatmeal with banana", 380),
        ("Grilled chicken, rice and beans", 720),
        ("Greek yogurt", 150),
        ("Salmon with vegetables", 610),
    ];

    let mut count = 0;
    for days_ago in 0..10_i64 {
        // Skip a day to show the sparse series.
        if days_ago == 4 {
            continue;
        }
        for (slot, (description, calories)) in menu.iter().enumerate() {
            let date = now - Duration::days(days_ago) - Duration::hours(3 * (menu.len() - slot) as i64);
            store
                .insert_meal(Meal::new(
                    user_id,
                    date,
                    MealInput {
                        description: description.to_string(),
                        calories: *calories,
                    },
                ))
                .await?;
            count += 1;
        }
    }

    println!("[done] Created {count} meals");
    Ok(())
}

async fn seed_workouts(
    store: &dyn EntryStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    let plan = [
        ("Back squat", 5, 5, Some(100.0)),
        ("Bench press", 4, 8, Some(70.0)),
        ("Pull-up", 3, 10, None),
    ];

    let mut count = 0;
    for days_ago in (1..49_i64).step_by(3) {
        let (exercise, sets, reps, weight_kg) = plan[(days_ago as usize) % plan.len()];
        store
            .insert_workout(Workout::new(
                user_id,
                now - Duration::days(days_ago),
                WorkoutInput {
                    exercise: exercise.to_string(),
                    sets,
                    reps,
                    weight_kg,
                },
            ))
            .await?;
        count += 1;
    }

    println!("[done] Created {count} workouts");
    Ok(())
}

async fn seed_progress(
    store: &dyn EntryStore,
    user_id: Uuid,
    now: DateTime<Utc>,
) -> anyhow::Result<()> {
    for week in 0..8_i64 {
        let weight_kg = 86.0 - 0.4 * week as f64;
        store
            .insert_progress(Progress::new(
                user_id,
                now - Duration::weeks(8 - week),
                ProgressInput {
                    weight_kg,
                    height_cm: Some(178.0),
                    body_fat_pct: Some(22.0 - 0.3 * week as f64),
                    notes: (week == 0).then(|| "Starting point".to_string()),
                },
            ))
            .await?;
    }

    println!("[done] Created 8 progress entries");
    Ok(())
}
