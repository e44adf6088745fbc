use chrono::{DateTime, Duration, Utc};
use proptest::prelude::*;
use std::sync::Arc;

use crate::db::{self, DbPool};
use crate::models::Question;
use crate::run_migrations;

/// Sets up a test database with migrations applied
///
/// This function:
/// 1. Creates an in-memory SQLite database
/// 2. Runs all migrations to set up the schema
///
/// ### Returns
///
/// An Arc-wrapped database connection pool connected to the in-memory database
pub fn setup_test_db() -> Arc<DbPool> {
    // Plain ":memory:" gives each pooled connection its own database, so use a
    // uniquely named shared-cache database per test instead.
    let unique_id = uuid::Uuid::new_v4();
    let database_url = format!("file:test_{}?mode=memory&cache=shared", unique_id);
    let pool = db::init_pool(&database_url).expect("Failed to create pool");

    let mut conn = pool.get().expect("Failed to get connection");

    run_migrations(&mut conn).expect("Failed to run migrations");
    drop(conn);

    Arc::new(pool)
}

/// Generates an arbitrary DateTime<Utc> within 2020-01-01 to 2030-01-01
pub fn arb_datetime_utc() -> impl Strategy<Value = DateTime<Utc>> {
    (1_577_836_800i64..1_893_456_000i64)
        .prop_map(|ts| DateTime::from_timestamp(ts, 0).unwrap())
}

/// Generates an offset in seconds of up to sixty days in either direction
pub fn arb_offset_seconds() -> impl Strategy<Value = i64> {
    -60 * 86_400i64..=60 * 86_400i64
}

/// Generates non-empty question or choice text
pub fn arb_text() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9 ?!'.,]{1,64}"
}

/// Generates a list of questions whose publication dates are all distinct
///
/// Distinct dates keep the newest-first ordering unambiguous.
pub fn arb_distinct_questions(now: DateTime<Utc>, max_len: usize) -> impl Strategy<Value = Vec<Question>> {
    prop::collection::hash_set(arb_offset_seconds(), 0..=max_len)
        .prop_map(move |offsets| {
            offsets
                .into_iter()
                .enumerate()
                .map(|(i, offset)| Question::new(format!("Question {}", i), now + Duration::seconds(offset)))
                .collect()
        })
}
