pub mod auth;
pub mod exercises;
pub mod health;
pub mod metrics;
pub mod stats;
pub mod workouts;
