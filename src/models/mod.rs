pub mod body_metric;
pub mod exercise;
pub mod from_row;
pub mod timestamp;
pub mod user;
pub mod workout;

pub use body_metric::{BodyMetric, CreateBodyMetric};
pub use exercise::{CreateExercise, Exercise};
pub use from_row::FromSqliteRow;
pub use user::{Credentials, LoginResponse, User, UserResponse};
pub use workout::{CreateWorkout, CreateWorkoutSet, Workout, WorkoutSet, WorkoutWithSets};
