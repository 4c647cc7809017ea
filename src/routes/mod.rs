pub mod health;
pub mod map;
pub mod workouts;
