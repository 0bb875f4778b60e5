pub mod cli;
pub mod error;
pub mod package;
pub mod record;
pub mod store;
pub mod utils;
pub mod workout;

pub use error::{StoreError, WorkoutError};
pub use package::build_workout;
pub use record::{Record, format_message, to_summary};
pub use workout::{Activity, Workout, WorkoutKind, sample_workouts};
