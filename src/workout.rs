use crate::error::WorkoutError;
use std::fmt;

pub const M_IN_KM: f64 = 1000.0;
pub const MIN_IN_HOUR: f64 = 60.0;

/// Distance covered by one step, in meters.
pub const LEN_STEP: f64 = 0.65;
/// Distance covered by one stroke, in meters.
pub const SWIM_LEN_STEP: f64 = 1.38;

const RUN_SPEED_MULTIPLIER: f64 = 18.0;
const RUN_SPEED_SHIFT: f64 = 1.79;

const WALK_WEIGHT_MULTIPLIER: f64 = 0.035;
const WALK_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
const KMH_IN_MSEC: f64 = 0.278;
const CM_IN_M: f64 = 100.0;

const SWIM_WEIGHT_MULTIPLIER: f64 = 2.0;
const SWIM_SPEED_SHIFT: f64 = 1.1;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WorkoutKind {
    Running,
    Walking,
    Swimming,
}

impl WorkoutKind {
    pub const ALL: [Self; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Sensor package tag.
    pub const fn tag(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Type name as shown in messages and stored in the data file.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Per-activity inputs on top of the shared ones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Activity {
    Running,
    Walking { height: f64 },
    Swimming { length_pool: f64, count_pool: u32 },
}

impl Activity {
    pub const fn kind(&self) -> WorkoutKind {
        match self {
            Self::Running => WorkoutKind::Running,
            Self::Walking { .. } => WorkoutKind::Walking,
            Self::Swimming { .. } => WorkoutKind::Swimming,
        }
    }
}

/// One workout as read from the sensors.
///
/// `action` is a step count (running, walking) or a stroke count (swimming),
/// `duration` is in hours, `weight` in kilograms. Walking height is in
/// centimeters, swimming pool length in meters.
///
/// All metrics are recomputed from the fields on every call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Workout {
    pub action: u32,
    pub duration: f64,
    pub weight: f64,
    pub activity: Activity,
}

impl Workout {
    pub const fn running(action: u32, duration: f64, weight: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            activity: Activity::Running,
        }
    }

    pub const fn walking(action: u32, duration: f64, weight: f64, height: f64) -> Self {
        Self {
            action,
            duration,
            weight,
            activity: Activity::Walking { height },
        }
    }

    pub const fn swimming(
        action: u32,
        duration: f64,
        weight: f64,
        length_pool: f64,
        count_pool: u32,
    ) -> Self {
        Self {
            action,
            duration,
            weight,
            activity: Activity::Swimming {
                length_pool,
                count_pool,
            },
        }
    }

    pub const fn kind(&self) -> WorkoutKind {
        self.activity.kind()
    }

    /// Distance in km.
    pub fn distance(&self) -> f64 {
        let step = match self.activity {
            Activity::Running | Activity::Walking { .. } => LEN_STEP,
            Activity::Swimming { .. } => SWIM_LEN_STEP,
        };
        f64::from(self.action) * step / M_IN_KM
    }

    /// Mean speed in km/h.
    ///
    /// Swimming speed comes from the pool lengths completed, not from strokes.
    pub fn mean_speed(&self) -> f64 {
        match self.activity {
            Activity::Running | Activity::Walking { .. } => self.distance() / self.duration,
            Activity::Swimming {
                length_pool,
                count_pool,
            } => length_pool * f64::from(count_pool) / M_IN_KM / self.duration,
        }
    }

    /// Calories burned, in kcal.
    pub fn spent_calories(&self) -> f64 {
        match self.activity {
            Activity::Running => {
                (RUN_SPEED_MULTIPLIER * self.mean_speed() + RUN_SPEED_SHIFT) * self.weight / M_IN_KM
                    * self.duration
                    * MIN_IN_HOUR
            }
            Activity::Walking { height } => {
                (WALK_WEIGHT_MULTIPLIER * self.weight
                    + (self.mean_speed() * KMH_IN_MSEC).powi(2) / (height / CM_IN_M)
                        * WALK_SPEED_HEIGHT_MULTIPLIER
                        * self.weight)
                    * self.duration
                    * MIN_IN_HOUR
            }
            Activity::Swimming { .. } => {
                (self.mean_speed() + SWIM_SPEED_SHIFT) * SWIM_WEIGHT_MULTIPLIER * self.weight
                    * self.duration
            }
        }
    }

    /// Reject inputs the formulas cannot handle (zero divisors, non-finite values).
    pub fn validate(&self) -> Result<(), WorkoutError> {
        positive("duration", self.duration)?;
        positive("weight", self.weight)?;
        match self.activity {
            Activity::Running => {}
            Activity::Walking { height } => positive("height", height)?,
            Activity::Swimming { length_pool, .. } => finite("length_pool", length_pool)?,
        }
        Ok(())
    }
}

fn finite(field: &'static str, value: f64) -> Result<(), WorkoutError> {
    if value.is_finite() {
        return Ok(());
    }
    Err(WorkoutError::InvalidField {
        field,
        value,
        reason: "must be finite",
    })
}

fn positive(field: &'static str, value: f64) -> Result<(), WorkoutError> {
    finite(field, value)?;
    if value <= 0.0 {
        return Err(WorkoutError::InvalidField {
            field,
            value,
            reason: "must be greater than zero",
        });
    }
    Ok(())
}

/// The fixed demo set processed when no package is given.
pub fn sample_workouts() -> Vec<Workout> {
    vec![
        Workout::running(1000, 30.0, 70.0),
        Workout::walking(8000, 60.0, 65.0, 175.0),
        Workout::swimming(50, 45.0, 75.0, 25.0, 5),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9 * b.abs().max(1.0)
    }

    #[test]
    fn running_metrics() {
        let w = Workout::running(1000, 30.0, 70.0);
        assert!(approx(w.distance(), 1000.0 * 0.00065));
        assert!(approx(w.mean_speed(), w.distance() / 30.0));

        let expected = (18.0 * w.mean_speed() + 1.79) * 70.0 / 1000.0 * 30.0 * 60.0;
        assert!(approx(w.spent_calories(), expected));
        assert!(approx(w.spent_calories(), 274.68));
    }

    #[test]
    fn walking_metrics() {
        let w = Workout::walking(8000, 60.0, 65.0, 175.0);
        assert!(approx(w.distance(), 5.2));
        assert!(approx(w.mean_speed(), 5.2 / 60.0));

        let speed = w.mean_speed();
        let expected =
            (0.035 * 65.0 + (speed * 0.278).powi(2) / (175.0 / 100.0) * 0.029 * 65.0) * 60.0 * 60.0;
        assert!(approx(w.spent_calories(), expected));
    }

    #[test]
    fn swimming_speed_uses_pool_lengths() {
        let w = Workout::swimming(50, 45.0, 75.0, 25.0, 5);
        assert!(approx(w.distance(), 50.0 * 1.38 / 1000.0));
        assert!(approx(w.mean_speed(), 25.0 * 5.0 / 1000.0 / 45.0));
        assert!(!approx(w.mean_speed(), w.distance() / 45.0));

        let expected = (w.mean_speed() + 1.1) * 2.0 * 75.0 * 45.0;
        assert!(approx(w.spent_calories(), expected));
    }

    #[test]
    fn zero_action_gives_zero_distance() {
        let w = Workout::running(0, 1.0, 70.0);
        assert!(approx(w.distance(), 0.0));
        assert!(approx(w.mean_speed(), 0.0));
        assert!(approx(w.spent_calories(), 1.79 * 70.0 / 1000.0 * 60.0));
    }

    #[test]
    fn kind_names_and_tags() {
        let tags: Vec<_> = WorkoutKind::ALL.iter().map(|k| k.tag()).collect();
        assert_eq!(tags, ["RUN", "WLK", "SWM"]);
        assert_eq!(Workout::walking(1, 1.0, 1.0, 1.0).kind().to_string(), "SportsWalking");
        assert_eq!(Workout::swimming(1, 1.0, 1.0, 1.0, 1).kind().name(), "Swimming");
    }

    #[test]
    fn validate_rejects_zero_divisors() {
        assert!(Workout::running(10, 1.0, 70.0).validate().is_ok());

        let err = Workout::running(10, 0.0, 70.0).validate().unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidField {
                field: "duration",
                ..
            }
        ));

        let err = Workout::walking(10, 1.0, 70.0, 0.0).validate().unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidField { field: "height", .. }));

        let err = Workout::swimming(10, 1.0, f64::NAN, 25.0, 1)
            .validate()
            .unwrap_err();
        assert!(matches!(err, WorkoutError::InvalidField { field: "weight", .. }));
    }

    #[test]
    fn empty_pool_is_valid_swim() {
        // Pool length is never a divisor, so zero laps of a zero pool is fine.
        let w = Workout::swimming(50, 1.0, 75.0, 0.0, 0);
        assert!(w.validate().is_ok());
        assert!(approx(w.mean_speed(), 0.0));
        assert!(approx(w.spent_calories(), 1.1 * 2.0 * 75.0));

        let err = Workout::swimming(50, 1.0, 75.0, f64::INFINITY, 1)
            .validate()
            .unwrap_err();
        assert!(matches!(
            err,
            WorkoutError::InvalidField {
                field: "length_pool",
                ..
            }
        ));
    }

    #[test]
    fn sample_set_covers_every_kind() {
        let kinds: Vec<_> = sample_workouts().iter().map(Workout::kind).collect();
        assert_eq!(kinds, WorkoutKind::ALL);
    }
}
