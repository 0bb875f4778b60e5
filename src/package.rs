use crate::dlog;
use crate::error::WorkoutError;
use crate::workout::{Workout, WorkoutKind};

type Constructor = fn(&[f64]) -> Result<Workout, WorkoutError>;

struct PackageEntry {
    kind: WorkoutKind,
    arity: usize,
    build: Constructor,
}

/// Sensor package layouts, keyed by tag.
///
/// Values are positional: `action, duration, weight`, then `height` for
/// walking or `length_pool, count_pool` for swimming.
static PACKAGES: [PackageEntry; 3] = [
    PackageEntry {
        kind: WorkoutKind::Running,
        arity: 3,
        build: build_running,
    },
    PackageEntry {
        kind: WorkoutKind::Walking,
        arity: 4,
        build: build_walking,
    },
    PackageEntry {
        kind: WorkoutKind::Swimming,
        arity: 5,
        build: build_swimming,
    },
];

/// Build a workout from a sensor package tag and its positional values.
pub fn build_workout(tag: &str, data: &[f64]) -> Result<Workout, WorkoutError> {
    let Some(entry) = PACKAGES.iter().find(|e| e.kind.tag() == tag) else {
        return Err(WorkoutError::UnsupportedType(tag.to_string()));
    };

    if data.len() != entry.arity {
        return Err(WorkoutError::WrongArity {
            tag: entry.kind.tag(),
            expected: entry.arity,
            got: data.len(),
        });
    }

    let workout = (entry.build)(data)?;
    workout.validate()?;
    dlog!("built workout tag={tag} kind={}", workout.kind());
    Ok(workout)
}

fn build_running(d: &[f64]) -> Result<Workout, WorkoutError> {
    Ok(Workout::running(count("action", d[0])?, d[1], d[2]))
}

fn build_walking(d: &[f64]) -> Result<Workout, WorkoutError> {
    Ok(Workout::walking(count("action", d[0])?, d[1], d[2], d[3]))
}

fn build_swimming(d: &[f64]) -> Result<Workout, WorkoutError> {
    Ok(Workout::swimming(
        count("action", d[0])?,
        d[1],
        d[2],
        d[3],
        count("count_pool", d[4])?,
    ))
}

/// Counts arrive as plain numbers; accept only whole values that fit `u32`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
fn count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    let invalid = |reason| WorkoutError::InvalidField {
        field,
        value,
        reason,
    };

    if !value.is_finite() || value.fract() != 0.0 {
        return Err(invalid("must be a whole number"));
    }
    if !(0.0..=f64::from(u32::MAX)).contains(&value) {
        return Err(invalid("out of range"));
    }

    Ok(value as u32)
}
