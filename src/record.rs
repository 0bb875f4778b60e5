use crate::workout::Workout;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Computed summary of a single workout, as displayed and persisted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(rename = "type")]
    pub type_name: String,
    pub duration: f64,
    pub distance: f64,
    pub mean_speed: f64,
    pub calories: f64,
}

impl From<&Workout> for Record {
    fn from(w: &Workout) -> Self {
        Self {
            type_name: w.kind().name().to_string(),
            duration: w.duration,
            distance: w.distance(),
            mean_speed: w.mean_speed(),
            calories: w.spent_calories(),
        }
    }
}

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Workout type: {}; Duration: {:.3} h.; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories burned: {:.3}.",
            self.type_name, self.duration, self.distance, self.mean_speed, self.calories
        )
    }
}

pub fn to_summary(workout: &Workout) -> Record {
    Record::from(workout)
}

pub fn format_message(record: &Record) -> String {
    record.to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_of_running() {
        let r = to_summary(&Workout::running(1000, 30.0, 70.0));
        assert_eq!(r.type_name, "Running");
        assert!((r.duration - 30.0).abs() < f64::EPSILON);
        assert!((r.distance - 0.65).abs() < 1e-12);
    }

    #[test]
    fn message_uses_three_decimals() {
        let r = Record {
            type_name: "Running".to_string(),
            duration: 1.0,
            distance: 0.65,
            mean_speed: 12.345_678,
            calories: 100.0,
        };
        assert_eq!(
            format_message(&r),
            "Workout type: Running; Duration: 1.000 h.; Distance: 0.650 km; \
             Avg speed: 12.346 km/h; Calories burned: 100.000."
        );
    }

    #[test]
    fn message_for_sample_swim() {
        let msg = format_message(&to_summary(&Workout::swimming(50, 45.0, 75.0, 25.0, 5)));
        assert_eq!(
            msg,
            "Workout type: Swimming; Duration: 45.000 h.; Distance: 0.069 km; \
             Avg speed: 0.003 km/h; Calories burned: 7443.750."
        );
    }

    #[test]
    fn serializes_with_persisted_field_names() {
        let r = to_summary(&Workout::walking(8000, 60.0, 65.0, 175.0));
        let v = serde_json::to_value(&r).unwrap();
        assert_eq!(v["type"], "SportsWalking");
        for key in ["duration", "distance", "mean_speed", "calories"] {
            assert!(v[key].is_f64(), "missing {key}");
        }
    }
}
