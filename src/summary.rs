//! Session summary value object and rendering
//!
//! A `Summary` snapshots the derived metrics of one workout. `Display`
//! renders the fixed one-line template; `Serialize` backs the JSON output
//! mode of the CLI.

use std::fmt;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::error::CalculationError;
use crate::models::Workout;

/// Derived metrics of one workout, ready for rendering
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Summary {
    /// Workout type label
    pub workout_type: &'static str,
    /// Session duration in hours
    pub duration_h: Decimal,
    /// Distance covered in kilometers
    pub distance_km: Decimal,
    /// Mean speed in km/h
    pub avg_speed_kmh: Decimal,
    /// Calories burned in kcal
    pub calories_kcal: Decimal,
}

impl Summary {
    /// Compute the summary for a workout
    pub fn from_workout(workout: &Workout) -> Result<Self, CalculationError> {
        Ok(Self {
            workout_type: workout.label(),
            duration_h: workout.duration_h(),
            distance_km: workout.distance_km(),
            avg_speed_kmh: workout.mean_speed_kmh()?,
            calories_kcal: workout.calories_kcal()?,
        })
    }
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // Decimal's `{:.3}` truncates; round to three places first so the
        // rendered fields are fixed-point rounded, not cut off.
        write!(
            f,
            "Type: {}; Duration: {:.3} h; Distance: {:.3} km; \
             Avg speed: {:.3} km/h; Calories: {:.3}.",
            self.workout_type,
            self.duration_h.round_dp(3),
            self.distance_km.round_dp(3),
            self.avg_speed_kmh.round_dp(3),
            self.calories_kcal.round_dp(3)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_template_rendering() {
        let summary = Summary {
            workout_type: "Running",
            duration_h: dec!(1),
            distance_km: dec!(9.75),
            avg_speed_kmh: dec!(9.75),
            calories_kcal: dec!(699.75),
        };
        assert_eq!(
            summary.to_string(),
            "Type: Running; Duration: 1.000 h; Distance: 9.750 km; \
             Avg speed: 9.750 km/h; Calories: 699.750."
        );
    }

    #[test]
    fn test_rounding_to_three_decimals() {
        let summary = Summary {
            workout_type: "Swimming",
            duration_h: dec!(1),
            distance_km: dec!(0.9936),
            avg_speed_kmh: dec!(1),
            calories_kcal: dec!(336),
        };
        assert_eq!(
            summary.to_string(),
            "Type: Swimming; Duration: 1.000 h; Distance: 0.994 km; \
             Avg speed: 1.000 km/h; Calories: 336.000."
        );
    }

    #[test]
    fn test_fields_round_up_not_truncate() {
        // Values past three decimals must round, not get cut off.
        let summary = Summary {
            workout_type: "Running",
            duration_h: dec!(0.9999),
            distance_km: dec!(9.7486),
            avg_speed_kmh: dec!(9.7494),
            calories_kcal: dec!(699.7536),
        };
        assert_eq!(
            summary.to_string(),
            "Type: Running; Duration: 1.000 h; Distance: 9.749 km; \
             Avg speed: 9.749 km/h; Calories: 699.754."
        );
    }

    #[test]
    fn test_negative_values_keep_sign() {
        // A slow enough run makes the calorie formula go negative; the
        // template renders the sign rather than clamping.
        let summary = Summary {
            workout_type: "Running",
            duration_h: dec!(1),
            distance_km: dec!(0.65),
            avg_speed_kmh: dec!(0.65),
            calories_kcal: dec!(-37.35),
        };
        assert!(summary.to_string().contains("Calories: -37.350."));
    }

    #[test]
    fn test_from_workout() {
        let workout = Workout::Swimming {
            action_count: dec!(720),
            duration_h: dec!(1),
            weight_kg: dec!(80),
            pool_length_m: dec!(25),
            lap_count: dec!(40),
        };
        let summary = Summary::from_workout(&workout).unwrap();
        assert_eq!(summary.workout_type, "Swimming");
        assert_eq!(summary.avg_speed_kmh, dec!(1));
        assert_eq!(summary.calories_kcal, dec!(336));
    }

    #[test]
    fn test_from_workout_propagates_faults() {
        let workout = Workout::Running {
            action_count: dec!(100),
            duration_h: dec!(0),
            weight_kg: dec!(75),
        };
        assert!(Summary::from_workout(&workout).is_err());
    }

    #[test]
    fn test_json_serialization() {
        let summary = Summary {
            workout_type: "SportsWalking",
            duration_h: dec!(1),
            distance_km: dec!(5.85),
            avg_speed_kmh: dec!(5.85),
            calories_kcal: dec!(157.5),
        };
        let json = serde_json::to_string(&summary).unwrap();
        assert!(json.contains("\"workout_type\":\"SportsWalking\""));
        assert!(json.contains("\"distance_km\":\"5.85\""));
    }
}
