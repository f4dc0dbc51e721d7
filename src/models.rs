//! Workout model and derived-metric formulas
//!
//! A workout is one exercise session captured by the sensor unit. Each
//! variant carries its own raw inputs and formula constants; every derived
//! value is a pure function of those inputs.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::CalculationError;

/// Meters in a kilometer
const M_IN_KM: Decimal = dec!(1000);
/// Minutes in an hour
const MIN_IN_HOUR: Decimal = dec!(60);

/// Stride length for running and walking, meters
const STEP_LENGTH_M: Decimal = dec!(0.65);
/// Stroke length for swimming, meters
const STROKE_LENGTH_M: Decimal = dec!(1.38);

// Calorie formula coefficients, per workout type
const RUNNING_SPEED_MULTIPLIER: Decimal = dec!(18);
const RUNNING_SPEED_SHIFT: Decimal = dec!(20);
const WALKING_WEIGHT_MULTIPLIER: Decimal = dec!(0.035);
const WALKING_SPEED_HEIGHT_MULTIPLIER: Decimal = dec!(0.029);
const SWIMMING_SPEED_SHIFT: Decimal = dec!(1.1);
const SWIMMING_WEIGHT_MULTIPLIER: Decimal = dec!(2);

/// One exercise session with type-specific raw inputs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Workout {
    Running {
        /// Number of strides
        action_count: Decimal,
        /// Session duration in hours
        duration_h: Decimal,
        /// Athlete weight in kilograms
        weight_kg: Decimal,
    },
    Walking {
        action_count: Decimal,
        duration_h: Decimal,
        weight_kg: Decimal,
        /// Athlete height in centimeters
        height_cm: Decimal,
    },
    Swimming {
        /// Number of strokes
        action_count: Decimal,
        duration_h: Decimal,
        weight_kg: Decimal,
        /// Pool length in meters
        pool_length_m: Decimal,
        /// Number of pool laps completed
        lap_count: Decimal,
    },
}

impl Workout {
    /// Human-readable workout type label
    pub fn label(&self) -> &'static str {
        match self {
            Workout::Running { .. } => "Running",
            Workout::Walking { .. } => "SportsWalking",
            Workout::Swimming { .. } => "Swimming",
        }
    }

    /// Session duration in hours
    pub fn duration_h(&self) -> Decimal {
        match self {
            Workout::Running { duration_h, .. }
            | Workout::Walking { duration_h, .. }
            | Workout::Swimming { duration_h, .. } => *duration_h,
        }
    }

    fn action_count(&self) -> Decimal {
        match self {
            Workout::Running { action_count, .. }
            | Workout::Walking { action_count, .. }
            | Workout::Swimming { action_count, .. } => *action_count,
        }
    }

    /// Distance covered per action unit (stride or stroke), meters
    fn action_length_m(&self) -> Decimal {
        match self {
            Workout::Running { .. } | Workout::Walking { .. } => STEP_LENGTH_M,
            Workout::Swimming { .. } => STROKE_LENGTH_M,
        }
    }

    /// Distance covered during the session, kilometers
    pub fn distance_km(&self) -> Decimal {
        self.action_count() * self.action_length_m() / M_IN_KM
    }

    /// Mean speed over the session, km/h
    ///
    /// Swimming uses pool length and lap count instead of the action-based
    /// distance; the other types divide the covered distance by duration.
    pub fn mean_speed_kmh(&self) -> Result<Decimal, CalculationError> {
        let speed = match self {
            Workout::Swimming {
                duration_h,
                pool_length_m,
                lap_count,
                ..
            } => (*pool_length_m * *lap_count / M_IN_KM).checked_div(*duration_h),
            _ => self.distance_km().checked_div(self.duration_h()),
        };
        speed.ok_or(CalculationError::DivisionByZero {
            calculation: "mean speed",
        })
    }

    /// Calories burned during the session, kcal
    pub fn calories_kcal(&self) -> Result<Decimal, CalculationError> {
        let speed = self.mean_speed_kmh()?;
        match self {
            Workout::Running {
                duration_h,
                weight_kg,
                ..
            } => Ok((RUNNING_SPEED_MULTIPLIER * speed - RUNNING_SPEED_SHIFT) * *weight_kg
                / M_IN_KM
                * (*duration_h * MIN_IN_HOUR)),
            Workout::Walking {
                duration_h,
                weight_kg,
                height_cm,
                ..
            } => {
                // The speed/height quotient uses integer (floor) division.
                let speed_height_quotient = (speed * speed)
                    .checked_div(*height_cm)
                    .ok_or(CalculationError::DivisionByZero {
                        calculation: "walking calories",
                    })?
                    .floor();
                Ok((WALKING_WEIGHT_MULTIPLIER * *weight_kg
                    + speed_height_quotient * WALKING_SPEED_HEIGHT_MULTIPLIER * *weight_kg)
                    * (*duration_h * MIN_IN_HOUR))
            }
            Workout::Swimming { weight_kg, .. } => {
                Ok((speed + SWIMMING_SPEED_SHIFT) * SWIMMING_WEIGHT_MULTIPLIER * *weight_kg)
            }
        }
    }
}
