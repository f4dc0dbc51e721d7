//! Sensor package dispatch
//!
//! Maps a sensor package (short type code + flat positional payload) to the
//! matching workout variant. The code set is closed; anything else is an
//! error, as is a payload whose length does not fit the resolved variant.

use rust_decimal::Decimal;

use crate::error::DispatchError;
use crate::models::Workout;

/// Payload field count for a running package
pub const RUNNING_ARITY: usize = 3;
/// Payload field count for a walking package
pub const WALKING_ARITY: usize = 4;
/// Payload field count for a swimming package
pub const SWIMMING_ARITY: usize = 5;

fn check_arity(
    workout_type: &'static str,
    expected: usize,
    payload: &[Decimal],
) -> Result<(), DispatchError> {
    if payload.len() != expected {
        return Err(DispatchError::ArityMismatch {
            workout_type,
            expected,
            actual: payload.len(),
        });
    }
    Ok(())
}

/// Decode one sensor package into a workout
///
/// `payload` is positional: `[action_count, duration_h, weight_kg]` plus
/// `height_cm` for walking, or `pool_length_m, lap_count` for swimming.
pub fn read_package(code: &str, payload: &[Decimal]) -> Result<Workout, DispatchError> {
    match code {
        "RUN" => {
            check_arity("Running", RUNNING_ARITY, payload)?;
            Ok(Workout::Running {
                action_count: payload[0],
                duration_h: payload[1],
                weight_kg: payload[2],
            })
        }
        "WLK" => {
            check_arity("SportsWalking", WALKING_ARITY, payload)?;
            Ok(Workout::Walking {
                action_count: payload[0],
                duration_h: payload[1],
                weight_kg: payload[2],
                height_cm: payload[3],
            })
        }
        "SWM" => {
            check_arity("Swimming", SWIMMING_ARITY, payload)?;
            Ok(Workout::Swimming {
                action_count: payload[0],
                duration_h: payload[1],
                weight_kg: payload[2],
                pool_length_m: payload[3],
                lap_count: payload[4],
            })
        }
        _ => Err(DispatchError::UnknownWorkoutType {
            code: code.to_string(),
        }),
    }
}
