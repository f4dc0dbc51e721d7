// Library interface for the fittrack modules
// Lets integration tests exercise dispatch and the metric formulas directly

pub mod dispatch;
pub mod error;
pub mod logging;
pub mod models;
pub mod summary;

// Re-export commonly used types for convenience
pub use dispatch::read_package;
pub use error::{CalculationError, DispatchError, FittrackError, Result};
pub use models::Workout;
pub use summary::Summary;
