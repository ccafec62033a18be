//! Body Measurement Estimation
//!
//! - `body_measurements.rs` - Height/weight/age/shape → flat-lay body widths
//! - `body_type.rs` - Ratio-based body shape classification

pub mod body_measurements;
pub mod body_type;

pub use body_measurements::{calculate_bmi, estimate_body_measurements, EstimatedBodyMeasurements};
pub use body_type::{detect_body_type, BodyType};
