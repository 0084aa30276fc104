pub mod config;
pub mod constants;
pub mod error;
pub mod sensor;
pub mod steer_control;

pub use config::{SteeringConfig, SteeringConfigInit};
pub use error::{Result, SteeringError};
pub use sensor::{FixedSensor, SensorReading, SensorSource};
pub use steer_control::SteerCalculator;
