use crate::{
    config::SteeringConfig,
    error::{ensure_finite, Result},
    sensor::SensorReading,
};

/// Maps lane and obstacle signals to a servo angle with a fixed linear
/// model. Stateless: each computation depends only on the reading passed
/// in, so one calculator can serve any number of concurrent callers.
#[derive(Debug, Clone)]
pub struct SteerCalculator {
    config: SteeringConfig,
}

impl SteerCalculator {
    pub fn new(config: SteeringConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SteeringConfig {
        &self.config
    }

    /// Servo angle for a centered vehicle with no obstacle signal.
    pub fn center(&self) -> f64 {
        self.config.min_angle() + self.config.range() / 2.0
    }

    /// Computes the raw servo angle. The result is not constrained to the
    /// configured range: large-magnitude inputs can push it past either
    /// lock. Use [`compute_clamped`](Self::compute_clamped) when feeding a
    /// real actuator.
    pub fn compute(&self, reading: &SensorReading) -> Result<f64> {
        let left_lane = ensure_finite("left_lane", reading.left_lane)?;
        let right_lane = ensure_finite("right_lane", reading.right_lane)?;
        let obstacle = ensure_finite("obstacle", reading.obstacle)?;

        let lane_deviation = left_lane - right_lane;
        let correction =
            self.config.lane_weight() * lane_deviation + self.config.obstacle_weight() * obstacle;

        let half_range = self.config.range() / 2.0;
        Ok(self.config.min_angle() + half_range + correction * half_range)
    }

    /// Like [`compute`](Self::compute), but clamps the result into
    /// `[min_angle, max_angle]` so it is always a valid servo command.
    pub fn compute_clamped(&self, reading: &SensorReading) -> Result<f64> {
        let angle = self.compute(reading)?;
        Ok(angle.clamp(self.config.min_angle(), self.config.max_angle()))
    }
}
