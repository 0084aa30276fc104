use crate::{
    constants::{
        DEFAULT_LANE_WEIGHT, DEFAULT_MAX_ANGLE_DEGREES, DEFAULT_MIN_ANGLE_DEGREES,
        DEFAULT_OBSTACLE_WEIGHT,
    },
    error::{ensure_finite, Result, SteeringError},
};

/// Initializer for [`SteeringConfig`]. Field defaults match the stock
/// 0-180 degree hobby servo with the tuned lane/obstacle weights.
#[derive(Debug, Clone)]
pub struct SteeringConfigInit {
    pub min_angle: f64,
    pub max_angle: f64,
    pub lane_weight: f64,
    pub obstacle_weight: f64,
}

impl Default for SteeringConfigInit {
    fn default() -> Self {
        Self {
            min_angle: DEFAULT_MIN_ANGLE_DEGREES,
            max_angle: DEFAULT_MAX_ANGLE_DEGREES,
            lane_weight: DEFAULT_LANE_WEIGHT,
            obstacle_weight: DEFAULT_OBSTACLE_WEIGHT,
        }
    }
}

impl SteeringConfigInit {
    pub fn build(&self) -> Result<SteeringConfig> {
        let Self {
            min_angle,
            max_angle,
            lane_weight,
            obstacle_weight,
        } = *self;

        let min_angle = ensure_finite("min_angle", min_angle)?;
        let max_angle = ensure_finite("max_angle", max_angle)?;
        let lane_weight = ensure_finite("lane_weight", lane_weight)?;
        let obstacle_weight = ensure_finite("obstacle_weight", obstacle_weight)?;

        if min_angle >= max_angle {
            return Err(SteeringError::InvalidRange {
                min_angle,
                max_angle,
            });
        }

        Ok(SteeringConfig {
            min_angle,
            max_angle,
            lane_weight,
            obstacle_weight,
        })
    }
}

/// Validated, immutable steering configuration. `min_angle < max_angle`
/// holds for every constructed value.
#[derive(Debug, Clone, PartialEq)]
pub struct SteeringConfig {
    min_angle: f64,
    max_angle: f64,
    lane_weight: f64,
    obstacle_weight: f64,
}

impl SteeringConfig {
    pub fn min_angle(&self) -> f64 {
        self.min_angle
    }

    pub fn max_angle(&self) -> f64 {
        self.max_angle
    }

    pub fn lane_weight(&self) -> f64 {
        self.lane_weight
    }

    pub fn obstacle_weight(&self) -> f64 {
        self.obstacle_weight
    }

    pub fn range(&self) -> f64 {
        self.max_angle - self.min_angle
    }
}
