/// Servo angle at full left lock, in degrees.
pub const DEFAULT_MIN_ANGLE_DEGREES: f64 = 0.0;

/// Servo angle at full right lock, in degrees.
pub const DEFAULT_MAX_ANGLE_DEGREES: f64 = 180.0;

/// Weight applied to the lane deviation signal.
pub const DEFAULT_LANE_WEIGHT: f64 = 0.5;

/// Weight applied to the obstacle avoidance signal.
pub const DEFAULT_OBSTACLE_WEIGHT: f64 = 0.9;
