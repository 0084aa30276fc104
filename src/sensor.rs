/// One control cycle's worth of sensor signals. `left_lane` and
/// `right_lane` carry the lane marker strengths; `obstacle` is the signed
/// avoidance signal, positive steering right and negative steering left.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SensorReading {
    pub left_lane: f64,
    pub right_lane: f64,
    pub obstacle: f64,
}

impl SensorReading {
    pub fn new(left_lane: f64, right_lane: f64, obstacle: f64) -> Self {
        Self {
            left_lane,
            right_lane,
            obstacle,
        }
    }

    pub fn lane_deviation(&self) -> f64 {
        self.left_lane - self.right_lane
    }
}

impl Default for SensorReading {
    fn default() -> Self {
        Self {
            left_lane: 0.0,
            right_lane: 0.0,
            obstacle: 0.0,
        }
    }
}

/// Boundary to the sensing pipeline. Implemented by whatever produces the
/// lane and obstacle signals, e.g. a camera lane detector polled once per
/// control cycle.
pub trait SensorSource {
    fn read(&mut self) -> SensorReading;
}

/// Sensor source that repeats a fixed reading. Useful as a stand-in while
/// bringing up a control loop without hardware attached.
#[derive(Debug, Clone)]
pub struct FixedSensor {
    reading: SensorReading,
}

impl FixedSensor {
    pub fn new(reading: SensorReading) -> Self {
        Self { reading }
    }

    pub fn centered() -> Self {
        Self::new(SensorReading::default())
    }
}

impl SensorSource for FixedSensor {
    fn read(&mut self) -> SensorReading {
        self.reading
    }
}
