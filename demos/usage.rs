use anyhow::Result;
use clap::Parser;
use lane_steer::{SensorReading, SensorSource, SteerCalculator, SteeringConfigInit};
use rand::prelude::*;

#[derive(Parser)]
struct Opts {
    /// Servo angle at full left lock, in degrees
    #[clap(long, default_value = "0.0")]
    pub min_angle: f64,
    /// Servo angle at full right lock, in degrees
    #[clap(long, default_value = "180.0")]
    pub max_angle: f64,
    /// Weight on the lane deviation signal
    #[clap(long, default_value = "0.5")]
    pub lane_weight: f64,
    /// Weight on the obstacle avoidance signal
    #[clap(long, default_value = "0.9")]
    pub obstacle_weight: f64,
    /// Number of control cycles to simulate
    #[clap(long, default_value = "20")]
    pub cycles: usize,
}

/// Mock sensing pipeline: a vehicle drifting off center with occasional
/// obstacle signals, all values jittered with noise.
struct MockSensor {
    rng: ThreadRng,
    drift: f64,
}

impl SensorSource for MockSensor {
    fn read(&mut self) -> SensorReading {
        self.drift += self.rng.gen_range(-0.05..0.05);
        let noise = self.rng.gen_range(-0.02..0.02);
        let obstacle = if self.rng.gen_bool(0.2) {
            self.rng.gen_range(-0.5..0.5)
        } else {
            0.0
        };

        SensorReading {
            left_lane: 0.5 + self.drift + noise,
            right_lane: 0.5 - self.drift,
            obstacle,
        }
    }
}

fn main() -> Result<()> {
    let Opts {
        min_angle,
        max_angle,
        lane_weight,
        obstacle_weight,
        cycles,
    } = Opts::parse();

    // Build a validated steering configuration
    let config = SteeringConfigInit {
        min_angle,
        max_angle,
        lane_weight,
        obstacle_weight,
    }
    .build()?;
    let calculator = SteerCalculator::new(config);

    let mut sensor = MockSensor {
        rng: rand::thread_rng(),
        drift: 0.0,
    };

    for cycle in 0..cycles {
        // Poll the sensing pipeline and compute the servo command
        let reading = sensor.read();
        let raw = calculator.compute(&reading)?;
        let clamped = calculator.compute_clamped(&reading)?;

        println!(
            "cycle {cycle:>3}: lane L={:+.3} R={:+.3} obstacle={:+.3} -> servo {clamped:.1} deg (raw {raw:.1})",
            reading.left_lane, reading.right_lane, reading.obstacle,
        );
    }

    Ok(())
}
