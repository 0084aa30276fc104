use approx::assert_relative_eq;
use lane_steer::{
    FixedSensor, SensorReading, SensorSource, SteerCalculator, SteeringConfigInit, SteeringError,
};

#[test]
fn control_cycle_through_sensor_boundary() {
    let config = SteeringConfigInit::default().build().unwrap();
    let calc = SteerCalculator::new(config);

    let mut sensor = FixedSensor::new(SensorReading::new(1.0, 0.0, 0.0));
    let angle = calc.compute(&sensor.read()).unwrap();
    assert_relative_eq!(angle, 135.0);

    // Repeated cycles with identical readings produce identical commands.
    for _ in 0..10 {
        let again = calc.compute(&sensor.read()).unwrap();
        assert_relative_eq!(again, angle);
    }
}

#[test]
fn centered_sensor_holds_the_servo_at_midpoint() {
    let config = SteeringConfigInit::default().build().unwrap();
    let calc = SteerCalculator::new(config);

    let mut sensor = FixedSensor::centered();
    let angle = calc.compute(&sensor.read()).unwrap();
    assert_relative_eq!(angle, 90.0);
}

#[test]
fn scripted_sensor_drives_both_variants() {
    struct ScriptedSensor {
        readings: Vec<SensorReading>,
        cursor: usize,
    }

    impl SensorSource for ScriptedSensor {
        fn read(&mut self) -> SensorReading {
            let reading = self.readings[self.cursor % self.readings.len()];
            self.cursor += 1;
            reading
        }
    }

    let config = SteeringConfigInit::default().build().unwrap();
    let calc = SteerCalculator::new(config);

    let mut sensor = ScriptedSensor {
        readings: vec![
            SensorReading::new(0.0, 0.0, 1.0),
            SensorReading::new(0.0, 0.0, 2.0),
        ],
        cursor: 0,
    };

    let first = sensor.read();
    assert_relative_eq!(calc.compute(&first).unwrap(), 171.0);
    assert_relative_eq!(calc.compute_clamped(&first).unwrap(), 171.0);

    // The stronger signal overshoots the servo range raw, saturates clamped.
    let second = sensor.read();
    assert_relative_eq!(calc.compute(&second).unwrap(), 252.0);
    assert_relative_eq!(calc.compute_clamped(&second).unwrap(), 180.0);
}

#[test]
fn calculator_is_shareable_across_threads() {
    let config = SteeringConfigInit::default().build().unwrap();
    let calc = std::sync::Arc::new(SteerCalculator::new(config));

    let handles: Vec<_> = (0..4)
        .map(|i| {
            let calc = calc.clone();
            std::thread::spawn(move || {
                let reading = SensorReading::new(i as f64 * 0.1, 0.0, 0.0);
                calc.compute(&reading).unwrap()
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let angle = handle.join().unwrap();
        assert_relative_eq!(angle, 90.0 + i as f64 * 0.1 * 0.5 * 90.0);
    }
}

#[test]
fn non_finite_reading_surfaces_an_error() {
    let config = SteeringConfigInit::default().build().unwrap();
    let calc = SteerCalculator::new(config);

    let result = calc.compute(&SensorReading::new(0.0, f64::NAN, 0.0));
    assert!(matches!(
        result,
        Err(SteeringError::NonFiniteInput {
            field: "right_lane",
            ..
        })
    ));
}
