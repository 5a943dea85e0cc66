//! Kinematics and autonomous-move behavior, exercised through the
//! simulator motors.
//!
//! Sign conventions under test: positive power/revolutions are
//! robot-forward on both sides (the left motor's reverse flag absorbs the
//! chassis mirroring), and positive `spin_by` degrees rotate the chassis
//! counter-clockwise — left side negative target, right side positive.

use vext_drive::{
    Alliance, BrakeMode, Chaindrive, ChaindriveGeometry, Completion, DriveMotor, FourWheel,
    FourWheelGeometry, MotorError, MotorFaults, MotorPair, MotorQuad, TankControl,
};
use vext_sim::{Command, CommandClock, Issued, SimMotor};

fn chaindrive(clock: &CommandClock) -> Chaindrive<SimMotor> {
    Chaindrive::new(
        MotorPair::new(SimMotor::new(clock), SimMotor::new(clock)),
        ChaindriveGeometry {
            wheel_diameter: 5.0,
            rotation_track: 13.70,
            gear_reduction: 4.0,
        },
    )
}

fn four_wheel(clock: &CommandClock) -> FourWheel<SimMotor> {
    FourWheel::new(
        MotorQuad::new(
            [SimMotor::new(clock), SimMotor::new(clock)],
            [SimMotor::new(clock), SimMotor::new(clock)],
        ),
        FourWheelGeometry {
            wheel_diameter: 4.0,
            diagonal: 18.0,
        },
    )
}

fn spin_for_of(issued: Issued) -> (f64, f64, Completion) {
    match issued.command {
        Command::SpinFor {
            revolutions,
            velocity,
            completion,
        } => (revolutions, velocity, completion),
        other => panic!("expected a positional move, got {other:?}"),
    }
}

fn assert_close(actual: f64, expected: f64, tolerance: f64) {
    assert!(
        (actual - expected).abs() < tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn move_by_converts_inches_to_revolutions() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    // One wheel circumference: 5in wheel -> 5 * pi = 15.70796in.
    drive.move_by(15.708, 50.0).unwrap();

    for motor in [drive.motors().left(), drive.motors().right()] {
        let (revolutions, velocity, _) = spin_for_of(motor.last().unwrap());
        assert_close(revolutions, 1.0, 1e-3);
        assert_eq!(velocity, 50.0);
    }
}

#[test]
fn move_by_issues_left_before_awaiting_right() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    drive.move_by(24.0, 60.0).unwrap();

    let left = drive.motors().left().last().unwrap();
    let right = drive.motors().right().last().unwrap();
    assert!(left.seq < right.seq);
    assert_eq!(spin_for_of(left).2, Completion::NoWait);
    assert_eq!(spin_for_of(right).2, Completion::Wait);
}

#[test]
fn move_by_round_trips_encoder_positions() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    drive.move_by(24.0, 60.0).unwrap();
    drive.move_by(-24.0, 60.0).unwrap();

    assert_close(drive.motors().left().position().unwrap(), 0.0, 1e-9);
    assert_close(drive.motors().right().position().unwrap(), 0.0, 1e-9);
}

#[test]
fn zero_distance_still_issues_a_command() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    drive.move_by(0.0, 50.0).unwrap();

    assert_eq!(drive.motors().left().log().len(), 1);
    let (revolutions, _, _) = spin_for_of(drive.motors().left().last().unwrap());
    assert_eq!(revolutions, 0.0);
}

#[test]
fn spin_by_uses_the_empirical_rotation_calibration() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    // (90 / 360) * 13.70 / 4 = 0.85625 revolutions.
    drive.spin_by(90.0, 50.0).unwrap();

    let (left_revs, left_velocity, _) = spin_for_of(drive.motors().left().last().unwrap());
    let (right_revs, _, _) = spin_for_of(drive.motors().right().last().unwrap());
    assert_close(left_revs, -0.85625, 1e-9);
    assert_close(right_revs, 0.85625, 1e-9);
    assert_eq!(left_velocity, 50.0);
}

#[test]
fn spin_by_issues_opposite_equal_magnitude_targets() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    drive.spin_by(123.4, 40.0).unwrap();

    let (left_revs, _, _) = spin_for_of(drive.motors().left().last().unwrap());
    let (right_revs, _, _) = spin_for_of(drive.motors().right().last().unwrap());
    assert_close(left_revs, -right_revs, 1e-12);
    assert!(right_revs > 0.0);
}

#[test]
fn four_wheel_rotation_derives_from_the_diagonal() {
    let clock = CommandClock::new();
    let mut drive = four_wheel(&clock);

    // (90 / 360) * 18 / 4 = 1.125 revolutions; no empirical constant.
    drive.spin_by(90.0, 40.0).unwrap();

    for motor in drive.motors().left() {
        let (revolutions, _, _) = spin_for_of(motor.last().unwrap());
        assert_close(revolutions, -1.125, 1e-9);
    }
    for motor in drive.motors().right() {
        let (revolutions, _, _) = spin_for_of(motor.last().unwrap());
        assert_close(revolutions, 1.125, 1e-9);
    }
}

#[test]
fn four_wheel_awaits_only_the_final_motor() {
    let clock = CommandClock::new();
    let mut drive = four_wheel(&clock);

    drive.move_by(12.566, 30.0).unwrap();

    let completions: Vec<Completion> = drive
        .motors()
        .left()
        .iter()
        .chain(drive.motors().right())
        .map(|motor| spin_for_of(motor.last().unwrap()).2)
        .collect();
    assert_eq!(
        completions,
        [
            Completion::NoWait,
            Completion::NoWait,
            Completion::NoWait,
            Completion::Wait,
        ],
    );

    // One wheel circumference of travel: 4in wheel -> 12.566in.
    let (revolutions, _, _) = spin_for_of(drive.motors().left()[0].last().unwrap());
    assert_close(revolutions, 1.0, 1e-3);
}

#[test]
fn hold_and_coast_reach_every_motor() {
    let clock = CommandClock::new();
    let mut drive = four_wheel(&clock);

    drive.hold().unwrap();
    for motor in drive.motors().left().iter().chain(drive.motors().right()) {
        assert_eq!(
            motor.last().unwrap().command,
            Command::Stop {
                mode: BrakeMode::Hold
            },
        );
    }

    drive.coast().unwrap();
    for motor in drive.motors().left().iter().chain(drive.motors().right()) {
        assert_eq!(
            motor.last().unwrap().command,
            Command::Stop {
                mode: BrakeMode::Coast
            },
        );
    }
}

#[test]
fn swerve_drives_each_wheel_independently() {
    let clock = CommandClock::new();
    let mut drive = four_wheel(&clock);

    drive.swerve(10.0, 20.0, -10.0, -20.0).unwrap();

    assert_eq!(
        drive.motors().left()[0].last().unwrap().command,
        Command::Spin { power: 10.0 },
    );
    assert_eq!(
        drive.motors().left()[1].last().unwrap().command,
        Command::Spin { power: 20.0 },
    );
    assert_eq!(
        drive.motors().right()[0].last().unwrap().command,
        Command::Spin { power: -10.0 },
    );
    assert_eq!(
        drive.motors().right()[1].last().unwrap().command,
        Command::Spin { power: -20.0 },
    );
}

#[test]
fn reset_position_zeroes_both_encoders() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    drive.move_by(10.0, 50.0).unwrap();
    drive.reset_position().unwrap();

    assert_eq!(drive.motors().left().position().unwrap(), 0.0);
    assert_eq!(drive.motors().right().position().unwrap(), 0.0);
}

#[test]
fn hardware_faults_pass_through_unmodified() {
    let clock = CommandClock::new();
    let mut left = SimMotor::new(&clock);
    left.set_faults(MotorFaults::OVER_TEMPERATURE);
    let mut drive = Chaindrive::new(
        MotorPair::new(left, SimMotor::new(&clock)),
        ChaindriveGeometry {
            wheel_diameter: 5.0,
            rotation_track: 13.70,
            gear_reduction: 4.0,
        },
    );

    match drive.move_by(10.0, 50.0) {
        Err(MotorError::Fault { faults }) => {
            assert_eq!(faults, MotorFaults::OVER_TEMPERATURE);
        }
        other => panic!("expected a fault passthrough, got {other:?}"),
    }
}

#[test]
fn alliance_tag_defaults_to_red() {
    let clock = CommandClock::new();
    let mut drive = chaindrive(&clock);

    assert_eq!(drive.alliance(), Alliance::Red);
    drive.set_alliance(Alliance::Blue);
    assert_eq!(drive.alliance(), Alliance::Blue);
}
