//! Drivetrain types composing motor groups with chassis geometry.
//!
//! [`Chaindrive`] and [`FourWheel`] add distance/angle-based movement on top
//! of the group primitives. All kinematic constants live in the geometry
//! structs as named, documented fields so the conversion formulas can be
//! audited and tested away from hardware.
//!
//! The two drivetrains derive in-place rotation differently, and the
//! difference is intentional: a chain-linked tank chassis scrubs its wheels
//! while rotating, so its rotation constant is an empirical calibration
//! measured on the physical robot, while a four-wheel chassis rotates about
//! its center on a circle set by the frame diagonal, so its rotation is
//! derived from geometry alone.

use core::f64::consts::PI;

use log::debug;

use crate::group::{MotorPair, MotorQuad, TankControl};
use crate::motor::{DriveMotor, MotorError};

/// Alliance color tag, used for auton branching elsewhere.
#[derive(Debug, Default, Clone, Copy, Eq, PartialEq)]
pub enum Alliance {
    /// Red alliance.
    #[default]
    Red,

    /// Blue alliance.
    Blue,
}

/// Calibration for a two-motor chain-linked chassis.
///
/// `rotation_track` and `gear_reduction` together form an empirical
/// in-place rotation calibration measured on one specific chassis (13.70
/// and 4.0 for the robot this layer was first tuned on). The constant does
/// not generalize between chassis, so there is no `Default`: both fields
/// must be supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChaindriveGeometry {
    /// Drive wheel diameter, in inches.
    pub wheel_diameter: f64,

    /// Effective track length per full chassis turn, in wheel-travel units.
    /// Empirical; measure it by spinning the robot once in place.
    pub rotation_track: f64,

    /// Reduction between the measured track constant and motor revolutions.
    pub gear_reduction: f64,
}

impl ChaindriveGeometry {
    /// Motor revolutions needed to travel `inches` in a straight line.
    #[must_use]
    pub const fn drive_revolutions(&self, inches: f64) -> f64 {
        inches / (self.wheel_diameter * PI)
    }

    /// Motor revolutions needed to rotate the chassis in place by `degrees`.
    #[must_use]
    pub const fn rotation_revolutions(&self, degrees: f64) -> f64 {
        (degrees / 360.0) * self.rotation_track / self.gear_reduction
    }
}

/// A two-motor tank drive with the wheels on each side linked by a chain.
///
/// Composes a [`MotorPair`] with [`ChaindriveGeometry`]; intended for
/// one-stick control through a [`DriveBinding`](crate::opcontrol::DriveBinding)
/// plus blocking [`move_by`](Chaindrive::move_by) /
/// [`spin_by`](Chaindrive::spin_by) calls from auton routines.
#[derive(Debug)]
pub struct Chaindrive<M> {
    motors: MotorPair<M>,
    geometry: ChaindriveGeometry,
    alliance: Alliance,
}

impl<M: DriveMotor> Chaindrive<M> {
    /// Creates a chaindrive from a motor pair and its chassis calibration.
    pub const fn new(motors: MotorPair<M>, geometry: ChaindriveGeometry) -> Self {
        Self {
            motors,
            geometry,
            alliance: Alliance::Red,
        }
    }

    /// Moves the robot by `inches` (negative for reverse) at `speed` percent
    /// of motor power, blocking until both sides report completion.
    ///
    /// Zero distance still issues a zero-revolution command; zero or
    /// negative speed is passed through uninterpreted.
    pub fn move_by(&mut self, inches: f64, speed: f64) -> Result<(), MotorError> {
        let revolutions = self.geometry.drive_revolutions(inches);
        debug!("move_by: {inches}in -> {revolutions} revs at {speed}%");
        self.motors.drive_for(revolutions, speed)
    }

    /// Rotates the robot in place by `degrees` at `speed` percent of motor
    /// power, blocking until both sides report completion.
    ///
    /// Positive `degrees` rotates counter-clockwise: the left side receives
    /// the negative revolution target and the right side the positive one.
    pub fn spin_by(&mut self, degrees: f64, speed: f64) -> Result<(), MotorError> {
        let revolutions = self.geometry.rotation_revolutions(degrees);
        debug!("spin_by: {degrees}deg -> {revolutions} revs at {speed}%");
        self.motors.rotate_for(revolutions, speed)
    }

    /// Resets both drive encoders to zero.
    pub fn reset_position(&mut self) -> Result<(), MotorError> {
        self.motors.reset_position()
    }

    /// Returns the underlying motor pair.
    pub const fn motors(&self) -> &MotorPair<M> {
        &self.motors
    }

    /// Returns the chassis calibration.
    pub const fn geometry(&self) -> &ChaindriveGeometry {
        &self.geometry
    }

    /// Returns the alliance tag.
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// Sets the alliance tag.
    pub const fn set_alliance(&mut self, alliance: Alliance) {
        self.alliance = alliance;
    }
}

impl<M: DriveMotor> TankControl for Chaindrive<M> {
    fn straight(&mut self, power: f64) -> Result<(), MotorError> {
        self.motors.straight(power)
    }

    fn turn(&mut self, left: f64, right: f64) -> Result<(), MotorError> {
        self.motors.turn(left, right)
    }

    fn hold(&mut self) -> Result<(), MotorError> {
        self.motors.hold()
    }

    fn coast(&mut self) -> Result<(), MotorError> {
        self.motors.coast()
    }
}

/// Geometry of a four-wheel chassis.
///
/// Unlike [`ChaindriveGeometry`], rotation here needs no empirical
/// constant: the wheels roll along a turning circle whose diameter is the
/// frame diagonal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FourWheelGeometry {
    /// Drive wheel diameter, in inches.
    pub wheel_diameter: f64,

    /// Wheel-to-wheel diagonal measurement of the chassis, in inches.
    pub diagonal: f64,
}

impl FourWheelGeometry {
    /// Motor revolutions needed to travel `inches` in a straight line.
    #[must_use]
    pub const fn drive_revolutions(&self, inches: f64) -> f64 {
        inches / (self.wheel_diameter * PI)
    }

    /// Motor revolutions needed to rotate the chassis in place by `degrees`.
    ///
    /// Wheel travel along the turning circle is `(degrees / 360) * PI *
    /// diagonal`; dividing by the wheel circumference `PI * wheel_diameter`
    /// leaves `(degrees / 360) * diagonal / wheel_diameter`.
    #[must_use]
    pub const fn rotation_revolutions(&self, degrees: f64) -> f64 {
        (degrees / 360.0) * self.diagonal / self.wheel_diameter
    }
}

/// A four-motor drive with two independent motors per side.
///
/// Intended for two-stick control. The extra torque of four motors aside,
/// the drive differs from [`Chaindrive`] in its rotation kinematics (see
/// [`FourWheelGeometry`]) and in the `move_while_turning` policy: with the
/// flag disabled, turn input always rotates the chassis in place even when
/// the driver is also holding throttle.
#[derive(Debug)]
pub struct FourWheel<M> {
    motors: MotorQuad<M>,
    geometry: FourWheelGeometry,
    alliance: Alliance,
    move_while_turning: bool,
}

impl<M: DriveMotor> FourWheel<M> {
    /// Creates a four-wheel drive from a motor quad and its geometry.
    ///
    /// `move_while_turning` starts enabled: blended arcing turns.
    pub const fn new(motors: MotorQuad<M>, geometry: FourWheelGeometry) -> Self {
        Self {
            motors,
            geometry,
            alliance: Alliance::Red,
            move_while_turning: true,
        }
    }

    /// Moves the robot by `inches` (negative for reverse) at `speed` percent
    /// of motor power, blocking until all wheels report completion.
    pub fn move_by(&mut self, inches: f64, speed: f64) -> Result<(), MotorError> {
        let revolutions = self.geometry.drive_revolutions(inches);
        debug!("move_by: {inches}in -> {revolutions} revs at {speed}%");
        self.motors.drive_for(revolutions, speed)
    }

    /// Rotates the robot in place by `degrees` at `speed` percent of motor
    /// power, blocking until all wheels report completion.
    ///
    /// Positive `degrees` rotates counter-clockwise, matching
    /// [`Chaindrive::spin_by`].
    pub fn spin_by(&mut self, degrees: f64, speed: f64) -> Result<(), MotorError> {
        let revolutions = self.geometry.rotation_revolutions(degrees);
        debug!("spin_by: {degrees}deg -> {revolutions} revs at {speed}%");
        self.motors.rotate_for(revolutions, speed)
    }

    /// Drives each wheel at its own power. See [`MotorQuad::swerve`].
    pub fn swerve(
        &mut self,
        left_front: f64,
        left_back: f64,
        right_front: f64,
        right_back: f64,
    ) -> Result<(), MotorError> {
        self.motors.swerve(left_front, left_back, right_front, right_back)
    }

    /// Resets all four drive encoders to zero.
    pub fn reset_position(&mut self) -> Result<(), MotorError> {
        self.motors.reset_position()
    }

    /// Returns the underlying motor quad.
    pub const fn motors(&self) -> &MotorQuad<M> {
        &self.motors
    }

    /// Returns the chassis geometry.
    pub const fn geometry(&self) -> &FourWheelGeometry {
        &self.geometry
    }

    /// Returns whether turn input may carry a forward component.
    pub const fn move_while_turning(&self) -> bool {
        self.move_while_turning
    }

    /// Enables or disables arcing turns. See [`FourWheel`].
    pub const fn set_move_while_turning(&mut self, enabled: bool) {
        self.move_while_turning = enabled;
    }

    /// Returns the alliance tag.
    pub const fn alliance(&self) -> Alliance {
        self.alliance
    }

    /// Sets the alliance tag.
    pub const fn set_alliance(&mut self, alliance: Alliance) {
        self.alliance = alliance;
    }
}

impl<M: DriveMotor> TankControl for FourWheel<M> {
    fn straight(&mut self, power: f64) -> Result<(), MotorError> {
        self.motors.straight(power)
    }

    /// With `move_while_turning` disabled, the shared forward component of a
    /// blended turn is stripped before the powers reach the wheels, so turn
    /// input always rotates the chassis in place.
    fn turn(&mut self, left: f64, right: f64) -> Result<(), MotorError> {
        if self.move_while_turning {
            self.motors.turn(left, right)
        } else {
            let common = (left + right) / 2.0;
            self.motors.turn(left - common, right - common)
        }
    }

    fn hold(&mut self) -> Result<(), MotorError> {
        self.motors.hold()
    }

    fn coast(&mut self) -> Result<(), MotorError> {
        self.motors.coast()
    }
}
