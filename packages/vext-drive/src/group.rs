//! Left/right motor groups.
//!
//! A group owns the motors for both sides of a chassis and exposes the
//! primitives a drivetrain is built from: matched straight power, per-side
//! turn power, stop with hold or coast, and the two-phase positional moves
//! used by autonomous routines.
//!
//! # Two-phase moves
//!
//! Positional moves are issued in two phases: every motor except the last is
//! commanded with [`Completion::NoWait`], then the last motor is commanded
//! with [`Completion::Wait`]. All wheels are therefore moving in hardware
//! before software blocks, and there is a single completion point. This is
//! the only concurrency mechanism in the crate — no locks, no cancellation.

use log::trace;

use crate::motor::{BrakeMode, Completion, DriveMotor, MotorError};

/// Commands shared by every left/right motor grouping.
///
/// Implemented by [`MotorPair`] and [`MotorQuad`] directly, and by the
/// drivetrain types through delegation, so the controller binding can drive
/// any of them.
pub trait TankControl {
    /// Drives both sides at the same power. Positive is forward.
    fn straight(&mut self, power: f64) -> Result<(), MotorError>;

    /// Drives the sides at independent powers.
    fn turn(&mut self, left: f64, right: f64) -> Result<(), MotorError>;

    /// Stops both sides, actively holding position.
    fn hold(&mut self) -> Result<(), MotorError>;

    /// Stops both sides, letting the wheels spin down freely.
    fn coast(&mut self) -> Result<(), MotorError>;
}

/// A matched left/right motor pair for a two-motor chassis.
///
/// The two sides of a chain-linked chassis are mechanical mirrors. Motors
/// are expected to be constructed so that positive commands move the robot
/// forward on both sides — the left motor's reverse flag absorbs the
/// mirroring, the same way a tank-drive robot reverses its left-side motors
/// at construction.
#[derive(Debug)]
pub struct MotorPair<M> {
    left: M,
    right: M,
}

impl<M: DriveMotor> MotorPair<M> {
    /// Creates a pair from left and right motors.
    pub const fn new(left: M, right: M) -> Self {
        Self { left, right }
    }

    /// Returns the left motor.
    pub const fn left(&self) -> &M {
        &self.left
    }

    /// Returns the right motor.
    pub const fn right(&self) -> &M {
        &self.right
    }

    /// Spins both sides through the same number of revolutions, blocking
    /// until the move completes.
    ///
    /// The left side is commanded without waiting, then the right side is
    /// commanded and awaited: both wheels leave together and the call has a
    /// single blocking point.
    pub fn drive_for(&mut self, revolutions: f64, velocity: f64) -> Result<(), MotorError> {
        trace!("drive_for: {revolutions} revs at {velocity}%");
        self.left.spin_for(revolutions, velocity, Completion::NoWait)?;
        self.right.spin_for(revolutions, velocity, Completion::Wait)
    }

    /// Spins the sides through opposite revolutions for an in-place
    /// rotation, blocking until the move completes.
    ///
    /// Positive `revolutions` rotates the chassis counter-clockwise: the
    /// left side runs backward (`-revolutions`) and the right side forward.
    pub fn rotate_for(&mut self, revolutions: f64, velocity: f64) -> Result<(), MotorError> {
        trace!("rotate_for: {revolutions} revs at {velocity}%");
        self.left.spin_for(-revolutions, velocity, Completion::NoWait)?;
        self.right.spin_for(revolutions, velocity, Completion::Wait)
    }

    /// Resets both encoders to zero.
    pub fn reset_position(&mut self) -> Result<(), MotorError> {
        self.left.reset_position()?;
        self.right.reset_position()
    }
}

impl<M: DriveMotor> TankControl for MotorPair<M> {
    fn straight(&mut self, power: f64) -> Result<(), MotorError> {
        self.left.spin(power)?;
        self.right.spin(power)
    }

    fn turn(&mut self, left: f64, right: f64) -> Result<(), MotorError> {
        self.left.spin(left)?;
        self.right.spin(right)
    }

    fn hold(&mut self) -> Result<(), MotorError> {
        self.left.stop(BrakeMode::Hold)?;
        self.right.stop(BrakeMode::Hold)
    }

    fn coast(&mut self) -> Result<(), MotorError> {
        self.left.stop(BrakeMode::Coast)?;
        self.right.stop(BrakeMode::Coast)
    }
}

/// Four motors, two per side, for a four-wheel chassis.
///
/// Exposes the same primitive surface as [`MotorPair`], plus per-wheel
/// powers ([`MotorQuad::swerve`]) for holonomic chassis where the front and
/// back wheels of a side are driven differently while turning.
#[derive(Debug)]
pub struct MotorQuad<M> {
    left: [M; 2],
    right: [M; 2],
}

impl<M: DriveMotor> MotorQuad<M> {
    /// Creates a quad from `[front, back]` motors for each side.
    pub const fn new(left: [M; 2], right: [M; 2]) -> Self {
        Self { left, right }
    }

    /// Returns the left-side motors as `[front, back]`.
    pub const fn left(&self) -> &[M; 2] {
        &self.left
    }

    /// Returns the right-side motors as `[front, back]`.
    pub const fn right(&self) -> &[M; 2] {
        &self.right
    }

    /// Drives each wheel at its own power.
    ///
    /// This is the strafe-aware escape hatch for holonomic drive schemes
    /// that need the front and back of a side to differ.
    pub fn swerve(
        &mut self,
        left_front: f64,
        left_back: f64,
        right_front: f64,
        right_back: f64,
    ) -> Result<(), MotorError> {
        self.left[0].spin(left_front)?;
        self.left[1].spin(left_back)?;
        self.right[0].spin(right_front)?;
        self.right[1].spin(right_back)
    }

    /// Spins all four wheels through the same number of revolutions,
    /// blocking until the move completes.
    ///
    /// The first three motors are commanded without waiting; only the final
    /// one is awaited, so all wheels leave together.
    pub fn drive_for(&mut self, revolutions: f64, velocity: f64) -> Result<(), MotorError> {
        trace!("drive_for: {revolutions} revs at {velocity}%");
        for motor in &mut self.left {
            motor.spin_for(revolutions, velocity, Completion::NoWait)?;
        }
        self.right[0].spin_for(revolutions, velocity, Completion::NoWait)?;
        self.right[1].spin_for(revolutions, velocity, Completion::Wait)
    }

    /// Spins the sides through opposite revolutions for an in-place
    /// rotation, blocking until the move completes.
    ///
    /// Positive `revolutions` rotates the chassis counter-clockwise, like
    /// [`MotorPair::rotate_for`].
    pub fn rotate_for(&mut self, revolutions: f64, velocity: f64) -> Result<(), MotorError> {
        trace!("rotate_for: {revolutions} revs at {velocity}%");
        for motor in &mut self.left {
            motor.spin_for(-revolutions, velocity, Completion::NoWait)?;
        }
        self.right[0].spin_for(revolutions, velocity, Completion::NoWait)?;
        self.right[1].spin_for(revolutions, velocity, Completion::Wait)
    }

    /// Resets all four encoders to zero.
    pub fn reset_position(&mut self) -> Result<(), MotorError> {
        for motor in self.left.iter_mut().chain(self.right.iter_mut()) {
            motor.reset_position()?;
        }
        Ok(())
    }

    fn stop_all(&mut self, mode: BrakeMode) -> Result<(), MotorError> {
        for motor in self.left.iter_mut().chain(self.right.iter_mut()) {
            motor.stop(mode)?;
        }
        Ok(())
    }
}

impl<M: DriveMotor> TankControl for MotorQuad<M> {
    fn straight(&mut self, power: f64) -> Result<(), MotorError> {
        for motor in self.left.iter_mut().chain(self.right.iter_mut()) {
            motor.spin(power)?;
        }
        Ok(())
    }

    fn turn(&mut self, left: f64, right: f64) -> Result<(), MotorError> {
        for motor in &mut self.left {
            motor.spin(left)?;
        }
        for motor in &mut self.right {
            motor.spin(right)?;
        }
        Ok(())
    }

    fn hold(&mut self) -> Result<(), MotorError> {
        self.stop_all(BrakeMode::Hold)
    }

    fn coast(&mut self) -> Result<(), MotorError> {
        self.stop_all(BrakeMode::Coast)
    }
}
