//! Controller binding for driver control.
//!
//! A [`DriveBinding`] joins one joystick to one drivetrain. It owns both
//! handles, so each drivetrain carries its own binding — there is no
//! process-wide registration and a second drivetrain never aliases the
//! first one's state.
//!
//! The binding is driven by the controller's axis change notifications:
//! register [`DriveBinding::update`] with *both* axes, and every firing
//! re-runs the full mapping from the current stick position. There is no
//! retained state between calls; the moving/held distinction is recomputed
//! from scratch each time, with no hysteresis beyond the deadband itself.

use log::warn;

use crate::group::TankControl;
use crate::mix::{DEFAULT_DEADBAND, DriveCommand, mix};
use crate::motor::MotorError;

/// Current joystick axis positions, in percent `[-100, 100]`.
///
/// Implementations must report the position *at call time*, never a stale
/// event payload: when both axes change within one input frame, the binding
/// re-reads both so the two sides are always commanded from one consistent
/// sample.
pub trait AxisPair {
    /// Current horizontal (turn) axis position.
    fn x(&self) -> f64;

    /// Current vertical (throttle) axis position.
    fn y(&self) -> f64;
}

/// The binding's two observable states.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum DriveState {
    /// At least one axis is outside the deadband; the motors are running.
    Moving,

    /// Both axes are inside the deadband; the motors are actively holding.
    Held,
}

/// Joins one joystick to one drivetrain.
///
/// ```ignore
/// let mut binding = DriveBinding::new(stick, drive).with_deadband(5.0);
///
/// // From both axis change callbacks:
/// binding.update()?;
/// ```
#[derive(Debug)]
pub struct DriveBinding<A, D> {
    axes: A,
    drive: D,
    deadband: f64,
}

impl<A: AxisPair, D: TankControl> DriveBinding<A, D> {
    /// Creates a binding with [`DEFAULT_DEADBAND`].
    pub const fn new(axes: A, drive: D) -> Self {
        Self {
            axes,
            drive,
            deadband: DEFAULT_DEADBAND,
        }
    }

    /// Replaces the deadband applied to both axes.
    #[must_use]
    pub const fn with_deadband(mut self, deadband: f64) -> Self {
        self.deadband = deadband;
        self
    }

    /// Recomputes the drive command from the current axis positions.
    ///
    /// Call this from every axis change notification. Both axes are
    /// resampled on each call and fed through [`mix`]; the resulting
    /// command is issued to the drivetrain and the new [`DriveState`] is
    /// returned. Motor errors are surfaced unmodified.
    pub fn update(&mut self) -> Result<DriveState, MotorError> {
        let x = self.axes.x();
        let y = self.axes.y();

        let command = mix(x, y, self.deadband);
        let state = match command {
            DriveCommand::Hold => DriveState::Held,
            DriveCommand::Straight(_) | DriveCommand::Turn { .. } => DriveState::Moving,
        };

        match command {
            DriveCommand::Straight(power) => self.drive.straight(power),
            DriveCommand::Turn { left, right } => self.drive.turn(left, right),
            DriveCommand::Hold => self.drive.hold(),
        }
        .inspect_err(|error| warn!("drive command for ({x}, {y}) failed: {error}"))?;

        Ok(state)
    }

    /// Returns the bound drivetrain.
    pub const fn drive(&self) -> &D {
        &self.drive
    }

    /// Returns the bound drivetrain mutably, for auton moves issued while
    /// the binding is idle. Do not command it concurrently with
    /// [`update`](DriveBinding::update).
    pub const fn drive_mut(&mut self) -> &mut D {
        &mut self.drive
    }

    /// Consumes the binding and returns the joystick and drivetrain.
    pub fn into_parts(self) -> (A, D) {
        (self.axes, self.drive)
    }
}
