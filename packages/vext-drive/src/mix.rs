//! Joystick-to-differential-drive mapping.
//!
//! [`mix`] is the one place where a joystick sample becomes per-side motor
//! powers. It is a pure function so the mapping can be tested without any
//! motors attached; dispatching its result to a drivetrain is the job of
//! [`DriveBinding`](crate::opcontrol::DriveBinding).

use libm::fabs;

/// Full-scale magnitude for axis and power values, in percent.
pub const FULL_SCALE: f64 = 100.0;

/// Default deadband applied around the joystick's center position.
///
/// With a zero deadband any nonzero axis value counts as input. Controllers
/// with worn potentiometers report noise near center; widening the band
/// filters that jitter at the cost of low-speed resolution.
pub const DEFAULT_DEADBAND: f64 = 0.0;

/// A per-side power decision produced by [`mix`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DriveCommand {
    /// Drive both sides at the same power. Positive is forward.
    Straight(f64),

    /// Drive the two sides at different powers to turn.
    Turn {
        /// Power for the left side.
        left: f64,
        /// Power for the right side.
        right: f64,
    },

    /// Both axes rest inside the deadband: stop and actively hold.
    Hold,
}

/// Maps one joystick sample onto a drive command.
///
/// `x` is the turn axis and `y` the throttle axis, both in percent
/// (`[-100, 100]`). The branches are evaluated in precedence order:
///
/// 1. Throttle without turn (`|y| > deadband`, `|x| <= deadband`): both
///    sides receive `y`. Pushing the stick forward (positive `y`) drives
///    the robot forward.
/// 2. Any turn input (`|x| > deadband`): the sides receive the blend
///    `left = y + x`, `right = y - x`, so positive `x` turns right with the
///    left side running faster. The differential between the sides is
///    `2|x|`, growing with how far the stick is pushed sideways. If the
///    blend leaves the full-scale range, both sides are scaled back
///    proportionally so the ratio between them is preserved.
/// 3. Otherwise both axes rest inside the deadband and the result is
///    [`DriveCommand::Hold`].
///
/// Inputs are not validated; out-of-range samples pass through and are
/// clamped by the motor driver downstream.
///
/// ```
/// use vext_drive::{DEFAULT_DEADBAND, DriveCommand, mix};
///
/// assert_eq!(mix(0.0, 50.0, DEFAULT_DEADBAND), DriveCommand::Straight(50.0));
/// assert_eq!(mix(0.0, 0.0, DEFAULT_DEADBAND), DriveCommand::Hold);
/// assert_eq!(
///     mix(70.0, 0.0, DEFAULT_DEADBAND),
///     DriveCommand::Turn { left: 70.0, right: -70.0 },
/// );
/// ```
#[must_use]
pub fn mix(x: f64, y: f64, deadband: f64) -> DriveCommand {
    if fabs(y) > deadband && fabs(x) <= deadband {
        DriveCommand::Straight(y)
    } else if fabs(x) > deadband {
        let mut left = y + x;
        let mut right = y - x;

        let peak = fabs(left).max(fabs(right));
        if peak > FULL_SCALE {
            left = left / peak * FULL_SCALE;
            right = right / peak * FULL_SCALE;
        }

        DriveCommand::Turn { left, right }
    } else {
        DriveCommand::Hold
    }
}
