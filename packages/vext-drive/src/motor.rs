//! The motor capability boundary.
//!
//! This layer never talks to V5 hardware directly. Everything it needs from
//! one physical motor is captured by the [`DriveMotor`] trait: continuous
//! power, precise positional moves, and a stop with a selectable brake mode.
//! An adapter over the vendor SDK's motor type implements the trait on the
//! robot; the `vext-sim` crate implements it in memory for host-side tests.
//!
//! Drivetrains *have* motor groups which *have* motors. Nothing in this crate
//! inherits from or wraps a concrete hardware type.

use bitflags::bitflags;
use snafu::Snafu;

/// Determines the stopped behavior of a motor.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum BrakeMode {
    /// The motor spins down freely.
    Coast,

    /// The motor actively holds its position, resisting external movement.
    Hold,
}

/// Whether a positional move should block until the motor reports completion.
#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub enum Completion {
    /// Return as soon as the command is issued, leaving the motor running.
    NoWait,

    /// Block the calling context until the motor reaches its target.
    Wait,
}

bitflags! {
    /// Fault flags reported by a motor.
    ///
    /// These are passed through from the hardware unmodified; this layer
    /// never masks, retries, or reinterprets them.
    #[derive(Debug, Clone, Copy, Eq, PartialEq)]
    pub struct MotorFaults: u32 {
        /// The motor's temperature is above its limit.
        const OVER_TEMPERATURE = 0x01;

        /// The motor's H-bridge has encountered a fault.
        const DRIVER_FAULT = 0x02;

        /// The motor is over current.
        const OVER_CURRENT = 0x04;

        /// The motor's H-bridge is over current.
        const DRIVER_OVER_CURRENT = 0x08;
    }
}

/// Errors that can occur when commanding a motor.
#[derive(Debug, Snafu)]
pub enum MotorError {
    /// No motor is plugged into the port.
    Disconnected,

    /// Failed to communicate with the motor.
    Busy,

    /// The motor reported one or more hardware faults.
    #[snafu(display("motor reported hardware faults: {faults:?}"))]
    Fault {
        /// The fault flags reported by the motor.
        faults: MotorFaults,
    },
}

/// The minimal capability set this layer requires from one physical motor.
///
/// Power and velocity are expressed in percent of the motor's maximum,
/// `[-100, 100]`; positional moves are expressed in revolutions of the output
/// shaft. Values are passed through to the hardware unvalidated — the motor
/// driver clamps out-of-range input.
pub trait DriveMotor {
    /// Spins the motor continuously at the given percentage of full power.
    ///
    /// Positive power spins the motor toward robot-forward. Motors on the
    /// left side of a chassis should be constructed with their reverse flag
    /// set so this convention holds on both sides.
    fn spin(&mut self, power: f64) -> Result<(), MotorError>;

    /// Spins the motor through `revolutions` of its output shaft at the given
    /// velocity percentage.
    ///
    /// With [`Completion::NoWait`] the command is issued and the call returns
    /// immediately, leaving the motor running in hardware. With
    /// [`Completion::Wait`] the call blocks until the motor reports that it
    /// reached the target. A zero revolution count is still issued, not
    /// suppressed.
    fn spin_for(
        &mut self,
        revolutions: f64,
        velocity: f64,
        completion: Completion,
    ) -> Result<(), MotorError>;

    /// Stops the motor with the given brake mode.
    fn stop(&mut self, mode: BrakeMode) -> Result<(), MotorError>;

    /// Returns the motor's encoder position in output-shaft revolutions.
    fn position(&self) -> Result<f64, MotorError>;

    /// Resets the motor's encoder to zero without moving the motor.
    fn reset_position(&mut self) -> Result<(), MotorError>;

    /// Returns the fault flags currently reported by the motor.
    fn faults(&self) -> Result<MotorFaults, MotorError>;
}
