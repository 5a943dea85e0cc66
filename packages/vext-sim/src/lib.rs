//! In-memory stand-ins for the V5 hardware boundary.
//!
//! [`SimMotor`] implements [`DriveMotor`] by recording every command it
//! receives and modeling its encoder as the running sum of positional
//! moves, so tests can assert on exactly what a drivetrain issued. A
//! [`CommandClock`] shared between the motors of one simulated robot
//! timestamps each command, making cross-motor ordering observable —
//! that is how the two-phase move contract is tested.
//!
//! [`SimAxes`] implements [`AxisPair`] over a pair of shared cells, so a
//! test can keep one handle to move the stick while the binding owns a
//! clone.

#![no_std]

extern crate alloc;

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::Cell;

use vext_drive::{AxisPair, BrakeMode, Completion, DriveMotor, MotorError, MotorFaults};

/// Monotonic counter shared by every motor of one simulated robot.
#[derive(Debug, Default, Clone)]
pub struct CommandClock(Rc<Cell<u64>>);

impl CommandClock {
    /// Creates a clock starting at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn tick(&self) -> u64 {
        let now = self.0.get();
        self.0.set(now + 1);
        now
    }
}

/// One command received by a [`SimMotor`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Command {
    /// Continuous spin at a power percentage.
    Spin {
        /// Commanded power in percent.
        power: f64,
    },

    /// Positional move.
    SpinFor {
        /// Commanded revolutions of the output shaft.
        revolutions: f64,
        /// Commanded velocity in percent.
        velocity: f64,
        /// Whether the call blocked on completion.
        completion: Completion,
    },

    /// Stop with a brake mode.
    Stop {
        /// The brake mode used.
        mode: BrakeMode,
    },
}

/// A recorded command together with its robot-wide sequence number.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Issued {
    /// Position in the robot-wide command order.
    pub seq: u64,
    /// The command itself.
    pub command: Command,
}

/// A motor that records commands instead of driving hardware.
///
/// Positional moves complete instantly: the encoder advances by the full
/// commanded revolution count as soon as the command is issued.
#[derive(Debug)]
pub struct SimMotor {
    clock: CommandClock,
    log: Vec<Issued>,
    position: f64,
    faults: MotorFaults,
}

impl SimMotor {
    /// Creates a motor sharing `clock` with the rest of the robot.
    #[must_use]
    pub fn new(clock: &CommandClock) -> Self {
        Self {
            clock: clock.clone(),
            log: Vec::new(),
            position: 0.0,
            faults: MotorFaults::empty(),
        }
    }

    /// Every command issued so far, oldest first.
    #[must_use]
    pub fn log(&self) -> &[Issued] {
        &self.log
    }

    /// The most recent command, if any.
    #[must_use]
    pub fn last(&self) -> Option<Issued> {
        self.log.last().copied()
    }

    /// Injects hardware fault flags. Every subsequent command fails with
    /// [`MotorError::Fault`] carrying these flags, unmodified.
    pub fn set_faults(&mut self, faults: MotorFaults) {
        self.faults = faults;
    }

    fn check(&self) -> Result<(), MotorError> {
        if self.faults.is_empty() {
            Ok(())
        } else {
            Err(MotorError::Fault {
                faults: self.faults,
            })
        }
    }

    fn record(&mut self, command: Command) {
        self.log.push(Issued {
            seq: self.clock.tick(),
            command,
        });
    }
}

impl DriveMotor for SimMotor {
    fn spin(&mut self, power: f64) -> Result<(), MotorError> {
        self.check()?;
        self.record(Command::Spin { power });
        Ok(())
    }

    fn spin_for(
        &mut self,
        revolutions: f64,
        velocity: f64,
        completion: Completion,
    ) -> Result<(), MotorError> {
        self.check()?;
        self.position += revolutions;
        self.record(Command::SpinFor {
            revolutions,
            velocity,
            completion,
        });
        Ok(())
    }

    fn stop(&mut self, mode: BrakeMode) -> Result<(), MotorError> {
        self.check()?;
        self.record(Command::Stop { mode });
        Ok(())
    }

    fn position(&self) -> Result<f64, MotorError> {
        self.check()?;
        Ok(self.position)
    }

    fn reset_position(&mut self) -> Result<(), MotorError> {
        self.check()?;
        self.position = 0.0;
        Ok(())
    }

    fn faults(&self) -> Result<MotorFaults, MotorError> {
        Ok(self.faults)
    }
}

/// A joystick whose axis values a test can move between updates.
///
/// Clones share the same underlying cells.
#[derive(Debug, Default, Clone)]
pub struct SimAxes {
    x: Rc<Cell<f64>>,
    y: Rc<Cell<f64>>,
}

impl SimAxes {
    /// Creates a joystick centered at `(0, 0)`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Moves the simulated stick.
    pub fn set(&self, x: f64, y: f64) {
        self.x.set(x);
        self.y.set(y);
    }
}

impl AxisPair for SimAxes {
    fn x(&self) -> f64 {
        self.x.get()
    }

    fn y(&self) -> f64 {
        self.y.get()
    }
}
