//! Drivetrain control for VEX V5 competition robots.
//!
//! # Overview
//!
//! This crate sits between a controller and the motors of a differential
//! chassis. It owns the three pieces of logic that make a drive base usable:
//!
//! - the [`mix()`] function, which maps a joystick sample onto straight, turn,
//!   or stop-and-hold commands for the two sides of the chassis;
//! - distance/angle-to-revolution conversion for autonomous moves
//!   ([`Chaindrive::move_by`], [`Chaindrive::spin_by`] and the [`FourWheel`]
//!   equivalents), driven by named chassis geometry instead of magic numbers;
//! - the [`DriveBinding`] adapter, which re-runs the mapping whenever either
//!   joystick axis changes.
//!
//! Hardware access is deliberately out of scope. Everything this crate needs
//! from a motor is the [`DriveMotor`] capability trait, and everything it
//! needs from a joystick is the [`AxisPair`] trait; adapters over the real
//! SDK types implement those on the robot, and the `vext-sim` crate
//! implements them in memory for tests.
//!
//! # Example
//!
//! ```ignore
//! use vext_drive::{Chaindrive, ChaindriveGeometry, DriveBinding, MotorPair};
//!
//! let mut drive = Chaindrive::new(
//!     MotorPair::new(left_motor, right_motor),
//!     ChaindriveGeometry {
//!         wheel_diameter: 5.0,
//!         rotation_track: 13.70,
//!         gear_reduction: 4.0,
//!     },
//! );
//!
//! // Autonomous: drive 24 inches forward, then face the other way.
//! drive.move_by(24.0, 50.0)?;
//! drive.spin_by(180.0, 50.0)?;
//!
//! // Driver control: re-run the binding from both axis change callbacks.
//! let mut binding = DriveBinding::new(stick, drive);
//! binding.update()?;
//! ```

#![no_std]

#[cfg(test)]
extern crate std;

pub mod drivetrain;
pub mod group;
pub mod mix;
pub mod motor;
pub mod opcontrol;

pub use drivetrain::{Alliance, Chaindrive, ChaindriveGeometry, FourWheel, FourWheelGeometry};
pub use group::{MotorPair, MotorQuad, TankControl};
pub use mix::{DEFAULT_DEADBAND, DriveCommand, FULL_SCALE, mix};
pub use motor::{BrakeMode, Completion, DriveMotor, MotorError, MotorFaults};
pub use opcontrol::{AxisPair, DriveBinding, DriveState};
