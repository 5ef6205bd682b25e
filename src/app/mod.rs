//! Application core — pure domain logic, zero I/O.
//!
//! This module contains the loop rules for the desk monitor: input
//! sampling, command handling, alert evaluation and display multiplexing.
//! All interaction with hardware happens through **port traits** defined
//! in [`ports`], keeping this layer fully testable without real peripherals.

pub mod commands;
pub mod events;
pub mod ports;
pub mod sampler;
pub mod service;
