//! DeskThermo firmware library.
//!
//! Exposes the pure-logic modules for integration testing and external
//! inspection.  All ESP-IDF-specific code is guarded by
//! `#[cfg(target_os = "espidf")]` within each module, so the whole
//! library builds and tests on host.

#![deny(unused_must_use)]

pub mod alert;
pub mod app;
pub mod config;
pub mod display;
pub mod error;
pub mod scheduler;
pub mod setpoint;
pub mod stopwatch;

pub mod adapters;
pub mod drivers;
pub mod sensors;
