//! Outbound adapters.

pub mod mail;
pub mod memory;
pub mod persistence;
pub mod telemetry;
