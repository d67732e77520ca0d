//! Application layer: use cases and the ports they depend on.

pub mod dto;
pub mod error;
pub mod ports;
pub mod usecases;
