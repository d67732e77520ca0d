//! These traits define what the application needs from the outside world.

pub mod account;
pub mod mailer;
pub mod telemetry;

pub use account::*;
pub use mailer::*;
pub use telemetry::*;
