//! These traits define what the application can do.

pub mod get_account;
pub mod signup;

pub use get_account::*;
pub use signup::*;
