//! Application services implementing business logic.

pub mod get_account;
pub mod signup;

pub use get_account::*;
pub use signup::*;
