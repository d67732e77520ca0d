//! Adapters connecting the application ports to concrete technologies.

pub mod outbound;
