//! Inbound HTTP surface: the Lambda handler and its response helpers.

pub mod handler;
pub mod helpers;

pub use handler::handler;
