//! # Monitoring Model
//!
//! Plain data shared by every layer. Nothing in here performs IO.

pub mod endpoint;
pub mod project;
pub mod status;
